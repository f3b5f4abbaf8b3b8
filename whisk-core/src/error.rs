//! Error types for the Whisk client surface.
//!
//! Every backend failure collapses into one of five cases. None of them is
//! fatal: callers render the message inline and stay interactive.

use std::collections::BTreeMap;

/// Fallback shown when a response body carries no usable message.
pub const GENERIC_FAILURE: &str = "Something went wrong. Please try again.";

/// Client error taxonomy.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No response at all (DNS, refused connection, dropped socket).
    #[error("network error: {0}")]
    Network(String),

    /// A 4xx rejection, possibly with per-field messages.
    #[error("validation failed: {message}")]
    Validation {
        message: String,
        /// Per-field messages as extracted from the response body.
        fields: BTreeMap<String, Vec<String>>,
    },

    /// 401. The session has already been cleared when this surfaces.
    #[error("authentication required")]
    Unauthorized,

    /// 404 on a lookup.
    #[error("not found: {0}")]
    NotFound(String),

    /// Anything else the server rejected.
    #[error("{0}")]
    Server(String),
}

impl Error {
    /// Local validation error with no field detail.
    pub fn validation(message: impl Into<String>) -> Self {
        Error::Validation { message: message.into(), fields: BTreeMap::new() }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
