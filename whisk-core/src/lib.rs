//! Whisk - Client Core
//!
//! Whisk turns an app idea written in natural language into a structured
//! specification (modules, entities, fields, APIs, UI components) and lets
//! the user review it three ways: as raw JSON, as a simulated UI preview
//! filled with placeholder data, and as generated boilerplate source text.
//!
//! # Overview
//!
//! This crate is the client side of that product. The AI generation
//! service is an opaque HTTP collaborator; everything here is about
//! consuming it and rendering what it returns:
//!
//! - [`model`] - the specification data model and reference resolution
//! - [`client`] - REST client with bearer auth and the global 401 logout
//! - [`preview`] - simulated tables and forms synthesized from field types
//! - [`stubs`] - code-stub viewer state and syntax highlighting
//! - [`session`] - the session state provider (tokens, last-viewed spec)
//! - [`shell`] - screens, route guards and the navigation state machine
//! - [`export`] - JSON export of a specification record
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use whisk_core::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     init_logging(&LoggingConfig::development());
//!
//!     let session = SessionState::in_memory();
//!     let client = ApiClient::new(&ClientConfig::from_env(), session.clone());
//!
//!     let record = client.generate_spec("an app to track beehives").await?;
//!     let resolved = record.spec_json.resolve();
//!     let html = PreviewRenderer::new().render_spec(&resolved, 0);
//!     println!("{}", html);
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod export;
pub mod logging;
pub mod model;
pub mod preview;
pub mod session;
pub mod shell;
pub mod stubs;

pub mod prelude;

pub use error::{Error, Result};
