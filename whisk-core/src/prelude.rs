//! Prelude module for convenient imports.
//!
//! ```rust,ignore
//! use whisk_core::prelude::*;
//! ```

// === Client ===
pub use crate::client::{ApiClient, RegisterRequest, TokenPair};
pub use crate::config::ClientConfig;
pub use crate::error::{Error, Result};

// === Specification model ===
pub use crate::model::{
    AppSpec, FieldType, HttpMethod, ResolvedSpec, SpecEntity, SpecField, SpecModule, SpecRecord,
    SpecUi, UiKind, UnresolvedReference,
};

// === Rendering and viewing ===
pub use crate::preview::PreviewRenderer;
pub use crate::stubs::{
    can_generate, module_names, CodeStubsRequest, CodeStubsResponse, FileRole, StubViewer,
};

// === Session and navigation ===
pub use crate::session::{SessionSnapshot, SessionState};
pub use crate::shell::{Screen, Shell};

// === Export ===
pub use crate::export::export_record;

// === Logging ===
pub use crate::logging::{init_logging, LoggingConfig};
