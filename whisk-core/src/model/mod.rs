//! Specification model
//!
//! The shape of a generated application specification as returned by the
//! backend: modules own entities, API descriptors and UI components; the
//! top level carries KPIs. Pure data; behavior lives in the renderer and
//! the client.
//!
//! Entity references inside UI components are soft, name-based links.
//! [`resolve`] performs the one-time ingestion pass that turns them into
//! direct references and reports the ones that do not resolve.

pub mod resolve;

pub use resolve::{ResolvedModule, ResolvedSpec, ResolvedUi, UnresolvedReference};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Declared type of an entity field.
///
/// This is the closed vocabulary the backend emits; the preview renderer
/// maps each variant to a sample value and a form input kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    String,
    Text,
    Integer,
    Number,
    Boolean,
    Date,
    #[serde(rename = "datetime")]
    DateTime,
    Email,
}

/// One field of an entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpecField {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub unique: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help_text: Option<String>,
}

/// One data model of a module, referenced by name from UI components.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpecEntity {
    pub name: String,
    #[serde(default)]
    pub fields: Vec<SpecField>,
}

impl SpecEntity {
    /// Linear lookup of a field by name.
    pub fn field(&self, name: &str) -> Option<&SpecField> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// HTTP method of an API descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HttpMethod {
    GET,
    POST,
    PATCH,
    DELETE,
    PUT,
}

/// Descriptive API endpoint. Never invoked by the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpecApi {
    pub method: HttpMethod,
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Kind of a UI component.
///
/// Closed tagged variant with an explicit unsupported case: the backend
/// occasionally emits component types the preview cannot render, and those
/// must degrade to a placeholder rather than fail. The original type
/// string is preserved for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum UiKind {
    Table,
    Form,
    Unsupported(String),
}

impl From<String> for UiKind {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "Table" => UiKind::Table,
            "Form" => UiKind::Form,
            _ => UiKind::Unsupported(raw),
        }
    }
}

impl From<UiKind> for String {
    fn from(kind: UiKind) -> Self {
        match kind {
            UiKind::Table => "Table".to_string(),
            UiKind::Form => "Form".to_string(),
            UiKind::Unsupported(raw) => raw,
        }
    }
}

impl std::fmt::Display for UiKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UiKind::Table => write!(f, "Table"),
            UiKind::Form => write!(f, "Form"),
            UiKind::Unsupported(raw) => write!(f, "{}", raw),
        }
    }
}

/// Explicit form field entry when a Form component overrides the entity's
/// field list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormFieldSpec {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub field_type: Option<FieldType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help_text: Option<String>,
}

/// UI component definition.
///
/// `entity` is a soft reference into the owning module's entity list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpecUi {
    #[serde(rename = "type")]
    pub kind: UiKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub entity: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub columns: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<FormFieldSpec>>,
}

impl SpecUi {
    /// Display label: explicit name, or `"{kind}: {entity}"`.
    pub fn label(&self) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => format!("{}: {}", self.kind, self.entity),
        }
    }
}

/// One feature module of the specification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpecModule {
    pub name: String,
    pub purpose: String,
    #[serde(default)]
    pub entities: Vec<SpecEntity>,
    #[serde(default)]
    pub apis: Vec<SpecApi>,
    #[serde(default)]
    pub ui: Vec<SpecUi>,
}

impl SpecModule {
    /// Linear lookup of an entity by name. Soft references resolve through
    /// here; a miss is not an error.
    pub fn entity(&self, name: &str) -> Option<&SpecEntity> {
        self.entities.iter().find(|e| e.name == name)
    }
}

/// Complete application specification, root of `spec_json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSpec {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub modules: Vec<SpecModule>,
    #[serde(default)]
    pub kpis: Vec<String>,
}

impl AppSpec {
    /// Whether any module exists. Gates preview and stub generation.
    pub fn has_modules(&self) -> bool {
        !self.modules.is_empty()
    }
}

/// Persisted specification record, the only entity with a lifecycle:
/// created by generation, mutated by refinement, never deleted client-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpecRecord {
    pub id: String,
    pub idea: String,
    pub spec_json: AppSpec,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
