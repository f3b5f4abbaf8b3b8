//! Code-stub viewer
//!
//! The backend synthesizes boilerplate source text for one module as four
//! fixed file roles. This module holds the wire types for that exchange
//! and the viewer state: exactly one role active at a time, copy and
//! download operating on the in-memory response only, a placeholder line
//! when a role has no text.

pub mod highlight;

pub use highlight::{extension_for, highlight_html};

use crate::model::AppSpec;
use serde::{Deserialize, Serialize};

/// Placeholder shown when a role carries no generated text.
pub const EMPTY_STUB_PLACEHOLDER: &str = "# No code generated";

/// The four fixed file roles of a generated module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileRole {
    Models,
    Serializers,
    Views,
    Urls,
}

impl FileRole {
    /// All roles in display order.
    pub const ALL: [FileRole; 4] =
        [FileRole::Models, FileRole::Serializers, FileRole::Views, FileRole::Urls];

    /// Wire key under `implementation`.
    pub fn key(self) -> &'static str {
        match self {
            FileRole::Models => "models_py",
            FileRole::Serializers => "serializers_py",
            FileRole::Views => "views_py",
            FileRole::Urls => "urls_py",
        }
    }

    /// Display file name (wire key with the underscore turned into a dot).
    pub fn file_name(self) -> &'static str {
        match self {
            FileRole::Models => "models.py",
            FileRole::Serializers => "serializers.py",
            FileRole::Views => "views.py",
            FileRole::Urls => "urls.py",
        }
    }
}

/// Request body for stub generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodeStubsRequest {
    pub spec_id: String,
    pub language: String,
    pub framework: String,
}

impl CodeStubsRequest {
    /// The default generation target the UI requests.
    pub fn new(spec_id: impl Into<String>) -> Self {
        Self {
            spec_id: spec_id.into(),
            language: "python".to_string(),
            framework: "django".to_string(),
        }
    }
}

/// The four generated source blobs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StubFiles {
    #[serde(default)]
    pub models_py: String,
    #[serde(default)]
    pub serializers_py: String,
    #[serde(default)]
    pub views_py: String,
    #[serde(default)]
    pub urls_py: String,
}

impl StubFiles {
    pub fn get(&self, role: FileRole) -> &str {
        match role {
            FileRole::Models => &self.models_py,
            FileRole::Serializers => &self.serializers_py,
            FileRole::Views => &self.views_py,
            FileRole::Urls => &self.urls_py,
        }
    }
}

/// Response of the stub generation endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodeStubsResponse {
    pub blueprint_id: String,
    pub module_name: String,
    pub language: String,
    pub framework: String,
    pub implementation: StubFiles,
}

/// A named download produced from the in-memory response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StubDownload {
    pub file_name: String,
    pub contents: String,
}

/// Whether stub generation is available for a specification. A spec with
/// no modules has nothing to generate from.
pub fn can_generate(spec: &AppSpec) -> bool {
    spec.has_modules()
}

/// Module names offered for generation, in declared order. Exactly one is
/// selected at a time; selection defaults to the first.
pub fn module_names(spec: &AppSpec) -> Vec<&str> {
    spec.modules.iter().map(|m| m.name.as_str()).collect()
}

/// Viewer state over one generation response.
///
/// Switching the active role is a pure local-state change; no operation
/// here re-fetches anything.
#[derive(Debug, Clone)]
pub struct StubViewer {
    stubs: CodeStubsResponse,
    active: FileRole,
}

impl StubViewer {
    pub fn new(stubs: CodeStubsResponse) -> Self {
        Self { stubs, active: FileRole::Models }
    }

    pub fn response(&self) -> &CodeStubsResponse {
        &self.stubs
    }

    pub fn active(&self) -> FileRole {
        self.active
    }

    pub fn select(&mut self, role: FileRole) {
        self.active = role;
    }

    /// Source text for `role`, or the placeholder when empty.
    pub fn source(&self, role: FileRole) -> &str {
        let text = self.stubs.implementation.get(role);
        if text.is_empty() {
            EMPTY_STUB_PLACEHOLDER
        } else {
            text
        }
    }

    /// Source text of the active role.
    pub fn active_source(&self) -> &str {
        self.source(self.active)
    }

    /// Active source rendered as highlighted HTML.
    pub fn highlighted_active(&self) -> String {
        highlight_html(self.active_source(), extension_for(&self.stubs.language))
    }

    /// Text handed to the clipboard.
    pub fn copy_active(&self) -> String {
        self.active_source().to_string()
    }

    /// One file as a named download.
    pub fn download(&self, role: FileRole) -> StubDownload {
        StubDownload {
            file_name: role.file_name().to_string(),
            contents: self.source(role).to_string(),
        }
    }

    /// All four files, in display order.
    pub fn download_all(&self) -> Vec<StubDownload> {
        FileRole::ALL.iter().map(|&role| self.download(role)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response() -> CodeStubsResponse {
        CodeStubsResponse {
            blueprint_id: "bp-1".to_string(),
            module_name: "Inventory".to_string(),
            language: "python".to_string(),
            framework: "django".to_string(),
            implementation: StubFiles {
                models_py: "class Item(models.Model):\n    pass\n".to_string(),
                serializers_py: "class ItemSerializer(serializers.ModelSerializer):\n    pass\n"
                    .to_string(),
                views_py: String::new(),
                urls_py: "urlpatterns = []\n".to_string(),
            },
        }
    }

    #[test]
    fn test_default_role_is_models() {
        let viewer = StubViewer::new(response());
        assert_eq!(viewer.active(), FileRole::Models);
        assert!(viewer.active_source().contains("class Item"));
    }

    #[test]
    fn test_select_is_pure_state_change() {
        let mut viewer = StubViewer::new(response());
        viewer.select(FileRole::Urls);
        assert_eq!(viewer.active(), FileRole::Urls);
        assert_eq!(viewer.active_source(), "urlpatterns = []\n");
        // The response is untouched
        assert_eq!(viewer.response().module_name, "Inventory");
    }

    #[test]
    fn test_empty_role_shows_placeholder() {
        let mut viewer = StubViewer::new(response());
        viewer.select(FileRole::Views);
        assert_eq!(viewer.active_source(), EMPTY_STUB_PLACEHOLDER);
        assert_eq!(viewer.copy_active(), EMPTY_STUB_PLACEHOLDER);
    }

    #[test]
    fn test_download_names_underscore_to_dot() {
        let viewer = StubViewer::new(response());
        let all = viewer.download_all();
        let names: Vec<&str> = all.iter().map(|d| d.file_name.as_str()).collect();
        assert_eq!(names, ["models.py", "serializers.py", "views.py", "urls.py"]);
        assert_eq!(all[2].contents, EMPTY_STUB_PLACEHOLDER);
    }

    #[test]
    fn test_can_generate_requires_modules() {
        let spec: AppSpec =
            serde_json::from_str(r#"{"title": "Bare", "description": ""}"#).unwrap();
        assert!(!can_generate(&spec));
        assert!(module_names(&spec).is_empty());
    }

    #[test]
    fn test_module_names_in_declared_order() {
        let spec: AppSpec = serde_json::from_str(
            r#"{"title": "T", "description": "", "modules": [
                {"name": "Sales", "purpose": "p", "entities": [], "apis": [], "ui": []},
                {"name": "Inventory", "purpose": "p", "entities": [], "apis": [], "ui": []}
            ]}"#,
        )
        .unwrap();
        assert_eq!(module_names(&spec), ["Sales", "Inventory"]);
    }

    #[test]
    fn test_wire_keys() {
        assert_eq!(FileRole::Models.key(), "models_py");
        assert_eq!(FileRole::Serializers.key(), "serializers_py");
        assert_eq!(FileRole::Views.key(), "views_py");
        assert_eq!(FileRole::Urls.key(), "urls_py");
    }

    #[test]
    fn test_response_deserializes_with_missing_blob() {
        let json = r#"{
            "blueprint_id": "bp-2",
            "module_name": "Sales",
            "language": "python",
            "framework": "django",
            "implementation": {"models_py": "x = 1"}
        }"#;
        let resp: CodeStubsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.implementation.models_py, "x = 1");
        assert!(resp.implementation.urls_py.is_empty());
    }
}
