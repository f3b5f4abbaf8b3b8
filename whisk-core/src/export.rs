//! JSON export of a specification record.
//!
//! Produces a named download wrapping the record with export metadata.
//! Re-parsing the exported JSON yields a `specification` field deep-equal
//! to the record's `spec_json`.

use crate::model::{AppSpec, SpecRecord};
use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

/// Version stamped into every export.
pub const EXPORT_VERSION: &str = "1.0.0";

/// Export envelope metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub exported_at: DateTime<Utc>,
    pub version: String,
}

/// The exported document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpecExport {
    pub id: String,
    pub idea: String,
    pub specification: AppSpec,
    pub metadata: ExportMetadata,
}

/// A named file ready to hand to the user.
#[derive(Debug, Clone)]
pub struct ExportedFile {
    pub file_name: String,
    pub contents: String,
}

/// Export a record as pretty-printed JSON, named from the spec title and
/// the current date.
pub fn export_record(record: &SpecRecord) -> serde_json::Result<ExportedFile> {
    let export = SpecExport {
        id: record.id.clone(),
        idea: record.idea.clone(),
        specification: record.spec_json.clone(),
        metadata: ExportMetadata {
            created_at: record.created_at,
            updated_at: record.updated_at,
            exported_at: Utc::now(),
            version: EXPORT_VERSION.to_string(),
        },
    };

    let file_name = format!(
        "{}-{}.json",
        slugify(&record.spec_json.title),
        Local::now().format("%Y-%m-%d")
    );
    let contents = serde_json::to_string_pretty(&export)?;
    Ok(ExportedFile { file_name, contents })
}

/// Lowercased, hyphen-separated file-name stem. Falls back to "spec" when
/// the title has no usable characters.
fn slugify(title: &str) -> String {
    let mut slug = String::new();
    let mut last_was_sep = true;
    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
            last_was_sep = false;
        } else if !last_was_sep {
            slug.push('-');
            last_was_sep = true;
        }
    }
    let slug = slug.trim_end_matches('-').to_string();
    if slug.is_empty() {
        "spec".to_string()
    } else {
        slug
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AppSpec;

    fn record() -> SpecRecord {
        let spec_json: AppSpec = serde_json::from_str(
            r#"{
                "title": "Fleet Manager 2.0",
                "description": "Track vehicles",
                "modules": [{
                    "name": "Fleet",
                    "purpose": "vehicles",
                    "entities": [{"name": "Vehicle", "fields": [
                        {"name": "plate", "type": "string", "required": true}
                    ]}],
                    "apis": [],
                    "ui": [{"type": "Table", "entity": "Vehicle"}]
                }],
                "kpis": ["uptime"]
            }"#,
        )
        .unwrap();
        SpecRecord {
            id: "rec-1".to_string(),
            idea: "manage a fleet".to_string(),
            spec_json,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_export_round_trip_preserves_specification() {
        let record = record();
        let exported = export_record(&record).unwrap();

        let parsed: SpecExport = serde_json::from_str(&exported.contents).unwrap();
        assert_eq!(parsed.id, record.id);
        assert_eq!(parsed.idea, record.idea);
        assert_eq!(parsed.metadata.version, EXPORT_VERSION);

        // Deep equality via canonical JSON values
        let original = serde_json::to_value(&record.spec_json).unwrap();
        let round_tripped = serde_json::to_value(&parsed.specification).unwrap();
        assert_eq!(original, round_tripped);
    }

    #[test]
    fn test_file_name_from_title_and_date() {
        let exported = export_record(&record()).unwrap();
        let date = Local::now().format("%Y-%m-%d").to_string();
        assert_eq!(exported.file_name, format!("fleet-manager-2-0-{}.json", date));
    }

    #[test]
    fn test_slugify_edge_cases() {
        assert_eq!(slugify("  Spaced   Out  "), "spaced-out");
        assert_eq!(slugify("!!!"), "spec");
        assert_eq!(slugify("CRM"), "crm");
    }
}
