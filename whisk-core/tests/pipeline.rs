//! End-to-end walk of the rendering pipeline: backend JSON in, resolved
//! model, preview HTML, export round trip.

use chrono::Utc;
use whisk_core::export::{export_record, SpecExport};
use whisk_core::model::{AppSpec, SpecRecord, UiKind};
use whisk_core::preview::PreviewRenderer;
use whisk_core::stubs::can_generate;

const SPEC_JSON: &str = r#"{
    "title": "Course Planner",
    "description": "Plan courses and enrollments",
    "modules": [
        {
            "name": "Catalog",
            "purpose": "Manage the course catalog",
            "entities": [
                {
                    "name": "Course",
                    "fields": [
                        {"name": "course_code", "type": "string", "required": true, "unique": true, "max_length": 16},
                        {"name": "description", "type": "text"},
                        {"name": "credits", "type": "integer", "required": true},
                        {"name": "active", "type": "boolean"},
                        {"name": "starts_on", "type": "date"},
                        {"name": "contact_email", "type": "email", "help_text": "Faculty contact"}
                    ]
                }
            ],
            "apis": [
                {"method": "GET", "path": "/api/courses/", "entity": "Course"},
                {"method": "POST", "path": "/api/courses/", "entity": "Course"}
            ],
            "ui": [
                {"type": "Table", "entity": "Course"},
                {"type": "Form", "name": "New Course", "entity": "Course"},
                {"type": "Kanban", "entity": "Course"},
                {"type": "Form", "entity": "Enrollment"}
            ]
        }
    ],
    "kpis": ["enrollment rate", "course completion"]
}"#;

fn record() -> SpecRecord {
    SpecRecord {
        id: "rec-77".to_string(),
        idea: "a course planning tool".to_string(),
        spec_json: serde_json::from_str(SPEC_JSON).unwrap(),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

#[test]
fn ingestion_reports_the_dangling_reference() {
    let spec: AppSpec = serde_json::from_str(SPEC_JSON).unwrap();
    let resolved = spec.resolve();

    assert_eq!(resolved.unresolved.len(), 1);
    assert_eq!(resolved.unresolved[0].entity, "Enrollment");
    assert_eq!(resolved.modules[0].components.len(), 4);
}

#[test]
fn table_preview_uses_declared_field_order_and_samples() {
    let spec: AppSpec = serde_json::from_str(SPEC_JSON).unwrap();
    let resolved = spec.resolve();
    let renderer = PreviewRenderer::new();
    let html = renderer.render_spec(&resolved, 0);

    // Columns in declared order
    let code = html.find("<th>course_code").unwrap();
    let credits = html.find("<th>credits").unwrap();
    let email = html.find("<th>contact_email").unwrap();
    assert!(code < credits && credits < email);

    // Sample values per type: text, integer, boolean parity, email
    assert!(html.contains("Sample description 1"));
    assert!(html.contains("<td>100</td>"));
    assert!(html.contains("<td>Yes</td>"));
    assert!(html.contains("<td>No</td>"));
    assert!(html.contains("user3@example.com"));
}

#[test]
fn form_preview_maps_types_to_input_kinds() {
    let spec: AppSpec = serde_json::from_str(SPEC_JSON).unwrap();
    let resolved = spec.resolve();
    let html = PreviewRenderer::new().render_spec(&resolved, 0);

    assert!(html.contains(r#"<input type="email" id="contact_email""#));
    assert!(html.contains(r#"<input type="number" id="credits""#));
    assert!(html.contains(r#"<input type="date" id="starts_on""#));
    assert!(html.contains(r#"<input type="checkbox" id="active""#));
    assert!(html.contains(r#"<textarea id="description""#));
    assert!(html.contains(r#"<label for="contact_email">Contact Email"#));
    assert!(html.contains("Max length: 16 characters"));
    assert!(html.contains("Faculty contact"));
}

#[test]
fn unknown_component_and_unresolved_form_degrade_gracefully() {
    let spec: AppSpec = serde_json::from_str(SPEC_JSON).unwrap();
    assert_eq!(
        spec.modules[0].ui[2].kind,
        UiKind::Unsupported("Kanban".to_string())
    );

    let resolved = spec.resolve();
    let html = PreviewRenderer::new().render_spec(&resolved, 0);
    assert!(html.contains("Preview not available for Kanban component"));

    // The dangling Form still renders its chrome
    assert!(html.contains("Form: Enrollment"));
}

#[test]
fn empty_spec_disables_preview_and_generation() {
    let spec: AppSpec =
        serde_json::from_str(r#"{"title": "Empty", "description": "nothing yet"}"#).unwrap();
    let resolved = spec.resolve();
    let html = PreviewRenderer::new().render_spec(&resolved, 0);

    assert!(html.contains("No modules found in specification"));
    assert!(!can_generate(&spec));
}

#[test]
fn export_round_trip_deep_equals_spec_json() {
    let record = record();
    let exported = export_record(&record).unwrap();
    let parsed: SpecExport = serde_json::from_str(&exported.contents).unwrap();

    let original = serde_json::to_value(&record.spec_json).unwrap();
    let round_tripped = serde_json::to_value(&parsed.specification).unwrap();
    assert_eq!(original, round_tripped);

    assert!(exported.file_name.starts_with("course-planner-"));
    assert!(exported.file_name.ends_with(".json"));
}
