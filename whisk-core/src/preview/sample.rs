//! Sample value and input-kind synthesis.
//!
//! Fixed mappings from a field's declared type to the placeholder value
//! shown in preview tables and the control kind used in preview forms.

use crate::model::FieldType;
use chrono::Local;

/// Number of synthesized rows in a table preview.
pub const SAMPLE_ROWS: usize = 3;

/// Placeholder cell value for `column` at 0-indexed `row`.
///
/// A column with no matching field falls back to string semantics.
pub fn sample_value(field_type: Option<FieldType>, column: &str, row: usize) -> String {
    match field_type.unwrap_or(FieldType::String) {
        FieldType::String | FieldType::Text => format!("Sample {} {}", column, row + 1),
        FieldType::Email => format!("user{}@example.com", row + 1),
        FieldType::Integer | FieldType::Number => ((row + 1) * 100).to_string(),
        FieldType::Boolean => {
            if row % 2 == 0 {
                "Yes".to_string()
            } else {
                "No".to_string()
            }
        }
        FieldType::Date => Local::now().format("%Y-%m-%d").to_string(),
        FieldType::DateTime => Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
    }
}

/// Kind of control a form field renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Email,
    Number,
    Date,
    DatetimeLocal,
    Checkbox,
    TextArea,
}

impl InputKind {
    /// The `type` attribute for `<input>`-rendered kinds.
    pub fn html_type(self) -> &'static str {
        match self {
            InputKind::Text => "text",
            InputKind::Email => "email",
            InputKind::Number => "number",
            InputKind::Date => "date",
            InputKind::DatetimeLocal => "datetime-local",
            InputKind::Checkbox => "checkbox",
            InputKind::TextArea => "textarea",
        }
    }
}

/// Fixed mapping from field type to form control kind.
pub fn input_kind(field_type: FieldType) -> InputKind {
    match field_type {
        FieldType::Email => InputKind::Email,
        FieldType::Integer | FieldType::Number => InputKind::Number,
        FieldType::Date => InputKind::Date,
        FieldType::DateTime => InputKind::DatetimeLocal,
        FieldType::Boolean => InputKind::Checkbox,
        FieldType::Text => InputKind::TextArea,
        FieldType::String => InputKind::Text,
    }
}

/// Human-readable label from a field name: underscores become spaces and
/// the first letter of each word is capitalized.
pub fn humanize_label(name: &str) -> String {
    name.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
