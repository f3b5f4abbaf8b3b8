//! Preview renderer
//!
//! Turns one module of a resolved specification into simulated HTML: a
//! table filled with synthesized sample rows, or a form with inert
//! controls. This is a presentation mock for human review: nothing here
//! submits anywhere, and every control carries `disabled`.
//!
//! Unknown component kinds and unresolved entity references degrade to
//! placeholders; rendering never fails.

pub mod sample;

pub use sample::{humanize_label, input_kind, sample_value, InputKind, SAMPLE_ROWS};

use crate::model::{
    FieldType, FormFieldSpec, ResolvedModule, ResolvedSpec, ResolvedUi, SpecEntity, UiKind,
};
use std::fmt::Write;

/// Escape text for interpolation into HTML.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Renders specification modules as simulated HTML previews.
#[derive(Debug, Clone)]
pub struct PreviewRenderer {
    sample_rows: usize,
}

impl Default for PreviewRenderer {
    fn default() -> Self {
        Self { sample_rows: SAMPLE_ROWS }
    }
}

impl PreviewRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render the module at `module_index`, or the no-modules state when
    /// the index points at nothing.
    pub fn render_spec(&self, resolved: &ResolvedSpec<'_>, module_index: usize) -> String {
        match resolved.module(module_index) {
            Some(module) => self.render_module(module),
            None => r#"<div class="preview-empty"><p>No modules found in specification</p></div>"#
                .to_string(),
        }
    }

    /// Render one module: header plus each UI component.
    pub fn render_module(&self, module: &ResolvedModule<'_>) -> String {
        let mut html = String::new();
        let _ = write!(
            html,
            r#"<section class="module-preview"><header><h2>{}</h2><p>{}</p></header>"#,
            escape_html(&module.module.name),
            escape_html(&module.module.purpose),
        );

        if module.components.is_empty() {
            html.push_str(
                r#"<div class="preview-empty"><p>No UI components defined for this module</p></div>"#,
            );
        } else {
            for component in &module.components {
                html.push_str(&self.render_component(component));
            }
        }

        html.push_str("</section>");
        html
    }

    /// Render one UI component with its header card.
    pub fn render_component(&self, component: &ResolvedUi<'_>) -> String {
        let ui = component.ui;
        let body = match &ui.kind {
            UiKind::Table => self.render_table(component),
            UiKind::Form => self.render_form(component),
            UiKind::Unsupported(kind) => format!(
                r#"<div class="preview-unsupported"><p>Preview not available for {} component</p></div>"#,
                escape_html(kind)
            ),
        };

        format!(
            r#"<article class="ui-component"><header><h3>{}</h3><p class="entity-ref">Entity: {}</p><span class="kind-badge">{}</span></header><div class="component-body">{}</div></article>"#,
            escape_html(&ui.label()),
            escape_html(&ui.entity),
            escape_html(&ui.kind.to_string()),
            body,
        )
    }

    /// Simulated table: columns from the component or the entity, three
    /// sample rows synthesized per column type.
    fn render_table(&self, component: &ResolvedUi<'_>) -> String {
        let entity = component.entity;
        let columns: Vec<String> = match &component.ui.columns {
            Some(columns) => columns.clone(),
            None => entity
                .map(|e| e.fields.iter().map(|f| f.name.clone()).collect())
                .unwrap_or_default(),
        };

        let mut html = String::from(r#"<table class="preview-table"><thead><tr>"#);
        for col in &columns {
            let required = entity
                .and_then(|e| e.field(col))
                .map(|f| f.required)
                .unwrap_or(false);
            let marker = if required { r#" <span class="required">*</span>"# } else { "" };
            let _ = write!(html, "<th>{}{}</th>", escape_html(col), marker);
        }
        html.push_str("<th>Actions</th></tr></thead><tbody>");

        for row in 0..self.sample_rows {
            html.push_str("<tr>");
            for col in &columns {
                let field_type: Option<FieldType> =
                    entity.and_then(|e| e.field(col)).map(|f| f.field_type);
                let _ = write!(
                    html,
                    "<td>{}</td>",
                    escape_html(&sample_value(field_type, col, row))
                );
            }
            html.push_str(
                r#"<td class="actions"><button disabled>Edit</button> <button disabled>Delete</button></td></tr>"#,
            );
        }

        let _ = write!(
            html,
            r#"</tbody></table><footer class="table-footer">Showing {} sample rows</footer>"#,
            self.sample_rows
        );
        html
    }

    /// Simulated form: fields from the component or the entity, one inert
    /// control per field by the fixed type mapping.
    fn render_form(&self, component: &ResolvedUi<'_>) -> String {
        let entity = component.entity;
        let fields = form_fields(component.ui.fields.as_deref(), entity);

        let mut html = String::from(r#"<form class="preview-form">"#);
        for field in &fields {
            html.push_str(&render_form_field(field));
        }
        html.push_str(concat!(
            r#"<div class="form-actions"><button disabled>Cancel</button> <button disabled>Submit</button></div>"#,
            r#"<p class="form-note"><strong>Note:</strong> This is a UI preview only. Form submission is not implemented.</p>"#,
            "</form>",
        ));
        html
    }
}

/// A form field after merging an explicit field entry with entity info.
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub kind: InputKind,
    pub required: bool,
    pub unique: bool,
    pub placeholder: String,
    pub help_text: Option<String>,
    pub max_length: Option<u32>,
}

/// Merge the component's explicit field list (when present) with the
/// entity's fields. Entity info wins for type lookup; explicit entries win
/// for labels and placeholders.
fn form_fields(explicit: Option<&[FormFieldSpec]>, entity: Option<&SpecEntity>) -> Vec<FormField> {
    match explicit {
        Some(entries) => entries
            .iter()
            .map(|entry| {
                let info = entity.and_then(|e| e.field(&entry.name));
                let field_type = info
                    .map(|f| f.field_type)
                    .or(entry.field_type)
                    .unwrap_or(FieldType::String);
                FormField {
                    name: entry.name.clone(),
                    label: entry
                        .label
                        .clone()
                        .unwrap_or_else(|| humanize_label(&entry.name)),
                    kind: input_kind(field_type),
                    required: entry.required.unwrap_or(false)
                        || info.map(|f| f.required).unwrap_or(false),
                    unique: info.map(|f| f.unique).unwrap_or(false),
                    placeholder: entry
                        .placeholder
                        .clone()
                        .unwrap_or_else(|| format!("Enter {}...", entry.name)),
                    help_text: entry
                        .help_text
                        .clone()
                        .or_else(|| info.and_then(|f| f.help_text.clone())),
                    max_length: info.and_then(|f| f.max_length),
                }
            })
            .collect(),
        None => entity
            .map(|e| {
                e.fields
                    .iter()
                    .map(|f| FormField {
                        name: f.name.clone(),
                        label: humanize_label(&f.name),
                        kind: input_kind(f.field_type),
                        required: f.required,
                        unique: f.unique,
                        placeholder: format!("Enter {}...", f.name),
                        help_text: f.help_text.clone(),
                        max_length: f.max_length,
                    })
                    .collect()
            })
            .unwrap_or_default(),
    }
}

fn render_form_field(field: &FormField) -> String {
    let mut html = String::from(r#"<div class="form-field">"#);

    let required = if field.required { r#" <span class="required">*</span>"# } else { "" };
    let unique = if field.unique { r#" <span class="unique-badge">unique</span>"# } else { "" };
    let _ = write!(
        html,
        r#"<label for="{name}">{label}{required}{unique}</label>"#,
        name = escape_html(&field.name),
        label = escape_html(&field.label),
        required = required,
        unique = unique,
    );

    match field.kind {
        InputKind::Checkbox => {
            let hint = field
                .help_text
                .clone()
                .unwrap_or_else(|| format!("Enable {}", field.name));
            let _ = write!(
                html,
                r#"<input type="checkbox" id="{}" disabled> <span class="checkbox-hint">{}</span>"#,
                escape_html(&field.name),
                escape_html(&hint),
            );
        }
        InputKind::TextArea => {
            let _ = write!(
                html,
                r#"<textarea id="{}" rows="4" placeholder="{}" disabled></textarea>"#,
                escape_html(&field.name),
                escape_html(&field.placeholder),
            );
        }
        kind => {
            let _ = write!(
                html,
                r#"<input type="{}" id="{}" placeholder="{}" disabled>"#,
                kind.html_type(),
                escape_html(&field.name),
                escape_html(&field.placeholder),
            );
        }
    }

    if field.kind != InputKind::Checkbox {
        if let Some(help) = &field.help_text {
            let _ = write!(html, r#"<p class="help-text">{}</p>"#, escape_html(help));
        }
    }
    if let Some(max) = field.max_length {
        let _ = write!(html, r#"<p class="max-length">Max length: {} characters</p>"#, max);
    }

    html.push_str("</div>");
    html
}
