use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;
pub mod views;

use table::{TableOptions, render_table};
use views::{DetailView, RecordView, SectionView};

const LIST_HEADERS: [&str; 8] = [
    "id",
    "name",
    "organization",
    "deadline",
    "status",
    "funding",
    "documents",
    "alert",
];

fn table_options() -> TableOptions {
    let prefs = ui::prefs();
    TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    }
}

/// Print an already rendered response.
pub fn output(rendered: &str) {
    println!("{rendered}");
}

/// Render a response object: pretty JSON, or a key/value table.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_key_values(&serde_json::to_value(value)?),
    }
}

/// Render a flat record list.
pub fn render_records(records: &[RecordView<'_>], format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(records)?),
        OutputFormat::Table => Ok(records_table(records)),
    }
}

/// Render sectioned records, one titled table per section.
pub fn render_sections(
    sections: &[SectionView<'_>],
    format: OutputFormat,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(sections)?),
        OutputFormat::Table => {
            if sections.is_empty() {
                return Ok(String::from("(no scholarships)"));
            }
            let blocks = sections
                .iter()
                .map(|section| {
                    format!(
                        "{} ({})\n{}",
                        section.title,
                        section.count,
                        records_table(&section.records)
                    )
                })
                .collect::<Vec<_>>();
            Ok(blocks.join("\n\n"))
        }
    }
}

/// Render one record in full.
pub fn render_detail(detail: &DetailView<'_>, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(detail)?),
        OutputFormat::Table => Ok(detail_table(detail)),
    }
}

fn records_table(records: &[RecordView<'_>]) -> String {
    if records.is_empty() {
        return String::from("(no scholarships)");
    }
    let rows = records
        .iter()
        .map(|view| {
            vec![
                view.record.id.clone(),
                view.record.name.clone(),
                view.record.organization.clone(),
                view.display_deadline.clone(),
                view.record.status.to_string(),
                view.financial_summary.clone(),
                view.documents_summary.clone(),
                view.warning.clone().unwrap_or_else(|| String::from("-")),
            ]
        })
        .collect::<Vec<_>>();
    render_table(&LIST_HEADERS, &rows, table_options())
}

fn detail_table(detail: &DetailView<'_>) -> String {
    let view = &detail.view;
    let record = view.record;

    let mut deadline = view.display_deadline.clone();
    if let Some(note) = &detail.deadline_note {
        deadline = format!("{deadline} ({note})");
    }

    let mut rows = vec![
        ("id", record.id.clone()),
        ("name", record.name.clone()),
        ("organization", record.organization.clone()),
        ("deadline", deadline),
        ("deadline notes", record.deadline_notes.clone()),
        ("status", record.status.to_string()),
        ("degrees", detail.degree_types_label.clone()),
        ("language", record.language_requirement.to_string()),
        ("apply via", record.application_reach_type.to_string()),
        ("funding", view.financial_summary.clone()),
        ("stipend", record.monthly_stipend.clone()),
        ("other benefits", record.other_benefits.clone()),
        ("living costs", record.living_costs.clone()),
        ("requirements", record.requirements.clone()),
        ("documents", view.documents_summary.clone()),
        ("prepared", detail.prepared_preview.join(", ")),
        ("link", record.application_link.clone()),
        ("notes", record.notes.clone()),
    ];
    rows.retain(|(_, value)| !value.is_empty());

    let rows = rows
        .into_iter()
        .map(|(key, value)| vec![key.to_string(), value])
        .collect::<Vec<_>>();
    render_table(&["field", "value"], &rows, table_options())
}

fn render_key_values(value: &Value) -> anyhow::Result<String> {
    let rows = match value {
        Value::Object(map) => map
            .iter()
            .map(|(key, value)| vec![key.clone(), value_to_cell(value)])
            .collect::<Vec<_>>(),
        scalar => vec![vec![String::from("value"), value_to_cell(scalar)]],
    };
    Ok(render_table(&["key", "value"], &rows, table_options()))
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        Value::Array(items) => items.iter().map(value_to_cell).collect::<Vec<_>>().join(", "),
        Value::Object(_) => serde_json::to_string(value).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}
