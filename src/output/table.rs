//! Table output formatting

use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Style, object::Rows},
};

/// Shown in place of an empty table
pub const NO_RESULTS: &str = "No results found.";

/// Format data as a rounded table with centered headers
pub fn format_table<T: Tabled>(data: &[T]) -> String {
    if data.is_empty() {
        return NO_RESULTS.to_string();
    }

    let mut table = Table::new(data);
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));

    table.to_string()
}

/// Two-column key/value table for a single record
pub fn format_record(fields: &[(&str, String)]) -> String {
    let rows: Vec<FieldRow> = fields
        .iter()
        .map(|(name, value)| FieldRow {
            field: name.to_string(),
            value: value.clone(),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.to_string()
}

#[derive(Tabled)]
struct FieldRow {
    #[tabled(rename = "FIELD")]
    field: String,
    #[tabled(rename = "VALUE")]
    value: String,
}
