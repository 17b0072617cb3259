//! Output formatting for CLI results

use serde::Serialize;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::error::Result;

pub mod json;
pub mod table;

/// Trait for types that can be formatted for output
pub trait Formattable {
    /// Format the data according to the specified format
    fn format(&self, format: OutputFormat) -> Result<String>;

    /// Format and print to stdout
    fn print(&self, format: OutputFormat) -> Result<()> {
        let output = self.format(format)?;
        println!("{}", output);
        Ok(())
    }
}

impl<T: Tabled + Serialize> Formattable for Vec<T> {
    fn format(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Pretty | OutputFormat::Table => Ok(table::format_table(self)),
            OutputFormat::Json => Ok(json::format_json(self)?),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Tabled, Serialize)]
    struct Row {
        #[tabled(rename = "CHILD")]
        child: String,
    }

    #[test]
    fn test_vec_formats_by_kind() {
        let rows = vec![Row {
            child: "Diaz, Ana".into(),
        }];

        let table = rows.format(OutputFormat::Table).unwrap();
        assert!(table.contains("CHILD"));

        let json = rows.format(OutputFormat::Json).unwrap();
        assert!(json.contains("\"child\": \"Diaz, Ana\""));
    }
}
