//! Case display model

use serde::Serialize;
use tabled::Tabled;

use super::common::format_date;
use crate::client::models::Case;

/// Case row for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct CaseDisplay {
    #[tabled(rename = "CASE ID")]
    pub id: i64,

    /// Child name, "Last, First"
    #[tabled(rename = "CHILD")]
    pub child: String,

    #[tabled(rename = "STATUS")]
    pub status: String,

    #[tabled(rename = "OPENED")]
    pub start_date: String,

    #[tabled(rename = "CLOSED")]
    pub end_date: String,
}

impl From<&Case> for CaseDisplay {
    fn from(case: &Case) -> Self {
        Self {
            id: case.id,
            child: case.child.display_name(),
            status: case.status.to_string(),
            start_date: format_date(case.start_date),
            end_date: case
                .end_date
                .map(format_date)
                .unwrap_or_else(|| "--".to_string()),
        }
    }
}

impl From<Case> for CaseDisplay {
    fn from(case: Case) -> Self {
        CaseDisplay::from(&case)
    }
}
