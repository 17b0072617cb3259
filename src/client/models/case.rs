//! Case models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ChildRef;

/// Case status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CaseStatus {
    Open,
    Closed,
}

impl std::fmt::Display for CaseStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CaseStatus::Open => write!(f, "open"),
            CaseStatus::Closed => write!(f, "closed"),
        }
    }
}

/// Case linking a child to a caseworker
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Case {
    pub id: i64,
    pub child: ChildRef,
    #[serde(default)]
    pub caseworker: Option<i64>,
    #[serde(default)]
    pub placement: Option<i64>,
    pub status: CaseStatus,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}

impl Case {
    /// Case-insensitive substring match on "First Last"
    pub fn matches_filter(&self, filter: &str) -> bool {
        if filter.is_empty() {
            return true;
        }
        let name = match &self.child {
            ChildRef::Summary {
                first_name,
                last_name,
                ..
            } => format!("{} {}", first_name, last_name),
            ChildRef::Id(_) => String::new(),
        };
        name.to_lowercase().contains(&filter.to_lowercase())
    }
}

/// Body for creating a case
#[derive(Debug, Clone, Serialize)]
pub struct NewCase {
    pub child: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caseworker: Option<i64>,
    pub start_date: NaiveDate,
    pub status: CaseStatus,
}
