//! Child models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Child record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Child {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub dob: NaiveDate,
    #[serde(default)]
    pub medications: Option<String>,
    #[serde(default)]
    pub allergies: Option<String>,
}

impl Child {
    /// "Last, First" as shown in lists
    pub fn display_name(&self) -> String {
        format!("{}, {}", self.last_name, self.first_name)
    }
}

/// A child as embedded in another record: either a bare id or a name summary
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ChildRef {
    Summary {
        id: i64,
        first_name: String,
        last_name: String,
    },
    Id(i64),
}

impl ChildRef {
    pub fn id(&self) -> i64 {
        match self {
            ChildRef::Summary { id, .. } => *id,
            ChildRef::Id(id) => *id,
        }
    }

    /// "Last, First" when names are embedded, otherwise "Child #id"
    pub fn display_name(&self) -> String {
        match self {
            ChildRef::Summary {
                first_name,
                last_name,
                ..
            } => format!("{}, {}", last_name, first_name),
            ChildRef::Id(id) => format!("Child #{}", id),
        }
    }
}

/// Body for creating a child
#[derive(Debug, Clone, Serialize)]
pub struct NewChild {
    pub first_name: String,
    pub last_name: String,
    pub dob: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medications: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allergies: Option<String>,
}

/// PATCH body for medication and allergy updates
#[derive(Debug, Clone, Default, Serialize)]
pub struct ChildUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medications: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allergies: Option<String>,
}
