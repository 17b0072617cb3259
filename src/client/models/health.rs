//! Health service models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ChildRef;

/// Health service status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Pending,
    Complete,
}

/// Scheduled or completed health service (well-child visit, dental, immunizations)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HealthService {
    pub id: i64,
    pub child: ChildRef,
    /// Service codes: `well_child`, `immunization(s)`, `dental`
    #[serde(default)]
    pub service: Vec<String>,
    #[serde(default)]
    pub immunizations: Option<Vec<String>>,
    pub due_date: NaiveDate,
    #[serde(default)]
    pub completed_date: Option<NaiveDate>,
    pub status: HealthStatus,
}

impl HealthService {
    /// Comma-joined display labels, or "Service" when none are recorded
    pub fn service_labels(&self) -> String {
        if self.service.is_empty() {
            return "Service".to_string();
        }
        self.service
            .iter()
            .map(|s| service_label(s))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Display label for a service code; unknown codes pass through
pub fn service_label(code: &str) -> &str {
    match code {
        "well_child" => "Well Child",
        "dental" => "Dental",
        "immunization(s)" => "Immunization(s)",
        other => other,
    }
}

/// Body for recording a health visit
#[derive(Debug, Clone, Serialize)]
pub struct NewHealthService {
    pub child: i64,
    pub service: Vec<String>,
    pub due_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_date: Option<NaiveDate>,
    pub status: HealthStatus,
}
