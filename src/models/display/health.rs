//! Health service display model

use serde::Serialize;
use tabled::Tabled;

use super::common::format_date;
use crate::client::models::{HealthService, HealthStatus};

/// Health service row for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct HealthServiceDisplay {
    #[tabled(rename = "SERVICE")]
    pub service: String,

    #[tabled(rename = "CHILD")]
    pub child: String,

    #[tabled(rename = "DUE")]
    pub due_date: String,

    #[tabled(rename = "STATUS")]
    pub status: String,
}

impl From<&HealthService> for HealthServiceDisplay {
    fn from(svc: &HealthService) -> Self {
        let status = match svc.status {
            HealthStatus::Pending => "pending".to_string(),
            HealthStatus::Complete => match svc.completed_date {
                Some(done) => format!("complete ({})", format_date(done)),
                None => "complete".to_string(),
            },
        };
        Self {
            service: svc.service_labels(),
            child: svc.child.display_name(),
            due_date: format_date(svc.due_date),
            status,
        }
    }
}
