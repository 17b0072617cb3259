//! Foster family and placement display models

use serde::Serialize;
use tabled::Tabled;

use super::common::format_date;
use crate::client::models::{FosterFamily, FosterPlacement};

/// Foster family row; also used to pick a family in forms.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct FamilyDisplay {
    #[tabled(rename = "FAMILY ID")]
    pub id: i64,

    #[tabled(rename = "NAME")]
    pub name: String,

    /// "current/max"
    #[tabled(rename = "OCCUPANCY")]
    pub occupancy: String,
}

impl From<&FosterFamily> for FamilyDisplay {
    fn from(family: &FosterFamily) -> Self {
        Self {
            id: family.id,
            name: family.family_name.clone(),
            occupancy: format!("{}/{}", family.current_occupancy, family.max_occupancy),
        }
    }
}

impl std::fmt::Display for FamilyDisplay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.occupancy)
    }
}

/// Placement row for the detail pane
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct PlacementDisplay {
    #[tabled(rename = "PLACEMENT ID")]
    pub id: i64,

    #[tabled(rename = "FAMILY")]
    pub family: String,

    #[tabled(rename = "START")]
    pub start_date: String,

    #[tabled(rename = "END")]
    pub end_date: String,
}

impl PlacementDisplay {
    pub fn new(placement: &FosterPlacement, family: Option<&FosterFamily>) -> Self {
        Self {
            id: placement.id,
            family: family
                .map(|f| f.family_name.clone())
                .unwrap_or_else(|| "--".to_string()),
            start_date: format_date(placement.start_date),
            end_date: placement
                .end_date
                .map(format_date)
                .unwrap_or_else(|| "--".to_string()),
        }
    }
}
