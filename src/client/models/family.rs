//! Foster family and placement models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Foster family
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FosterFamily {
    pub id: i64,
    pub family_name: String,
    #[serde(default)]
    pub parent1: Option<i64>,
    #[serde(default)]
    pub parent2: Option<i64>,
    pub max_occupancy: i32,
    #[serde(default)]
    pub current_occupancy: i32,
}

impl FosterFamily {
    pub fn has_capacity(&self) -> bool {
        self.current_occupancy < self.max_occupancy
    }
}

/// Body for creating a foster family
#[derive(Debug, Clone, Serialize)]
pub struct NewFosterFamily {
    pub family_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent1: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent2: Option<i64>,
    pub max_occupancy: i32,
}

/// Assignment of a child to a foster family for a date range
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FosterPlacement {
    pub id: i64,
    #[serde(default)]
    pub child: Option<i64>,
    #[serde(default)]
    pub foster_family: Option<i64>,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_reason: Option<String>,
}

/// Body for creating a placement
#[derive(Debug, Clone, Serialize)]
pub struct NewPlacement {
    pub child: i64,
    pub foster_family: i64,
    pub start_date: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity() {
        let mut family = FosterFamily {
            id: 1,
            family_name: "Okafor".into(),
            parent1: None,
            parent2: None,
            max_occupancy: 2,
            current_occupancy: 1,
        };
        assert!(family.has_capacity());
        family.current_occupancy = 2;
        assert!(!family.has_capacity());
    }
}
