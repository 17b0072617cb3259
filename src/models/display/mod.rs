//! Display model implementations for table and JSON output

mod case;
mod common;
mod family;
mod health;

pub use case::CaseDisplay;
pub use common::{format_date, or_dash};
pub use family::{FamilyDisplay, PlacementDisplay};
pub use health::HealthServiceDisplay;
