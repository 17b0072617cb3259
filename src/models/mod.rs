//! Display models for CLI output
//!
//! Converts API response types into table rows and JSON-friendly shapes.

pub mod display;

pub use display::{CaseDisplay, HealthServiceDisplay, PlacementDisplay};
