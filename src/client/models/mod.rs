//! Care2Connect API data models
//!
//! Domain types exchanged with the case-management backend, organized by
//! resource type.

mod auth;
mod case;
mod child;
mod family;
mod health;

pub use auth::{LoginRequest, RefreshRequest, RefreshResponse, TokenPair};
pub use case::{Case, CaseStatus, NewCase};
pub use child::{Child, ChildRef, ChildUpdate, NewChild};
pub use family::{FosterFamily, FosterPlacement, NewFosterFamily, NewPlacement};
pub use health::{HealthService, HealthStatus, NewHealthService, service_label};
