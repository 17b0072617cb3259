//! API trait definitions split by responsibility
//!
//! - [`AuthApi`] - Login and token refresh
//! - [`CaseApi`] - Case records
//! - [`ChildApi`] - Child records
//! - [`FamilyApi`] - Foster families and placements
//! - [`HealthApi`] - Health service records
//!
//! The [`CareApi`](super::CareApi) super-trait combines all of them.

mod auth;
mod cases;
mod children;
mod families;
mod health;

pub use auth::AuthApi;
pub use cases::CaseApi;
pub use children::ChildApi;
pub use families::FamilyApi;
pub use health::HealthApi;
