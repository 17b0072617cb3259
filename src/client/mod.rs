//! Care2Connect backend client

pub mod api;
pub mod care;
#[cfg(test)]
pub mod mock;
pub mod models;

pub use api::{AuthApi, CaseApi, ChildApi, FamilyApi, HealthApi};
pub use care::CareClient;
#[cfg(test)]
pub use mock::MockCareClient;

/// Everything the dashboard needs from the backend
pub trait CareApi: AuthApi + CaseApi + ChildApi + FamilyApi + HealthApi {}

impl<T> CareApi for T where T: AuthApi + CaseApi + ChildApi + FamilyApi + HealthApi {}
