//! Health service API trait

use async_trait::async_trait;

use crate::client::models::{HealthService, NewHealthService};
use crate::error::Result;

#[async_trait]
pub trait HealthApi: Send + Sync {
    async fn list_health_services(&self) -> Result<Vec<HealthService>>;

    async fn create_health_service(&self, service: &NewHealthService) -> Result<HealthService>;
}
