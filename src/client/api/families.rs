//! Foster family and placement API trait

use async_trait::async_trait;

use crate::client::models::{FosterFamily, FosterPlacement, NewFosterFamily, NewPlacement};
use crate::error::Result;

#[async_trait]
pub trait FamilyApi: Send + Sync {
    async fn list_foster_families(&self) -> Result<Vec<FosterFamily>>;

    async fn create_foster_family(&self, family: &NewFosterFamily) -> Result<FosterFamily>;

    async fn list_placements(&self) -> Result<Vec<FosterPlacement>>;

    async fn create_placement(&self, placement: &NewPlacement) -> Result<FosterPlacement>;
}
