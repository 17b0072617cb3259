//! Case API trait

use async_trait::async_trait;

use crate::client::models::{Case, NewCase};
use crate::error::Result;

#[async_trait]
pub trait CaseApi: Send + Sync {
    /// Cases visible to the signed-in user
    async fn list_cases(&self) -> Result<Vec<Case>>;

    async fn get_case(&self, id: i64) -> Result<Case>;

    async fn create_case(&self, case: &NewCase) -> Result<Case>;
}
