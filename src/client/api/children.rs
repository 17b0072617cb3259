//! Child API trait

use async_trait::async_trait;

use crate::client::models::{Child, ChildUpdate, NewChild};
use crate::error::Result;

#[async_trait]
pub trait ChildApi: Send + Sync {
    async fn list_children(&self) -> Result<Vec<Child>>;

    async fn get_child(&self, id: i64) -> Result<Child>;

    async fn create_child(&self, child: &NewChild) -> Result<Child>;

    /// Partial update (`PATCH`)
    async fn update_child(&self, id: i64, update: &ChildUpdate) -> Result<Child>;
}
