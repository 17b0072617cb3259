//! Authentication API trait

use async_trait::async_trait;

use crate::client::models::TokenPair;
use crate::error::Result;

/// Token endpoints
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Exchange credentials for a token pair and role groups (`POST /api/token/`)
    async fn obtain_token(&self, username: &str, password: &str) -> Result<TokenPair>;

    /// Exchange a refresh token for a new access token (`POST /api/token/refresh/`)
    async fn refresh_access(&self, refresh_token: &str) -> Result<String>;
}
