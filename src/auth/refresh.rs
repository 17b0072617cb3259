//! Token refresh protocol
//!
//! One check cycle moves `Unknown -> Checking -> Authorized | Unauthorized`.
//! Inside `Checking` the stored access token is decoded and its expiration
//! compared with the wall clock; an expired token gets exactly one refresh
//! attempt. Nothing is cached between cycles: every protected-route entry runs
//! a fresh check, and a previously refreshed token simply passes the
//! expiration test.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use log::{debug, info, warn};

use super::token::DecodedToken;
use crate::client::AuthApi;
use crate::error::{ApiError, AuthError, Error};
use crate::session::{SessionUpdate, SharedSessionStore};

/// Authorization state for the current check cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthState {
    Unknown,
    Checking,
    Authorized,
    Unauthorized(AuthError),
}

/// Runs check cycles against a session store and the refresh endpoint.
///
/// Cycles are serialized: a check that starts while another is in flight
/// waits for it, then re-reads the store, so it sees a token the first cycle
/// refreshed instead of issuing a second refresh.
pub struct TokenRefresher {
    store: SharedSessionStore,
    api: Arc<dyn AuthApi>,
    history: Mutex<Vec<AuthState>>,
    in_flight: tokio::sync::Mutex<()>,
}

impl TokenRefresher {
    pub fn new(store: SharedSessionStore, api: Arc<dyn AuthApi>) -> Self {
        Self {
            store,
            api,
            history: Mutex::new(vec![AuthState::Unknown]),
            in_flight: tokio::sync::Mutex::new(()),
        }
    }

    /// Every state entered since construction, oldest first
    #[cfg(test)]
    pub fn history(&self) -> Vec<AuthState> {
        self.history.lock().map(|h| h.clone()).unwrap_or_default()
    }

    /// Run one check cycle against the current wall-clock time
    pub async fn check(&self) -> AuthState {
        self.check_at(Utc::now()).await
    }

    /// Run one check cycle with an explicit clock
    pub async fn check_at(&self, now: DateTime<Utc>) -> AuthState {
        let _flight = self.in_flight.lock().await;

        self.transition(AuthState::Checking);
        let next = match self.evaluate(now).await {
            Ok(()) => AuthState::Authorized,
            Err(reason) => {
                info!("Session not authorized: {}", reason);
                AuthState::Unauthorized(reason)
            }
        };
        self.transition(next.clone());
        next
    }

    async fn evaluate(&self, now: DateTime<Utc>) -> Result<(), AuthError> {
        let session = self
            .store
            .get()
            .map_err(|e| AuthError::Storage(e.to_string()))?;

        let access = session.access_token.ok_or(AuthError::NotSignedIn)?;

        // A token that will not decode is not worth refreshing
        let decoded = DecodedToken::decode(&access)?;
        if !decoded.is_expired_at(now) {
            debug!(
                "Access token valid for {}s",
                decoded.expiration_epoch_seconds - now.timestamp()
            );
            return Ok(());
        }

        debug!("Access token expired, attempting refresh");
        let refresh = session.refresh_token.ok_or(AuthError::AuthExpired)?;
        self.refresh(&refresh).await
    }

    async fn refresh(&self, refresh_token: &str) -> Result<(), AuthError> {
        match self.api.refresh_access(refresh_token).await {
            Ok(access) => {
                self.store
                    .set(SessionUpdate::access(access))
                    .map_err(|e| AuthError::Storage(e.to_string()))?;
                info!("Access token refreshed");
                Ok(())
            }
            Err(Error::Api(ApiError::Network(msg))) => {
                warn!("Refresh failed: {}", msg);
                Err(AuthError::Network(msg))
            }
            // An outage says nothing about the refresh token; keep it for the next cycle
            Err(Error::Api(ApiError::ServerError(msg))) => {
                warn!("Refresh endpoint unavailable: {}", msg);
                Err(AuthError::ServerUnavailable(msg))
            }
            Err(e) => {
                warn!("Refresh rejected: {}", e);
                // Stale credentials are dropped so the next cycle does not retry them
                if let Err(clear_err) = self.store.clear() {
                    warn!("Failed to clear rejected session: {}", clear_err);
                }
                Err(AuthError::RefreshRejected)
            }
        }
    }

    fn transition(&self, next: AuthState) {
        debug!("Auth state -> {:?}", next);
        if let Ok(mut history) = self.history.lock() {
            history.push(next);
        }
    }
}
