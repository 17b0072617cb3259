//! Route guard
//!
//! Gates protected content on the outcome of a full check cycle. The guard
//! never yields content before the cycle has resolved, and never redirects
//! early either: while the state is `Unknown` or `Checking` it shows a loading
//! placeholder.

use std::sync::Arc;

use super::refresh::{AuthState, TokenRefresher};
use crate::error::AuthError;
use crate::routes::Route;

/// What the guard lets the caller show
#[derive(Debug, PartialEq, Eq)]
pub enum GuardOutcome<T> {
    /// Check passed; show the protected content
    Render(T),
    /// Check failed; go to the login route
    Redirect { to: Route, reason: AuthError },
    /// Check still running
    Loading,
}

impl<T> GuardOutcome<T> {
    /// Outcome for a state, with content produced only when authorized
    pub fn for_state(state: &AuthState, content: impl FnOnce() -> T) -> Self {
        match state {
            AuthState::Unknown | AuthState::Checking => GuardOutcome::Loading,
            AuthState::Authorized => GuardOutcome::Render(content()),
            AuthState::Unauthorized(reason) => GuardOutcome::Redirect {
                to: Route::Login,
                reason: reason.clone(),
            },
        }
    }
}

/// Feedback shown while a check is running
pub trait LoadingIndicator {
    fn start(&self, message: &str);
    fn finish(&self);
}

/// Indicator that shows nothing
pub struct Silent;

impl LoadingIndicator for Silent {
    fn start(&self, _message: &str) {}
    fn finish(&self) {}
}

/// Spinner on stderr
pub struct Spinner {
    bar: indicatif::ProgressBar,
}

impl Spinner {
    pub fn new() -> Self {
        let bar = indicatif::ProgressBar::new_spinner();
        bar.set_style(
            indicatif::ProgressStyle::with_template("{spinner} {msg}")
                .unwrap_or_else(|_| indicatif::ProgressStyle::default_spinner()),
        );
        Self { bar }
    }
}

impl Default for Spinner {
    fn default() -> Self {
        Self::new()
    }
}

impl LoadingIndicator for Spinner {
    fn start(&self, message: &str) {
        self.bar.set_message(message.to_string());
        self.bar
            .enable_steady_tick(std::time::Duration::from_millis(100));
    }

    fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

/// Runs a check cycle on every entry to a protected route
pub struct RouteGuard {
    refresher: Arc<TokenRefresher>,
}

impl RouteGuard {
    pub fn new(refresher: Arc<TokenRefresher>) -> Self {
        Self { refresher }
    }

    /// Enter a route: run a full cycle, then render or redirect.
    ///
    /// `content` is only invoked after the cycle has resolved to authorized.
    pub async fn enter<T>(
        &self,
        route: Route,
        indicator: &dyn LoadingIndicator,
        content: impl FnOnce() -> T,
    ) -> GuardOutcome<T> {
        if !route.is_protected() {
            return GuardOutcome::Render(content());
        }

        indicator.start("Loading...");
        let state = self.refresher.check().await;
        indicator.finish();

        log::debug!("Guard for {} resolved to {:?}", route, state);
        GuardOutcome::for_state(&state, content)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use chrono::Utc;

    use super::*;
    use crate::auth::token::unsigned_token;
    use crate::client::MockCareClient;
    use crate::client::api::AuthApi;
    use crate::error::ApiError;
    use crate::session::{MemorySessionStore, Session, SessionStore};

    fn guard_for(
        access: Option<String>,
        refresh: Option<&str>,
        api: Arc<MockCareClient>,
    ) -> (RouteGuard, Arc<MemorySessionStore>) {
        let store = Arc::new(MemorySessionStore::with_session(Session {
            access_token: access,
            refresh_token: refresh.map(str::to_string),
            groups: vec!["Caseworker".into()],
        }));
        let api: Arc<dyn AuthApi> = api;
        let refresher = Arc::new(TokenRefresher::new(store.clone(), api));
        (RouteGuard::new(refresher), store)
    }

    #[test]
    fn test_pending_states_show_loading() {
        let rendered = AtomicUsize::new(0);
        for state in [AuthState::Unknown, AuthState::Checking] {
            let outcome = GuardOutcome::for_state(&state, || {
                rendered.fetch_add(1, Ordering::SeqCst);
            });
            assert_eq!(outcome, GuardOutcome::Loading);
        }
        assert_eq!(rendered.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_valid_session_renders_without_refresh() {
        let api = Arc::new(MockCareClient::new());
        let token = unsigned_token(Utc::now().timestamp() + 3600);
        let (guard, _) = guard_for(Some(token), Some("r1"), api.clone());

        let outcome = guard.enter(Route::Dashboard, &Silent, || "content").await;

        assert_eq!(outcome, GuardOutcome::Render("content"));
        assert_eq!(api.call_counts().await.refresh_access, 0);
    }

    #[tokio::test]
    async fn test_expired_session_refreshes_then_renders() {
        let fresh = unsigned_token(Utc::now().timestamp() + 3600);
        let api = Arc::new(MockCareClient::new().with_refreshed_access(&fresh).await);
        let expired = unsigned_token(Utc::now().timestamp() - 10);
        let (guard, store) = guard_for(Some(expired), Some("r1"), api.clone());

        let outcome = guard.enter(Route::Dashboard, &Silent, || "content").await;

        assert_eq!(outcome, GuardOutcome::Render("content"));
        assert_eq!(api.call_counts().await.refresh_access, 1);
        assert_eq!(store.get().unwrap().access_token, Some(fresh));
    }

    #[tokio::test]
    async fn test_rejected_refresh_redirects_without_content() {
        let api = Arc::new(
            MockCareClient::new()
                .with_refresh_error(ApiError::Unauthorized)
                .await,
        );
        let expired = unsigned_token(Utc::now().timestamp() - 10);
        let (guard, _) = guard_for(Some(expired), Some("r1"), api);

        let rendered = AtomicUsize::new(0);
        let outcome = guard
            .enter(Route::Dashboard, &Silent, || {
                rendered.fetch_add(1, Ordering::SeqCst);
            })
            .await;

        assert_eq!(
            outcome,
            GuardOutcome::Redirect {
                to: Route::Login,
                reason: AuthError::RefreshRejected
            }
        );
        assert_eq!(rendered.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_absent_refresh_token_redirects() {
        let expired = unsigned_token(Utc::now().timestamp() - 10);
        let (guard, _) = guard_for(Some(expired), None, Arc::new(MockCareClient::new()));

        let outcome = guard.enter(Route::CaseworkerDashboard, &Silent, || ()).await;
        assert!(matches!(
            outcome,
            GuardOutcome::Redirect {
                to: Route::Login,
                reason: AuthError::AuthExpired
            }
        ));
    }

    #[tokio::test]
    async fn test_every_entry_rechecks() {
        let token = unsigned_token(Utc::now().timestamp() + 3600);
        let (guard, store) = guard_for(Some(token), Some("r1"), Arc::new(MockCareClient::new()));

        assert!(matches!(
            guard.enter(Route::Dashboard, &Silent, || ()).await,
            GuardOutcome::Render(())
        ));

        store.clear().unwrap();
        assert!(matches!(
            guard.enter(Route::Dashboard, &Silent, || ()).await,
            GuardOutcome::Redirect { .. }
        ));
    }

    #[tokio::test]
    async fn test_unprotected_route_skips_check() {
        let api = Arc::new(MockCareClient::new());
        let (guard, _) = guard_for(None, None, api);
        assert_eq!(
            guard.enter(Route::Login, &Silent, || "login form").await,
            GuardOutcome::Render("login form")
        );
        assert_eq!(guard.current(|| ()), GuardOutcome::Loading);
    }
}
