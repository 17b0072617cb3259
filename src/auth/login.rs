//! Login and logout

use log::{info, warn};

use super::role::{Role, resolve_role};
use crate::client::AuthApi;
use crate::error::{ApiError, Error, Result};
use crate::routes::Route;
use crate::session::{SessionStore, SessionUpdate};

/// Where a successful credential exchange leads
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Signed in with a role that has a dashboard
    Dashboard { role: Role, route: Route },
    /// Signed in, but no group maps to a dashboard; back to login
    NoRecognizedRole { groups: Vec<String> },
}

impl LoginOutcome {
    /// Route to navigate to next
    pub fn route(&self) -> Route {
        match self {
            LoginOutcome::Dashboard { route, .. } => *route,
            LoginOutcome::NoRecognizedRole { .. } => Route::Login,
        }
    }
}

/// Exchange credentials, persist the session verbatim, and pick a dashboard
pub async fn login(
    api: &dyn AuthApi,
    store: &dyn SessionStore,
    username: &str,
    password: &str,
) -> Result<LoginOutcome> {
    let pair = api.obtain_token(username, password).await?;

    store.set(SessionUpdate::login(pair.access, pair.refresh, pair.groups))?;
    let session = store.get()?;

    let role = resolve_role(&session);
    match Route::dashboard_for(&role) {
        Some(route) => {
            info!("Signed in as {} ({})", username, role);
            Ok(LoginOutcome::Dashboard { role, route })
        }
        None => {
            warn!("No recognized role for {}: {:?}", username, session.groups);
            Ok(LoginOutcome::NoRecognizedRole {
                groups: session.groups,
            })
        }
    }
}

/// Inline message for a failed login
pub fn login_failure_message(err: &Error) -> &'static str {
    match err {
        Error::Api(ApiError::Unauthorized) => "Invalid username or password",
        _ => "Login failed. Please try again.",
    }
}

/// Clear the session and return to login
pub fn logout(store: &dyn SessionStore) -> Result<Route> {
    store.clear()?;
    info!("Signed out");
    Ok(Route::Login)
}
