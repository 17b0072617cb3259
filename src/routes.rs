//! Navigable routes

use std::fmt;

use crate::auth::Role;

/// A place the client can navigate to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Logout,
    /// Role-resolved dashboard entry point
    Dashboard,
    SupervisorDashboard,
    CaseworkerDashboard,
    FosterParentDashboard,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::Logout => "/logout",
            Route::Dashboard => "/dashboard",
            Route::SupervisorDashboard => "/sup-dashboard",
            Route::CaseworkerDashboard => "/cw-dashboard",
            Route::FosterParentDashboard => "/fp-dashboard",
        }
    }

    /// Dashboard for a role, or `None` when the role has none
    pub fn dashboard_for(role: &Role) -> Option<Self> {
        match role {
            Role::Supervisor => Some(Route::SupervisorDashboard),
            Role::Caseworker => Some(Route::CaseworkerDashboard),
            Role::FosterParent => Some(Route::FosterParentDashboard),
            Role::Other(_) | Role::Unknown => None,
        }
    }

    /// Whether entering this route runs the session check
    pub fn is_protected(&self) -> bool {
        !matches!(self, Route::Login | Route::Logout)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
