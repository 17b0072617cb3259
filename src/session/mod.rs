//! Persisted client session
//!
//! The session holds the access token, refresh token, and role groups handed
//! out at login. It is created by login, has its access token replaced by a
//! refresh, and is cleared by logout. Every other component reads it through a
//! [`SessionStore`] that it is given; nothing reaches for ambient storage.

use std::sync::Arc;

use crate::error::Result;

mod file;
mod memory;

pub use file::FileSessionStore;
pub use memory::MemorySessionStore;

/// Current credentials and role groups
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
    /// Ordered role names; the first one decides the active role
    pub groups: Vec<String>,
}

impl Session {
    /// True when nothing at all is stored
    pub fn is_empty(&self) -> bool {
        self.access_token.is_none() && self.refresh_token.is_none() && self.groups.is_empty()
    }
}

/// Partial write; only `Some` fields replace stored values.
#[derive(Debug, Clone, Default)]
pub struct SessionUpdate {
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
    pub groups: Option<Vec<String>>,
}

impl SessionUpdate {
    /// Full login write
    pub fn login(access: String, refresh: String, groups: Vec<String>) -> Self {
        Self {
            access_token: Some(access),
            refresh_token: Some(refresh),
            groups: Some(groups),
        }
    }

    /// Refresh write; leaves refresh token and groups untouched
    pub fn access(access: String) -> Self {
        Self {
            access_token: Some(access),
            ..Self::default()
        }
    }

    pub(crate) fn apply_to(self, session: &mut Session) {
        if let Some(access) = self.access_token {
            session.access_token = Some(access);
        }
        if let Some(refresh) = self.refresh_token {
            session.refresh_token = Some(refresh);
        }
        if let Some(groups) = self.groups {
            session.groups = groups;
        }
    }
}

/// Read/write/clear contract for the session.
///
/// No token validation happens on write; consumers validate on read.
pub trait SessionStore: Send + Sync {
    /// Current values, or empty defaults when nothing is stored
    fn get(&self) -> Result<Session>;

    /// Overwrite the provided fields
    fn set(&self, update: SessionUpdate) -> Result<()>;

    /// Remove every field at once
    fn clear(&self) -> Result<()>;
}

/// Shared handle passed to every component that needs the session
pub type SharedSessionStore = Arc<dyn SessionStore>;
