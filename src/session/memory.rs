use std::sync::Mutex;

use super::{Session, SessionStore, SessionUpdate};
use crate::error::{Result, SessionError};

/// In-process session store
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    inner: Mutex<Session>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with an existing session
    pub fn with_session(session: Session) -> Self {
        Self {
            inner: Mutex::new(session),
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Session>> {
        self.inner
            .lock()
            .map_err(|e| SessionError::Read(format!("session lock poisoned: {e}")).into())
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self) -> Result<Session> {
        Ok(self.lock()?.clone())
    }

    fn set(&self, update: SessionUpdate) -> Result<()> {
        update.apply_to(&mut *self.lock()?);
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self.lock()? = Session::default();
        Ok(())
    }
}
