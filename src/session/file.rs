//! File-backed session store
//!
//! The file is a flat YAML map using the logical keys `ACCESS_TOKEN`,
//! `REFRESH_TOKEN`, and `GROUPS`, where `GROUPS` holds a JSON-encoded string
//! array. Writes go to a uniquely named sibling temp file which is then renamed
//! over the original, so a concurrent reader sees either the old or the new session.
//! Concurrent writers from separate processes are last-write-wins.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

use super::{Session, SessionStore, SessionUpdate};
use crate::error::{Result, SessionError};

#[derive(Debug, Default, Serialize, Deserialize)]
struct StoredSession {
    #[serde(rename = "ACCESS_TOKEN", skip_serializing_if = "Option::is_none")]
    access_token: Option<String>,

    #[serde(rename = "REFRESH_TOKEN", skip_serializing_if = "Option::is_none")]
    refresh_token: Option<String>,

    #[serde(rename = "GROUPS", skip_serializing_if = "Option::is_none")]
    groups: Option<String>,
}

impl StoredSession {
    fn into_session(self) -> Result<Session> {
        let groups = match self.groups {
            Some(raw) => serde_json::from_str::<Vec<String>>(&raw)
                .map_err(|e| SessionError::Groups(e.to_string()))?,
            None => Vec::new(),
        };
        Ok(Session {
            access_token: self.access_token,
            refresh_token: self.refresh_token,
            groups,
        })
    }

    fn from_session(session: &Session) -> Result<Self> {
        let groups = serde_json::to_string(&session.groups)?;
        Ok(Self {
            access_token: session.access_token.clone(),
            refresh_token: session.refresh_token.clone(),
            groups: Some(groups),
        })
    }
}

/// Session persisted to a YAML file (default `~/.c2c/session.yaml`)
#[derive(Debug)]
pub struct FileSessionStore {
    path: PathBuf,
    // Serializes read-modify-write within this process
    write_lock: Mutex<()>,
}

impl FileSessionStore {
    /// Default session path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(SessionError::NoHome)?;
        Ok(home.join(".c2c").join("session.yaml"))
    }

    /// Store at an optional override path, else the default location
    pub fn open_at(path: Option<&str>) -> Result<Self> {
        let path = match path {
            Some(p) => PathBuf::from(p),
            None => Self::default_path()?,
        };
        Ok(Self::new(path))
    }

    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<Session> {
        if !self.path.exists() {
            return Ok(Session::default());
        }
        let contents = std::fs::read_to_string(&self.path)
            .map_err(|e| SessionError::Read(format!("{}: {}", self.path.display(), e)))?;
        if contents.trim().is_empty() {
            return Ok(Session::default());
        }
        let stored: StoredSession = serde_yaml::from_str(&contents)
            .map_err(|e| SessionError::Read(format!("{}: {}", self.path.display(), e)))?;
        stored.into_session()
    }

    fn write(&self, session: &Session) -> Result<()> {
        let parent = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(parent)
            .map_err(|e| SessionError::Write(format!("create {}: {}", parent.display(), e)))?;

        let contents = serde_yaml::to_string(&StoredSession::from_session(session)?)
            .map_err(|e| SessionError::Write(e.to_string()))?;

        // Uniquely named per writer and created 0600 on unix
        let mut tmp = NamedTempFile::new_in(parent)
            .map_err(|e| SessionError::Write(format!("temp file in {}: {}", parent.display(), e)))?;
        tmp.write_all(contents.as_bytes())
            .and_then(|()| tmp.as_file().sync_all())
            .map_err(|e| SessionError::Write(format!("{}: {}", tmp.path().display(), e)))?;

        tmp.persist(&self.path)
            .map_err(|e| SessionError::Write(format!("{}: {}", self.path.display(), e.error)))?;
        Ok(())
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self) -> Result<Session> {
        self.read()
    }

    fn set(&self, update: SessionUpdate) -> Result<()> {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|e| SessionError::Write(format!("session lock poisoned: {e}")))?;
        let mut session = self.read()?;
        update.apply_to(&mut session);
        self.write(&session)?;
        log::debug!("Session written to {}", self.path.display());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|e| SessionError::Write(format!("session lock poisoned: {e}")))?;
        match std::fs::remove_file(&self.path) {
            Ok(()) => {
                log::debug!("Session cleared at {}", self.path.display());
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SessionError::Write(format!("{}: {}", self.path.display(), e)).into()),
        }
    }
}
