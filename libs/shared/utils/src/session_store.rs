use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use shared_config::AppConfig;
use shared_models::session::SessionUser;

/// What the login flow persists on disk: the opaque bearer token and the
/// logged-in user. The browser client kept the same pair in localStorage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredSession {
    pub token: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<SessionUser>,
}

#[derive(Error, Debug)]
pub enum SessionStoreError {
    #[error("No session file at {0}")]
    Missing(String),

    #[error("Failed to read session file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed session file: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Loads and saves the persisted session. Reads happen once at startup; the
/// token is handed to the API client and never re-read per request.
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            path: PathBuf::from(&config.session_file),
        }
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn load(&self) -> Result<StoredSession, SessionStoreError> {
        if !self.path.exists() {
            return Err(SessionStoreError::Missing(self.path.display().to_string()));
        }

        let raw = fs::read_to_string(&self.path)?;
        let session: StoredSession = serde_json::from_str(&raw)?;
        debug!("Loaded session from {}", self.path.display());

        Ok(session)
    }

    pub fn save(&self, session: &StoredSession) -> Result<(), SessionStoreError> {
        let raw = serde_json::to_string_pretty(session)?;
        fs::write(&self.path, raw)?;
        debug!("Saved session to {}", self.path.display());

        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
