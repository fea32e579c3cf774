//! Persisted login session: the bearer token and the user it belongs to.

use std::fs;
use std::io::Write;
#[cfg(unix)]
use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, Result},
    types::{LoginResponse, SessionUser},
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: SessionUser,
}

impl Session {
    /// Build a session from a login reply. `None` when the backend issued no token.
    pub fn from_login(resp: &LoginResponse) -> Option<Self> {
        Some(Self {
            token: resp.token.clone()?,
            user: resp.user.clone()?,
        })
    }
}

/// `~/.adflow/session.json`
pub fn default_session_path() -> PathBuf {
    let home = dirs_next::home_dir().unwrap_or_else(|| PathBuf::from("."));
    home.join(".adflow").join("session.json")
}

pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<Option<Session>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(&self.path)?;
        let session = serde_json::from_str(&raw).map_err(|source| Error::CorruptSession {
            path: self.path.display().to_string(),
            source,
        })?;
        Ok(Some(session))
    }

    pub fn save(&self, session: &Session) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }
        let body = serde_json::to_string_pretty(session)?;
        let mut options = fs::OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        options.mode(0o600);
        let mut file = options.open(&self.path)?;
        // Tighten files left behind by older versions; `mode` only applies on create.
        #[cfg(unix)]
        file.set_permissions(fs::Permissions::from_mode(0o600))?;
        file.write_all(body.as_bytes())?;
        tracing::debug!(path = %self.path.display(), "session saved");
        Ok(())
    }

    /// Remove the stored session. Returns whether one existed.
    pub fn clear(&self) -> Result<bool> {
        if !self.path.exists() {
            return Ok(false);
        }
        fs::remove_file(&self.path)?;
        Ok(true)
    }

    /// Guard for commands that need a logged-in user.
    pub fn require(&self) -> Result<Session> {
        self.load()?.ok_or(Error::NotAuthenticated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> SessionUser {
        SessionUser {
            id: "7".into(),
            email: "jane.doe@example.com".into(),
            name: "jane.doe".into(),
            public_key: "GABC".into(),
        }
    }

    #[test]
    fn save_load_clear() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(dir.path().join("nested").join("session.json"));
        assert!(store.load().unwrap().is_none());

        let session = Session {
            token: "tok".into(),
            user: user(),
        };
        store.save(&session).unwrap();
        assert_eq!(store.require().unwrap(), session);

        assert!(store.clear().unwrap());
        assert!(!store.clear().unwrap());
    }

    #[cfg(unix)]
    #[test]
    fn saved_session_is_owner_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "{}").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).unwrap();

        let store = SessionStore::new(&path);
        store
            .save(&Session {
                token: "tok".into(),
                user: user(),
            })
            .unwrap();
        let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o600);
    }

    #[test]
    fn corrupt_session_file_is_reported_as_such() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "not json").unwrap();
        let err = SessionStore::new(&path).load().unwrap_err();
        assert!(matches!(err, Error::CorruptSession { .. }), "{err:?}");
        let msg = err.to_string();
        assert!(msg.starts_with("session file"), "{msg}");
        assert!(!msg.contains("response body"), "{msg}");
    }

    #[test]
    fn require_without_session_is_not_authenticated() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(dir.path().join("session.json"));
        assert!(matches!(store.require(), Err(Error::NotAuthenticated)));
    }

    #[test]
    fn from_login_needs_token_and_user() {
        let mut resp = LoginResponse {
            message: None,
            token: Some("tok".into()),
            user: None,
            extra: Default::default(),
        };
        assert!(Session::from_login(&resp).is_none());
        resp.user = Some(user());
        assert_eq!(Session::from_login(&resp).unwrap().token, "tok");
    }
}
