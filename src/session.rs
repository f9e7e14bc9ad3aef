use std::fs::{self, OpenOptions};
use std::io::{self, ErrorKind, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::AppError;
use crate::models::{AccountType, Role};

/// Cached profile of the signed-in account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInfo {
    pub name: String,
    #[serde(rename = "type")]
    pub account_type: AccountType,
    #[serde(default)]
    pub class_name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub role: Option<Role>,
}

impl UserInfo {
    pub fn is_class_rep(&self) -> bool {
        self.role == Some(Role::ClassRep)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: UserInfo,
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

    pub fn load(&self) -> Result<Option<Session>, AppError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let session = serde_json::from_str::<Session>(&raw)?;
        Ok(Some(session))
    }

    pub fn save(&self, session: &Session) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let body = serde_json::to_string_pretty(session)?;
        write_private(&self.path, &body)?;
        debug!("session saved to {}", self.path.display());
        Ok(())
    }

    /// Removes the cached session. Clearing an absent session is not an error.
    pub fn clear(&self) -> Result<(), AppError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// Loads the session for a dashboard of the given account type.
    ///
    /// A missing token or an account of another type points the caller at
    /// the login route for `account_type`.
    pub fn require(&self, account_type: AccountType) -> Result<Session, AppError> {
        let not_logged_in = AppError::NotLoggedIn(account_type.login_route());
        let session = self.load()?.ok_or(not_logged_in)?;
        if session.token.trim().is_empty() || session.user.account_type != account_type {
            return Err(AppError::NotLoggedIn(account_type.login_route()));
        }
        Ok(session)
    }
}

/// Writes the session so that only the owner can read the token.
fn write_private(path: &Path, body: &str) -> io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    let mut file = options.open(path)?;
    // mode only applies on creation
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.set_permissions(fs::Permissions::from_mode(0o600))?;
    }
    file.write_all(body.as_bytes())
}
