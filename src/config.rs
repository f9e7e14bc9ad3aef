use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::AppError;

const DEFAULT_TIMEOUT_SECS: u64 = 15;
const SESSION_DIR: &str = ".classdesk";
const SESSION_FILE: &str = "session.json";

#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub backend_url: String,
    pub timeout: Duration,
    pub session_file: PathBuf,
}

impl ClientConfig {
    pub fn new(backend_url: impl Into<String>) -> Self {
        Self {
            backend_url: backend_url.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            session_file: default_session_file(),
        }
    }

    pub fn new_from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any variable source, `new_from_env` uses the process env.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let backend_url = lookup("BACKEND_URL")
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| AppError::Config("BACKEND_URL is not set".to_string()))?;

        let timeout_secs = match lookup("CLASSDESK_TIMEOUT_SECS") {
            Some(raw) => raw.trim().parse::<u64>().map_err(|_| {
                AppError::Config(format!("CLASSDESK_TIMEOUT_SECS is not a number: {}", raw))
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        let session_file = lookup("CLASSDESK_SESSION_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(default_session_file);

        Ok(Self {
            backend_url,
            timeout: Duration::from_secs(timeout_secs),
            session_file,
        })
    }

    /// Base of every endpoint: `${BACKEND_URL}/api`.
    pub fn api_base(&self) -> String {
        format!("{}/api", self.backend_url.trim_end_matches('/'))
    }
}

/// Session location; needed even before a backend is configured.
pub fn session_file_from_env() -> PathBuf {
    env::var("CLASSDESK_SESSION_FILE")
        .map(PathBuf::from)
        .unwrap_or_else(|_| default_session_file())
}

fn default_session_file() -> PathBuf {
    let home = env::var_os("HOME").map(PathBuf::from).unwrap_or_else(|| PathBuf::from("."));
    home.join(SESSION_DIR).join(SESSION_FILE)
}
