use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error {status}: {}", .detail.as_deref().unwrap_or("no detail"))]
    Api {
        status: StatusCode,
        detail: Option<String>,
    },

    #[error("Unauthorized: {}", .0.as_deref().unwrap_or("no detail"))]
    Unauthorized(Option<String>),

    #[error("Not found: {}", .0.as_deref().unwrap_or("no detail"))]
    NotFound(Option<String>),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not logged in, sign in at {0}")]
    NotLoggedIn(&'static str),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    /// Message reported by the backend, if the failure carried one.
    pub fn detail(&self) -> Option<&str> {
        match self {
            AppError::Api { detail, .. }
            | AppError::Unauthorized(detail)
            | AppError::NotFound(detail) => detail.as_deref(),
            _ => None,
        }
    }

    /// The backend detail when present, otherwise the given fallback.
    pub fn detail_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.detail().unwrap_or(fallback)
    }
}
