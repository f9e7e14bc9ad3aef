use std::sync::Arc;

use crate::api::{HttpSchoolApi, SchoolApi};
use crate::config::ClientConfig;
use crate::error::AppError;
use crate::services::{ConsoleNotifier, Notifier};
use crate::session::Session;

/// Shared handles a command needs once a session has been loaded.
#[derive(Clone)]
pub struct AppState {
    pub api: Arc<dyn SchoolApi>,
    pub notifier: Arc<dyn Notifier>,
}

impl AppState {
    pub fn for_session(config: &ClientConfig, session: &Session) -> Result<Self, AppError> {
        let api = HttpSchoolApi::new(config, session.token.clone())?;
        Ok(Self {
            api: Arc::new(api),
            notifier: Arc::new(ConsoleNotifier),
        })
    }
}
