use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::models::{HomeworkStatus, Role};

/// Decodes a list response one record at a time. Records that do not fit
/// the model are logged and left out instead of failing the whole list.
pub fn decode_records<T: DeserializeOwned>(what: &str, values: Vec<Value>) -> Vec<T> {
    values
        .into_iter()
        .filter_map(|value| {
            let id = value.get("id").cloned().unwrap_or(Value::Null);
            match serde_json::from_value::<T>(value) {
                Ok(record) => Some(record),
                Err(e) => {
                    warn!("skipping {} record {}: {}", what, id, e);
                    None
                }
            }
        })
        .collect()
}

/// Error payload returned by the backend on non-success responses.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ErrorBody {
    pub fn into_message(self) -> Option<String> {
        match self.detail? {
            serde_json::Value::String(message) => Some(message),
            serde_json::Value::Null => None,
            other => Some(other.to_string()),
        }
    }
}

/// Create payload: the form fields plus the class they belong to.
#[derive(Debug, Serialize)]
pub struct ClassScoped<'a, T: Serialize> {
    #[serde(flatten)]
    pub form: &'a T,
    pub class_name: &'a str,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StatusUpdateRequest {
    pub status: HomeworkStatus,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RoleUpdateRequest {
    pub role: Role,
}
