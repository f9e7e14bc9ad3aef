use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notice {
    pub id: String,
    pub title: String,
    pub message: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub date_posted: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NoticeForm {
    pub title: String,
    pub message: String,
}
