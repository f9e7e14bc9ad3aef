use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HomeworkStatus {
    #[default]
    Pending,
    Completed,
}

impl HomeworkStatus {
    /// The only other status; homework is either pending or completed.
    pub fn toggled(self) -> Self {
        match self {
            HomeworkStatus::Pending => HomeworkStatus::Completed,
            HomeworkStatus::Completed => HomeworkStatus::Pending,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HomeworkStatus::Pending => "pending",
            HomeworkStatus::Completed => "completed",
        }
    }
}

impl fmt::Display for HomeworkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Homework {
    pub id: String,
    pub subject: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub description: String,
    pub due_date: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub status: HomeworkStatus,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub reminder: bool,
}

impl Homework {
    /// Pending homework whose subject is taught tomorrow.
    pub fn is_active_reminder(&self) -> bool {
        self.reminder && self.status == HomeworkStatus::Pending
    }

    pub fn to_form(&self) -> HomeworkForm {
        HomeworkForm {
            subject: self.subject.clone(),
            description: self.description.clone(),
            due_date: self.due_date.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HomeworkForm {
    pub subject: String,
    pub description: String,
    pub due_date: String,
}

/// Changes to an existing homework; unset fields keep their current value.
#[derive(Debug, Clone, Default)]
pub struct HomeworkEdit {
    pub subject: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<String>,
}

impl HomeworkEdit {
    pub fn apply(self, current: HomeworkForm) -> HomeworkForm {
        HomeworkForm {
            subject: self.subject.unwrap_or(current.subject),
            description: self.description.unwrap_or(current.description),
            due_date: self.due_date.unwrap_or(current.due_date),
        }
    }
}
