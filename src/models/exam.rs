use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ExamType {
    #[default]
    Midterm,
    Final,
    Quiz,
    Test,
}

impl ExamType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExamType::Midterm => "Midterm",
            ExamType::Final => "Final",
            ExamType::Quiz => "Quiz",
            ExamType::Test => "Test",
        }
    }
}

impl fmt::Display for ExamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExamType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [ExamType::Midterm, ExamType::Final, ExamType::Quiz, ExamType::Test]
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| AppError::BadRequest(format!("Unknown exam type: {}", s)))
    }
}

/// Countdown band assigned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum UrgencyColor {
    Red,
    Orange,
    Yellow,
    Gray,
    #[default]
    Unspecified,
    Other(String),
}

impl From<String> for UrgencyColor {
    fn from(value: String) -> Self {
        match value.as_str() {
            "red" => UrgencyColor::Red,
            "orange" => UrgencyColor::Orange,
            "yellow" => UrgencyColor::Yellow,
            "gray" => UrgencyColor::Gray,
            "" => UrgencyColor::Unspecified,
            _ => UrgencyColor::Other(value),
        }
    }
}

impl From<UrgencyColor> for String {
    fn from(color: UrgencyColor) -> Self {
        match color {
            UrgencyColor::Red => "red".to_string(),
            UrgencyColor::Orange => "orange".to_string(),
            UrgencyColor::Yellow => "yellow".to_string(),
            UrgencyColor::Gray => "gray".to_string(),
            UrgencyColor::Unspecified => String::new(),
            UrgencyColor::Other(value) => value,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exam {
    pub id: String,
    pub subject: String,
    pub date: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub syllabus: String,
    #[serde(rename = "type")]
    pub exam_type: ExamType,
    pub days_remaining: i64,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub urgency_color: UrgencyColor,
}

impl Exam {
    pub fn to_form(&self) -> ExamForm {
        ExamForm {
            subject: self.subject.clone(),
            date: self.date.clone(),
            syllabus: self.syllabus.clone(),
            exam_type: self.exam_type,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExamForm {
    pub subject: String,
    pub date: String,
    pub syllabus: String,
    #[serde(rename = "type", default)]
    pub exam_type: ExamType,
}

/// Changes to an existing exam; unset fields keep their current value.
#[derive(Debug, Clone, Default)]
pub struct ExamEdit {
    pub subject: Option<String>,
    pub date: Option<String>,
    pub syllabus: Option<String>,
    pub exam_type: Option<ExamType>,
}

impl ExamEdit {
    pub fn apply(self, current: ExamForm) -> ExamForm {
        ExamForm {
            subject: self.subject.unwrap_or(current.subject),
            date: self.date.unwrap_or(current.date),
            syllabus: self.syllabus.unwrap_or(current.syllabus),
            exam_type: self.exam_type.unwrap_or(current.exam_type),
        }
    }
}
