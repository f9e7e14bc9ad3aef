use serde::{Deserialize, Serialize};

/// Homework completion summary for the signed-in student.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Progress {
    pub overall_progress: f64,
    pub completed_homework: u32,
    pub total_homework: u32,
    #[serde(default)]
    pub subject_progress: Vec<SubjectProgress>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubjectProgress {
    pub subject: String,
    pub completed: u32,
    pub total: u32,
    pub progress: f64,
}
