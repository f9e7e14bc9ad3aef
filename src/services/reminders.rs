use crate::models::Homework;

/// Pending homework flagged by the backend because its subject is taught tomorrow.
pub fn pending_reminders(homework: &[Homework]) -> Vec<&Homework> {
    homework.iter().filter(|hw| hw.is_active_reminder()).collect()
}
