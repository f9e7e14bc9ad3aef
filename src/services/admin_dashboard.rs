use std::sync::Arc;

use tracing::{info, warn};

use crate::api::SchoolApi;
use crate::error::AppError;
use crate::models::{NewStudentRequest, NewTimetableEntryRequest, Role, Student, TimetableEntry};
use crate::services::notify::Notifier;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdminOverview {
    pub total_students: usize,
    pub class_reps: usize,
    pub timetable_entries: usize,
}

/// Administrator view over student accounts and the school timetable.
pub struct AdminDashboard {
    api: Arc<dyn SchoolApi>,
    notifier: Arc<dyn Notifier>,
    students: Vec<Student>,
    timetable: Vec<TimetableEntry>,
}

impl AdminDashboard {
    pub fn new(api: Arc<dyn SchoolApi>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            api,
            notifier,
            students: Vec::new(),
            timetable: Vec::new(),
        }
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn timetable(&self) -> &[TimetableEntry] {
        &self.timetable
    }

    pub fn overview(&self) -> AdminOverview {
        AdminOverview {
            total_students: self.students.len(),
            class_reps: self
                .students
                .iter()
                .filter(|s| s.role == Role::ClassRep)
                .count(),
            timetable_entries: self.timetable.len(),
        }
    }

    pub async fn load_all(&mut self) {
        let api = self.api.clone();
        let (students, timetable) = tokio::join!(api.list_students(), api.list_all_timetable());

        if let Some(students) = self.settle(students, "students") {
            self.students = students;
        }
        if let Some(timetable) = self.settle(timetable, "timetable") {
            self.timetable = timetable;
        }
    }

    pub async fn refresh_students(&mut self) {
        let result = self.api.list_students().await;
        if let Some(students) = self.settle(result, "students") {
            self.students = students;
        }
    }

    pub async fn refresh_timetable(&mut self) {
        let result = self.api.list_all_timetable().await;
        if let Some(timetable) = self.settle(result, "timetable") {
            self.timetable = timetable;
        }
    }

    pub async fn create_student(&mut self, req: NewStudentRequest) -> bool {
        match self.api.create_student(&req).await {
            Ok(()) => {
                info!("created student {} in class {}", req.username, req.class_name);
                self.notifier.success("Student created successfully");
                self.refresh_students().await;
                true
            }
            Err(e) => self.fail(&e, e.detail_or("Failed to create student")),
        }
    }

    pub async fn update_role(&mut self, student_id: &str, role: Role) -> bool {
        match self.api.update_student_role(student_id, role).await {
            Ok(()) => {
                info!("student {} is now {}", student_id, role);
                self.notifier.success("Role updated successfully");
                self.refresh_students().await;
                true
            }
            Err(e) => self.fail(&e, "Failed to update role"),
        }
    }

    pub async fn create_timetable_entry(&mut self, req: NewTimetableEntryRequest) -> bool {
        match self.api.create_timetable_entry(&req).await {
            Ok(()) => {
                info!(
                    "class {} has {} on {} period {}",
                    req.class_name, req.subject, req.day, req.period
                );
                self.notifier.success("Timetable entry created successfully");
                self.refresh_timetable().await;
                true
            }
            Err(e) => self.fail(&e, e.detail_or("Failed to create timetable entry")),
        }
    }

    pub async fn delete_timetable_entry(&mut self, id: &str) -> bool {
        match self.api.delete_timetable_entry(id).await {
            Ok(()) => {
                self.notifier.success("Timetable entry deleted");
                self.refresh_timetable().await;
                true
            }
            Err(e) => self.fail(&e, "Failed to delete timetable entry"),
        }
    }

    fn settle<T>(&self, result: Result<T, AppError>, what: &str) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("failed to fetch {}: {}", what, e);
                self.notifier.error(&format!("Failed to fetch {}", what));
                None
            }
        }
    }

    fn fail(&self, error: &AppError, message: &str) -> bool {
        warn!("{}: {}", message, error);
        self.notifier.error(message);
        false
    }
}
