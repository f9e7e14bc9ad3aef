use std::sync::Arc;

use tracing::{info, warn};

use crate::api::SchoolApi;
use crate::error::AppError;
use crate::models::{
    Exam, ExamEdit, ExamForm, Homework, HomeworkEdit, HomeworkForm, Notice, NoticeForm, Progress,
    TimetableEntry,
};
use crate::services::confirm::Confirm;
use crate::services::notify::Notifier;
use crate::services::permissions::{Capabilities, ManageAction};
use crate::services::{reminders, urgency};
use crate::session::UserInfo;

/// Transient copies of the class data currently shown to the student.
#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    pub homework: Vec<Homework>,
    pub exams: Vec<Exam>,
    pub notices: Vec<Notice>,
    pub progress: Option<Progress>,
    pub timetable: Vec<TimetableEntry>,
}

/// Student-facing view logic.
///
/// Every action reports its outcome through the [`Notifier`] and returns
/// whether it was applied. Failures leave the view state as it was and are
/// never retried.
pub struct StudentDashboard {
    api: Arc<dyn SchoolApi>,
    notifier: Arc<dyn Notifier>,
    user: UserInfo,
    capabilities: Capabilities,
    state: DashboardState,
}

impl StudentDashboard {
    pub fn new(api: Arc<dyn SchoolApi>, notifier: Arc<dyn Notifier>, user: UserInfo) -> Self {
        let capabilities = Capabilities::for_user(&user);
        Self {
            api,
            notifier,
            user,
            capabilities,
            state: DashboardState::default(),
        }
    }

    pub fn user(&self) -> &UserInfo {
        &self.user
    }

    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    pub fn upcoming_exams(&self) -> Vec<&Exam> {
        urgency::upcoming_exams(&self.state.exams)
    }

    pub fn pending_reminders(&self) -> Vec<&Homework> {
        reminders::pending_reminders(&self.state.homework)
    }

    /// Fetches every collection concurrently and waits for all of them.
    pub async fn load_all(&mut self) {
        let api = self.api.clone();
        let (homework, exams, notices, progress, timetable) = tokio::join!(
            api.list_homework(),
            api.list_exams(),
            api.list_notices(),
            api.progress(),
            api.class_timetable(),
        );

        if let Some(homework) = self.settle(homework, "homework") {
            self.state.homework = homework;
        }
        if let Some(exams) = self.settle(exams, "exams") {
            self.state.exams = exams;
        }
        if let Some(notices) = self.settle(notices, "notices") {
            self.state.notices = notices;
        }
        if let Some(progress) = self.settle(progress, "progress") {
            self.state.progress = Some(progress);
        }
        if let Some(timetable) = self.settle(timetable, "timetable") {
            self.state.timetable = timetable;
        }
    }

    pub async fn refresh_homework(&mut self) {
        let result = self.api.list_homework().await;
        if let Some(homework) = self.settle(result, "homework") {
            self.state.homework = homework;
        }
    }

    pub async fn refresh_exams(&mut self) {
        let result = self.api.list_exams().await;
        if let Some(exams) = self.settle(result, "exams") {
            self.state.exams = exams;
        }
    }

    pub async fn refresh_notices(&mut self) {
        let result = self.api.list_notices().await;
        if let Some(notices) = self.settle(result, "notices") {
            self.state.notices = notices;
        }
    }

    pub async fn refresh_progress(&mut self) {
        let result = self.api.progress().await;
        if let Some(progress) = self.settle(result, "progress") {
            self.state.progress = Some(progress);
        }
    }

    pub async fn refresh_timetable(&mut self) {
        let result = self.api.class_timetable().await;
        if let Some(timetable) = self.settle(result, "timetable") {
            self.state.timetable = timetable;
        }
    }

    pub async fn create_homework(&mut self, form: HomeworkForm) -> bool {
        if !self.permit(ManageAction::CreateHomework) {
            return false;
        }
        let Some(class_name) = self.class_name() else {
            return false;
        };

        match self.api.create_homework(&form, &class_name).await {
            Ok(()) => {
                info!("created homework for {} in class {}", form.subject, class_name);
                self.notifier.success("Homework created successfully");
                self.refresh_homework().await;
                self.refresh_progress().await;
                true
            }
            Err(e) => self.fail(&e, e.detail_or("Failed to create homework")),
        }
    }

    pub async fn update_homework(&mut self, id: &str, edit: HomeworkEdit) -> bool {
        if !self.permit(ManageAction::EditHomework) {
            return false;
        }
        let Some(current) = self.find_homework(id).await else {
            return false;
        };

        let form = edit.apply(current.to_form());
        match self.api.update_homework(id, &form).await {
            Ok(()) => {
                self.notifier.success("Homework updated successfully");
                self.refresh_homework().await;
                true
            }
            Err(e) => self.fail(&e, "Failed to update homework"),
        }
    }

    pub async fn delete_homework(&mut self, id: &str, confirm: &dyn Confirm) -> bool {
        if !self.permit(ManageAction::DeleteHomework) {
            return false;
        }
        if !confirm.confirm("Are you sure you want to delete this homework?") {
            info!("deletion of homework {} cancelled", id);
            return false;
        }

        match self.api.delete_homework(id).await {
            Ok(()) => {
                self.notifier.success("Homework deleted successfully");
                self.refresh_homework().await;
                self.refresh_progress().await;
                true
            }
            Err(e) => self.fail(&e, "Failed to delete homework"),
        }
    }

    /// Flips a homework between pending and completed. Open to every student.
    pub async fn toggle_homework_status(&mut self, id: &str) -> bool {
        let Some(current) = self.find_homework(id).await else {
            return false;
        };

        let status = current.status.toggled();
        match self.api.set_homework_status(id, status).await {
            Ok(()) => {
                self.notifier.success(&format!("Homework marked as {}", status));
                self.refresh_homework().await;
                self.refresh_progress().await;
                true
            }
            Err(e) => self.fail(&e, "Failed to update homework status"),
        }
    }

    pub async fn create_exam(&mut self, form: ExamForm) -> bool {
        if !self.permit(ManageAction::CreateExam) {
            return false;
        }
        let Some(class_name) = self.class_name() else {
            return false;
        };

        match self.api.create_exam(&form, &class_name).await {
            Ok(()) => {
                info!("created {} exam for {} in class {}", form.exam_type, form.subject, class_name);
                self.notifier.success("Exam created successfully");
                self.refresh_exams().await;
                true
            }
            Err(e) => self.fail(&e, e.detail_or("Failed to create exam")),
        }
    }

    pub async fn update_exam(&mut self, id: &str, edit: ExamEdit) -> bool {
        if !self.permit(ManageAction::EditExam) {
            return false;
        }
        let Some(current) = self.find_exam(id).await else {
            return false;
        };

        let form = edit.apply(current.to_form());
        match self.api.update_exam(id, &form).await {
            Ok(()) => {
                self.notifier.success("Exam updated successfully");
                self.refresh_exams().await;
                true
            }
            Err(e) => self.fail(&e, "Failed to update exam"),
        }
    }

    pub async fn delete_exam(&mut self, id: &str, confirm: &dyn Confirm) -> bool {
        if !self.permit(ManageAction::DeleteExam) {
            return false;
        }
        if !confirm.confirm("Are you sure you want to delete this exam?") {
            info!("deletion of exam {} cancelled", id);
            return false;
        }

        match self.api.delete_exam(id).await {
            Ok(()) => {
                self.notifier.success("Exam deleted successfully");
                self.refresh_exams().await;
                true
            }
            Err(e) => self.fail(&e, "Failed to delete exam"),
        }
    }

    pub async fn create_notice(&mut self, form: NoticeForm) -> bool {
        if !self.permit(ManageAction::PostNotice) {
            return false;
        }
        let Some(class_name) = self.class_name() else {
            return false;
        };

        match self.api.create_notice(&form, &class_name).await {
            Ok(()) => {
                self.notifier.success("Notice posted successfully");
                self.refresh_notices().await;
                true
            }
            Err(e) => self.fail(&e, e.detail_or("Failed to post notice")),
        }
    }

    pub async fn delete_notice(&mut self, id: &str, confirm: &dyn Confirm) -> bool {
        if !self.permit(ManageAction::DeleteNotice) {
            return false;
        }
        if !confirm.confirm("Are you sure you want to delete this notice?") {
            info!("deletion of notice {} cancelled", id);
            return false;
        }

        match self.api.delete_notice(id).await {
            Ok(()) => {
                self.notifier.success("Notice deleted successfully");
                self.refresh_notices().await;
                true
            }
            Err(e) => self.fail(&e, "Failed to delete notice"),
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

    fn permit(&self, action: ManageAction) -> bool {
        match self.capabilities.ensure(action) {
            Ok(()) => true,
            Err(e) => {
                self.notifier.error(&e.to_string());
                false
            }
        }
    }

    fn class_name(&self) -> Option<String> {
        let class_name = self.user.class_name.clone().filter(|c| !c.is_empty());
        if class_name.is_none() {
            self.notifier.error("Your session has no class assigned");
        }
        class_name
    }

    async fn find_homework(&mut self, id: &str) -> Option<Homework> {
        if !self.state.homework.iter().any(|hw| hw.id == id) {
            self.refresh_homework().await;
        }
        let found = self.state.homework.iter().find(|hw| hw.id == id).cloned();
        if found.is_none() {
            self.notifier.error("Homework not found");
        }
        found
    }

    async fn find_exam(&mut self, id: &str) -> Option<Exam> {
        if !self.state.exams.iter().any(|exam| exam.id == id) {
            self.refresh_exams().await;
        }
        let found = self.state.exams.iter().find(|exam| exam.id == id).cloned();
        if found.is_none() {
            self.notifier.error("Exam not found");
        }
        found
    }

    fn fail(&self, error: &AppError, message: &str) -> bool {
        warn!("{}: {}", message, error);
        self.notifier.error(message);
        false
    }
}
