#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::{Path, Request, State};
use axum::http::{HeaderMap, StatusCode};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post, put};
use axum::{Json, Router};
use chrono::{Local, NaiveDate};
use serde_json::{Value, json};
use uuid::Uuid;

use classdesk::api::HttpSchoolApi;
use classdesk::api::dto::{RoleUpdateRequest, StatusUpdateRequest};
use classdesk::config::ClientConfig;
use classdesk::models::{
    AccountType, Exam, ExamForm, Homework, HomeworkForm, HomeworkStatus, NewStudentRequest,
    NewTimetableEntryRequest, Notice, NoticeForm, Progress, Role, Student, SubjectProgress,
    TimetableEntry, UrgencyColor,
};
use classdesk::services::{Confirm, Notifier};
use classdesk::session::UserInfo;

pub const TOKEN: &str = "test-token";

/// In-memory stand-in for the school backend.
#[derive(Default)]
pub struct MockData {
    pub students: Vec<Student>,
    pub timetable: Vec<TimetableEntry>,
    pub homework: Vec<Homework>,
    pub exams: Vec<Exam>,
    pub notices: Vec<Notice>,
    /// `METHOD /path` of every request that reached the backend.
    pub requests: Vec<String>,
    /// JSON bodies of create/update requests, in arrival order.
    pub bodies: Vec<Value>,
    /// Paths answered with a 500.
    pub failing: HashSet<String>,
    /// GET paths answered with this JSON instead of the typed records.
    pub raw: HashMap<String, Value>,
}

impl MockData {
    pub fn count(&self, method_and_path: &str) -> usize {
        self.requests.iter().filter(|r| r.as_str() == method_and_path).count()
    }

    pub fn count_method(&self, method: &str) -> usize {
        self.requests
            .iter()
            .filter(|r| r.starts_with(&format!("{} ", method)))
            .count()
    }
}

type Shared = Arc<Mutex<MockData>>;

pub struct MockBackend {
    pub base_url: String,
    pub data: Shared,
}

impl MockBackend {
    pub fn api(&self) -> HttpSchoolApi {
        self.api_with_token(TOKEN)
    }

    pub fn api_with_token(&self, token: &str) -> HttpSchoolApi {
        HttpSchoolApi::new(&ClientConfig::new(self.base_url.clone()), token).unwrap()
    }

    pub fn fail(&self, path: &str) {
        self.data.lock().unwrap().failing.insert(path.to_string());
    }
}

pub async fn spawn_backend(data: MockData) -> MockBackend {
    let shared: Shared = Arc::new(Mutex::new(data));
    let app = router(shared.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    MockBackend {
        base_url: format!("http://{}", addr),
        data: shared,
    }
}

fn router(shared: Shared) -> Router {
    Router::new()
        .route("/api/admin/students", get(list_students).post(create_student))
        .route("/api/admin/students/{id}/role", put(update_role))
        .route("/api/admin/timetable", get(list_timetable).post(create_timetable_entry))
        .route("/api/admin/timetable/{id}", axum::routing::delete(delete_timetable_entry))
        .route("/api/timetable", get(list_timetable))
        .route("/api/homework", get(list_homework).post(create_homework))
        .route("/api/homework/{id}", put(update_homework).delete(delete_homework))
        .route("/api/homework/{id}/status", post(set_homework_status))
        .route("/api/exams", get(list_exams).post(create_exam))
        .route("/api/exams/{id}", put(update_exam).delete(delete_exam))
        .route("/api/notices", get(list_notices).post(create_notice))
        .route("/api/notices/{id}", axum::routing::delete(delete_notice))
        .route("/api/progress", get(progress))
        .layer(middleware::from_fn_with_state(shared.clone(), gatekeeper))
        .with_state(shared)
}

async fn gatekeeper(State(shared): State<Shared>, req: Request, next: Next) -> Response {
    let path = req.uri().path().to_string();
    let entry = format!("{} {}", req.method(), path);
    let (failing, raw) = {
        let mut data = shared.lock().unwrap();
        data.requests.push(entry);
        let raw = if req.method() == axum::http::Method::GET {
            data.raw.get(&path).cloned()
        } else {
            None
        };
        (data.failing.contains(&path), raw)
    };

    if !authorized(req.headers()) {
        return detail(StatusCode::UNAUTHORIZED, "Invalid token");
    }
    if failing {
        return detail(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error");
    }
    if let Some(body) = raw {
        return Json(body).into_response();
    }
    next.run(req).await
}

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(|v| v == format!("Bearer {}", TOKEN))
        .unwrap_or(false)
}

fn detail(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "detail": message }))).into_response()
}

fn not_found() -> Response {
    detail(StatusCode::NOT_FOUND, "Not found")
}

async fn list_students(State(shared): State<Shared>) -> Json<Vec<Student>> {
    Json(shared.lock().unwrap().students.clone())
}

async fn create_student(State(shared): State<Shared>, Json(body): Json<Value>) -> Response {
    let mut data = shared.lock().unwrap();
    data.bodies.push(body.clone());
    let req: NewStudentRequest = match serde_json::from_value(body) {
        Ok(req) => req,
        Err(e) => return detail(StatusCode::UNPROCESSABLE_ENTITY, &e.to_string()),
    };
    if data.students.iter().any(|s| s.username == req.username) {
        return detail(StatusCode::BAD_REQUEST, "Username already exists");
    }
    let student = Student {
        id: Uuid::new_v4().to_string(),
        name: req.name,
        class_name: req.class_name,
        username: req.username,
        role: req.role,
    };
    data.students.push(student.clone());
    Json(student).into_response()
}

async fn update_role(
    State(shared): State<Shared>,
    Path(id): Path<String>,
    Json(req): Json<RoleUpdateRequest>,
) -> Response {
    let mut data = shared.lock().unwrap();
    match data.students.iter_mut().find(|s| s.id == id) {
        Some(student) => {
            student.role = req.role;
            Json(json!({ "message": "Role updated" })).into_response()
        }
        None => not_found(),
    }
}

async fn list_timetable(State(shared): State<Shared>) -> Json<Vec<TimetableEntry>> {
    Json(shared.lock().unwrap().timetable.clone())
}

async fn create_timetable_entry(State(shared): State<Shared>, Json(body): Json<Value>) -> Response {
    let mut data = shared.lock().unwrap();
    data.bodies.push(body.clone());
    let req: NewTimetableEntryRequest = match serde_json::from_value(body) {
        Ok(req) => req,
        Err(e) => return detail(StatusCode::UNPROCESSABLE_ENTITY, &e.to_string()),
    };
    let taken = data
        .timetable
        .iter()
        .any(|t| t.class_name == req.class_name && t.day == req.day && t.period == req.period);
    if taken {
        return detail(StatusCode::BAD_REQUEST, "Timetable entry already exists for this slot");
    }
    let entry = TimetableEntry {
        id: Uuid::new_v4().to_string(),
        class_name: req.class_name,
        day: req.day,
        period: req.period,
        subject: req.subject,
    };
    data.timetable.push(entry.clone());
    Json(entry).into_response()
}

async fn delete_timetable_entry(State(shared): State<Shared>, Path(id): Path<String>) -> Response {
    let mut data = shared.lock().unwrap();
    let before = data.timetable.len();
    data.timetable.retain(|t| t.id != id);
    if data.timetable.len() == before {
        return not_found();
    }
    StatusCode::NO_CONTENT.into_response()
}

async fn list_homework(State(shared): State<Shared>) -> Json<Vec<Homework>> {
    Json(shared.lock().unwrap().homework.clone())
}

async fn create_homework(State(shared): State<Shared>, Json(body): Json<Value>) -> Response {
    let mut data = shared.lock().unwrap();
    data.bodies.push(body.clone());
    let form: HomeworkForm = match serde_json::from_value(body) {
        Ok(form) => form,
        Err(e) => return detail(StatusCode::UNPROCESSABLE_ENTITY, &e.to_string()),
    };
    let hw = Homework {
        id: Uuid::new_v4().to_string(),
        subject: form.subject,
        description: form.description,
        due_date: form.due_date,
        status: HomeworkStatus::Pending,
        reminder: false,
    };
    data.homework.push(hw.clone());
    Json(hw).into_response()
}

async fn update_homework(
    State(shared): State<Shared>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    let mut data = shared.lock().unwrap();
    data.bodies.push(body.clone());
    let form: HomeworkForm = match serde_json::from_value(body) {
        Ok(form) => form,
        Err(e) => return detail(StatusCode::UNPROCESSABLE_ENTITY, &e.to_string()),
    };
    match data.homework.iter_mut().find(|h| h.id == id) {
        Some(hw) => {
            hw.subject = form.subject;
            hw.description = form.description;
            hw.due_date = form.due_date;
            Json(hw.clone()).into_response()
        }
        None => not_found(),
    }
}

async fn delete_homework(State(shared): State<Shared>, Path(id): Path<String>) -> Response {
    let mut data = shared.lock().unwrap();
    let before = data.homework.len();
    data.homework.retain(|h| h.id != id);
    if data.homework.len() == before {
        return not_found();
    }
    Json(json!({ "message": "Homework deleted" })).into_response()
}

async fn set_homework_status(
    State(shared): State<Shared>,
    Path(id): Path<String>,
    Json(req): Json<StatusUpdateRequest>,
) -> Response {
    let mut data = shared.lock().unwrap();
    data.bodies.push(json!({ "status": req.status }));
    match data.homework.iter_mut().find(|h| h.id == id) {
        Some(hw) => {
            hw.status = req.status;
            Json(json!({ "message": "Status updated" })).into_response()
        }
        None => not_found(),
    }
}

async fn list_exams(State(shared): State<Shared>) -> Json<Vec<Exam>> {
    Json(shared.lock().unwrap().exams.clone())
}

async fn create_exam(State(shared): State<Shared>, Json(body): Json<Value>) -> Response {
    let mut data = shared.lock().unwrap();
    data.bodies.push(body.clone());
    let form: ExamForm = match serde_json::from_value(body) {
        Ok(form) => form,
        Err(e) => return detail(StatusCode::UNPROCESSABLE_ENTITY, &e.to_string()),
    };
    if data.exams.iter().any(|e| e.subject == form.subject && e.date == form.date) {
        return detail(StatusCode::BAD_REQUEST, "An exam for this subject is already scheduled that day");
    }
    let exam = exam_from_form(Uuid::new_v4().to_string(), form);
    data.exams.push(exam.clone());
    Json(exam).into_response()
}

async fn update_exam(
    State(shared): State<Shared>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    let mut data = shared.lock().unwrap();
    data.bodies.push(body.clone());
    let form: ExamForm = match serde_json::from_value(body) {
        Ok(form) => form,
        Err(e) => return detail(StatusCode::UNPROCESSABLE_ENTITY, &e.to_string()),
    };
    match data.exams.iter_mut().find(|e| e.id == id) {
        Some(exam) => {
            *exam = exam_from_form(id, form);
            Json(exam.clone()).into_response()
        }
        None => not_found(),
    }
}

async fn delete_exam(State(shared): State<Shared>, Path(id): Path<String>) -> Response {
    let mut data = shared.lock().unwrap();
    let before = data.exams.len();
    data.exams.retain(|e| e.id != id);
    if data.exams.len() == before {
        return not_found();
    }
    Json(json!({ "message": "Exam deleted" })).into_response()
}

async fn list_notices(State(shared): State<Shared>) -> Json<Vec<Notice>> {
    Json(shared.lock().unwrap().notices.clone())
}

async fn create_notice(State(shared): State<Shared>, Json(body): Json<Value>) -> Response {
    let mut data = shared.lock().unwrap();
    data.bodies.push(body.clone());
    let form: NoticeForm = match serde_json::from_value(body) {
        Ok(form) => form,
        Err(e) => return detail(StatusCode::UNPROCESSABLE_ENTITY, &e.to_string()),
    };
    let notice = Notice {
        id: Uuid::new_v4().to_string(),
        title: form.title,
        message: form.message,
        date_posted: chrono::Utc::now().to_rfc3339(),
    };
    data.notices.insert(0, notice.clone());
    Json(notice).into_response()
}

async fn delete_notice(State(shared): State<Shared>, Path(id): Path<String>) -> Response {
    let mut data = shared.lock().unwrap();
    let before = data.notices.len();
    data.notices.retain(|n| n.id != id);
    if data.notices.len() == before {
        return not_found();
    }
    Json(json!({ "message": "Notice deleted" })).into_response()
}

async fn progress(State(shared): State<Shared>) -> Json<Progress> {
    let data = shared.lock().unwrap();
    let total = data.homework.len() as u32;
    let completed = data
        .homework
        .iter()
        .filter(|h| h.status == HomeworkStatus::Completed)
        .count() as u32;

    let mut subjects: Vec<SubjectProgress> = Vec::new();
    for hw in &data.homework {
        let done = u32::from(hw.status == HomeworkStatus::Completed);
        match subjects.iter_mut().find(|s| s.subject == hw.subject) {
            Some(s) => {
                s.total += 1;
                s.completed += done;
            }
            None => subjects.push(SubjectProgress {
                subject: hw.subject.clone(),
                completed: done,
                total: 1,
                progress: 0.0,
            }),
        }
    }
    for s in &mut subjects {
        s.progress = f64::from(s.completed) * 100.0 / f64::from(s.total);
    }

    Json(Progress {
        overall_progress: percent(completed, total),
        completed_homework: completed,
        total_homework: total,
        subject_progress: subjects,
    })
}

fn percent(part: u32, whole: u32) -> f64 {
    if whole == 0 {
        0.0
    } else {
        (f64::from(part) * 1000.0 / f64::from(whole)).round() / 10.0
    }
}

/// Countdown the way the backend derives it from the exam date.
pub fn exam_from_form(id: String, form: ExamForm) -> Exam {
    let today = Local::now().date_naive();
    let days_remaining = NaiveDate::parse_from_str(&form.date, "%Y-%m-%d")
        .map(|date| (date - today).num_days())
        .unwrap_or(0);
    let urgency_color = match days_remaining {
        d if d < 0 => UrgencyColor::Gray,
        0..=1 => UrgencyColor::Red,
        2..=3 => UrgencyColor::Orange,
        4..=7 => UrgencyColor::Yellow,
        _ => UrgencyColor::Other("green".to_string()),
    };
    Exam {
        id,
        subject: form.subject,
        date: form.date,
        syllabus: form.syllabus,
        exam_type: form.exam_type,
        days_remaining,
        urgency_color,
    }
}

pub fn homework(id: &str, subject: &str, status: HomeworkStatus, reminder: bool) -> Homework {
    Homework {
        id: id.to_string(),
        subject: subject.to_string(),
        description: format!("{} exercises", subject),
        due_date: "2026-10-20".to_string(),
        status,
        reminder,
    }
}

pub fn exam(id: &str, subject: &str, days_remaining: i64, color: UrgencyColor) -> Exam {
    Exam {
        id: id.to_string(),
        subject: subject.to_string(),
        date: "2026-10-25".to_string(),
        syllabus: "Chapters 1-4".to_string(),
        exam_type: Default::default(),
        days_remaining,
        urgency_color: color,
    }
}

pub fn notice(id: &str, title: &str) -> Notice {
    Notice {
        id: id.to_string(),
        title: title.to_string(),
        message: format!("{} details", title),
        date_posted: "2026-10-17T08:00:00Z".to_string(),
    }
}

pub fn student(id: &str, username: &str, role: Role) -> Student {
    Student {
        id: id.to_string(),
        name: username.to_uppercase(),
        class_name: "10A".to_string(),
        username: username.to_string(),
        role,
    }
}

pub fn student_user(role: Role) -> UserInfo {
    UserInfo {
        name: "Ada Lovelace".to_string(),
        account_type: AccountType::Student,
        class_name: Some("10A".to_string()),
        username: Some("ada".to_string()),
        role: Some(role),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Note {
    Success(String),
    Error(String),
}

/// Notifier that keeps every notification for later assertions.
#[derive(Default)]
pub struct RecordingNotifier {
    notes: Mutex<Vec<Note>>,
}

impl RecordingNotifier {
    pub fn notes(&self) -> Vec<Note> {
        self.notes.lock().unwrap().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.notes()
            .into_iter()
            .filter_map(|n| match n {
                Note::Error(m) => Some(m),
                Note::Success(_) => None,
            })
            .collect()
    }

    pub fn successes(&self) -> Vec<String> {
        self.notes()
            .into_iter()
            .filter_map(|n| match n {
                Note::Success(m) => Some(m),
                Note::Error(_) => None,
            })
            .collect()
    }
}

impl Notifier for RecordingNotifier {
    fn success(&self, message: &str) {
        self.notes.lock().unwrap().push(Note::Success(message.to_string()));
    }

    fn error(&self, message: &str) {
        self.notes.lock().unwrap().push(Note::Error(message.to_string()));
    }
}

/// Answers every confirmation the same way and counts the prompts.
pub struct Answer {
    accept: bool,
    prompts: AtomicUsize,
}

impl Answer {
    pub fn yes() -> Self {
        Self { accept: true, prompts: AtomicUsize::new(0) }
    }

    pub fn no() -> Self {
        Self { accept: false, prompts: AtomicUsize::new(0) }
    }

    pub fn prompts(&self) -> usize {
        self.prompts.load(Ordering::SeqCst)
    }
}

impl Confirm for Answer {
    fn confirm(&self, _prompt: &str) -> bool {
        self.prompts.fetch_add(1, Ordering::SeqCst);
        self.accept
    }
}
