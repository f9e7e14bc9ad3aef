pub mod dto;

use async_trait::async_trait;
use reqwest::{Client, Method, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::AppError;
use crate::models::{
    Exam, ExamForm, Homework, HomeworkForm, HomeworkStatus, NewStudentRequest,
    NewTimetableEntryRequest, Notice, NoticeForm, Progress, Role, Student, TimetableEntry,
};

/// Every call the client makes against the school backend.
#[async_trait]
pub trait SchoolApi: Send + Sync {
    async fn list_students(&self) -> Result<Vec<Student>, AppError>;
    async fn create_student(&self, req: &NewStudentRequest) -> Result<(), AppError>;
    async fn update_student_role(&self, id: &str, role: Role) -> Result<(), AppError>;

    async fn list_all_timetable(&self) -> Result<Vec<TimetableEntry>, AppError>;
    async fn create_timetable_entry(&self, req: &NewTimetableEntryRequest) -> Result<(), AppError>;
    async fn delete_timetable_entry(&self, id: &str) -> Result<(), AppError>;

    async fn list_homework(&self) -> Result<Vec<Homework>, AppError>;
    async fn create_homework(&self, form: &HomeworkForm, class_name: &str) -> Result<(), AppError>;
    async fn update_homework(&self, id: &str, form: &HomeworkForm) -> Result<(), AppError>;
    async fn delete_homework(&self, id: &str) -> Result<(), AppError>;
    async fn set_homework_status(&self, id: &str, status: HomeworkStatus) -> Result<(), AppError>;

    async fn list_exams(&self) -> Result<Vec<Exam>, AppError>;
    async fn create_exam(&self, form: &ExamForm, class_name: &str) -> Result<(), AppError>;
    async fn update_exam(&self, id: &str, form: &ExamForm) -> Result<(), AppError>;
    async fn delete_exam(&self, id: &str) -> Result<(), AppError>;

    async fn list_notices(&self) -> Result<Vec<Notice>, AppError>;
    async fn create_notice(&self, form: &NoticeForm, class_name: &str) -> Result<(), AppError>;
    async fn delete_notice(&self, id: &str) -> Result<(), AppError>;

    async fn progress(&self) -> Result<Progress, AppError>;
    async fn class_timetable(&self) -> Result<Vec<TimetableEntry>, AppError>;
}

pub struct HttpSchoolApi {
    client: Client,
    base_url: String,
    token: String,
}

impl HttpSchoolApi {
    pub fn new(config: &ClientConfig, token: impl Into<String>) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build http client: {}", e)))?;
        Ok(Self {
            client,
            base_url: config.api_base(),
            token: token.into(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        let url = self.url(path);
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .header("Authorization", format!("Bearer {}", self.token))
            .send()
            .await?;

        let response = check_status(response).await?;
        Ok(response.json::<T>().await?)
    }

    async fn get_list<T: DeserializeOwned>(
        &self,
        path: &str,
        what: &str,
    ) -> Result<Vec<T>, AppError> {
        let values = self.get_json::<Vec<serde_json::Value>>(path).await?;
        Ok(dto::decode_records(what, values))
    }

    async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<(), AppError> {
        let url = self.url(path);
        debug!("{} {}", method, url);

        let mut request = self
            .client
            .request(method, &url)
            .header("Authorization", format!("Bearer {}", self.token));
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        check_status(response).await?;
        Ok(())
    }

    async fn delete(&self, path: &str) -> Result<(), AppError> {
        self.send::<()>(Method::DELETE, path, None).await
    }
}

async fn check_status(response: Response) -> Result<Response, AppError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let detail = serde_json::from_str::<dto::ErrorBody>(&body)
        .ok()
        .and_then(dto::ErrorBody::into_message);

    match status {
        StatusCode::UNAUTHORIZED => Err(AppError::Unauthorized(detail)),
        StatusCode::NOT_FOUND => Err(AppError::NotFound(detail)),
        _ => Err(AppError::Api { status, detail }),
    }
}

#[async_trait]
impl SchoolApi for HttpSchoolApi {
    async fn list_students(&self) -> Result<Vec<Student>, AppError> {
        self.get_list("/admin/students", "student").await
    }

    async fn create_student(&self, req: &NewStudentRequest) -> Result<(), AppError> {
        self.send(Method::POST, "/admin/students", Some(req)).await
    }

    async fn update_student_role(&self, id: &str, role: Role) -> Result<(), AppError> {
        let body = dto::RoleUpdateRequest { role };
        self.send(Method::PUT, &format!("/admin/students/{}/role", id), Some(&body))
            .await
    }

    async fn list_all_timetable(&self) -> Result<Vec<TimetableEntry>, AppError> {
        self.get_list("/admin/timetable", "timetable").await
    }

    async fn create_timetable_entry(&self, req: &NewTimetableEntryRequest) -> Result<(), AppError> {
        self.send(Method::POST, "/admin/timetable", Some(req)).await
    }

    async fn delete_timetable_entry(&self, id: &str) -> Result<(), AppError> {
        self.delete(&format!("/admin/timetable/{}", id)).await
    }

    async fn list_homework(&self) -> Result<Vec<Homework>, AppError> {
        self.get_list("/homework", "homework").await
    }

    async fn create_homework(&self, form: &HomeworkForm, class_name: &str) -> Result<(), AppError> {
        let body = dto::ClassScoped { form, class_name };
        self.send(Method::POST, "/homework", Some(&body)).await
    }

    async fn update_homework(&self, id: &str, form: &HomeworkForm) -> Result<(), AppError> {
        self.send(Method::PUT, &format!("/homework/{}", id), Some(form)).await
    }

    async fn delete_homework(&self, id: &str) -> Result<(), AppError> {
        self.delete(&format!("/homework/{}", id)).await
    }

    async fn set_homework_status(&self, id: &str, status: HomeworkStatus) -> Result<(), AppError> {
        let body = dto::StatusUpdateRequest { status };
        self.send(Method::POST, &format!("/homework/{}/status", id), Some(&body))
            .await
    }

    async fn list_exams(&self) -> Result<Vec<Exam>, AppError> {
        self.get_list("/exams", "exam").await
    }

    async fn create_exam(&self, form: &ExamForm, class_name: &str) -> Result<(), AppError> {
        let body = dto::ClassScoped { form, class_name };
        self.send(Method::POST, "/exams", Some(&body)).await
    }

    async fn update_exam(&self, id: &str, form: &ExamForm) -> Result<(), AppError> {
        self.send(Method::PUT, &format!("/exams/{}", id), Some(form)).await
    }

    async fn delete_exam(&self, id: &str) -> Result<(), AppError> {
        self.delete(&format!("/exams/{}", id)).await
    }

    async fn list_notices(&self) -> Result<Vec<Notice>, AppError> {
        self.get_list("/notices", "notice").await
    }

    async fn create_notice(&self, form: &NoticeForm, class_name: &str) -> Result<(), AppError> {
        let body = dto::ClassScoped { form, class_name };
        self.send(Method::POST, "/notices", Some(&body)).await
    }

    async fn delete_notice(&self, id: &str) -> Result<(), AppError> {
        self.delete(&format!("/notices/{}", id)).await
    }

    async fn progress(&self) -> Result<Progress, AppError> {
        self.get_json("/progress").await
    }

    async fn class_timetable(&self) -> Result<Vec<TimetableEntry>, AppError> {
        self.get_list("/timetable", "timetable").await
    }
}
