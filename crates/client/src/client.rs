use campus_api_types::{
    Course, CourseInput, CourseSummary, CreatedResponse, EnrollmentInput, ErrorResponse,
    HealthCheckResponse, MemberIds, Person, PersonInput, Subject, SubjectInput, TeacherSubject,
    TeachingAssignmentInput,
};
use reqwest::{Client, Response};
use serde::{Serialize, de::DeserializeOwned};
use tracing::debug;

use crate::error::{ClientError, Result};

/// campus REST API 的类型化客户端。
#[derive(Debug, Clone)]
pub struct CampusClient {
    client: Client,
    base_url: String,
}

impl CampusClient {
    /// `base_url` 为服务根地址，例如 `http://localhost:3000`。
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn health(&self) -> Result<HealthCheckResponse> {
        self.get_json("/api/health").await
    }

    pub async fn list_courses(&self) -> Result<Vec<Course>> {
        self.get_json("/api/cursos").await
    }

    pub async fn create_course(&self, input: &CourseInput) -> Result<i32> {
        self.post_json("/api/cursos", input).await
    }

    pub async fn update_course(&self, id: i32, input: &CourseInput) -> Result<()> {
        self.put_json(&format!("/api/cursos/{id}"), input).await
    }

    pub async fn delete_course(&self, id: i32) -> Result<()> {
        self.delete(&format!("/api/cursos/{id}")).await
    }

    pub async fn list_students(&self) -> Result<Vec<Person>> {
        self.get_json("/api/alunos").await
    }

    pub async fn create_student(&self, input: &PersonInput) -> Result<i32> {
        self.post_json("/api/alunos", input).await
    }

    pub async fn update_student(&self, id: i32, input: &PersonInput) -> Result<()> {
        self.put_json(&format!("/api/alunos/{id}"), input).await
    }

    pub async fn delete_student(&self, id: i32) -> Result<()> {
        self.delete(&format!("/api/alunos/{id}")).await
    }

    pub async fn list_teachers(&self) -> Result<Vec<Person>> {
        self.get_json("/api/professores").await
    }

    pub async fn create_teacher(&self, input: &PersonInput) -> Result<i32> {
        self.post_json("/api/professores", input).await
    }

    pub async fn update_teacher(&self, id: i32, input: &PersonInput) -> Result<()> {
        self.put_json(&format!("/api/professores/{id}"), input).await
    }

    pub async fn delete_teacher(&self, id: i32) -> Result<()> {
        self.delete(&format!("/api/professores/{id}")).await
    }

    pub async fn list_subjects(&self) -> Result<Vec<Subject>> {
        self.get_json("/api/disciplinas").await
    }

    pub async fn create_subject(&self, input: &SubjectInput) -> Result<i32> {
        self.post_json("/api/disciplinas", input).await
    }

    pub async fn update_subject(&self, id: i32, input: &SubjectInput) -> Result<()> {
        self.put_json(&format!("/api/disciplinas/{id}"), input).await
    }

    pub async fn delete_subject(&self, id: i32) -> Result<()> {
        self.delete(&format!("/api/disciplinas/{id}")).await
    }

    pub async fn courses_of_student(&self, student_id: i32) -> Result<Vec<CourseSummary>> {
        self.get_json(&format!("/api/curso_aluno/aluno/{student_id}"))
            .await
    }

    pub async fn students_of_course(&self, course_id: i32) -> Result<Vec<Person>> {
        self.get_json(&format!("/api/curso_aluno/curso/{course_id}"))
            .await
    }

    pub async fn enroll(&self, student_id: i32, course_id: i32) -> Result<i32> {
        let input = EnrollmentInput {
            student_id: Some(student_id),
            course_id: Some(course_id),
        };
        self.post_json("/api/curso_aluno", &input).await
    }

    pub async fn unenroll(&self, student_id: i32, course_id: i32) -> Result<()> {
        self.delete(&format!("/api/curso_aluno/{student_id}/{course_id}"))
            .await
    }

    /// 在服务端单个事务内替换学生的全部选课。
    pub async fn set_student_courses(&self, student_id: i32, course_ids: &[i32]) -> Result<()> {
        let members = MemberIds {
            ids: course_ids.to_vec(),
        };
        self.put_json(&format!("/api/curso_aluno/aluno/{student_id}"), &members)
            .await
    }

    pub async fn subjects_of_teacher(&self, teacher_id: i32) -> Result<Vec<TeacherSubject>> {
        self.get_json(&format!("/api/professor_disciplina/professor/{teacher_id}"))
            .await
    }

    pub async fn teachers_of_subject(&self, subject_id: i32) -> Result<Vec<Person>> {
        self.get_json(&format!("/api/professor_disciplina/disciplina/{subject_id}"))
            .await
    }

    pub async fn assign_subject(&self, teacher_id: i32, subject_id: i32) -> Result<i32> {
        let input = TeachingAssignmentInput {
            teacher_id: Some(teacher_id),
            subject_id: Some(subject_id),
        };
        self.post_json("/api/professor_disciplina", &input).await
    }

    pub async fn unassign_subject(&self, teacher_id: i32, subject_id: i32) -> Result<()> {
        self.delete(&format!(
            "/api/professor_disciplina/{teacher_id}/{subject_id}"
        ))
        .await
    }

    /// 在服务端单个事务内替换教师的全部授课科目。
    pub async fn set_teacher_subjects(&self, teacher_id: i32, subject_ids: &[i32]) -> Result<()> {
        let members = MemberIds {
            ids: subject_ids.to_vec(),
        };
        self.put_json(
            &format!("/api/professor_disciplina/professor/{teacher_id}"),
            &members,
        )
        .await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        debug!(path, "GET");
        let response = self.client.get(self.url(path)).send().await?;
        Ok(check(response).await?.json().await?)
    }

    async fn post_json<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<i32> {
        debug!(path, "POST");
        let response = self.client.post(self.url(path)).json(body).send().await?;
        let created: CreatedResponse = check(response).await?.json().await?;
        Ok(created.id)
    }

    async fn put_json<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<()> {
        debug!(path, "PUT");
        let response = self.client.put(self.url(path)).json(body).send().await?;
        check(response).await?;
        Ok(())
    }

    async fn delete(&self, path: &str) -> Result<()> {
        debug!(path, "DELETE");
        let response = self.client.delete(self.url(path)).send().await?;
        check(response).await?;
        Ok(())
    }
}

/// 将非 2xx 响应转换为 [`ClientError::Api`]。
async fn check(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = match response.json::<ErrorResponse>().await {
        Ok(body) => body,
        Err(_) => ErrorResponse {
            error: status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_string(),
            code: "UNKNOWN".to_string(),
        },
    };

    Err(ClientError::Api {
        status: status.as_u16(),
        body,
    })
}
