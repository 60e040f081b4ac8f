//! Shared request/response types used by the server and the client.
//!
//! Field names on the wire keep the Portuguese names the web pages already
//! send (`nome`, `professor_id`, ...); the Rust side uses English names.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthCheckResponse {
    pub status: String,
}

impl HealthCheckResponse {
    #[must_use]
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}

/// Body of every non-2xx response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

/// Body of a `201 Created` response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedResponse {
    pub id: i32,
}

/// A student or a teacher row. Also the shape of the joined
/// "students of a course" / "teachers of a subject" views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: i32,
    #[serde(rename = "nome")]
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: i32,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "professor_id")]
    pub teacher_id: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub id: i32,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "curso_id")]
    pub course_id: i32,
}

/// A course as seen from one of its students.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseSummary {
    pub id: i32,
    #[serde(rename = "nome")]
    pub name: String,
}

/// A subject as seen from one of its teachers, with the owning course name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeacherSubject {
    pub id: i32,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "curso_id")]
    pub course_id: i32,
    #[serde(rename = "curso_nome")]
    pub course_name: Option<String>,
}

/// Create/update body for students and teachers.
///
/// Every field is optional so that a missing field reaches validation
/// instead of failing deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonInput {
    #[serde(rename = "nome")]
    pub name: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseInput {
    #[serde(rename = "nome")]
    pub name: Option<String>,
    #[serde(rename = "professor_id")]
    pub teacher_id: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectInput {
    #[serde(rename = "nome")]
    pub name: Option<String>,
    #[serde(rename = "curso_id")]
    pub course_id: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrollmentInput {
    #[serde(rename = "aluno_id")]
    pub student_id: Option<i32>,
    #[serde(rename = "curso_id")]
    pub course_id: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeachingAssignmentInput {
    #[serde(rename = "professor_id")]
    pub teacher_id: Option<i32>,
    #[serde(rename = "disciplina_id")]
    pub subject_id: Option<i32>,
}

/// Full replacement of one owner's association set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberIds {
    #[serde(default)]
    pub ids: Vec<i32>,
}
