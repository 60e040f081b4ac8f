use campus_api_types::{Course, Person, Subject};

use crate::{client::CampusClient, error::Result};

/// 单个客户端会话内四类实体列表的读穿缓存。
///
/// 列表在首次使用时拉取，直到 [`invalidate`] 或 [`refresh`] 前一直保留。
/// 调用方在每次写操作后应使缓存失效。
///
/// [`invalidate`]: SessionCache::invalidate
/// [`refresh`]: SessionCache::refresh
#[derive(Debug)]
pub struct SessionCache {
    client: CampusClient,
    courses: Option<Vec<Course>>,
    students: Option<Vec<Person>>,
    teachers: Option<Vec<Person>>,
    subjects: Option<Vec<Subject>>,
}

impl SessionCache {
    pub fn new(client: CampusClient) -> Self {
        Self {
            client,
            courses: None,
            students: None,
            teachers: None,
            subjects: None,
        }
    }

    pub fn client(&self) -> &CampusClient {
        &self.client
    }

    pub async fn courses(&mut self) -> Result<&[Course]> {
        if self.courses.is_none() {
            self.courses = Some(self.client.list_courses().await?);
        }
        Ok(self.courses.as_deref().unwrap_or_default())
    }

    pub async fn students(&mut self) -> Result<&[Person]> {
        if self.students.is_none() {
            self.students = Some(self.client.list_students().await?);
        }
        Ok(self.students.as_deref().unwrap_or_default())
    }

    pub async fn teachers(&mut self) -> Result<&[Person]> {
        if self.teachers.is_none() {
            self.teachers = Some(self.client.list_teachers().await?);
        }
        Ok(self.teachers.as_deref().unwrap_or_default())
    }

    pub async fn subjects(&mut self) -> Result<&[Subject]> {
        if self.subjects.is_none() {
            self.subjects = Some(self.client.list_subjects().await?);
        }
        Ok(self.subjects.as_deref().unwrap_or_default())
    }

    pub fn invalidate(&mut self) {
        self.courses = None;
        self.students = None;
        self.teachers = None;
        self.subjects = None;
    }

    /// 并发重新加载全部列表。
    pub async fn refresh(&mut self) -> Result<()> {
        let (courses, students, teachers, subjects) = tokio::try_join!(
            self.client.list_courses(),
            self.client.list_students(),
            self.client.list_teachers(),
            self.client.list_subjects(),
        )?;

        self.courses = Some(courses);
        self.students = Some(students);
        self.teachers = Some(teachers);
        self.subjects = Some(subjects);
        Ok(())
    }

    /// 查找已缓存的课程；不存在或尚未加载时返回 `None`。
    pub fn course(&self, id: i32) -> Option<&Course> {
        self.courses.as_ref()?.iter().find(|course| course.id == id)
    }

    pub fn student(&self, id: i32) -> Option<&Person> {
        self.students.as_ref()?.iter().find(|student| student.id == id)
    }

    pub fn teacher(&self, id: i32) -> Option<&Person> {
        self.teachers.as_ref()?.iter().find(|teacher| teacher.id == id)
    }

    pub fn subject(&self, id: i32) -> Option<&Subject> {
        self.subjects.as_ref()?.iter().find(|subject| subject.id == id)
    }
}
