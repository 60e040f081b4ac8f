use campus_api_types::{Course, Person, Subject};

use crate::{client::CampusClient, error::Result};

/// “最近学生”面板显示的数量。
pub const RECENT_STUDENTS: usize = 5;

/// 仪表盘中的课程卡片，附带教师姓名。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseCard {
    pub id: i32,
    pub name: String,
    /// 课程未分配教师或教师已不存在时为 `None`。
    pub teacher_name: Option<String>,
}

/// 根据完整实体列表计算的概览数据。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dashboard {
    pub total_courses: usize,
    pub total_students: usize,
    pub total_teachers: usize,
    pub total_subjects: usize,
    pub courses: Vec<CourseCard>,
    /// 最新的在前。
    pub recent_students: Vec<Person>,
}

impl Dashboard {
    /// 并发拉取四类列表并生成概览。
    pub async fn load(client: &CampusClient) -> Result<Self> {
        let (courses, students, teachers, subjects) = tokio::try_join!(
            client.list_courses(),
            client.list_students(),
            client.list_teachers(),
            client.list_subjects(),
        )?;

        Ok(Self::build(&courses, &students, &teachers, &subjects))
    }

    pub fn build(
        courses: &[Course],
        students: &[Person],
        teachers: &[Person],
        subjects: &[Subject],
    ) -> Self {
        let cards = courses
            .iter()
            .map(|course| CourseCard {
                id: course.id,
                name: course.name.clone(),
                teacher_name: course
                    .teacher_id
                    .and_then(|id| teachers.iter().find(|teacher| teacher.id == id))
                    .map(|teacher| teacher.name.clone()),
            })
            .collect();

        // 列表按 id 升序返回，末尾即最新记录。
        let recent_students = students
            .iter()
            .rev()
            .take(RECENT_STUDENTS)
            .cloned()
            .collect();

        Self {
            total_courses: courses.len(),
            total_students: students.len(),
            total_teachers: teachers.len(),
            total_subjects: subjects.len(),
            courses: cards,
            recent_students,
        }
    }
}

/// 教师负责的课程名称。
pub fn courses_of_teacher(teacher_id: i32, courses: &[Course]) -> Vec<&str> {
    courses
        .iter()
        .filter(|course| course.teacher_id == Some(teacher_id))
        .map(|course| course.name.as_str())
        .collect()
}
