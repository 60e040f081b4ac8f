//! 学生与教师表单的保存流程：先保存记录，再保存关联集合。

use campus_api_types::PersonInput;
use tracing::info;

use crate::{client::CampusClient, error::Result};

/// 保存学生及其所选课程，返回学生 id。
///
/// 传入 `id` 时更新学生，并替换选课集合（`course_ids` 为空时即清空）。
/// 新建学生仅在有选中课程时写入选课。
pub async fn save_student(
    client: &CampusClient,
    id: Option<i32>,
    input: &PersonInput,
    course_ids: &[i32],
) -> Result<i32> {
    let id = match id {
        Some(id) => {
            client.update_student(id, input).await?;
            client.set_student_courses(id, course_ids).await?;
            id
        }
        None => {
            let id = client.create_student(input).await?;
            if !course_ids.is_empty() {
                client.set_student_courses(id, course_ids).await?;
            }
            id
        }
    };

    info!(student_id = id, courses = course_ids.len(), "student saved");
    Ok(id)
}

/// 保存教师及其所选科目，返回教师 id。
///
/// 规则与 [`save_student`] 相同。
pub async fn save_teacher(
    client: &CampusClient,
    id: Option<i32>,
    input: &PersonInput,
    subject_ids: &[i32],
) -> Result<i32> {
    let id = match id {
        Some(id) => {
            client.update_teacher(id, input).await?;
            client.set_teacher_subjects(id, subject_ids).await?;
            id
        }
        None => {
            let id = client.create_teacher(input).await?;
            if !subject_ids.is_empty() {
                client.set_teacher_subjects(id, subject_ids).await?;
            }
            id
        }
    };

    info!(teacher_id = id, subjects = subject_ids.len(), "teacher saved");
    Ok(id)
}
