//! Validated field sets, ready to be written.
//!
//! Every constructor checks presence first, then shape, and returns the
//! first failure. Nothing here touches storage, so a draft existing means
//! validation already happened.

use super::{CourseId, DomainError, Email, Name, StudentId, SubjectId, TeacherId};

/// Fields shared by students and teachers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonDraft {
    pub name: Name,
    pub email: Email,
}

impl PersonDraft {
    pub fn new(name: Option<String>, email: Option<String>) -> Result<Self, DomainError> {
        Ok(Self {
            name: Name::required(name)?,
            email: Email::required(email)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseDraft {
    pub name: Name,
    /// Unassigned courses are allowed; existence of an assigned teacher is
    /// checked by the caller before writing.
    pub teacher_id: Option<TeacherId>,
}

impl CourseDraft {
    pub fn new(name: Option<String>, teacher_id: Option<i32>) -> Result<Self, DomainError> {
        Ok(Self {
            name: Name::required(name)?,
            teacher_id: TeacherId::optional(teacher_id)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectDraft {
    pub name: Name,
    pub course_id: CourseId,
}

impl SubjectDraft {
    pub fn new(name: Option<String>, course_id: Option<i32>) -> Result<Self, DomainError> {
        Ok(Self {
            name: Name::required(name)?,
            course_id: CourseId::required(course_id)?,
        })
    }
}

/// One row of a many-to-many association.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AssociationDraft<L, R> {
    pub left: L,
    pub right: R,
}

impl AssociationDraft<StudentId, CourseId> {
    pub fn enrollment(student_id: Option<i32>, course_id: Option<i32>) -> Result<Self, DomainError> {
        Ok(Self {
            left: StudentId::required(student_id)?,
            right: CourseId::required(course_id)?,
        })
    }
}

impl AssociationDraft<TeacherId, SubjectId> {
    pub fn teaching(teacher_id: Option<i32>, subject_id: Option<i32>) -> Result<Self, DomainError> {
        Ok(Self {
            left: TeacherId::required(teacher_id)?,
            right: SubjectId::required(subject_id)?,
        })
    }
}
