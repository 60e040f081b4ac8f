mod draft;
mod email;
mod error;
mod ids;
mod name;

pub use draft::{AssociationDraft, CourseDraft, PersonDraft, SubjectDraft};
pub use email::Email;
pub use error::DomainError;
pub use ids::{CourseId, StudentId, SubjectId, TeacherId};
pub use name::Name;
