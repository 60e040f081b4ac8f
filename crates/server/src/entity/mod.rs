pub mod course;
pub mod enrollment;
pub mod student;
pub mod subject;
pub mod teacher;
pub mod teaching_assignment;
