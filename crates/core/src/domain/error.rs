use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("{field} must be a positive id, got {value}")]
    InvalidId { field: &'static str, value: i32 },

    #[error("invalid email: {0}")]
    InvalidEmail(String),
}
