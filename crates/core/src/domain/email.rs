use std::sync::LazyLock;

use regex::Regex;

use super::DomainError;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid email regex"));

/// An address of the `local@domain.tld` shape.
///
/// Neither part may contain whitespace or `@`, and the domain needs at
/// least one `.`. Nothing beyond that shape is checked.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    pub const FIELD: &'static str = "email";

    pub fn parse(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();

        if value.is_empty() {
            return Err(DomainError::MissingField(Self::FIELD));
        }
        if !EMAIL_RE.is_match(&value) {
            return Err(DomainError::InvalidEmail(value));
        }

        Ok(Self(value))
    }

    pub fn required(value: Option<String>) -> Result<Self, DomainError> {
        value
            .ok_or(DomainError::MissingField(Self::FIELD))
            .and_then(Self::parse)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}
