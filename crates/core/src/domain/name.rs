use super::DomainError;

/// A required display name: trimmed, never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name(String);

impl Name {
    pub const FIELD: &'static str = "nome";

    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        let trimmed = value.trim();

        if trimmed.is_empty() {
            return Err(DomainError::MissingField(Self::FIELD));
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn required(value: Option<String>) -> Result<Self, DomainError> {
        value
            .ok_or(DomainError::MissingField(Self::FIELD))
            .and_then(Self::new)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}
