use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use super::DomainError;

macro_rules! define_id_type {
    ($name:ident, $field:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(i32);

        impl $name {
            /// Wire name of the field carrying this id in request bodies.
            pub const FIELD: &'static str = $field;

            pub fn new(value: i32) -> Self {
                Self(value)
            }

            /// Validates an id taken from a request body. Absent and `0`
            /// both count as missing.
            pub fn required(value: Option<i32>) -> Result<Self, DomainError> {
                match value {
                    None | Some(0) => Err(DomainError::MissingField(Self::FIELD)),
                    Some(value) if value < 0 => Err(DomainError::InvalidId {
                        field: Self::FIELD,
                        value,
                    }),
                    Some(value) => Ok(Self(value)),
                }
            }

            /// Like [`Self::required`], but absence (or `0`) is allowed.
            pub fn optional(value: Option<i32>) -> Result<Option<Self>, DomainError> {
                match value {
                    None | Some(0) => Ok(None),
                    value => Self::required(value).map(Some),
                }
            }

            pub fn into_inner(self) -> i32 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.parse::<i32>().map(Self)
            }
        }

        impl From<i32> for $name {
            fn from(value: i32) -> Self {
                Self::new(value)
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> Self {
                value.into_inner()
            }
        }
    };
}

define_id_type!(CourseId, "curso_id");
define_id_type!(StudentId, "aluno_id");
define_id_type!(TeacherId, "professor_id");
define_id_type!(SubjectId, "disciplina_id");
