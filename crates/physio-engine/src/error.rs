use thiserror::Error;

use physio_core::models::intake::FieldTypeError;

/// A specialist scorer could not produce a score. The doctor isolates these:
/// the domain gets the neutral score and the message is recorded.
#[derive(Debug, Error)]
pub enum SpecialistError {
    #[error("field '{field}' should be a {expected}")]
    InvalidField { field: String, expected: &'static str },

    #[error("field '{field}' is out of range: {value}")]
    OutOfRange { field: String, value: f64 },

    #[error("{0}")]
    Failed(String),
}

impl From<FieldTypeError> for SpecialistError {
    fn from(e: FieldTypeError) -> Self {
        SpecialistError::InvalidField {
            field: e.field,
            expected: e.expected,
        }
    }
}
