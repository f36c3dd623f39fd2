use thiserror::Error;

/// A defect in the reference tables. Any of these stops the process from
/// starting: a table that cannot be trusted must not be matched against.
#[derive(Debug, Error, PartialEq)]
pub enum KnowledgeError {
    #[error("duplicate pathology signature id: {0}")]
    DuplicateSignature(String),

    #[error("pathology signature has an empty id")]
    EmptySignatureId,

    #[error("pathology '{id}': probability_base {value} is outside [0, 1]")]
    PriorOutOfRange { id: String, value: f64 },

    #[error("duplicate red-flag condition: {0}")]
    DuplicateCriterion(String),

    #[error("red-flag condition '{0}' has no criterion tags")]
    EmptyCriterion(String),

    #[error("'{source_id}' references unrecognized intake tag '{tag}'")]
    UnrecognizedTag { source_id: String, tag: String },

    #[error("dermatome {0} lists no body regions")]
    EmptyDermatome(String),
}
