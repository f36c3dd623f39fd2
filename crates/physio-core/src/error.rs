use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("malformed intake: {0}")]
    MalformedIntake(String),

    #[error("unknown severity tier: {0}")]
    UnknownSeverity(String),
}
