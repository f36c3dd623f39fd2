use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("unknown session mode: {0}")]
    UnknownMode(String),

    #[error("malformed answer history: {0}")]
    MalformedHistory(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
