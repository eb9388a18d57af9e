use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid question ordinal: {0}")]
    InvalidOrdinal(String),

    #[error("invalid answer for question {ordinal}: {reason}")]
    InvalidAnswer { ordinal: u32, reason: String },
}
