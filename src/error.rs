use thiserror::Error;

#[derive(Error, Debug)]
pub enum GstCoreError {
    #[error("Unknown report range selector: {0}")]
    UnknownRange(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GstCoreError>;
