use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    /// The model answered, but its text is not JSON. Carries the raw completion.
    #[error("Model output is not valid JSON")]
    MalformedModelOutput { raw: String },

    #[error("Storage error: {0}")]
    StorageError(String),
}
