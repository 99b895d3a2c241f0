use thiserror::Error;

/// Which part of a [`GenerationRequest`](crate::models::GenerationRequest) was missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("both the epoch and the action must be filled in before generating images")]
    MissingFields,
    #[error("an API key is required to call the Stability AI API")]
    MissingApiKey,
}

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("Validation error: {0}")]
    ValidationError(#[from] ValidationError),

    /// Non-2xx answer from the provider. The body has the API key redacted.
    #[error("Provider error: HTTP {status}: {body}")]
    ProviderError { status: u16, body: String },

    #[error("No images were generated. Try a different prompt or try again later")]
    EmptyResultError,

    #[error("Decode error: artifact {index} is not valid base64: {source}")]
    DecodeError {
        index: usize,
        #[source]
        source: base64::DecodeError,
    },

    #[error("Request error: {0}")]
    RequestError(String),

    #[error("Response error: {0}")]
    ResponseError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl GenerationError {
    /// HTTP status of a provider rejection, if that is what this is.
    pub fn status(&self) -> Option<u16> {
        match self {
            GenerationError::ProviderError { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, GenerationError::ValidationError(_))
    }
}

pub type Result<T> = std::result::Result<T, GenerationError>;
