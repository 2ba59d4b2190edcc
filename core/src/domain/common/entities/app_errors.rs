use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum CoreError {
    #[error("no JSON object could be extracted from the model response")]
    ExtractionFailed { raw: String },

    #[error("analysis response is missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<String>),

    #[error("provider call failed: {0}")]
    ProviderCallFailed(String),

    #[error("provider temporarily unavailable: {0}")]
    ProviderUnavailable(String),

    #[error("no provider API key configured")]
    ProviderAuthMissing,

    #[error("invalid input: {0}")]
    Invalid(String),

    #[error("internal server error")]
    InternalServerError,
}

impl CoreError {
    /// Transient failures are worth retrying; everything else is terminal.
    pub fn is_transient(&self) -> bool {
        matches!(self, CoreError::ProviderUnavailable(_))
    }
}
