#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// Caller-supplied input failed a precondition.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// A required process-wide setting is absent.
    #[error("Configuration error: {0}")]
    Configuration(String),
}
