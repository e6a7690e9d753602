use thiserror::Error;

/// Failure kinds for one tempo-estimation call.
///
/// Every stage fails fast with one of these; there are no partial or
/// best-guess results and no retries. Estimation is pure, so repeating a
/// call with identical input reproduces the identical error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DetectError {
    #[error("empty or invalid input: samples must be non-empty and the sample rate positive")]
    EmptyOrInvalidInput,
    #[error("insufficient samples: input is shorter than one analysis window")]
    InsufficientSamples,
    #[error("no beat detected within the analyzable tempo range")]
    NoBeatDetected,
    #[error("unexpected failure: {0}")]
    Unexpected(String),
}

impl DetectError {
    pub fn unexpected<T: Into<String>>(cause: T) -> Self {
        Self::Unexpected(cause.into())
    }
}
