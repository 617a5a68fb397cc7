use thiserror::Error;

/// Failures from the backend-as-a-service layer. No retryable/permanent
/// split: callers log, notify, and fall back to a default value instead of
/// retrying.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("backend is not configured")]
    NotConfigured,
    #[error("request failed: {0}")]
    Http(String),
    #[error("could not decode response: {0}")]
    Decode(String),
    #[error("authentication failed: {0}")]
    Auth(String),
}
