use std::io;
use thiserror::Error;

/// Application-wide error type, consolidating all possible errors into a single enum.
#[derive(Debug, Error)]
pub enum AppError {
    /// Represents errors originating from the task store, typically from `sqlx`.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Represents standard input/output errors.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Represents data validation errors (e.g., an empty task title).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Represents configuration-related errors (e.g., missing environment variables).
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Validation(format!("Validation errors: {}", err))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Validation(format!("JSON error: {}", err))
    }
}

/// Failure kinds of the remote classification service.
///
/// Every variant is recovered inside the [`Classifier`](crate::Classifier) by
/// substituting the rule-based result; none of them reach the caller. The kind
/// is still reported on the observer side channel so the notification layer can
/// tell a quota problem from bad credentials.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RemoteError {
    /// No credentials/configuration, the remote path is disabled.
    /// Reported on the observer side channel once per engine instance.
    #[error("remote classification service is not configured")]
    Unavailable,

    /// The bounded request did not complete in time.
    #[error("remote classification timed out after {0}s")]
    Timeout(u64),

    /// The service rejected the request with HTTP 429.
    #[error("remote classification quota exceeded")]
    QuotaExceeded,

    /// The service rejected the credentials (HTTP 401/403).
    #[error("remote classification credentials rejected")]
    AuthInvalid,

    /// The response arrived but could not be understood.
    #[error("malformed remote response: {0}")]
    MalformedResponse(String),

    /// Any other transport or server failure.
    #[error("remote classification failed: {0}")]
    Generic(String),
}
