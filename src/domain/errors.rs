use crate::domain::constants::EMPTY_PATH_MESSAGE;

/// Every way a single workflow call can fail. All variants are terminal for the
/// call; none are retried.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum FimError {
    /// Rejected locally before any request was made.
    #[error("{}", EMPTY_PATH_MESSAGE)]
    EmptyPath,
    /// The request never produced a usable body (connect failure, bad JSON, ...).
    #[error("Error: {0}")]
    Transport(String),
    /// The service answered, but with a non-2xx code or a non-success status.
    #[error("{0}")]
    ServerReportedFailure(String),
}

impl FimError {
    pub fn code(&self) -> &'static str {
        match self {
            FimError::EmptyPath => "EMPTY_PATH",
            FimError::Transport(_) => "TRANSPORT_ERROR",
            FimError::ServerReportedFailure(_) => "SERVER_FAILURE",
        }
    }
}
