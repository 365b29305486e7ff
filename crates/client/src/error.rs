use reqwest::StatusCode;
use thiserror::Error;

/// Failures observed by the client. None of them are fatal to the caller.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Request never got a response (connection refused, reset, DNS...).
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Server answered with a non-success status.
    #[error("HTTP error! status: {0}")]
    Status(StatusCode),

    /// Response body did not have the expected shape.
    #[error("invalid data format from API: {0}")]
    Shape(String),
}

impl ClientError {
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status(status) => Some(*status),
            _ => None,
        }
    }
}
