// src/error.rs
use thiserror::Error;

/// Failure of a single client call. The `Display` text is what gets shown to
/// the user as the raw error.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("message cannot be empty")]
    EmptyMessage,

    #[error("Error: {status} - {body}")]
    Status { status: u16, body: String },

    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Network error: malformed reply: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ClientError {
    /// HTTP status reported by the service, if the call got that far.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown language '{0}', expected 'english' or 'hinglish'")]
pub struct UnknownLanguage(pub String);

/// Why the screen refused to start a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmitRejected {
    #[error("Please enter a message")]
    Empty,
    #[error("Still waiting for the previous reply")]
    Busy,
}
