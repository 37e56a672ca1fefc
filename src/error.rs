//! Error types for the submit path.

use thiserror::Error;

/// Everything that can go wrong between pressing Calculate and having a result.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    #[error("could not reach the calculation service: {0}")]
    Network(String),

    #[error("unexpected response from the calculation service (status {status}): {reason}")]
    Decode { status: u16, reason: String },

    #[error("{message}")]
    Service { status: u16, message: String },

    #[error("the calculation service rejected the request (status {status})")]
    EmptyDetail { status: u16 },
}

impl CalcError {
    /// Text for the blocking notification.
    pub fn user_message(&self) -> String {
        match self {
            CalcError::Service { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

impl From<reqwest::Error> for CalcError {
    fn from(e: reqwest::Error) -> Self {
        CalcError::Network(e.to_string())
    }
}
