//! Client error types.

use memberdb_core::account::{classify_status, SubmitError};
use memberdb_core::auth::AuthError;
use thiserror::Error;

/// Result type alias for client module.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Server returned {status}: {message}")]
    ServerError { status: u16, message: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl From<ClientError> for AuthError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::ServerError { status, .. } => AuthError::Status { status },
            ClientError::InvalidResponse(message) => AuthError::InvalidResponse(message),
            other => AuthError::Transport(other.to_string()),
        }
    }
}

impl From<ClientError> for SubmitError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::ServerError { status, .. } => match classify_status(status) {
                Err(e) => e,
                // A success status never becomes a ServerError.
                Ok(()) => SubmitError::Rejected { status },
            },
            other => SubmitError::Transport(other.to_string()),
        }
    }
}
