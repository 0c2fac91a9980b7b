use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("identity request failed: {0}")]
    Transport(String),

    #[error("identity endpoint returned status {status}")]
    Status { status: u16 },

    #[error("invalid identity response: {0}")]
    InvalidResponse(String),
}
