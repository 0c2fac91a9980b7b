use async_trait::async_trait;

use super::{NewUserRequest, SubmitError};

/// Result type for account operations.
pub type Result<T> = std::result::Result<T, SubmitError>;

/// Backend that creates user records.
#[async_trait]
pub trait AccountService: Send + Sync {
    /// Create a user. Duplicate users fail with [`SubmitError::Conflict`].
    async fn add_user(&self, request: &NewUserRequest) -> Result<()>;
}
