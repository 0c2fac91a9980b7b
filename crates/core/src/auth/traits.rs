use async_trait::async_trait;

use super::{AuthError, CallerIdentity};

/// Result type for auth operations.
pub type Result<T> = std::result::Result<T, AuthError>;

/// Source of the current caller's identity.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Fetch the identity bound to the caller's session.
    async fn fetch_identity(&self) -> Result<CallerIdentity>;
}
