//! Identity API operations.

use async_trait::async_trait;
use memberdb_core::auth::{self, AuthError, CallerIdentity, IdentityProvider, LoginSuccess};

use super::MemberdbClient;
use crate::error::Result;

const LOGIN_SUCCESS_PATH: &str = "/auth/google/login/success";

impl MemberdbClient {
    /// Fetch the identity bound to the current session.
    pub async fn login_success(&self) -> Result<CallerIdentity> {
        let request = self.client.get(self.url(LOGIN_SUCCESS_PATH));
        let response = self.credentialed(request).send().await?;
        let body: LoginSuccess = self.handle_response(response).await?;
        Ok(body.user)
    }
}

#[async_trait]
impl IdentityProvider for MemberdbClient {
    async fn fetch_identity(&self) -> auth::Result<CallerIdentity> {
        self.login_success().await.map_err(AuthError::from)
    }
}
