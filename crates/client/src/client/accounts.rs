//! Account API operations.

use async_trait::async_trait;
use memberdb_core::account::{self, AccountService, NewUserRequest, SubmitError};

use super::MemberdbClient;
use crate::error::Result;

const ADD_USER_PATH: &str = "/account/admin/add-user";

impl MemberdbClient {
    /// Create a new user.
    ///
    /// The session cookie is attached here too. A browser would send its
    /// own cookie jar; the terminal client has only the configured cookie.
    pub async fn add_user(&self, request: &NewUserRequest) -> Result<()> {
        let request = self.client.post(self.url(ADD_USER_PATH)).json(request);
        let response = self.credentialed(request).send().await?;
        self.handle_empty_response(response).await
    }
}

#[async_trait]
impl AccountService for MemberdbClient {
    async fn add_user(&self, request: &NewUserRequest) -> account::Result<()> {
        MemberdbClient::add_user(self, request)
            .await
            .map_err(SubmitError::from)
    }
}
