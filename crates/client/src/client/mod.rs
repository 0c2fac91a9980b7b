//! HTTP client for the memberdb API.

pub mod accounts;
pub mod auth;

use reqwest::header::COOKIE;

use crate::config::Config;
use crate::error::{ClientError, Result};

/// HTTP client for the memberdb API.
#[derive(Debug, Clone)]
pub struct MemberdbClient {
    client: reqwest::Client,
    base_url: String,
    session_cookie: Option<String>,
}

impl MemberdbClient {
    /// Create a new client with the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            session_cookie: None,
        }
    }

    /// Create a client from configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: config.backend_url.clone(),
            session_cookie: config.session_cookie.clone(),
        })
    }

    /// Attach a session cookie to credentialed requests.
    pub fn with_session_cookie(mut self, cookie: impl Into<String>) -> Self {
        self.session_cookie = Some(cookie.into());
        self
    }

    /// Build a URL for an endpoint.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send the session cookie along with the request, if one is configured.
    fn credentialed(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.session_cookie {
            Some(cookie) => request.header(COOKIE, cookie),
            None => request,
        }
    }

    /// Handle responses with a JSON body.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();
        if status.is_success() {
            let body = response.bytes().await?;
            serde_json::from_slice(&body).map_err(|e| ClientError::InvalidResponse(e.to_string()))
        } else {
            Err(server_error(response).await)
        }
    }

    /// Handle responses whose body is ignored.
    async fn handle_empty_response(&self, response: reqwest::Response) -> Result<()> {
        if response.status().is_success() {
            Ok(())
        } else {
            Err(server_error(response).await)
        }
    }
}

async fn server_error(response: reqwest::Response) -> ClientError {
    let status = response.status().as_u16();
    let message = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());
    ClientError::ServerError { status, message }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::{
        extract::State,
        http::{HeaderMap, StatusCode},
        routing::{get, post},
        Json, Router,
    };
    use memberdb_core::account::{AccountService, NewUserRequest, PledgeClass, SubmitError};
    use memberdb_core::auth::{AuthError, IdentityProvider};
    use serde_json::{json, Value};
    use tokio::net::TcpListener;

    use super::*;

    /// What the mock backend answers and what it received.
    #[derive(Clone)]
    struct Backend {
        identity: (StatusCode, Value),
        add_user_status: StatusCode,
        cookies: Arc<Mutex<Vec<Option<String>>>>,
        received: Arc<Mutex<Vec<Value>>>,
    }

    impl Backend {
        fn new(identity: (StatusCode, Value), add_user_status: StatusCode) -> Self {
            Self {
                identity,
                add_user_status,
                cookies: Arc::default(),
                received: Arc::default(),
            }
        }
    }

    async fn login_success(
        State(backend): State<Backend>,
        headers: HeaderMap,
    ) -> (StatusCode, Json<Value>) {
        let cookie = headers
            .get("cookie")
            .and_then(|v| v.to_str().ok())
            .map(String::from);
        backend.cookies.lock().unwrap().push(cookie);
        let (status, body) = backend.identity.clone();
        (status, Json(body))
    }

    async fn add_user(
        State(backend): State<Backend>,
        headers: HeaderMap,
        Json(body): Json<Value>,
    ) -> StatusCode {
        let cookie = headers
            .get("cookie")
            .and_then(|v| v.to_str().ok())
            .map(String::from);
        backend.cookies.lock().unwrap().push(cookie);
        backend.received.lock().unwrap().push(body);
        backend.add_user_status
    }

    /// Serve the mock backend on an ephemeral port and return its base URL.
    async fn spawn(backend: Backend) -> String {
        let app = Router::new()
            .route("/auth/google/login/success", get(login_success))
            .route("/account/admin/add-user", post(add_user))
            .with_state(backend);

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}")
    }

    fn jane() -> NewUserRequest {
        NewUserRequest {
            first: "Jane".to_string(),
            last: "Doe".to_string(),
            bu_email: "jdoe@bu.edu".to_string(),
            class: PledgeClass::Alpha,
            is_admin: true,
        }
    }

    #[tokio::test]
    async fn test_login_success_sends_cookie() {
        let backend = Backend::new(
            (StatusCode::OK, json!({ "user": { "is_admin": true } })),
            StatusCode::CREATED,
        );
        let url = spawn(backend.clone()).await;
        let client = MemberdbClient::new(url).with_session_cookie("session=abc");

        let identity = client.login_success().await.unwrap();

        assert!(identity.is_admin);
        assert_eq!(
            backend.cookies.lock().unwrap().as_slice(),
            &[Some("session=abc".to_string())]
        );
    }

    #[tokio::test]
    async fn test_identity_failures_map_to_auth_errors() {
        let backend = Backend::new(
            (StatusCode::UNAUTHORIZED, json!({ "message": "no session" })),
            StatusCode::CREATED,
        );
        let url = spawn(backend).await;
        let client = MemberdbClient::new(url);

        let err = client.fetch_identity().await.unwrap_err();
        assert_eq!(err, AuthError::Status { status: 401 });
    }

    #[tokio::test]
    async fn test_unexpected_identity_body_is_invalid_response() {
        let backend = Backend::new(
            (StatusCode::OK, json!({ "user": null })),
            StatusCode::CREATED,
        );
        let url = spawn(backend).await;
        let client = MemberdbClient::new(url);

        let err = client.fetch_identity().await.unwrap_err();
        assert!(matches!(err, AuthError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn test_add_user_posts_json_payload() {
        let backend = Backend::new((StatusCode::OK, json!({})), StatusCode::CREATED);
        let url = spawn(backend.clone()).await;
        let client = MemberdbClient::new(format!("{url}/"));

        client.add_user(&jane()).await.unwrap();

        assert_eq!(
            backend.received.lock().unwrap().as_slice(),
            &[json!({
                "first": "Jane",
                "last": "Doe",
                "bu_email": "jdoe@bu.edu",
                "class": "Alpha",
                "is_admin": true,
            })]
        );
    }

    #[tokio::test]
    async fn test_add_user_sends_configured_cookie() {
        let backend = Backend::new((StatusCode::OK, json!({})), StatusCode::CREATED);
        let url = spawn(backend.clone()).await;
        let client = MemberdbClient::new(url).with_session_cookie("session=abc");

        client.add_user(&jane()).await.unwrap();

        assert_eq!(
            backend.cookies.lock().unwrap().as_slice(),
            &[Some("session=abc".to_string())]
        );
    }

    #[tokio::test]
    async fn test_add_user_conflict() {
        let backend = Backend::new((StatusCode::OK, json!({})), StatusCode::CONFLICT);
        let url = spawn(backend).await;
        let client = MemberdbClient::new(url);

        let err = AccountService::add_user(&client, &jane()).await.unwrap_err();
        assert_eq!(err, SubmitError::Conflict);
    }

    #[tokio::test]
    async fn test_add_user_server_error() {
        let backend = Backend::new(
            (StatusCode::OK, json!({})),
            StatusCode::INTERNAL_SERVER_ERROR,
        );
        let url = spawn(backend).await;
        let client = MemberdbClient::new(url);

        let err = AccountService::add_user(&client, &jane()).await.unwrap_err();
        assert_eq!(err, SubmitError::Rejected { status: 500 });
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_transport_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let client = MemberdbClient::new(format!("http://{addr}"));

        let err = AccountService::add_user(&client, &jane()).await.unwrap_err();
        assert!(matches!(err, SubmitError::Transport(_)));

        let err = client.fetch_identity().await.unwrap_err();
        assert!(matches!(err, AuthError::Transport(_)));
    }
}
