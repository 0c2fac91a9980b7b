//! Hand-written fakes for the service traits.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use memberdb_core::account::{self, AccountService, NewUserRequest, SubmitError};
use memberdb_core::auth::{self, AuthError, CallerIdentity, IdentityProvider};

/// Shared call counter.
#[derive(Debug, Clone, Default)]
pub struct Calls(Arc<AtomicUsize>);

impl Calls {
    pub fn get(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }

    fn bump(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }
}

/// Identity endpoint with a scripted answer.
pub struct FakeIdentity {
    result: Result<CallerIdentity, AuthError>,
    calls: Calls,
}

impl FakeIdentity {
    pub fn admin() -> Self {
        Self::answering(Ok(CallerIdentity::new(true)))
    }

    pub fn member() -> Self {
        Self::answering(Ok(CallerIdentity::new(false)))
    }

    pub fn failing(error: AuthError) -> Self {
        Self::answering(Err(error))
    }

    fn answering(result: Result<CallerIdentity, AuthError>) -> Self {
        Self {
            result,
            calls: Calls::default(),
        }
    }

    pub fn calls(&self) -> Calls {
        self.calls.clone()
    }
}

#[async_trait]
impl IdentityProvider for FakeIdentity {
    async fn fetch_identity(&self) -> auth::Result<CallerIdentity> {
        self.calls.bump();
        self.result.clone()
    }
}

/// Create-user endpoint that records every request and answers the same way.
#[derive(Clone)]
pub struct FakeAccounts {
    result: Arc<Mutex<Result<(), SubmitError>>>,
    requests: Arc<Mutex<Vec<NewUserRequest>>>,
}

impl FakeAccounts {
    pub fn succeeding() -> Self {
        Self::answering(Ok(()))
    }

    pub fn failing(error: SubmitError) -> Self {
        Self::answering(Err(error))
    }

    fn answering(result: Result<(), SubmitError>) -> Self {
        Self {
            result: Arc::new(Mutex::new(result)),
            requests: Arc::default(),
        }
    }

    /// Change the scripted answer for later calls.
    pub fn answer(&self, result: Result<(), SubmitError>) {
        *self.result.lock().unwrap() = result;
    }

    pub fn requests(&self) -> Vec<NewUserRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl AccountService for FakeAccounts {
    async fn add_user(&self, request: &NewUserRequest) -> account::Result<()> {
        self.requests.lock().unwrap().push(request.clone());
        self.result.lock().unwrap().clone()
    }
}

/// Create-user endpoint that never answers.
#[derive(Clone, Default)]
pub struct StalledAccounts {
    calls: Calls,
}

impl StalledAccounts {
    pub fn calls(&self) -> Calls {
        self.calls.clone()
    }
}

#[async_trait]
impl AccountService for StalledAccounts {
    async fn add_user(&self, _request: &NewUserRequest) -> account::Result<()> {
        self.calls.bump();
        std::future::pending().await
    }
}
