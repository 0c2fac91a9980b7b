//! The add-user page.
//!
//! Entering the page runs the access guard once. The form controller is only
//! reachable after the guard granted access.

use std::sync::Arc;

use memberdb_core::account::AccountService;
use memberdb_core::auth::{AccessDenied, CallerIdentity};
use memberdb_core::routes::Route;

use crate::controller::FormController;
use crate::guard::AccessGuard;
use crate::notifier::Notifier;

pub struct AddUserPage {
    guard: AccessGuard,
    controller: FormController,
    access: Option<Result<CallerIdentity, AccessDenied>>,
}

impl AddUserPage {
    pub fn new(guard: AccessGuard, accounts: Arc<dyn AccountService>, notifier: Notifier) -> Self {
        Self {
            guard,
            controller: FormController::new(accounts, notifier),
            access: None,
        }
    }

    pub fn route(&self) -> Route {
        Route::AddUser
    }

    /// Run the access guard for this activation.
    ///
    /// Only the first call checks; later calls return the same decision
    /// without another request or navigation.
    pub async fn enter(&mut self) -> Result<CallerIdentity, AccessDenied> {
        let access = match self.access.take() {
            Some(access) => access,
            None => self.guard.check_access().await,
        };
        self.access.insert(access).clone()
    }

    /// The form, once access was granted.
    pub fn form(&mut self) -> Option<&mut FormController> {
        match &self.access {
            Some(Ok(_)) => Some(&mut self.controller),
            _ => None,
        }
    }
}
