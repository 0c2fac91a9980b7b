//! Access guard for admin pages.
//!
//! Runs the identity check and sends denied callers to the matching static
//! view. Denials never surface as in-form messages.

use std::sync::Arc;

use memberdb_core::auth::{evaluate_access, AccessDenied, CallerIdentity, IdentityProvider};

use crate::navigation::Navigator;

/// Admin-only gate in front of a page.
#[derive(Clone)]
pub struct AccessGuard {
    identity: Arc<dyn IdentityProvider>,
    navigator: Arc<dyn Navigator>,
}

impl AccessGuard {
    pub fn new(identity: Arc<dyn IdentityProvider>, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            identity,
            navigator,
        }
    }

    /// Check that the caller is a signed-in admin.
    ///
    /// Issues one identity request and navigates at most once. There is no
    /// retry: a network failure is handled exactly like a missing session.
    pub async fn check_access(&self) -> Result<CallerIdentity, AccessDenied> {
        let identity = self.identity.fetch_identity().await;
        if let Err(e) = &identity {
            tracing::warn!(error = %e, "Identity check failed");
        }

        match evaluate_access(identity) {
            Ok(identity) => {
                tracing::debug!("Admin access granted");
                Ok(identity)
            }
            Err(denied) => {
                let route = denied.redirect();
                tracing::warn!(reason = %denied, route = %route, "Access denied");
                self.navigator.navigate(route);
                Err(denied)
            }
        }
    }
}
