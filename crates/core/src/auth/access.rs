use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{AuthError, CallerIdentity};
use crate::routes::Route;

/// Why the caller may not use an admin page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessDenied {
    /// The identity check failed outright (no session, network error, bad response).
    #[error("caller is not authenticated")]
    Unauthenticated,

    /// The caller is signed in but is not an admin.
    #[error("caller lacks admin privileges")]
    Forbidden,
}

impl AccessDenied {
    /// Where a denied caller is sent.
    pub fn redirect(&self) -> Route {
        match self {
            Self::Unauthenticated => Route::LoginError,
            Self::Forbidden => Route::InvalidAdmin,
        }
    }
}

/// Decides admin access from the outcome of the identity check.
///
/// Fails closed: any error is treated as unauthenticated.
pub fn evaluate_access(
    identity: Result<CallerIdentity, AuthError>,
) -> Result<CallerIdentity, AccessDenied> {
    match identity {
        Ok(identity) if identity.is_admin => Ok(identity),
        Ok(_) => Err(AccessDenied::Forbidden),
        Err(_) => Err(AccessDenied::Unauthenticated),
    }
}
