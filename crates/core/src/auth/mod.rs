mod access;
mod error;
mod traits;
mod types;

pub use access::{evaluate_access, AccessDenied};
pub use error::AuthError;
pub use traits::{IdentityProvider, Result};
pub use types::{CallerIdentity, LoginSuccess};
