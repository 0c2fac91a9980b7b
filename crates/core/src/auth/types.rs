use serde::{Deserialize, Serialize};

/// The signed-in caller as reported by the identity endpoint.
///
/// Read-only: fetched once per page entry for the admin check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallerIdentity {
    pub is_admin: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bu_email: Option<String>,
}

impl CallerIdentity {
    /// Identity with only the admin flag set.
    pub fn new(is_admin: bool) -> Self {
        Self {
            is_admin,
            first: None,
            last: None,
            bu_email: None,
        }
    }

    /// Full name when the backend sent both parts.
    pub fn display_name(&self) -> Option<String> {
        match (&self.first, &self.last) {
            (Some(first), Some(last)) => Some(format!("{first} {last}")),
            (Some(name), None) | (None, Some(name)) => Some(name.clone()),
            (None, None) => None,
        }
    }
}

/// Body of a successful `GET /auth/google/login/success`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginSuccess {
    pub user: CallerIdentity,
}
