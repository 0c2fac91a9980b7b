//! Pure mapping from create-user responses to outcomes.

use serde::{Deserialize, Serialize};

use super::SubmitError;

/// Result of a submission that reached the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmitOutcome {
    /// Any 2xx response.
    Created,
    /// 409: a user with that email already exists.
    AlreadyExists,
    /// Every other status, or no response at all.
    Failed,
}

impl SubmitOutcome {
    pub fn from_result(result: &Result<(), SubmitError>) -> Self {
        match result {
            Ok(()) => Self::Created,
            Err(SubmitError::Conflict) => Self::AlreadyExists,
            Err(SubmitError::Rejected { .. } | SubmitError::Transport(_)) => Self::Failed,
        }
    }

    /// Only a created user clears the form.
    pub fn resets_form(&self) -> bool {
        matches!(self, Self::Created)
    }
}

/// Maps a create-user response status to a result.
///
/// - 2xx -> `Ok(())`
/// - 409 -> [`SubmitError::Conflict`]
/// - anything else -> [`SubmitError::Rejected`]
///
/// # Examples
///
/// ```
/// use memberdb_core::account::{classify_status, SubmitError};
///
/// assert_eq!(classify_status(201), Ok(()));
/// assert_eq!(classify_status(409), Err(SubmitError::Conflict));
/// ```
pub fn classify_status(status: u16) -> Result<(), SubmitError> {
    match status {
        200..=299 => Ok(()),
        409 => Err(SubmitError::Conflict),
        status => Err(SubmitError::Rejected { status }),
    }
}
