//! Transient notices describing the outcome of an action.
//!
//! Notices are short-lived, non-blocking messages. Each submit attempt that
//! reaches the network produces exactly one.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::account::SubmitOutcome;

pub const USER_ADDED: &str = "Added user successfully";
pub const USER_EXISTS: &str = "User already exists";
pub const USER_ADD_FAILED: &str = "Failed to add user";

/// Severity of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Success,
    Info,
    Error,
}

impl std::fmt::Display for NoticeLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::Info => write!(f, "info"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// A notice as published on the notifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notice {
    pub id: Uuid,
    pub level: NoticeLevel,
    pub message: String,
    /// Whether the notice goes away on its own after the TTL.
    pub auto_dismiss: bool,
    pub created_at: DateTime<Utc>,
}

impl Notice {
    pub fn new(level: NoticeLevel, message: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            level,
            message: message.into(),
            auto_dismiss: true,
            created_at: now,
        }
    }

    pub fn success(message: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self::new(NoticeLevel::Success, message, now)
    }

    pub fn info(message: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self::new(NoticeLevel::Info, message, now)
    }

    pub fn error(message: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self::new(NoticeLevel::Error, message, now)
    }

    /// The notice reporting a submission outcome.
    pub fn for_outcome(outcome: SubmitOutcome, now: DateTime<Utc>) -> Self {
        match outcome {
            SubmitOutcome::Created => Self::success(USER_ADDED, now),
            SubmitOutcome::AlreadyExists => Self::info(USER_EXISTS, now),
            SubmitOutcome::Failed => Self::error(USER_ADD_FAILED, now),
        }
    }

    /// Check if the notice has expired. Notices that never auto-dismiss
    /// never expire.
    pub fn is_expired(&self, ttl: Duration, now: DateTime<Utc>) -> bool {
        self.auto_dismiss
            && self
                .created_at
                .checked_add_signed(ttl)
                .is_some_and(|expires_at| expires_at <= now)
    }
}
