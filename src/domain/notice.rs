use std::time::Duration;

use chrono::{DateTime, Utc};

use super::outcome::Outcome;
use crate::prelude::AppError;

pub const DEFAULT_DISPLAY_FOR: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Short-lived message for the user. `display_for` is only a hint; hiding
/// the notice once it expires is up to whoever renders it.
#[derive(Debug, Clone)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
    pub display_for: Duration,
    pub issued_at: DateTime<Utc>,
}

impl Notice {
    pub fn success(message: String) -> Self {
        Self::with_kind(NoticeKind::Success, message)
    }

    pub fn error(message: String) -> Self {
        Self::with_kind(NoticeKind::Error, message)
    }

    fn with_kind(kind: NoticeKind, message: String) -> Self {
        Notice {
            kind,
            message,
            display_for: DEFAULT_DISPLAY_FOR,
            issued_at: Utc::now(),
        }
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        let hint = chrono::Duration::from_std(self.display_for)
            .unwrap_or_else(|_| chrono::Duration::zero());
        self.issued_at + hint
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at()
    }

    /// A cancelled operation gets no notice.
    pub fn from_outcome(outcome: &Outcome) -> Option<Self> {
        match outcome {
            Outcome::Created(c) => Some(Notice::success(format!("Added {}", c.name))),
            Outcome::Updated(c) => Some(Notice::success(format!("Updated {}'s number", c.name))),
            Outcome::Removed(c) => Some(Notice::success(format!("Deleted {}", c.name))),
            Outcome::AlreadyGone { name, .. } => Some(Notice::error(format!(
                "Information of {} has already been removed from server",
                name
            ))),
            Outcome::Cancelled => None,
        }
    }
}

impl From<&AppError> for Notice {
    fn from(err: &AppError) -> Self {
        Notice::error(err.to_string())
    }
}
