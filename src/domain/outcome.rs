use super::contact::{Contact, ContactId};

/// How a contact-affecting operation ended when it did not fail.
///
/// Failures (connection trouble, validation) come back as `Err(AppError)`
/// and always leave the local list as it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Created(Contact),
    Updated(Contact),
    Removed(Contact),
    /// The backend no longer had the record. The local copy was dropped.
    AlreadyGone { id: ContactId, name: String },
    /// The caller declined the confirmation; nothing was sent.
    Cancelled,
}

impl Outcome {
    pub fn is_stale_conflict(&self) -> bool {
        matches!(self, Outcome::AlreadyGone { .. })
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Outcome::Cancelled)
    }
}
