//! Ownership policy: who may touch a single record.
//!
//! Ownership is exactly `author_id == caller.id`; there is no delegation,
//! sharing, or role escalation. The two refusal branches stay observably
//! different: anonymous callers are sent to login, while authenticated
//! non-owners get an answer indistinguishable from the record being absent.

use crate::domain::caller::Caller;
use crate::domain::error::DomainError;
use crate::domain::user::{User, UserId};

/// Admit only authenticated callers.
///
/// Gates record creation and owned-list views; anonymous callers are
/// refused with [`DomainError::Unauthenticated`] before any store access.
pub fn require_author(caller: &Caller) -> Result<&User, DomainError> {
    caller.user().ok_or(DomainError::Unauthenticated)
}

/// Admit only the record's author.
///
/// Callers must already be authenticated when this runs; an authenticated
/// caller who is not the author is refused with [`DomainError::NotOwner`], which
/// the boundary renders exactly like true absence.
pub fn require_owner<'a>(caller: &'a Caller, author_id: UserId) -> Result<&'a User, DomainError> {
    let user = require_author(caller)?;
    if user.id() == author_id {
        Ok(user)
    } else {
        Err(DomainError::NotOwner)
    }
}
