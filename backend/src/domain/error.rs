//! Transport-agnostic failure taxonomy for policy-gated operations.
//!
//! `Missing` and `NotOwner` stay distinct here so logs can tell them apart;
//! only the collapse in [`outcome`](crate::domain::outcome) folds them into
//! one opaque not-found response. All variants are terminal for the current
//! operation: nothing is retried or recovered beyond reporting.

use crate::domain::form::FieldErrors;

/// Terminal failure of a policy-gated operation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// Caller has no identity; the boundary answers with a login redirect.
    #[error("authentication required")]
    Unauthenticated,
    /// No record answers to the requested id.
    #[error("record not found")]
    Missing,
    /// The record exists but belongs to another author.
    #[error("record is owned by another author")]
    NotOwner,
    /// Submitted fields were refused; nothing was persisted.
    #[error("submitted form was rejected")]
    Rejected(FieldErrors),
    /// The record store failed mid-operation.
    #[error("record store failure: {message}")]
    Store {
        /// Adapter-provided failure description.
        message: String,
    },
}

impl DomainError {
    /// Rejection carrying a single field-level message.
    #[must_use]
    pub fn rejected(field: &'static str, message: impl Into<String>) -> Self {
        Self::Rejected(FieldErrors::single(field, message))
    }

    /// Store failure with an adapter-provided description.
    #[must_use]
    pub fn store(message: impl Into<String>) -> Self {
        Self::Store {
            message: message.into(),
        }
    }
}
