//! Boundary responses handed to the enclosing framework adapter.
//!
//! This module is the single place where `Missing` and `NotOwner` collapse
//! into one opaque not-found value. The internal cause is logged before it
//! disappears, so existence of other users' records never leaks outward,
//! not even as a differently shaped response.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use tracing::{debug, error};

use crate::domain::error::DomainError;
use crate::domain::form::FieldErrors;

/// Characters of the `next` value left unescaped, so redirect targets keep
/// their path shape (`?next=/notes/add/`, not `?next=%2Fnotes%2Fadd%2F`).
const NEXT_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'/')
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Redirect-to-login outcome carrying an optional return path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginRedirect {
    login_path: String,
    next: Option<String>,
}

impl LoginRedirect {
    /// Redirect to `login_path` with no return target.
    #[must_use]
    pub fn new(login_path: impl Into<String>) -> Self {
        Self {
            login_path: login_path.into(),
            next: None,
        }
    }

    /// Attach the path the caller should return to after authenticating.
    #[must_use]
    pub fn with_next(mut self, next: impl Into<String>) -> Self {
        self.next = Some(next.into());
        self
    }

    /// Return path, when one was attached.
    #[must_use]
    pub fn next(&self) -> Option<&str> {
        self.next.as_deref()
    }

    /// Location header value: `login_path?next=<return path>`.
    #[must_use]
    pub fn location(&self) -> String {
        self.next.as_ref().map_or_else(
            || self.login_path.clone(),
            |next| {
                format!(
                    "{}?next={}",
                    self.login_path,
                    utf8_percent_encode(next, NEXT_VALUE)
                )
            },
        )
    }
}

/// Externally observable response classes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallerResponse {
    /// Send the caller to the login page, returning afterwards.
    LoginRedirect(LoginRedirect),
    /// Opaque not-found: absent and not-owned records answer identically.
    NotFound,
    /// Re-render the form with field-level messages and the echoed input.
    Form(FieldErrors),
    /// Collaborator failure; the adapter picks its own server-error shape.
    Failure,
}

/// Collapse a refused operation into the response the caller observes.
///
/// `attempted` is the path of the refused request; it becomes the login
/// redirect's return target for anonymous callers.
#[must_use]
pub fn respond(error: DomainError, login_path: &str, attempted: &str) -> CallerResponse {
    match error {
        DomainError::Unauthenticated => {
            CallerResponse::LoginRedirect(LoginRedirect::new(login_path).with_next(attempted))
        }
        DomainError::Missing => {
            debug!(attempted, cause = "absent", "answering not found");
            CallerResponse::NotFound
        }
        DomainError::NotOwner => {
            debug!(attempted, cause = "not owner", "answering not found");
            CallerResponse::NotFound
        }
        DomainError::Rejected(errors) => CallerResponse::Form(errors),
        DomainError::Store { message } => {
            error!(attempted, message, "record store failure");
            CallerResponse::Failure
        }
    }
}
