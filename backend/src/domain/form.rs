//! Field-keyed validation errors returned to the caller with the form.
//!
//! Adapters render these next to the echoed input; the messages are fixed
//! literals asserted verbatim by callers.

use serde::Serialize;

/// Message attached to a required field submitted blank.
pub const REQUIRED_FIELD: &str = "Обязательное поле.";

/// A single message bound to one form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Form field the message belongs to.
    pub field: &'static str,
    /// Message rendered next to the field, verbatim.
    pub message: String,
}

/// Ordered collection of field-level messages for one submission.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    /// Empty error surface.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Error surface holding a single message.
    #[must_use]
    pub fn single(field: &'static str, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.push(field, message);
        errors
    }

    /// Append a message for `field`.
    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.push(FieldError {
            field,
            message: message.into(),
        });
    }

    /// `true` when no field carries a message.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Messages recorded for `field`, in submission order.
    pub fn messages_for<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a str> {
        self.0
            .iter()
            .filter(move |error| error.field == field)
            .map(|error| error.message.as_str())
    }

    /// Iterate over every recorded message.
    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }
}
