//! Comment entities and submission form.
//!
//! Comments hang off a news item, are publicly visible there, and are only
//! ever mutated by their author. `created_at` is assigned once at creation
//! and survives every later edit.

mod service;

pub use service::CommentService;

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::form::{FieldErrors, REQUIRED_FIELD};
use crate::domain::moderation::validate_comment_text;
use crate::domain::news::NewsId;
use crate::domain::user::UserId;

/// Stable comment identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommentId(Uuid);

impl CommentId {
    /// Wrap a store-issued identifier.
    #[must_use]
    pub const fn new(id: Uuid) -> Self {
        Self(id)
    }

    /// Generate a fresh random identifier.
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A reader comment under a news item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    id: CommentId,
    news_id: NewsId,
    author_id: UserId,
    text: String,
    created_at: DateTime<Utc>,
}

impl Comment {
    /// Assemble a comment from stored fields.
    #[must_use]
    pub fn new(
        id: CommentId,
        news_id: NewsId,
        author_id: UserId,
        text: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            news_id,
            author_id,
            text: text.into(),
            created_at,
        }
    }

    /// Stable identifier.
    #[must_use]
    pub const fn id(&self) -> CommentId {
        self.id
    }

    /// News item the comment belongs to.
    #[must_use]
    pub const fn news_id(&self) -> NewsId {
        self.news_id
    }

    /// Author who created the comment; sole holder of edit/delete rights.
    #[must_use]
    pub const fn author_id(&self) -> UserId {
        self.author_id
    }

    /// Comment body.
    #[must_use]
    pub fn text(&self) -> &str {
        self.text.as_str()
    }

    /// Creation timestamp; never changes after creation.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Copy with replaced text. Identity, authorship, news binding, and
    /// creation time all carry over untouched.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }
}

/// Submitted comment form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentForm {
    text: String,
}

impl CommentForm {
    /// Form with the given body text.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Submitted text, as typed.
    #[must_use]
    pub fn text(&self) -> &str {
        self.text.as_str()
    }

    /// Validate the submission: the body is required and must pass the
    /// banned-word screen.
    pub(crate) fn validated_text(&self) -> Result<&str, FieldErrors> {
        if self.text.trim().is_empty() {
            return Err(FieldErrors::single("text", REQUIRED_FIELD));
        }
        validate_comment_text(&self.text)?;
        Ok(self.text.as_str())
    }
}
