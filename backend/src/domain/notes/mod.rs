//! Note entities and submission form.
//!
//! Notes are strictly private: listed, shown, edited, and deleted only by
//! their author. The slug is unique across the whole store, not per owner.

mod service;

pub use service::NoteService;

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::form::{FieldErrors, REQUIRED_FIELD};
use crate::domain::user::UserId;

/// Stable note identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(Uuid);

impl NoteId {
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

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A personal note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    id: NoteId,
    title: String,
    text: String,
    slug: String,
    author_id: UserId,
}

impl Note {
    /// Assemble a note from stored fields.
    #[must_use]
    pub fn new(
        id: NoteId,
        title: impl Into<String>,
        text: impl Into<String>,
        slug: impl Into<String>,
        author_id: UserId,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            text: text.into(),
            slug: slug.into(),
            author_id,
        }
    }

    /// Stable identifier.
    #[must_use]
    pub const fn id(&self) -> NoteId {
        self.id
    }

    /// Note title.
    #[must_use]
    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    /// Note body.
    #[must_use]
    pub fn text(&self) -> &str {
        self.text.as_str()
    }

    /// URL-safe identifier, unique store-wide.
    #[must_use]
    pub fn slug(&self) -> &str {
        self.slug.as_str()
    }

    /// Author who created the note; the only identity that ever sees it.
    #[must_use]
    pub const fn author_id(&self) -> UserId {
        self.author_id
    }

    /// Copy with the form fields applied. Identity and authorship carry
    /// over untouched.
    #[must_use]
    pub fn with_fields(
        mut self,
        title: impl Into<String>,
        text: impl Into<String>,
        slug: impl Into<String>,
    ) -> Self {
        self.title = title.into();
        self.text = text.into();
        self.slug = slug.into();
        self
    }
}

/// Submitted note form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteForm {
    title: String,
    text: String,
    slug: Option<String>,
}

impl NoteForm {
    /// Form with a title and body and no explicit slug.
    #[must_use]
    pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
            slug: None,
        }
    }

    /// Attach an explicit slug, overriding derivation from the title.
    #[must_use]
    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    /// Submitted title, as typed.
    #[must_use]
    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    /// Submitted body, as typed.
    #[must_use]
    pub fn text(&self) -> &str {
        self.text.as_str()
    }

    /// Explicit slug, when one was supplied.
    #[must_use]
    pub fn slug(&self) -> Option<&str> {
        self.slug.as_deref()
    }

    /// Validate the required fields, collecting every violation.
    pub(crate) fn validate_required(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        if self.title.trim().is_empty() {
            errors.push("title", REQUIRED_FIELD);
        }
        if self.text.trim().is_empty() {
            errors.push("text", REQUIRED_FIELD);
        }
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn with_fields_keeps_identity_and_author() {
        let note = Note::new(
            NoteId::random(),
            "Заголовок3",
            "Текст комментария",
            "zagolovok3",
            UserId::random(),
        );
        let updated = note
            .clone()
            .with_fields("Заголовок99", "Обновлённый комментарий", "zagolovok99");

        assert_eq!(updated.id(), note.id());
        assert_eq!(updated.author_id(), note.author_id());
        assert_eq!(updated.title(), "Заголовок99");
        assert_eq!(updated.text(), "Обновлённый комментарий");
        assert_eq!(updated.slug(), "zagolovok99");
    }

    #[rstest]
    fn blank_required_fields_are_all_reported() {
        let errors = NoteForm::new("  ", "")
            .validate_required()
            .expect_err("blank fields must fail");
        assert_eq!(
            errors.messages_for("title").collect::<Vec<_>>(),
            [REQUIRED_FIELD]
        );
        assert_eq!(
            errors.messages_for("text").collect::<Vec<_>>(),
            [REQUIRED_FIELD]
        );
    }

    #[rstest]
    fn complete_forms_pass_required_validation() {
        NoteForm::new("Заголовок5", "Текст5")
            .with_slug("slug")
            .validate_required()
            .expect("complete form passes");
    }
}
