//! Note lifecycle: create, edit, delete, detail, list.
//!
//! Notes are visible to their author alone. Slug resolution runs on every
//! create and edit: an explicit slug wins, otherwise the slug derives from
//! the submitted title, and either way a collision with any other note is
//! rejected on the `slug` field with the attempted value embedded in the
//! message.

use std::sync::Arc;

use crate::domain::access::{require_author, require_owner};
use crate::domain::caller::Caller;
use crate::domain::error::DomainError;
use crate::domain::ports::{NoteRepository, NoteRepositoryError};
use crate::domain::slug::{resolve_slug, slug_taken_message};

use super::{Note, NoteForm, NoteId};

fn map_note_error(error: NoteRepositoryError) -> DomainError {
    DomainError::store(format!("note repository: {error}"))
}

fn slug_taken(slug: &str) -> DomainError {
    DomainError::rejected("slug", slug_taken_message(slug))
}

/// Note lifecycle service.
#[derive(Clone)]
pub struct NoteService<R> {
    note_repo: Arc<R>,
}

impl<R> NoteService<R> {
    /// Create a new service over the note store.
    pub fn new(note_repo: Arc<R>) -> Self {
        Self { note_repo }
    }
}

impl<R> NoteService<R>
where
    R: NoteRepository,
{
    /// Create a note owned by the caller.
    pub async fn create(&self, caller: &Caller, form: &NoteForm) -> Result<Note, DomainError> {
        let author = require_author(caller)?;
        form.validate_required().map_err(DomainError::Rejected)?;

        let slug = resolve_slug(form.title(), form.slug());
        if self
            .note_repo
            .slug_exists(&slug, None)
            .await
            .map_err(map_note_error)?
        {
            return Err(slug_taken(&slug));
        }

        let note = Note::new(NoteId::random(), form.title(), form.text(), slug.as_str(), author.id());
        match self.note_repo.insert(&note).await {
            Ok(()) => Ok(note),
            // Lost the race with a concurrent write; same rejection as the
            // pre-check so the caller cannot tell the two apart.
            Err(NoteRepositoryError::SlugTaken { slug: taken }) => Err(slug_taken(&taken)),
            Err(error) => Err(map_note_error(error)),
        }
    }

    /// Edit the caller's own note.
    ///
    /// Without an explicit slug the stored slug re-derives from the new
    /// title. The note under edit is excluded from its own collision check,
    /// so keeping the current slug is never a conflict.
    pub async fn edit(
        &self,
        caller: &Caller,
        note_id: NoteId,
        form: &NoteForm,
    ) -> Result<Note, DomainError> {
        require_author(caller)?;
        let existing = self
            .note_repo
            .find_by_id(note_id)
            .await
            .map_err(map_note_error)?
            .ok_or(DomainError::Missing)?;
        require_owner(caller, existing.author_id())?;
        form.validate_required().map_err(DomainError::Rejected)?;

        let slug = resolve_slug(form.title(), form.slug());
        if self
            .note_repo
            .slug_exists(&slug, Some(existing.id()))
            .await
            .map_err(map_note_error)?
        {
            return Err(slug_taken(&slug));
        }

        let updated = existing.with_fields(form.title(), form.text(), slug.as_str());
        match self.note_repo.save(&updated).await {
            Ok(()) => Ok(updated),
            Err(NoteRepositoryError::SlugTaken { slug: taken }) => Err(slug_taken(&taken)),
            Err(error) => Err(map_note_error(error)),
        }
    }

    /// Delete the caller's own note.
    ///
    /// Removes exactly one record; refused deletions remove nothing.
    pub async fn delete(&self, caller: &Caller, note_id: NoteId) -> Result<(), DomainError> {
        require_author(caller)?;
        let existing = self
            .note_repo
            .find_by_id(note_id)
            .await
            .map_err(map_note_error)?
            .ok_or(DomainError::Missing)?;
        require_owner(caller, existing.author_id())?;

        self.note_repo
            .delete(existing.id())
            .await
            .map_err(map_note_error)
    }

    /// Fetch a single note; only its author ever sees it.
    ///
    /// Anyone else — including authenticated readers — gets an answer
    /// indistinguishable from the note being absent.
    pub async fn detail(&self, caller: &Caller, note_id: NoteId) -> Result<Note, DomainError> {
        require_author(caller)?;
        let note = self
            .note_repo
            .find_by_id(note_id)
            .await
            .map_err(map_note_error)?
            .ok_or(DomainError::Missing)?;
        require_owner(caller, note.author_id())?;
        Ok(note)
    }

    /// The caller's own notes, in insertion order.
    ///
    /// The owner filter runs inside the store; there is no not-found branch
    /// on a collection query, only an empty or non-empty result.
    pub async fn list(&self, caller: &Caller) -> Result<Vec<Note>, DomainError> {
        let author = require_author(caller)?;
        self.note_repo
            .list_for_author(author.id())
            .await
            .map_err(map_note_error)
    }
}

#[cfg(test)]
#[path = "service_tests.rs"]
mod tests;
