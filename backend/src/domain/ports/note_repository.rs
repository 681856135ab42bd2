//! Port for note persistence.

use async_trait::async_trait;

use crate::domain::notes::{Note, NoteId};
use crate::domain::user::UserId;

/// Errors raised by note repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NoteRepositoryError {
    /// Repository connection could not be established.
    #[error("note repository connection failed: {message}")]
    Connection {
        /// Adapter-provided failure description.
        message: String,
    },
    /// Query or mutation failed during execution.
    #[error("note repository query failed: {message}")]
    Query {
        /// Adapter-provided failure description.
        message: String,
    },
    /// Write refused because another note already holds the slug.
    #[error("slug already taken: {slug}")]
    SlugTaken {
        /// The slug that collided.
        slug: String,
    },
}

/// Port for note storage.
///
/// Slug uniqueness is enforced transactionally at write time: `insert` and
/// `save` refuse with [`NoteRepositoryError::SlugTaken`] when another row
/// already holds the slug. The service's `slug_exists` pre-check merely
/// surfaces the conflict early; the write-time guarantee is the store's.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NoteRepository: Send + Sync {
    /// Fetch one note by id.
    ///
    /// Returns `None` when no note carries the id.
    async fn find_by_id(&self, note_id: NoteId) -> Result<Option<Note>, NoteRepositoryError>;

    /// Fetch every note owned by `author_id`, in insertion order. The
    /// owner filter runs inside the store; other authors' notes never
    /// leave it.
    async fn list_for_author(&self, author_id: UserId)
    -> Result<Vec<Note>, NoteRepositoryError>;

    /// `true` when any note other than `exclude` holds `slug`.
    async fn slug_exists(
        &self,
        slug: &str,
        exclude: Option<NoteId>,
    ) -> Result<bool, NoteRepositoryError>;

    /// Persist a new note.
    async fn insert(&self, note: &Note) -> Result<(), NoteRepositoryError>;

    /// Replace the stored row for an existing note.
    async fn save(&self, note: &Note) -> Result<(), NoteRepositoryError>;

    /// Remove one note by id.
    async fn delete(&self, note_id: NoteId) -> Result<(), NoteRepositoryError>;
}

/// Fixture implementation backed by nothing.
///
/// Lookups return `None`, listings are empty, no slug is ever taken, and
/// mutations are discarded.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureNoteRepository;

#[async_trait]
impl NoteRepository for FixtureNoteRepository {
    async fn find_by_id(&self, _note_id: NoteId) -> Result<Option<Note>, NoteRepositoryError> {
        Ok(None)
    }

    async fn list_for_author(
        &self,
        _author_id: UserId,
    ) -> Result<Vec<Note>, NoteRepositoryError> {
        Ok(Vec::new())
    }

    async fn slug_exists(
        &self,
        _slug: &str,
        _exclude: Option<NoteId>,
    ) -> Result<bool, NoteRepositoryError> {
        Ok(false)
    }

    async fn insert(&self, _note: &Note) -> Result<(), NoteRepositoryError> {
        Ok(())
    }

    async fn save(&self, _note: &Note) -> Result<(), NoteRepositoryError> {
        Ok(())
    }

    async fn delete(&self, _note_id: NoteId) -> Result<(), NoteRepositoryError> {
        Ok(())
    }
}
