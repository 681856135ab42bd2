//! In-memory note store.
//!
//! `insert` and `save` check slug uniqueness under the write lock, giving
//! the same write-time guarantee a transactional store enforces with a
//! unique index.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use crate::domain::notes::{Note, NoteId};
use crate::domain::ports::{NoteRepository, NoteRepositoryError};
use crate::domain::user::UserId;

/// Note rows behind a read-write lock, in insertion order.
#[derive(Debug, Default)]
pub struct MemoryNoteRepository {
    rows: RwLock<Vec<Note>>,
}

impl MemoryNoteRepository {
    /// Empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with existing rows, kept in the given order.
    #[must_use]
    pub fn seeded(rows: Vec<Note>) -> Self {
        Self {
            rows: RwLock::new(rows),
        }
    }

    /// Number of stored rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// `true` when nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<Note>> {
        self.rows.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Note>> {
        self.rows.write().unwrap_or_else(PoisonError::into_inner)
    }
}

fn slug_held_by_other(rows: &[Note], slug: &str, exclude: Option<NoteId>) -> bool {
    rows.iter()
        .any(|note| note.slug() == slug && exclude != Some(note.id()))
}

#[async_trait]
impl NoteRepository for MemoryNoteRepository {
    async fn find_by_id(&self, note_id: NoteId) -> Result<Option<Note>, NoteRepositoryError> {
        Ok(self.read().iter().find(|note| note.id() == note_id).cloned())
    }

    async fn list_for_author(
        &self,
        author_id: UserId,
    ) -> Result<Vec<Note>, NoteRepositoryError> {
        Ok(self
            .read()
            .iter()
            .filter(|note| note.author_id() == author_id)
            .cloned()
            .collect())
    }

    async fn slug_exists(
        &self,
        slug: &str,
        exclude: Option<NoteId>,
    ) -> Result<bool, NoteRepositoryError> {
        Ok(slug_held_by_other(&self.read(), slug, exclude))
    }

    async fn insert(&self, note: &Note) -> Result<(), NoteRepositoryError> {
        let mut rows = self.write();
        if slug_held_by_other(&rows, note.slug(), Some(note.id())) {
            return Err(NoteRepositoryError::SlugTaken {
                slug: note.slug().to_owned(),
            });
        }
        rows.push(note.clone());
        Ok(())
    }

    async fn save(&self, note: &Note) -> Result<(), NoteRepositoryError> {
        let mut rows = self.write();
        if slug_held_by_other(&rows, note.slug(), Some(note.id())) {
            return Err(NoteRepositoryError::SlugTaken {
                slug: note.slug().to_owned(),
            });
        }
        let slot = rows
            .iter_mut()
            .find(|row| row.id() == note.id())
            .ok_or_else(|| NoteRepositoryError::Query {
                message: format!("no stored note with id {}", note.id()),
            })?;
        *slot = note.clone();
        Ok(())
    }

    async fn delete(&self, note_id: NoteId) -> Result<(), NoteRepositoryError> {
        self.write().retain(|note| note.id() != note_id);
        Ok(())
    }
}
