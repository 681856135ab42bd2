//! In-memory news store.

use std::sync::{PoisonError, RwLock, RwLockReadGuard};

use async_trait::async_trait;

use crate::domain::news::{News, NewsId};
use crate::domain::ports::{NewsRepository, NewsRepositoryError};

/// News rows behind a read-write lock, in insertion order.
#[derive(Debug, Default)]
pub struct MemoryNewsRepository {
    rows: RwLock<Vec<News>>,
}

impl MemoryNewsRepository {
    /// Empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with existing rows, kept in the given order.
    #[must_use]
    pub fn seeded(rows: Vec<News>) -> Self {
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

    fn read(&self) -> RwLockReadGuard<'_, Vec<News>> {
        self.rows.read().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl NewsRepository for MemoryNewsRepository {
    async fn find_by_id(&self, news_id: NewsId) -> Result<Option<News>, NewsRepositoryError> {
        Ok(self.read().iter().find(|news| news.id() == news_id).cloned())
    }

    async fn all(&self) -> Result<Vec<News>, NewsRepositoryError> {
        Ok(self.read().clone())
    }
}
