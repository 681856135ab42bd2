//! Port for the read-only news table.

use async_trait::async_trait;

use crate::domain::news::{News, NewsId};

/// Errors raised by news repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NewsRepositoryError {
    /// Repository connection could not be established.
    #[error("news repository connection failed: {message}")]
    Connection {
        /// Adapter-provided failure description.
        message: String,
    },
    /// Query failed during execution.
    #[error("news repository query failed: {message}")]
    Query {
        /// Adapter-provided failure description.
        message: String,
    },
}

/// Port for news storage.
///
/// News rows are written by an editorial process outside this core; the
/// policies only read them. Adapters return rows in insertion order and
/// leave all ranking to the listing policy.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NewsRepository: Send + Sync {
    /// Fetch one news item by id.
    ///
    /// Returns `None` when no item carries the id.
    async fn find_by_id(&self, news_id: NewsId) -> Result<Option<News>, NewsRepositoryError>;

    /// Fetch every news item, in insertion order.
    async fn all(&self) -> Result<Vec<News>, NewsRepositoryError>;
}

/// Fixture implementation backed by nothing.
///
/// Lookups return `None` and listings are empty. Use it in unit tests
/// where news behaviour is not under test.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureNewsRepository;

#[async_trait]
impl NewsRepository for FixtureNewsRepository {
    async fn find_by_id(&self, _news_id: NewsId) -> Result<Option<News>, NewsRepositoryError> {
        Ok(None)
    }

    async fn all(&self) -> Result<Vec<News>, NewsRepositoryError> {
        Ok(Vec::new())
    }
}
