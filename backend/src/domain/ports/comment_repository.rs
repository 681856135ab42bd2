//! Port for comment persistence.

use async_trait::async_trait;

use crate::domain::comments::{Comment, CommentId};
use crate::domain::news::NewsId;

/// Errors raised by comment repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommentRepositoryError {
    /// Repository connection could not be established.
    #[error("comment repository connection failed: {message}")]
    Connection {
        /// Adapter-provided failure description.
        message: String,
    },
    /// Query or mutation failed during execution.
    #[error("comment repository query failed: {message}")]
    Query {
        /// Adapter-provided failure description.
        message: String,
    },
}

/// Port for comment storage.
///
/// Adapters return threads in insertion order; chronological ranking is the
/// listing policy's job. `save` replaces the stored row wholesale — the
/// service hands it a record whose `created_at` already matches the stored
/// one, so edits can never move the creation time.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Fetch one comment by id.
    ///
    /// Returns `None` when no comment carries the id.
    async fn find_by_id(
        &self,
        comment_id: CommentId,
    ) -> Result<Option<Comment>, CommentRepositoryError>;

    /// Fetch every comment under a news item, in insertion order.
    async fn list_for_news(&self, news_id: NewsId)
    -> Result<Vec<Comment>, CommentRepositoryError>;

    /// Persist a new comment.
    async fn insert(&self, comment: &Comment) -> Result<(), CommentRepositoryError>;

    /// Replace the stored row for an existing comment.
    async fn save(&self, comment: &Comment) -> Result<(), CommentRepositoryError>;

    /// Remove one comment by id.
    async fn delete(&self, comment_id: CommentId) -> Result<(), CommentRepositoryError>;
}

/// Fixture implementation backed by nothing.
///
/// Lookups return `None`, listings are empty, and mutations are discarded.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureCommentRepository;

#[async_trait]
impl CommentRepository for FixtureCommentRepository {
    async fn find_by_id(
        &self,
        _comment_id: CommentId,
    ) -> Result<Option<Comment>, CommentRepositoryError> {
        Ok(None)
    }

    async fn list_for_news(
        &self,
        _news_id: NewsId,
    ) -> Result<Vec<Comment>, CommentRepositoryError> {
        Ok(Vec::new())
    }

    async fn insert(&self, _comment: &Comment) -> Result<(), CommentRepositoryError> {
        Ok(())
    }

    async fn save(&self, _comment: &Comment) -> Result<(), CommentRepositoryError> {
        Ok(())
    }

    async fn delete(&self, _comment_id: CommentId) -> Result<(), CommentRepositoryError> {
        Ok(())
    }
}
