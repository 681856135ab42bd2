//! In-memory comment store.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use crate::domain::comments::{Comment, CommentId};
use crate::domain::news::NewsId;
use crate::domain::ports::{CommentRepository, CommentRepositoryError};

/// Comment rows behind a read-write lock, in insertion order.
#[derive(Debug, Default)]
pub struct MemoryCommentRepository {
    rows: RwLock<Vec<Comment>>,
}

impl MemoryCommentRepository {
    /// Empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with existing rows, kept in the given order.
    #[must_use]
    pub fn seeded(rows: Vec<Comment>) -> Self {
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

    fn read(&self) -> RwLockReadGuard<'_, Vec<Comment>> {
        self.rows.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Comment>> {
        self.rows.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl CommentRepository for MemoryCommentRepository {
    async fn find_by_id(
        &self,
        comment_id: CommentId,
    ) -> Result<Option<Comment>, CommentRepositoryError> {
        Ok(self
            .read()
            .iter()
            .find(|comment| comment.id() == comment_id)
            .cloned())
    }

    async fn list_for_news(
        &self,
        news_id: NewsId,
    ) -> Result<Vec<Comment>, CommentRepositoryError> {
        Ok(self
            .read()
            .iter()
            .filter(|comment| comment.news_id() == news_id)
            .cloned()
            .collect())
    }

    async fn insert(&self, comment: &Comment) -> Result<(), CommentRepositoryError> {
        self.write().push(comment.clone());
        Ok(())
    }

    async fn save(&self, comment: &Comment) -> Result<(), CommentRepositoryError> {
        let mut rows = self.write();
        let slot = rows
            .iter_mut()
            .find(|row| row.id() == comment.id())
            .ok_or_else(|| CommentRepositoryError::Query {
                message: format!("no stored comment with id {}", comment.id()),
            })?;
        *slot = comment.clone();
        Ok(())
    }

    async fn delete(&self, comment_id: CommentId) -> Result<(), CommentRepositoryError> {
        self.write().retain(|comment| comment.id() != comment_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::UserId;
    use chrono::{TimeZone, Utc};

    fn sample_comment() -> Comment {
        Comment::new(
            CommentId::random(),
            NewsId::random(),
            UserId::random(),
            "Текст заметки",
            Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0)
                .single()
                .expect("valid timestamp"),
        )
    }

    #[tokio::test]
    async fn delete_removes_exactly_one_row() {
        let keep = sample_comment();
        let doomed = sample_comment();
        let repo = MemoryCommentRepository::seeded(vec![keep.clone(), doomed.clone()]);

        repo.delete(doomed.id()).await.expect("delete succeeds");

        assert_eq!(repo.len(), 1);
        assert_eq!(
            repo.find_by_id(keep.id()).await.expect("lookup succeeds"),
            Some(keep)
        );
    }

    #[tokio::test]
    async fn save_refuses_unknown_ids() {
        let repo = MemoryCommentRepository::new();
        let error = repo
            .save(&sample_comment())
            .await
            .expect_err("saving an absent row must fail");
        assert!(matches!(error, CommentRepositoryError::Query { .. }));
    }

    #[tokio::test]
    async fn listing_filters_by_news_item() {
        let ours = sample_comment();
        let theirs = sample_comment();
        let repo = MemoryCommentRepository::seeded(vec![ours.clone(), theirs]);

        let thread = repo
            .list_for_news(ours.news_id())
            .await
            .expect("listing succeeds");
        assert_eq!(thread, vec![ours]);
    }
}
