//! Comment lifecycle commands: submit, edit, delete.
//!
//! Every mutation is gated by the ownership policy before the content
//! policy runs; a refused mutation leaves the store untouched.

use std::sync::Arc;

use mockable::Clock;

use crate::domain::access::{require_author, require_owner};
use crate::domain::caller::Caller;
use crate::domain::error::DomainError;
use crate::domain::news::NewsId;
use crate::domain::ports::{
    CommentRepository, CommentRepositoryError, NewsRepository, NewsRepositoryError,
};

use super::{Comment, CommentForm, CommentId};

fn map_comment_error(error: CommentRepositoryError) -> DomainError {
    DomainError::store(format!("comment repository: {error}"))
}

fn map_news_error(error: NewsRepositoryError) -> DomainError {
    DomainError::store(format!("news repository: {error}"))
}

/// Comment lifecycle service.
#[derive(Clone)]
pub struct CommentService<C, N> {
    comment_repo: Arc<C>,
    news_repo: Arc<N>,
    clock: Arc<dyn Clock>,
}

impl<C, N> CommentService<C, N> {
    /// Create a new service over the comment and news stores.
    pub fn new(comment_repo: Arc<C>, news_repo: Arc<N>, clock: Arc<dyn Clock>) -> Self {
        Self {
            comment_repo,
            news_repo,
            clock,
        }
    }
}

impl<C, N> CommentService<C, N>
where
    C: CommentRepository,
    N: NewsRepository,
{
    /// Submit a comment under a news item.
    ///
    /// Anonymous callers are refused before any store access. The news item
    /// must exist and the text must pass the banned-word screen; the
    /// creation timestamp comes from the injected clock and never changes
    /// afterwards.
    pub async fn submit(
        &self,
        caller: &Caller,
        news_id: NewsId,
        form: &CommentForm,
    ) -> Result<Comment, DomainError> {
        let author = require_author(caller)?;
        let news = self
            .news_repo
            .find_by_id(news_id)
            .await
            .map_err(map_news_error)?
            .ok_or(DomainError::Missing)?;
        let text = form.validated_text().map_err(DomainError::Rejected)?;

        let comment = Comment::new(
            CommentId::random(),
            news.id(),
            author.id(),
            text,
            self.clock.utc(),
        );
        self.comment_repo
            .insert(&comment)
            .await
            .map_err(map_comment_error)?;
        Ok(comment)
    }

    /// Replace the text of the caller's own comment.
    ///
    /// Authorship, news binding, and `created_at` never change on edit. A
    /// non-author is refused with an answer indistinguishable from the
    /// comment being absent.
    pub async fn edit(
        &self,
        caller: &Caller,
        comment_id: CommentId,
        form: &CommentForm,
    ) -> Result<Comment, DomainError> {
        require_author(caller)?;
        let existing = self
            .comment_repo
            .find_by_id(comment_id)
            .await
            .map_err(map_comment_error)?
            .ok_or(DomainError::Missing)?;
        require_owner(caller, existing.author_id())?;
        let text = form.validated_text().map_err(DomainError::Rejected)?;

        let updated = existing.with_text(text);
        self.comment_repo
            .save(&updated)
            .await
            .map_err(map_comment_error)?;
        Ok(updated)
    }

    /// Delete the caller's own comment.
    ///
    /// Removes exactly one record; refused deletions remove nothing.
    pub async fn delete(&self, caller: &Caller, comment_id: CommentId) -> Result<(), DomainError> {
        require_author(caller)?;
        let existing = self
            .comment_repo
            .find_by_id(comment_id)
            .await
            .map_err(map_comment_error)?
            .ok_or(DomainError::Missing)?;
        require_owner(caller, existing.author_id())?;

        self.comment_repo
            .delete(existing.id())
            .await
            .map_err(map_comment_error)
    }
}

#[cfg(test)]
#[path = "service_tests.rs"]
mod tests;
