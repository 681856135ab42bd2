//! Public feed queries: capped front page and news detail with its thread.
//!
//! Both views are public; an absent news id answers the same not-found to
//! every caller, anonymous or not.

use std::sync::Arc;

use crate::domain::comments::Comment;
use crate::domain::error::DomainError;
use crate::domain::listing::{clip_front_page, sort_thread};
use crate::domain::ports::{
    CommentRepository, CommentRepositoryError, NewsRepository, NewsRepositoryError,
};

use super::{News, NewsId};

fn map_news_error(error: NewsRepositoryError) -> DomainError {
    DomainError::store(format!("news repository: {error}"))
}

fn map_comment_error(error: CommentRepositoryError) -> DomainError {
    DomainError::store(format!("comment repository: {error}"))
}

/// News detail payload: the item plus its chronological thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsDetail {
    /// The requested news item.
    pub news: News,
    /// Comments under it, oldest first.
    pub comments: Vec<Comment>,
}

/// Read-side service for the public news pages.
#[derive(Clone)]
pub struct NewsFeedService<N, C> {
    news_repo: Arc<N>,
    comment_repo: Arc<C>,
    front_page_cap: usize,
}

impl<N, C> NewsFeedService<N, C> {
    /// Create a new feed over the news and comment stores, capping the
    /// front page at `front_page_cap` items.
    pub fn new(news_repo: Arc<N>, comment_repo: Arc<C>, front_page_cap: usize) -> Self {
        Self {
            news_repo,
            comment_repo,
            front_page_cap,
        }
    }
}

impl<N, C> NewsFeedService<N, C>
where
    N: NewsRepository,
    C: CommentRepository,
{
    /// Front page: at most the configured number of items, newest
    /// publication date first. Overflow is excluded, not paginated.
    pub async fn front_page(&self) -> Result<Vec<News>, DomainError> {
        let items = self.news_repo.all().await.map_err(map_news_error)?;
        Ok(clip_front_page(items, self.front_page_cap))
    }

    /// One news item with its comment thread, oldest comment first.
    pub async fn detail(&self, news_id: NewsId) -> Result<NewsDetail, DomainError> {
        let news = self
            .news_repo
            .find_by_id(news_id)
            .await
            .map_err(map_news_error)?
            .ok_or(DomainError::Missing)?;
        let comments = self
            .comment_repo
            .list_for_news(news.id())
            .await
            .map_err(map_comment_error)?;
        Ok(NewsDetail {
            news,
            comments: sort_thread(comments),
        })
    }
}

#[cfg(test)]
#[path = "feed_tests.rs"]
mod tests;
