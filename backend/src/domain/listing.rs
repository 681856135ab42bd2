//! Ordering comparators and the front-page cap.
//!
//! The front page and the comment thread sort in opposite directions.
//! Each context keeps its own comparator so the two orders cannot be
//! swapped by passing the wrong flag to a shared sort.

use std::cmp::Ordering;

use crate::domain::comments::Comment;
use crate::domain::news::News;

/// Front-page order: newest publication date first.
#[must_use]
pub fn front_page_order(a: &News, b: &News) -> Ordering {
    b.date().cmp(&a.date())
}

/// Thread order: oldest comment first.
#[must_use]
pub fn thread_order(a: &Comment, b: &Comment) -> Ordering {
    a.created_at().cmp(&b.created_at())
}

/// Stable-sort news for the front page and clip to the configured cap.
/// Items beyond the cap are excluded outright; there is no pagination.
#[must_use]
pub fn clip_front_page(mut items: Vec<News>, cap: usize) -> Vec<News> {
    items.sort_by(front_page_order);
    items.truncate(cap);
    items
}

/// Stable-sort a comment thread chronologically.
#[must_use]
pub fn sort_thread(mut comments: Vec<Comment>) -> Vec<Comment> {
    comments.sort_by(thread_order);
    comments
}
