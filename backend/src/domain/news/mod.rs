//! News entities for the public feed.
//!
//! News items come from an editorial process outside this core and are
//! read-only here: no policy ever mutates one.

mod feed;

pub use feed::{NewsDetail, NewsFeedService};

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable news identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NewsId(Uuid);

impl NewsId {
    /// Wrap a store-issued identifier.
    #[must_use]
    pub const fn new(id: Uuid) -> Self {
        Self(id)
    }

    /// Generate a fresh random identifier.
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for NewsId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A published news item.
///
/// `date` is the publication calendar date, independent of when the row was
/// inserted; the front page sorts on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct News {
    id: NewsId,
    title: String,
    text: String,
    date: NaiveDate,
}

impl News {
    /// Assemble a news item from stored fields.
    #[must_use]
    pub fn new(
        id: NewsId,
        title: impl Into<String>,
        text: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            text: text.into(),
            date,
        }
    }

    /// Stable identifier.
    #[must_use]
    pub const fn id(&self) -> NewsId {
        self.id
    }

    /// Headline shown on every listing.
    #[must_use]
    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    /// Body text.
    #[must_use]
    pub fn text(&self) -> &str {
        self.text.as_str()
    }

    /// Publication date.
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }
}
