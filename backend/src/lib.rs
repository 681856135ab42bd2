//! Policy core for a public news feed with comments and a private,
//! per-user notes store.
//!
//! The two applications share one authorization and lifecycle pattern:
//! records are publicly listable or strictly per-owner, mutations belong to
//! the record's author alone, submitted content passes a banned-word and
//! slug-uniqueness screen, and each listing context has its own fixed
//! ordering. Everything protocol- or storage-shaped stays outside: the
//! identity provider arrives as a [`domain::Caller`] snapshot, the record
//! store through the traits in [`domain::ports`], and refusals leave as
//! [`domain::CallerResponse`] values for the enclosing framework to render.

pub mod config;
pub mod domain;
pub mod outbound;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
