//! Domain entities, policies, and services.
//!
//! Purpose: implement the ownership, content, and listing policies shared
//! by the news feed and the notes store as pure, transport-agnostic
//! decision logic. External collaborators — the identity provider and the
//! record store — enter through [`Caller`] snapshots and the traits in
//! [`ports`]; adapters translate [`CallerResponse`] values into whatever
//! envelope their protocol speaks.
//!
//! Public surface:
//! - [`DomainError`] — failure taxonomy kept cause-accurate inside the core.
//! - [`CallerResponse`] / [`outcome::respond`] — the boundary collapse that
//!   makes "absent" and "not yours" indistinguishable outside.
//! - [`CommentService`], [`NoteService`], [`NewsFeedService`] — lifecycle
//!   and query services over the ports.

pub mod access;
pub mod caller;
pub mod comments;
pub mod error;
pub mod form;
pub mod listing;
pub mod moderation;
pub mod news;
pub mod notes;
pub mod outcome;
pub mod ports;
pub mod slug;
pub mod user;

pub use self::caller::Caller;
pub use self::comments::{Comment, CommentForm, CommentId, CommentService};
pub use self::error::DomainError;
pub use self::form::{FieldError, FieldErrors, REQUIRED_FIELD};
pub use self::news::{News, NewsDetail, NewsFeedService, NewsId};
pub use self::notes::{Note, NoteForm, NoteId, NoteService};
pub use self::outcome::{CallerResponse, LoginRedirect};
pub use self::user::{DisplayName, User, UserId, UserValidationError};
