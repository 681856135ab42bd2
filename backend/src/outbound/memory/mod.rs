//! In-memory record store adapters.
//!
//! Reference implementations of the repository ports, one per entity kind,
//! each a vector behind a read-write lock. Mutations take the write lock
//! for their whole critical section, which is what gives `insert`/`save`
//! the same write-time slug-uniqueness guarantee a transactional store
//! provides.

mod comments;
mod news;
mod notes;

pub use comments::MemoryCommentRepository;
pub use news::MemoryNewsRepository;
pub use notes::MemoryNoteRepository;
