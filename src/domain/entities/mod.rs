//! # Domain Entities
//!
//! Validated value objects for the forum, and the repository traits that
//! persist them.
//!
//! ## Thread
//!
//! - **AddThread**: a thread creation request (`title` at most 50 characters)
//! - **AddedThread**: identity of a newly persisted thread
//! - **ThreadDetail** / **GetThread**: a thread as read back, with comments
//!
//! ## Comment
//!
//! - **AddComment**: a comment creation request
//! - **AddedComment**: identity of a newly persisted comment
//! - **GetComment**: a comment as read back; deleted content is masked
//!
//! ## Repository Traits
//!
//! Repository traits live next to their entities and are implemented in the
//! infrastructure layer.

mod comment;
mod payload;
mod thread;

pub use payload::{EntityError, EntityKind};

pub use thread::{AddThread, AddedThread, GetThread, ThreadDetail, ThreadRepository, MAX_TITLE_LENGTH};

pub use comment::{
    AddComment, AddedComment, CommentRepository, GetComment, DELETED_COMMENT_CONTENT,
};

#[cfg(test)]
pub use comment::MockCommentRepository;
#[cfg(test)]
pub use thread::MockThreadRepository;
