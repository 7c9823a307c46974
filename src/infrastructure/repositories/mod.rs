//! Repository Implementations
//!
//! PostgreSQL implementations of domain repository traits.
//!
//! ## Available Repositories
//!
//! - **PgThreadRepository** - Thread creation, lookup and detail join
//! - **PgCommentRepository** - Comment creation, ownership checks, soft delete
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use sqlx::PgPool;
//! use forum_api::infrastructure::repositories::{PgCommentRepository, PgThreadRepository};
//! use forum_api::shared::id_generator::RandomIdGenerator;
//!
//! fn setup_repositories(pool: PgPool) {
//!     let ids = Arc::new(RandomIdGenerator::default());
//!     let thread_repo = PgThreadRepository::new(pool.clone(), ids.clone());
//!     let comment_repo = PgCommentRepository::new(pool, ids);
//! }
//! ```

use chrono::{SecondsFormat, Utc};

pub mod comment_repository;
pub mod thread_repository;

pub use comment_repository::PgCommentRepository;
pub use thread_repository::PgThreadRepository;

/// Current time as stored in `date` columns, e.g. `2023-09-25T11:52:48.150Z`.
pub(crate) fn timestamp_now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
