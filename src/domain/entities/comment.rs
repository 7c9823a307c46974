//! Comment entities and repository trait.
//!
//! Maps to the `comments` table in the database schema.

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

use super::payload::{EntityError, EntityKind, FieldType, Fields};
use crate::shared::error::AppError;

/// Content shown in place of a soft-deleted comment.
pub const DELETED_COMMENT_CONTENT: &str = "**komentar telah dihapus**";

/// A comment creation request, validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddComment {
    pub thread_id: String,
    pub content: String,
    pub owner: String,
}

impl AddComment {
    /// Build from a payload carrying `threadId`, `content` and `owner`.
    pub fn from_payload(payload: &Value) -> Result<Self, EntityError> {
        let fields = Fields::read(
            EntityKind::AddComment,
            payload,
            &[
                ("threadId", FieldType::Text),
                ("content", FieldType::Text),
                ("owner", FieldType::Text),
            ],
        )?;

        Ok(Self {
            thread_id: fields.text("threadId"),
            content: fields.text("content"),
            owner: fields.text("owner"),
        })
    }
}

/// A freshly persisted comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddedComment {
    pub id: String,
    pub content: String,
    pub owner: String,
}

impl AddedComment {
    pub fn new(id: impl Into<String>, content: impl Into<String>, owner: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
            owner: owner.into(),
        }
    }

    pub fn from_payload(payload: &Value) -> Result<Self, EntityError> {
        let fields = Fields::read(
            EntityKind::AddedComment,
            payload,
            &[
                ("id", FieldType::Text),
                ("content", FieldType::Text),
                ("owner", FieldType::Text),
            ],
        )?;

        Ok(Self::new(
            fields.text("id"),
            fields.text("content"),
            fields.text("owner"),
        ))
    }
}

/// A comment as it appears in a thread detail.
///
/// The deletion flag is consumed at construction: deleted comments carry
/// [`DELETED_COMMENT_CONTENT`] instead of their stored text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GetComment {
    pub id: String,
    pub username: String,
    pub date: String,
    pub content: String,
}

impl GetComment {
    pub fn new(
        id: impl Into<String>,
        username: impl Into<String>,
        date: impl Into<String>,
        content: impl Into<String>,
        is_delete: bool,
    ) -> Self {
        let content = if is_delete {
            DELETED_COMMENT_CONTENT.to_owned()
        } else {
            content.into()
        };

        Self {
            id: id.into(),
            username: username.into(),
            date: date.into(),
            content,
        }
    }

    pub fn from_payload(payload: &Value) -> Result<Self, EntityError> {
        let fields = Fields::read(
            EntityKind::GetComment,
            payload,
            &[
                ("id", FieldType::Text),
                ("username", FieldType::Text),
                ("date", FieldType::Text),
                ("content", FieldType::Text),
                ("isDelete", FieldType::Flag),
            ],
        )?;

        Ok(Self::new(
            fields.text("id"),
            fields.text("username"),
            fields.text("date"),
            fields.text("content"),
            fields.flag("isDelete"),
        ))
    }
}

/// Repository trait for comment data access.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Persist a new comment on a thread.
    async fn add_comment_thread(&self, new_comment: &AddComment) -> Result<AddedComment, AppError>;

    /// Fail with `Authorization` unless `owner` owns the comment.
    ///
    /// A missing comment fails the same way; callers check existence first.
    async fn verify_comment_access(&self, comment_id: &str, owner: &str) -> Result<(), AppError>;

    /// Return the comment id, or `NotFound` if it does not exist.
    async fn get_comment_by_id(&self, comment_id: &str) -> Result<String, AppError>;

    /// List a thread's comments in posting order.
    ///
    /// Fails with `NotFound` when the thread has no comments.
    async fn get_comment_by_thread_id(&self, thread_id: &str) -> Result<Vec<GetComment>, AppError>;

    /// Soft-delete a comment.
    async fn delete_comment(&self, comment_id: &str) -> Result<(), AppError>;
}
