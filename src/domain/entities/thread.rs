//! Thread entities and repository trait.
//!
//! Maps to the `threads` table in the database schema.

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

use super::comment::GetComment;
use super::payload::{EntityError, EntityKind, FieldType, Fields};
use crate::shared::error::AppError;

/// Maximum thread title length in characters.
pub const MAX_TITLE_LENGTH: usize = 50;

/// A thread creation request, validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddThread {
    pub title: String,
    pub body: String,
    pub owner: String,
}

impl AddThread {
    /// Build from a payload carrying `title`, `body` and `owner`.
    pub fn from_payload(payload: &Value) -> Result<Self, EntityError> {
        let kind = EntityKind::AddThread;
        let fields = Fields::read(
            kind,
            payload,
            &[
                ("title", FieldType::Text),
                ("body", FieldType::Text),
                ("owner", FieldType::Text),
            ],
        )?;

        let title = fields.text("title");
        if title.chars().count() > MAX_TITLE_LENGTH {
            return Err(EntityError::TitleLimitChar(kind));
        }

        Ok(Self {
            title,
            body: fields.text("body"),
            owner: fields.text("owner"),
        })
    }
}

/// A freshly persisted thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddedThread {
    pub id: String,
    pub title: String,
    pub owner: String,
}

impl AddedThread {
    pub fn new(id: impl Into<String>, title: impl Into<String>, owner: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            owner: owner.into(),
        }
    }

    pub fn from_payload(payload: &Value) -> Result<Self, EntityError> {
        let fields = Fields::read(
            EntityKind::AddedThread,
            payload,
            &[
                ("id", FieldType::Text),
                ("title", FieldType::Text),
                ("owner", FieldType::Text),
            ],
        )?;

        Ok(Self::new(
            fields.text("id"),
            fields.text("title"),
            fields.text("owner"),
        ))
    }
}

/// Thread columns joined with the owner's username.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThreadDetail {
    pub id: String,
    pub title: String,
    pub body: String,
    pub date: String,
    pub username: String,
}

/// A thread with its comments, as served by the detail endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GetThread {
    pub id: String,
    pub title: String,
    pub body: String,
    pub date: String,
    pub username: String,
    pub comments: Vec<GetComment>,
}

impl GetThread {
    pub fn new(detail: ThreadDetail, comments: Vec<GetComment>) -> Self {
        Self {
            id: detail.id,
            title: detail.title,
            body: detail.body,
            date: detail.date,
            username: detail.username,
            comments,
        }
    }

    /// Build from a payload; each entry of `comments` must be a valid
    /// `GetComment` payload.
    pub fn from_payload(payload: &Value) -> Result<Self, EntityError> {
        let fields = Fields::read(
            EntityKind::GetThread,
            payload,
            &[
                ("id", FieldType::Text),
                ("title", FieldType::Text),
                ("body", FieldType::Text),
                ("date", FieldType::Text),
                ("username", FieldType::Text),
                ("comments", FieldType::List),
            ],
        )?;

        let comments = fields
            .list("comments")
            .iter()
            .map(GetComment::from_payload)
            .collect::<Result<Vec<_>, _>>()?;

        let detail = ThreadDetail {
            id: fields.text("id"),
            title: fields.text("title"),
            body: fields.text("body"),
            date: fields.text("date"),
            username: fields.text("username"),
        };

        Ok(Self::new(detail, comments))
    }
}

/// Repository trait for thread data access.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ThreadRepository: Send + Sync {
    /// Persist a new thread and return its generated identity.
    async fn add_thread(&self, new_thread: &AddThread) -> Result<AddedThread, AppError>;

    /// Return the thread id, or `NotFound` if it does not exist.
    async fn get_thread_by_id(&self, id: &str) -> Result<String, AppError>;

    /// Load the thread joined with its owner's username.
    async fn get_detail_thread(&self, id: &str) -> Result<ThreadDetail, AppError>;

    /// Fail with `NotFound` unless the thread exists.
    async fn verify_thread_exist(&self, id: &str) -> Result<(), AppError>;
}
