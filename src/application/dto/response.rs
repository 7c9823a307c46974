//! Response DTOs
//!
//! Data structures for API response bodies. Successful responses are wrapped
//! as `{ "status": "success", "data": { ... } }`.

use serde::Serialize;

use crate::domain::{AddedComment, AddedThread, GetThread};

/// Success envelope
#[derive(Debug, Serialize)]
pub struct SuccessResponse<T> {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> SuccessResponse<T> {
    pub fn with_data(data: T) -> Self {
        Self {
            status: "success",
            data: Some(data),
        }
    }
}

impl SuccessResponse<()> {
    /// Envelope without a `data` member
    pub fn empty() -> Self {
        Self {
            status: "success",
            data: None,
        }
    }
}

/// `POST /threads` response data
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddedThreadData {
    pub added_thread: AddedThread,
}

/// `POST /threads/{threadId}/comments` response data
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddedCommentData {
    pub added_comment: AddedComment,
}

/// `GET /threads/{threadId}` response data
#[derive(Debug, Serialize)]
pub struct ThreadData {
    pub thread: GetThread,
}
