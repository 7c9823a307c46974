//! Delete Comment Use Case
//!
//! Checks run in a fixed order (thread, comment, ownership) so that when
//! several fail at once the caller sees the first one. The checks and the
//! update are separate statements; a concurrent change between them is not
//! guarded against.

use std::sync::Arc;

use crate::domain::{CommentRepository, ThreadRepository};
use crate::shared::error::AppError;

/// Identifies the comment to delete and who is asking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteCommentPayload {
    pub thread_id: String,
    pub comment_id: String,
    pub owner: String,
}

/// Soft-deletes a comment on behalf of its owner.
pub struct DeleteCommentUseCase<T, C>
where
    T: ThreadRepository + ?Sized,
    C: CommentRepository + ?Sized,
{
    thread_repo: Arc<T>,
    comment_repo: Arc<C>,
}

impl<T, C> DeleteCommentUseCase<T, C>
where
    T: ThreadRepository + ?Sized,
    C: CommentRepository + ?Sized,
{
    pub fn new(thread_repo: Arc<T>, comment_repo: Arc<C>) -> Self {
        Self {
            thread_repo,
            comment_repo,
        }
    }

    pub async fn execute(&self, payload: &DeleteCommentPayload) -> Result<(), AppError> {
        self.thread_repo.get_thread_by_id(&payload.thread_id).await?;
        self.comment_repo
            .get_comment_by_id(&payload.comment_id)
            .await?;
        self.comment_repo
            .verify_comment_access(&payload.comment_id, &payload.owner)
            .await?;
        self.comment_repo.delete_comment(&payload.comment_id).await?;

        tracing::debug!(
            comment_id = %payload.comment_id,
            thread_id = %payload.thread_id,
            "Comment soft-deleted"
        );
        Ok(())
    }
}
