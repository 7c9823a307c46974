//! Add Comment Use Case

use std::sync::Arc;

use serde_json::Value;

use crate::domain::{AddComment, AddedComment, CommentRepository, ThreadRepository};
use crate::shared::error::AppError;

/// Validates a comment payload, checks the thread exists, then persists it.
pub struct AddCommentUseCase<T, C>
where
    T: ThreadRepository + ?Sized,
    C: CommentRepository + ?Sized,
{
    thread_repo: Arc<T>,
    comment_repo: Arc<C>,
}

impl<T, C> AddCommentUseCase<T, C>
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

    /// `payload` carries `threadId`, `content` and the authenticated `owner`.
    pub async fn execute(&self, payload: &Value) -> Result<AddedComment, AppError> {
        let new_comment = AddComment::from_payload(payload)?;
        self.thread_repo
            .verify_thread_exist(&new_comment.thread_id)
            .await?;

        let added = self.comment_repo.add_comment_thread(&new_comment).await?;

        tracing::debug!(
            comment_id = %added.id,
            thread_id = %new_comment.thread_id,
            "Comment added"
        );
        Ok(added)
    }
}
