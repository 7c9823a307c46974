//! Get Detail Thread Use Case

use std::sync::Arc;

use crate::domain::{CommentRepository, GetThread, ThreadRepository};
use crate::shared::error::AppError;

/// Loads a thread and merges its comments into it.
pub struct GetDetailThreadUseCase<T, C>
where
    T: ThreadRepository + ?Sized,
    C: CommentRepository + ?Sized,
{
    thread_repo: Arc<T>,
    comment_repo: Arc<C>,
}

impl<T, C> GetDetailThreadUseCase<T, C>
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

    pub async fn execute(&self, thread_id: &str) -> Result<GetThread, AppError> {
        let detail = self.thread_repo.get_detail_thread(thread_id).await?;
        let comments = self.comment_repo.get_comment_by_thread_id(thread_id).await?;

        tracing::debug!(thread_id = %thread_id, comment_count = comments.len(), "Thread detail loaded");
        Ok(GetThread::new(detail, comments))
    }
}
