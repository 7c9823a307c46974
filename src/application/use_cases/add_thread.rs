//! Add Thread Use Case

use std::sync::Arc;

use serde_json::Value;

use crate::domain::{AddThread, AddedThread, ThreadRepository};
use crate::shared::error::AppError;

/// Validates a thread payload and persists it.
pub struct AddThreadUseCase<T>
where
    T: ThreadRepository + ?Sized,
{
    thread_repo: Arc<T>,
}

impl<T> AddThreadUseCase<T>
where
    T: ThreadRepository + ?Sized,
{
    pub fn new(thread_repo: Arc<T>) -> Self {
        Self { thread_repo }
    }

    /// `payload` carries `title`, `body` and the authenticated `owner`.
    pub async fn execute(&self, payload: &Value) -> Result<AddedThread, AppError> {
        let new_thread = AddThread::from_payload(payload)?;
        let added = self.thread_repo.add_thread(&new_thread).await?;

        tracing::debug!(thread_id = %added.id, "Thread added");
        Ok(added)
    }
}
