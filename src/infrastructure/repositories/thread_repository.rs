//! Thread Repository Implementation
//!
//! PostgreSQL implementation of thread operations.

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::PgPool;

use super::timestamp_now;
use crate::domain::{AddThread, AddedThread, ThreadDetail, ThreadRepository};
use crate::shared::error::{AppError, THREAD_NOT_FOUND};
use crate::shared::id_generator::{prefixed_id, IdGenerator};

/// PostgreSQL thread repository implementation.
pub struct PgThreadRepository {
    pool: PgPool,
    id_generator: Arc<dyn IdGenerator>,
}

impl PgThreadRepository {
    /// Creates a new PgThreadRepository with the given connection pool.
    pub fn new(pool: PgPool, id_generator: Arc<dyn IdGenerator>) -> Self {
        Self { pool, id_generator }
    }
}

/// Internal row type for `INSERT ... RETURNING`.
#[derive(Debug, sqlx::FromRow)]
struct AddedThreadRow {
    id: String,
    title: String,
    owner: String,
}

/// Internal row type for the thread detail join.
#[derive(Debug, sqlx::FromRow)]
struct ThreadDetailRow {
    id: String,
    title: String,
    body: String,
    date: String,
    username: String,
}

impl ThreadDetailRow {
    fn into_detail(self) -> ThreadDetail {
        ThreadDetail {
            id: self.id,
            title: self.title,
            body: self.body,
            date: self.date,
            username: self.username,
        }
    }
}

#[async_trait]
impl ThreadRepository for PgThreadRepository {
    async fn add_thread(&self, new_thread: &AddThread) -> Result<AddedThread, AppError> {
        let id = prefixed_id("thread", self.id_generator.as_ref());

        let row = sqlx::query_as::<_, AddedThreadRow>(
            r#"
            INSERT INTO threads (id, title, body, owner, date)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, title, owner
            "#,
        )
        .bind(&id)
        .bind(&new_thread.title)
        .bind(&new_thread.body)
        .bind(&new_thread.owner)
        .bind(timestamp_now())
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!(thread_id = %row.id, owner = %row.owner, "Thread inserted");

        Ok(AddedThread::new(row.id, row.title, row.owner))
    }

    async fn get_thread_by_id(&self, id: &str) -> Result<String, AppError> {
        sqlx::query_scalar::<_, String>("SELECT id FROM threads WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(THREAD_NOT_FOUND.into()))
    }

    /// Load a thread joined with its owner's username.
    async fn get_detail_thread(&self, id: &str) -> Result<ThreadDetail, AppError> {
        let row = sqlx::query_as::<_, ThreadDetailRow>(
            r#"
            SELECT threads.id, threads.title, threads.body, threads.date, users.username
            FROM threads
            INNER JOIN users ON users.id = threads.owner
            WHERE threads.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(THREAD_NOT_FOUND.into()))?;

        Ok(row.into_detail())
    }

    async fn verify_thread_exist(&self, id: &str) -> Result<(), AppError> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM threads WHERE id = $1)",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        if !exists {
            return Err(AppError::NotFound(THREAD_NOT_FOUND.into()));
        }

        Ok(())
    }
}
