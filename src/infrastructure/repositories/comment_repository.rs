//! Comment Repository Implementation
//!
//! PostgreSQL implementation of comment operations. Deletion is soft: the row
//! stays and `is_delete` is set.

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::PgPool;

use super::timestamp_now;
use crate::domain::{AddComment, AddedComment, CommentRepository, GetComment};
use crate::shared::error::{
    AppError, COMMENT_ACCESS_DENIED, COMMENT_NOT_FOUND, THREAD_HAS_NO_COMMENTS,
};
use crate::shared::id_generator::{prefixed_id, IdGenerator};

/// PostgreSQL comment repository implementation.
pub struct PgCommentRepository {
    pool: PgPool,
    id_generator: Arc<dyn IdGenerator>,
}

impl PgCommentRepository {
    /// Creates a new PgCommentRepository with the given connection pool.
    pub fn new(pool: PgPool, id_generator: Arc<dyn IdGenerator>) -> Self {
        Self { pool, id_generator }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct AddedCommentRow {
    id: String,
    content: String,
    owner: String,
}

/// Internal row type for thread comment listing.
/// `username` is nullable because of the left join on users.
#[derive(Debug, sqlx::FromRow)]
struct CommentRow {
    id: String,
    username: Option<String>,
    date: String,
    content: String,
    is_delete: bool,
}

impl CommentRow {
    fn into_comment(self) -> GetComment {
        GetComment::new(
            self.id,
            self.username.unwrap_or_default(),
            self.date,
            self.content,
            self.is_delete,
        )
    }
}

#[async_trait]
impl CommentRepository for PgCommentRepository {
    async fn add_comment_thread(&self, new_comment: &AddComment) -> Result<AddedComment, AppError> {
        let id = prefixed_id("comment", self.id_generator.as_ref());

        let row = sqlx::query_as::<_, AddedCommentRow>(
            r#"
            INSERT INTO comments (id, thread_id, content, owner, date, is_delete)
            VALUES ($1, $2, $3, $4, $5, FALSE)
            RETURNING id, content, owner
            "#,
        )
        .bind(&id)
        .bind(&new_comment.thread_id)
        .bind(&new_comment.content)
        .bind(&new_comment.owner)
        .bind(timestamp_now())
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!(
            comment_id = %row.id,
            thread_id = %new_comment.thread_id,
            "Comment inserted"
        );

        Ok(AddedComment::new(row.id, row.content, row.owner))
    }

    /// Check ownership with a single id-and-owner lookup.
    ///
    /// A missing comment is reported as an authorization failure too.
    async fn verify_comment_access(&self, comment_id: &str, owner: &str) -> Result<(), AppError> {
        let row = sqlx::query_scalar::<_, i32>(
            "SELECT 1 FROM comments WHERE id = $1 AND owner = $2",
        )
        .bind(comment_id)
        .bind(owner)
        .fetch_optional(&self.pool)
        .await?;

        if row.is_none() {
            return Err(AppError::Authorization(COMMENT_ACCESS_DENIED.into()));
        }

        Ok(())
    }

    async fn get_comment_by_id(&self, comment_id: &str) -> Result<String, AppError> {
        sqlx::query_scalar::<_, String>("SELECT id FROM comments WHERE id = $1")
            .bind(comment_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(COMMENT_NOT_FOUND.into()))
    }

    /// List comments oldest first. Dates are fixed-width ISO-8601 strings,
    /// so text ordering is chronological; `seq` breaks same-millisecond ties.
    async fn get_comment_by_thread_id(&self, thread_id: &str) -> Result<Vec<GetComment>, AppError> {
        let rows = sqlx::query_as::<_, CommentRow>(
            r#"
            SELECT comments.id, users.username, comments.date,
                   comments.content, comments.is_delete
            FROM comments
            LEFT JOIN users ON users.id = comments.owner
            WHERE comments.thread_id = $1
            ORDER BY comments.date ASC, comments.seq ASC
            "#,
        )
        .bind(thread_id)
        .fetch_all(&self.pool)
        .await?;

        if rows.is_empty() {
            return Err(AppError::NotFound(THREAD_HAS_NO_COMMENTS.into()));
        }

        Ok(rows.into_iter().map(CommentRow::into_comment).collect())
    }

    async fn delete_comment(&self, comment_id: &str) -> Result<(), AppError> {
        let result = sqlx::query("UPDATE comments SET is_delete = TRUE WHERE id = $1")
            .bind(comment_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(COMMENT_NOT_FOUND.into()));
        }

        Ok(())
    }
}
