//! Application Error Types
//!
//! Centralized error handling with Axum integration.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::domain::{EntityError, EntityKind};

pub const THREAD_NOT_FOUND: &str = "Gagal! Thread tidak ditemukan";
pub const COMMENT_NOT_FOUND: &str = "Gagal! komen tidak ditemukan";
pub const THREAD_HAS_NO_COMMENTS: &str = "Komentar tidak ada";
pub const COMMENT_ACCESS_DENIED: &str = "Gagal! Anda tidak memiliki akses";
pub const MISSING_AUTHENTICATION: &str = "Missing authentication";

const SERVER_FAILURE: &str = "terjadi kegagalan pada server kami";

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Authorization error: {0}")]
    Authorization(String),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Authorization(_) => StatusCode::FORBIDDEN,
            AppError::Authentication(_) => StatusCode::UNAUTHORIZED,
            AppError::Internal(_) | AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub status: &'static str,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            AppError::Validation(message)
            | AppError::NotFound(message)
            | AppError::Authorization(message)
            | AppError::Authentication(message) => ErrorResponse {
                status: "fail",
                message,
            },
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                ErrorResponse {
                    status: "error",
                    message: SERVER_FAILURE.into(),
                }
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {}", e);
                ErrorResponse {
                    status: "error",
                    message: SERVER_FAILURE.into(),
                }
            }
        };

        (status, Json(body)).into_response()
    }
}

/// Translate an entity error into its client-facing message.
///
/// Only request entities produce validation errors; a read-side entity
/// rejecting data means the stored row is corrupt.
impl From<EntityError> for AppError {
    fn from(error: EntityError) -> Self {
        let message = match (error.kind(), error) {
            (EntityKind::AddThread, EntityError::NotContainNeededProperty(_)) => {
                "tidak dapat menambahkan thread baru karena property yang dibutuhkan tidak ada"
            }
            (EntityKind::AddThread, EntityError::NotMeetDataTypeSpecification(_)) => {
                "tidak dapat menambahkan thread baru karena tipe data tidak sesuai"
            }
            (EntityKind::AddThread, EntityError::TitleLimitChar(_)) => {
                "tidak dapat menambahkan thread baru karena karakter title melebihi batas limit"
            }
            (EntityKind::AddComment, EntityError::NotContainNeededProperty(_)) => {
                "tidak dapat menambahkan comment baru karena property yang dibutuhkan tidak ada"
            }
            (EntityKind::AddComment, EntityError::NotMeetDataTypeSpecification(_)) => {
                "tidak dapat menambahkan comment baru karena tipe data tidak sesuai"
            }
            _ => return AppError::Internal(error.to_string()),
        };

        AppError::Validation(message.into())
    }
}
