//! Comment Handlers

use axum::{
    extract::{Extension, Path, State},
    http::StatusCode,
    Json,
};

use crate::application::dto::{AddedCommentData, SuccessResponse};
use crate::application::use_cases::{
    AddCommentUseCase, DeleteCommentPayload, DeleteCommentUseCase,
};
use crate::presentation::http::extractors::JsonPayload;
use crate::presentation::middleware::AuthUser;
use crate::shared::error::AppError;
use crate::startup::AppState;

/// Add a comment to a thread
pub async fn post_comment(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(thread_id): Path<String>,
    payload: JsonPayload,
) -> Result<(StatusCode, Json<SuccessResponse<AddedCommentData>>), AppError> {
    let use_case = AddCommentUseCase::new(state.thread_repo.clone(), state.comment_repo.clone());

    let payload = payload
        .with_field("threadId", thread_id)
        .with_field("owner", auth.user_id)
        .into_inner();
    let added_comment = use_case.execute(&payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(SuccessResponse::with_data(AddedCommentData { added_comment })),
    ))
}

/// Soft-delete a comment (owner only)
pub async fn delete_comment(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path((thread_id, comment_id)): Path<(String, String)>,
) -> Result<Json<SuccessResponse<()>>, AppError> {
    let use_case =
        DeleteCommentUseCase::new(state.thread_repo.clone(), state.comment_repo.clone());

    let payload = DeleteCommentPayload {
        thread_id,
        comment_id,
        owner: auth.user_id,
    };
    use_case.execute(&payload).await?;

    Ok(Json(SuccessResponse::empty()))
}
