//! Thread Handlers

use axum::{
    extract::{Extension, Path, State},
    http::StatusCode,
    Json,
};

use crate::application::dto::{AddedThreadData, SuccessResponse, ThreadData};
use crate::application::use_cases::{AddThreadUseCase, GetDetailThreadUseCase};
use crate::presentation::http::extractors::JsonPayload;
use crate::presentation::middleware::AuthUser;
use crate::shared::error::AppError;
use crate::startup::AppState;

/// Create a thread owned by the authenticated user
pub async fn post_thread(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    payload: JsonPayload,
) -> Result<(StatusCode, Json<SuccessResponse<AddedThreadData>>), AppError> {
    let use_case = AddThreadUseCase::new(state.thread_repo.clone());

    let payload = payload.with_field("owner", auth.user_id).into_inner();
    let added_thread = use_case.execute(&payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(SuccessResponse::with_data(AddedThreadData { added_thread })),
    ))
}

/// Get a thread with its comments (public)
pub async fn get_thread_detail(
    State(state): State<AppState>,
    Path(thread_id): Path<String>,
) -> Result<Json<SuccessResponse<ThreadData>>, AppError> {
    let use_case =
        GetDetailThreadUseCase::new(state.thread_repo.clone(), state.comment_repo.clone());

    let thread = use_case.execute(&thread_id).await?;

    Ok(Json(SuccessResponse::with_data(ThreadData { thread })))
}
