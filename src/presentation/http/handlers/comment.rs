//! Comment Handlers

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Extension, Json,
};

use crate::application::dto::request::CreateCommentRequest;
use crate::application::dto::response::CommentResponse;
use crate::application::services::{CommentService, CommentServiceImpl};
use crate::presentation::http::extractors::{ResourceId, ValidatedJson};
use crate::presentation::middleware::AuthUser;
use crate::shared::error::{AppError, REQUIRED_FIELD_MESSAGE};
use crate::shared::pagination::{Page, PageQuery, PageRequest};
use crate::startup::AppState;

fn comment_service(state: &AppState) -> CommentServiceImpl {
    CommentServiceImpl::new(
        state.repositories.comments.clone(),
        state.repositories.posts.clone(),
    )
}

/// `GET /comment/`
pub async fn list_comments(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Json<Page<CommentResponse>>, AppError> {
    let page = PageRequest::from_query(&query, &state.settings.pagination);
    let comments = comment_service(&state).list_comments(page).await?;

    Ok(Json(comments.map(CommentResponse::from)))
}

/// `POST /comment/`
///
/// The author is always the caller.
pub async fn create_comment(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    ValidatedJson(body): ValidatedJson<CreateCommentRequest>,
) -> Result<(StatusCode, Json<CommentResponse>), AppError> {
    let post_id = body
        .post
        .ok_or_else(|| AppError::field("post", REQUIRED_FIELD_MESSAGE))?;

    let comment = comment_service(&state)
        .create_comment(auth_user.user_id, post_id, body.text.unwrap_or_default())
        .await?;

    Ok((StatusCode::CREATED, Json(comment.into())))
}

/// `DELETE /comment/{comment_id}/`
pub async fn delete_comment(
    State(state): State<AppState>,
    ResourceId(comment_id): ResourceId,
) -> Result<StatusCode, AppError> {
    comment_service(&state).delete_comment(comment_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
