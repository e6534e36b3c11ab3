//! Post Handlers

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Extension, Json,
};

use crate::application::dto::request::{CreatePostRequest, UpdatePostRequest};
use crate::application::dto::response::PostResponse;
use crate::application::services::{PostService, PostServiceImpl};
use crate::presentation::http::extractors::{ResourceId, ValidatedJson};
use crate::presentation::middleware::AuthUser;
use crate::shared::error::AppError;
use crate::shared::pagination::{Page, PageQuery, PageRequest};
use crate::startup::AppState;

fn post_service(state: &AppState) -> PostServiceImpl {
    PostServiceImpl::new(state.repositories.posts.clone())
}

/// `GET /post/`
pub async fn list_posts(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Json<Page<PostResponse>>, AppError> {
    let page = PageRequest::from_query(&query, &state.settings.pagination);
    let posts = post_service(&state).list_posts(page).await?;

    Ok(Json(posts.map(PostResponse::from)))
}

/// `POST /post/`
pub async fn create_post(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    ValidatedJson(body): ValidatedJson<CreatePostRequest>,
) -> Result<(StatusCode, Json<PostResponse>), AppError> {
    let post = post_service(&state)
        .create_post(auth_user.user_id, body.into_new_post())
        .await?;

    Ok((StatusCode::CREATED, Json(post.into())))
}

/// `GET /post/{post_id}/`
pub async fn get_post(
    State(state): State<AppState>,
    ResourceId(post_id): ResourceId,
) -> Result<Json<PostResponse>, AppError> {
    let post = post_service(&state).get_post(post_id).await?;
    Ok(Json(post.into()))
}

/// `PATCH /post/{post_id}/`
pub async fn update_post(
    State(state): State<AppState>,
    ResourceId(post_id): ResourceId,
    ValidatedJson(body): ValidatedJson<UpdatePostRequest>,
) -> Result<Json<PostResponse>, AppError> {
    let post = post_service(&state)
        .update_post(post_id, body.into_changes())
        .await?;

    Ok(Json(post.into()))
}

/// `DELETE /post/{post_id}/`
pub async fn delete_post(
    State(state): State<AppState>,
    ResourceId(post_id): ResourceId,
) -> Result<StatusCode, AppError> {
    post_service(&state).delete_post(post_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
