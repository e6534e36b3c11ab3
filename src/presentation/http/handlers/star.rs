//! Star Rating Handler

use axum::{extract::State, Extension, Json};

use crate::application::dto::request::SetStarRequest;
use crate::application::dto::response::StarResponse;
use crate::application::services::{StarService, StarServiceImpl};
use crate::presentation::http::extractors::{ResourceId, ValidatedJson};
use crate::presentation::middleware::AuthUser;
use crate::shared::error::{AppError, REQUIRED_FIELD_MESSAGE};
use crate::startup::AppState;

/// `POST /post/{post_id}/set-star/`
pub async fn set_star(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    ResourceId(post_id): ResourceId,
    ValidatedJson(body): ValidatedJson<SetStarRequest>,
) -> Result<Json<StarResponse>, AppError> {
    let stars = body
        .stars
        .ok_or_else(|| AppError::field("stars", REQUIRED_FIELD_MESSAGE))?;

    let service = StarServiceImpl::new(
        state.repositories.stars.clone(),
        state.repositories.posts.clone(),
    );
    let star = service.set_stars(post_id, auth_user.user_id, stars).await?;

    Ok(Json(star.into()))
}
