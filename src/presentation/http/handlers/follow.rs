//! Follow Handler

use axum::{extract::State, http::StatusCode, Extension, Json};

use crate::application::dto::request::FollowRequest;
use crate::application::dto::response::FollowResponse;
use crate::application::services::{FollowService, FollowServiceImpl};
use crate::presentation::http::extractors::ValidatedJson;
use crate::presentation::middleware::AuthUser;
use crate::shared::error::AppError;
use crate::startup::AppState;

/// `POST /subscribe/`
///
/// The follower is the caller; only the `following` username is read from the body.
pub async fn subscribe(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    ValidatedJson(body): ValidatedJson<FollowRequest>,
) -> Result<(StatusCode, Json<FollowResponse>), AppError> {
    let following = body.following.unwrap_or_default();

    let service = FollowServiceImpl::new(
        state.repositories.follows.clone(),
        state.repositories.users.clone(),
    );
    let edge = service.follow(auth_user.user_id, &following).await?;

    Ok((StatusCode::CREATED, Json(edge.into())))
}
