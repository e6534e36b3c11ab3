//! Authentication Middleware
//!
//! Bearer access-token validation for protected routes.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
    RequestExt,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};

use crate::application::services::{AuthService, AuthServiceImpl};
use crate::shared::error::AppError;
use crate::startup::AppState;

/// Authenticated caller, attached to the request by `auth_middleware`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser {
    pub user_id: i64,
    pub username: String,
}

/// Authentication middleware that validates the access token and loads its user
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let TypedHeader(Authorization(bearer)) = request
        .extract_parts::<TypedHeader<Authorization<Bearer>>>()
        .await
        .map_err(|_| {
            AppError::Unauthorized("Authentication credentials were not provided.".into())
        })?;

    let auth_service =
        AuthServiceImpl::new(state.repositories.users.clone(), state.settings.jwt.clone());
    let user = auth_service.authenticate(bearer.token()).await?;

    request.extensions_mut().insert(AuthUser {
        user_id: user.id,
        username: user.username,
    });

    Ok(next.run(request).await)
}
