//! Token Handlers
//!
//! Public JWT endpoints: obtain a pair, refresh an access token, verify a token.

use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::application::dto::request::{TokenObtainRequest, TokenRefreshRequest, TokenVerifyRequest};
use crate::application::dto::response::{AccessTokenResponse, TokenPairResponse};
use crate::application::services::{AuthService, AuthServiceImpl};
use crate::presentation::http::extractors::ValidatedJson;
use crate::shared::error::AppError;
use crate::startup::AppState;

fn auth_service(state: &AppState) -> AuthServiceImpl {
    AuthServiceImpl::new(state.repositories.users.clone(), state.settings.jwt.clone())
}

/// `POST /jwt/create/`
pub async fn create_token(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<TokenObtainRequest>,
) -> Result<Json<TokenPairResponse>, AppError> {
    let username = body.username.unwrap_or_default();
    let password = body.password.unwrap_or_default();

    let tokens = auth_service(&state)
        .obtain_token_pair(&username, &password)
        .await?;

    Ok(Json(tokens.into()))
}

/// `POST /jwt/refresh/`
pub async fn refresh_token(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<TokenRefreshRequest>,
) -> Result<Json<AccessTokenResponse>, AppError> {
    let refresh = body.refresh.unwrap_or_default();
    let access = auth_service(&state).refresh_access_token(&refresh).await?;

    Ok(Json(AccessTokenResponse { access }))
}

/// `POST /jwt/verify/`
pub async fn verify_token(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<TokenVerifyRequest>,
) -> Result<Json<Value>, AppError> {
    let token = body.token.unwrap_or_default();
    auth_service(&state).verify_token(&token).await?;

    Ok(Json(json!({})))
}
