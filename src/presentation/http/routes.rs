//! Route Configuration
//!
//! Configures all HTTP routes for the API.

use axum::{
    http::header,
    middleware,
    response::IntoResponse,
    routing::{delete, get, post},
    Router,
};

use super::handlers::{auth, comment, follow, health, post as posts, star};
use crate::infrastructure::metrics;
use crate::presentation::middleware::{auth_middleware, track_metrics};
use crate::shared::error::AppError;
use crate::startup::AppState;

/// Create the main API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(resource_routes(state.clone()))
        // Token issuance is public
        .nest("/jwt", token_routes())
        .route("/health", get(health::health_check))
        .route("/health/live", get(health::liveness))
        .route("/health/ready", get(health::readiness))
        .route("/metrics", get(metrics_handler))
        .route_layer(middleware::from_fn(track_metrics))
        .with_state(state)
}

/// Prometheus metrics endpoint handler
async fn metrics_handler() -> Result<impl IntoResponse, AppError> {
    let body = metrics::gather_metrics()
        .map_err(|e| AppError::Internal(format!("Failed to encode metrics: {}", e)))?;

    Ok((
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4; charset=utf-8")],
        body,
    ))
}

/// JWT token lifecycle routes
fn token_routes() -> Router<AppState> {
    Router::new()
        .route("/create/", post(auth::create_token))
        .route("/refresh/", post(auth::refresh_token))
        .route("/verify/", post(auth::verify_token))
}

/// Blog resources; every route requires a bearer access token
fn resource_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/post/", get(posts::list_posts).post(posts::create_post))
        .route(
            "/post/{post_id}/",
            get(posts::get_post)
                .patch(posts::update_post)
                .delete(posts::delete_post),
        )
        .route("/post/{post_id}/set-star/", post(star::set_star))
        .route(
            "/comment/",
            get(comment::list_comments).post(comment::create_comment),
        )
        .route("/comment/{comment_id}/", delete(comment::delete_comment))
        .route("/subscribe/", post(follow::subscribe))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}
