//! HTTP Handlers
//!
//! Request handlers for all HTTP endpoints.

pub mod auth;
pub mod comment;
pub mod follow;
pub mod health;
pub mod post;
pub mod star;
