//! Application Services
//!
//! Business logic services that coordinate domain operations.
//!
//! ## Available Services
//!
//! - **AuthService**: JWT token pairs, password hashing, account creation
//! - **PostService**: Post CRUD with atomic group writes
//! - **CommentService**: Comment listing, creation and deletion
//! - **FollowService**: Follow edges between users
//! - **StarService**: Star rating upsert

pub mod auth_service;
pub mod comment_service;
pub mod follow_service;
pub mod post_service;
pub mod star_service;

pub use auth_service::{
    AuthError, AuthService, AuthServiceImpl, Claims, NewAccount, TokenPair, TokenType,
};
pub use comment_service::{CommentError, CommentService, CommentServiceImpl};
pub use follow_service::{FollowEdge, FollowError, FollowService, FollowServiceImpl};
pub use post_service::{PostError, PostService, PostServiceImpl};
pub use star_service::{StarError, StarService, StarServiceImpl};
