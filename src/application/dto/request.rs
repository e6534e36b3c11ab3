//! Request DTOs
//!
//! Data structures for API request bodies. Required fields are `Option`s
//! validated with `required` so a missing field is reported per field
//! instead of failing deserialization.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::{GroupChanges, NewGroup, NewPost, PostChanges};
use crate::shared::validation::validate_slug;

/// `POST /jwt/create/`
#[derive(Debug, Deserialize, Validate)]
pub struct TokenObtainRequest {
    #[validate(required)]
    pub username: Option<String>,

    #[validate(required)]
    pub password: Option<String>,
}

/// `POST /jwt/refresh/`
#[derive(Debug, Deserialize, Validate)]
pub struct TokenRefreshRequest {
    #[validate(required)]
    pub refresh: Option<String>,
}

/// `POST /jwt/verify/`
#[derive(Debug, Deserialize, Validate)]
pub struct TokenVerifyRequest {
    #[validate(required)]
    pub token: Option<String>,
}

/// Group embedded in a post creation request
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct GroupRequest {
    #[validate(required, length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: Option<String>,

    #[validate(
        required,
        length(max = 50, message = "Slug must be at most 50 characters"),
        custom(function = "validate_slug")
    )]
    pub slug: Option<String>,

    #[validate(required)]
    pub description: Option<String>,
}

/// Create post request
///
/// Any `author` supplied by the client is ignored.
#[derive(Debug, Deserialize, Validate)]
pub struct CreatePostRequest {
    #[validate(required, length(min = 1, message = "Text must not be blank"))]
    pub text: Option<String>,

    #[validate(required, length(min = 1, max = 200, message = "Topic must be 1-200 characters"))]
    pub topic: Option<String>,

    #[validate(required, nested)]
    pub group: Option<GroupRequest>,
}

impl CreatePostRequest {
    /// Convert a validated request into the domain insert.
    pub fn into_new_post(self) -> NewPost {
        let group = self
            .group
            .map(|g| NewGroup {
                title: g.title.unwrap_or_default(),
                slug: g.slug.unwrap_or_default(),
                description: g.description.unwrap_or_default(),
            })
            .unwrap_or_default();

        NewPost {
            text: self.text.unwrap_or_default(),
            topic: self.topic.unwrap_or_default(),
            group,
        }
    }
}

/// Group fields in a post update request
#[derive(Debug, Deserialize, Validate)]
pub struct GroupPatchRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: Option<String>,

    #[validate(
        length(max = 50, message = "Slug must be at most 50 characters"),
        custom(function = "validate_slug")
    )]
    pub slug: Option<String>,

    pub description: Option<String>,
}

/// Partial post update request (`PATCH`)
#[derive(Debug, Deserialize, Validate)]
pub struct UpdatePostRequest {
    #[validate(length(min = 1, message = "Text must not be blank"))]
    pub text: Option<String>,

    #[validate(length(min = 1, max = 200, message = "Topic must be 1-200 characters"))]
    pub topic: Option<String>,

    #[validate(nested)]
    pub group: Option<GroupPatchRequest>,
}

impl UpdatePostRequest {
    pub fn into_changes(self) -> PostChanges {
        PostChanges {
            text: self.text,
            topic: self.topic,
            group: self
                .group
                .map(|g| GroupChanges {
                    title: g.title,
                    slug: g.slug,
                    description: g.description,
                })
                .filter(|changes| !changes.is_empty()),
        }
    }
}

/// Create comment request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCommentRequest {
    #[validate(required)]
    pub post: Option<i64>,

    #[validate(required, length(min = 1, message = "Text must not be blank"))]
    pub text: Option<String>,
}

/// `POST /subscribe/`
///
/// The follower is always the caller; a client-supplied `user` is ignored.
#[derive(Debug, Deserialize, Validate)]
pub struct FollowRequest {
    #[validate(required, length(min = 1, message = "Username must not be blank"))]
    pub following: Option<String>,
}

/// `POST /post/{id}/set-star/`
#[derive(Debug, Deserialize, Validate)]
pub struct SetStarRequest {
    #[validate(required)]
    pub stars: Option<i32>,
}
