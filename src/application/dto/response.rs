//! Response DTOs
//!
//! Data structures for API response bodies. Each endpoint's wire schema is
//! spelled out here explicitly.

use serde::Serialize;

use crate::application::services::{FollowEdge, TokenPair};
use crate::domain::{Comment, Group, PostDetails, Star};

/// Token pair response (`POST /jwt/create/`)
#[derive(Debug, Serialize)]
pub struct TokenPairResponse {
    pub refresh: String,
    pub access: String,
}

impl From<TokenPair> for TokenPairResponse {
    fn from(tokens: TokenPair) -> Self {
        Self {
            refresh: tokens.refresh,
            access: tokens.access,
        }
    }
}

/// Access token response (`POST /jwt/refresh/`)
#[derive(Debug, Serialize)]
pub struct AccessTokenResponse {
    pub access: String,
}

/// Group response
#[derive(Debug, Serialize)]
pub struct GroupResponse {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub description: String,
}

impl From<Group> for GroupResponse {
    fn from(group: Group) -> Self {
        Self {
            id: group.id,
            title: group.title,
            slug: group.slug,
            description: group.description,
        }
    }
}

/// Comment response; `author` is the author's username
#[derive(Debug, Serialize)]
pub struct CommentResponse {
    pub id: i64,
    pub author: String,
    pub post: i64,
    pub text: String,
    pub created_at: String,
}

impl From<Comment> for CommentResponse {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id,
            author: comment.author_username,
            post: comment.post_id,
            text: comment.text,
            created_at: comment.created_at.to_rfc3339(),
        }
    }
}

/// Post response
#[derive(Debug, Serialize)]
pub struct PostResponse {
    pub id: i64,
    pub published_at: String,
    pub topic: String,
    pub author_name: String,
    pub text: String,
    pub group: GroupResponse,
    pub comments: Vec<CommentResponse>,
    pub stars: f64,
}

impl From<PostDetails> for PostResponse {
    fn from(details: PostDetails) -> Self {
        Self {
            id: details.post.id,
            published_at: details.post.published_at.to_rfc3339(),
            topic: details.post.topic,
            author_name: details.author_name,
            text: details.post.text,
            group: GroupResponse::from(details.group),
            comments: details.comments.into_iter().map(CommentResponse::from).collect(),
            stars: details.stars,
        }
    }
}

/// Follow response
#[derive(Debug, Serialize)]
pub struct FollowResponse {
    pub user: String,
    pub following: String,
}

impl From<FollowEdge> for FollowResponse {
    fn from(edge: FollowEdge) -> Self {
        Self {
            user: edge.user,
            following: edge.following,
        }
    }
}

/// Star rating response
#[derive(Debug, Serialize)]
pub struct StarResponse {
    pub stars: i32,
}

impl From<Star> for StarResponse {
    fn from(star: Star) -> Self {
        Self { stars: star.stars }
    }
}
