//! # Domain Entities
//!
//! Core domain entities of the blog. All entities map directly to their
//! corresponding database tables.
//!
//! - **User**: account that authors posts and comments
//! - **Group**: topic a post is filed under, written together with its post
//! - **Post**: text entry with its group, comments and star ratings
//! - **Comment**: text reply on a post
//! - **Follow**: directed edge between two users
//! - **Star**: a user's 1..=5 rating of a post, one per (post, user)
//!
//! ## Repository Traits
//!
//! Each entity has an associated repository trait defining data access operations.
//! These traits are implemented in the infrastructure layer, following the
//! dependency inversion principle.

mod comment;
mod follow;
mod group;
mod post;
mod star;
mod user;

pub use comment::{Comment, CommentRepository, NewComment};
pub use follow::{Follow, FollowRepository};
pub use group::{Group, GroupChanges, GroupRepository, NewGroup};
pub use post::{NewPost, Post, PostChanges, PostDetails, PostRepository};
pub use star::{Star, StarRepository, MAX_STARS};
pub use user::{NewUser, User, UserRepository};

#[cfg(test)]
pub use comment::MockCommentRepository;
#[cfg(test)]
pub use follow::MockFollowRepository;
#[cfg(test)]
pub use post::MockPostRepository;
#[cfg(test)]
pub use star::MockStarRepository;
#[cfg(test)]
pub use user::MockUserRepository;
