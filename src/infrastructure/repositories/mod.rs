//! Repository Implementations
//!
//! PostgreSQL implementations of the domain repository traits, one per table.
//!
//! ```rust,ignore
//! let posts = PgPostRepository::new(pool.clone());
//! let stars = PgStarRepository::new(pool.clone());
//! ```

pub mod comment_repository;
pub mod follow_repository;
pub mod group_repository;
pub mod post_repository;
pub mod star_repository;
pub mod user_repository;

pub use comment_repository::PgCommentRepository;
pub use follow_repository::PgFollowRepository;
pub use group_repository::PgGroupRepository;
pub use post_repository::PgPostRepository;
pub use star_repository::PgStarRepository;
pub use user_repository::PgUserRepository;
