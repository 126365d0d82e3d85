pub mod blog_posts;
pub mod education;
pub mod experiences;
pub mod hero_image;
pub mod projects;
pub mod skills;

/// Error surface shared by every collection repository. Writes are never
/// retried; the caller maps this straight to an API error.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ContentRepositoryError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}
