use async_trait::async_trait;

use crate::domain::{NewPost, Post, PostId, PostUpdate, SortField};
use crate::error::RepoError;

/// Post store.
///
/// Posts are kept in insertion order. Lookups match the first post with the
/// given id. A missing post is reported through `Option` / `bool`, never as
/// an error.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Store a new post with a freshly allocated id.
    async fn create(&self, draft: NewPost) -> Result<Post, RepoError>;

    /// All posts in insertion order.
    async fn list_all(&self) -> Result<Vec<Post>, RepoError>;

    /// Find a post by id.
    async fn find_by_id(&self, id: PostId) -> Result<Option<Post>, RepoError>;

    /// Replace title and content of a post. `None` when no post matched.
    async fn update(&self, id: PostId, update: PostUpdate) -> Result<Option<Post>, RepoError>;

    /// Remove a post. `false` when no post matched.
    async fn delete(&self, id: PostId) -> Result<bool, RepoError>;

    /// A sorted copy of all posts. Store order is left alone.
    async fn sort_by(&self, field: &SortField) -> Result<Vec<Post>, RepoError>;

    /// Posts whose author equals `name` exactly, in insertion order.
    async fn filter_by_author(&self, name: &str) -> Result<Vec<Post>, RepoError>;
}
