//! In-memory post store.

use async_trait::async_trait;
use tokio::sync::RwLock;

use blog_core::domain::{
    self, IdAllocator, IdPolicy, NewPost, Post, PostId, PostUpdate, SortField,
};
use blog_core::error::RepoError;
use blog_core::ports::PostRepository;

struct PostTable {
    posts: Vec<Post>,
    ids: IdAllocator,
}

impl PostTable {
    fn position(&self, id: PostId) -> Option<usize> {
        self.posts.iter().position(|post| post.id == id)
    }
}

/// Post store backed by a `Vec` behind an async `RwLock`.
///
/// Every operation takes the lock once, so each call is atomic with respect
/// to the others. Data is lost on process restart.
pub struct InMemoryPostRepository {
    table: RwLock<PostTable>,
}

impl InMemoryPostRepository {
    pub fn new(policy: IdPolicy) -> Self {
        Self {
            table: RwLock::new(PostTable {
                posts: Vec::new(),
                ids: IdAllocator::new(policy),
            }),
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new(IdPolicy::default())
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn create(&self, draft: NewPost) -> Result<Post, RepoError> {
        let mut table = self.table.write().await;

        let len = table.posts.len();
        let id = table.ids.next(len);
        let post = Post::new(id, draft);
        table.posts.push(post.clone());

        tracing::debug!(post_id = id, policy = %table.ids.policy(), "Post created");
        Ok(post)
    }

    async fn list_all(&self) -> Result<Vec<Post>, RepoError> {
        Ok(self.table.read().await.posts.clone())
    }

    async fn find_by_id(&self, id: PostId) -> Result<Option<Post>, RepoError> {
        let table = self.table.read().await;
        Ok(table.posts.iter().find(|post| post.id == id).cloned())
    }

    async fn update(&self, id: PostId, update: PostUpdate) -> Result<Option<Post>, RepoError> {
        let mut table = self.table.write().await;

        let Some(post) = table.posts.iter_mut().find(|post| post.id == id) else {
            tracing::debug!(post_id = id, "Update target not found");
            return Ok(None);
        };

        post.apply(update);
        tracing::debug!(post_id = id, "Post updated");
        Ok(Some(post.clone()))
    }

    async fn delete(&self, id: PostId) -> Result<bool, RepoError> {
        let mut table = self.table.write().await;

        match table.position(id) {
            Some(index) => {
                // `remove` shifts the tail, keeping the remaining order
                table.posts.remove(index);
                tracing::debug!(post_id = id, "Post deleted");
                Ok(true)
            }
            None => {
                tracing::debug!(post_id = id, "Delete target not found");
                Ok(false)
            }
        }
    }

    async fn sort_by(&self, field: &SortField) -> Result<Vec<Post>, RepoError> {
        let mut posts = self.table.read().await.posts.clone();
        domain::sort_posts(&mut posts, field);
        Ok(posts)
    }

    async fn filter_by_author(&self, name: &str) -> Result<Vec<Post>, RepoError> {
        let table = self.table.read().await;
        Ok(domain::filter_by_author(&table.posts, name))
    }
}
