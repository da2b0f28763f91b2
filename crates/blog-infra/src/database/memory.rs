//! In-memory blog post store - used when no database is configured, and by tests.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use blog_core::domain::{BlogPost, BlogPostChanges, NewBlogPost};
use blog_core::error::RepoError;
use blog_core::ports::{BaseRepository, BlogPostRepository};

/// In-memory store holding posts in insertion order behind an async RwLock.
///
/// Every write takes the write lock, so concurrent updates to the same post
/// are serialized and the last one wins.
/// Note: Data is lost on process restart.
pub struct InMemoryBlogPostRepository {
    posts: RwLock<Vec<BlogPost>>,
}

impl InMemoryBlogPostRepository {
    pub fn new() -> Self {
        Self {
            posts: RwLock::new(Vec::new()),
        }
    }
}

impl Default for InMemoryBlogPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<BlogPost, Uuid> for InMemoryBlogPostRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<BlogPost>, RepoError> {
        let posts = self.posts.read().await;
        Ok(posts.iter().find(|p| p.id == id).cloned())
    }

    async fn count(&self) -> Result<u64, RepoError> {
        Ok(self.posts.read().await.len() as u64)
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<bool, RepoError> {
        let mut posts = self.posts.write().await;
        let before = posts.len();
        posts.retain(|p| p.id != id);
        Ok(posts.len() != before)
    }
}

#[async_trait]
impl BlogPostRepository for InMemoryBlogPostRepository {
    async fn find_all(&self) -> Result<Vec<BlogPost>, RepoError> {
        Ok(self.posts.read().await.clone())
    }

    async fn find_one(&self) -> Result<Option<BlogPost>, RepoError> {
        Ok(self.posts.read().await.first().cloned())
    }

    async fn insert(&self, post: NewBlogPost) -> Result<BlogPost, RepoError> {
        let post = BlogPost::new(post)?;
        self.posts.write().await.push(post.clone());
        Ok(post)
    }

    async fn insert_many(&self, posts: Vec<NewBlogPost>) -> Result<Vec<BlogPost>, RepoError> {
        // Build everything before taking the lock so a bad record writes nothing.
        let created = posts
            .into_iter()
            .map(BlogPost::new)
            .collect::<Result<Vec<_>, _>>()?;

        self.posts.write().await.extend(created.iter().cloned());
        tracing::debug!(count = created.len(), "Inserted blog posts");
        Ok(created)
    }

    async fn update_by_id(
        &self,
        id: Uuid,
        changes: BlogPostChanges,
    ) -> Result<BlogPost, RepoError> {
        let mut posts = self.posts.write().await;
        let post = posts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(RepoError::NotFound)?;

        post.apply(changes);
        Ok(post.clone())
    }

    async fn drop_all(&self) -> Result<u64, RepoError> {
        let mut posts = self.posts.write().await;
        let removed = posts.len() as u64;
        posts.clear();
        tracing::warn!(removed, "Dropped all blog posts");
        Ok(removed)
    }
}
