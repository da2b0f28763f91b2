use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{BlogPost, BlogPostChanges, NewBlogPost};
use crate::error::RepoError;

/// Generic repository trait defining the lookups every store supports.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID. Absence is `Ok(None)`, not an error.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Number of currently stored entities.
    async fn count(&self) -> Result<u64, RepoError>;

    /// Delete an entity by its ID. Returns whether anything was removed.
    async fn delete_by_id(&self, id: ID) -> Result<bool, RepoError>;
}

/// Blog post store. Owns record identity and creation timestamps.
#[async_trait]
pub trait BlogPostRepository: BaseRepository<BlogPost, Uuid> {
    /// All posts, oldest first.
    async fn find_all(&self) -> Result<Vec<BlogPost>, RepoError>;

    /// Any existing post, or `None` when the store is empty.
    async fn find_one(&self) -> Result<Option<BlogPost>, RepoError>;

    /// Persist a single post.
    async fn insert(&self, post: NewBlogPost) -> Result<BlogPost, RepoError>;

    /// Persist a batch of posts. Nothing is written if any record is invalid.
    async fn insert_many(&self, posts: Vec<NewBlogPost>) -> Result<Vec<BlogPost>, RepoError>;

    /// Apply the supplied fields to an existing post.
    ///
    /// Fails with [`RepoError::NotFound`] when no post has that id.
    async fn update_by_id(&self, id: Uuid, changes: BlogPostChanges)
    -> Result<BlogPost, RepoError>;

    /// Remove every post. Returns the number removed.
    async fn drop_all(&self) -> Result<u64, RepoError>;
}
