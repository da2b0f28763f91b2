//! PostgreSQL blog post store.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, EntityTrait, IntoActiveModel, QueryOrder, Set};
use uuid::Uuid;

use blog_core::domain::{BlogPost, BlogPostChanges, NewBlogPost};
use blog_core::error::RepoError;
use blog_core::ports::BlogPostRepository;

use super::entity::blog_post::{self, Entity as BlogPostEntity};
use super::postgres_base::{PostgresBaseRepository, map_db_err};

/// PostgreSQL blog post repository.
pub type PostgresBlogPostRepository = PostgresBaseRepository<BlogPostEntity>;

#[async_trait]
impl BlogPostRepository for PostgresBlogPostRepository {
    async fn find_all(&self) -> Result<Vec<BlogPost>, RepoError> {
        let result = BlogPostEntity::find()
            .order_by_asc(blog_post::Column::Created)
            .order_by_asc(blog_post::Column::Id)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn find_one(&self) -> Result<Option<BlogPost>, RepoError> {
        let result = BlogPostEntity::find()
            .order_by_asc(blog_post::Column::Created)
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.map(Into::into))
    }

    async fn insert(&self, post: NewBlogPost) -> Result<BlogPost, RepoError> {
        let post = BlogPost::new(post)?;
        let active_model: blog_post::ActiveModel = post.into();

        let model = active_model.insert(&self.db).await.map_err(map_db_err)?;
        tracing::debug!(post_id = %model.id, "Inserted blog post");

        Ok(model.into())
    }

    async fn insert_many(&self, posts: Vec<NewBlogPost>) -> Result<Vec<BlogPost>, RepoError> {
        let created = posts
            .into_iter()
            .map(BlogPost::new)
            .collect::<Result<Vec<_>, _>>()?;

        if created.is_empty() {
            return Ok(created);
        }

        // A single multi-row INSERT, so the batch lands atomically.
        let models: Vec<blog_post::ActiveModel> = created.iter().cloned().map(Into::into).collect();
        let rows = BlogPostEntity::insert_many(models)
            .exec_without_returning(&self.db)
            .await
            .map_err(map_db_err)?;
        tracing::debug!(count = rows, "Inserted blog posts");

        Ok(created)
    }

    async fn update_by_id(
        &self,
        id: Uuid,
        changes: BlogPostChanges,
    ) -> Result<BlogPost, RepoError> {
        let model = BlogPostEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(RepoError::NotFound)?;

        if changes.is_empty() {
            return Ok(model.into());
        }

        let mut active_model = model.into_active_model();
        if let Some(author) = changes.author {
            active_model.author = Set(author);
        }
        if let Some(title) = changes.title {
            active_model.title = Set(title);
        }
        if let Some(content) = changes.content {
            active_model.content = Set(content);
        }

        let model = active_model.update(&self.db).await.map_err(map_db_err)?;
        Ok(model.into())
    }

    async fn drop_all(&self) -> Result<u64, RepoError> {
        let result = BlogPostEntity::delete_many()
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;

        tracing::warn!(removed = result.rows_affected, "Dropped all blog posts");
        Ok(result.rows_affected)
    }
}
