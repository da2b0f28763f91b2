//! Application state - shared across all handlers.

use std::sync::Arc;

use blog_core::ports::BlogPostRepository;
use blog_infra::database::{DatabaseConfig, InMemoryBlogPostRepository};

#[cfg(feature = "postgres")]
use blog_infra::database::{DatabasePool, PostgresBlogPostRepository};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn BlogPostRepository>,
}

impl AppState {
    pub fn new(posts: Arc<dyn BlogPostRepository>) -> Self {
        Self { posts }
    }

    /// State backed by a fresh, empty in-memory store.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryBlogPostRepository::new()))
    }

    /// Build the application state with the store the configuration asks for.
    ///
    /// A configured database that cannot be reached is an error; only a missing
    /// `DATABASE_URL` selects the in-memory store.
    pub async fn from_config(db_config: Option<&DatabaseConfig>) -> anyhow::Result<Self> {
        #[cfg(feature = "postgres")]
        let state = match db_config {
            Some(config) => {
                let pool = DatabasePool::init(config).await?;
                Self::new(Arc::new(PostgresBlogPostRepository::new(pool.conn)))
            }
            None => {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                Self::in_memory()
            }
        };

        #[cfg(not(feature = "postgres"))]
        let state = {
            if db_config.is_some() {
                tracing::warn!("DATABASE_URL ignored: built without the postgres feature");
            }
            tracing::info!("Running without postgres feature - using in-memory repository");
            Self::in_memory()
        };

        tracing::info!("Application state initialized");

        Ok(state)
    }
}
