//! Blog post stores and database connection management.

mod connections;
mod memory;

#[cfg(feature = "postgres")]
mod postgres_base;
#[cfg(feature = "postgres")]
pub mod postgres_repo;

#[cfg(feature = "postgres")]
pub mod entity;

pub use connections::DatabaseConfig;
#[cfg(feature = "postgres")]
pub use connections::DatabasePool;
pub use memory::InMemoryBlogPostRepository;

#[cfg(feature = "postgres")]
pub use postgres_repo::PostgresBlogPostRepository;
