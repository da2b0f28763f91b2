//! # Blog Infrastructure
//!
//! Concrete implementations of the store port defined in `blog-core`.
//!
//! ## Feature Flags
//!
//! - `postgres` (default) - PostgreSQL store via SeaORM
//! - `minimal` - No external dependencies, in-memory store only

pub mod database;

pub use database::InMemoryBlogPostRepository;

#[cfg(feature = "postgres")]
pub use database::{DatabasePool, PostgresBlogPostRepository};
