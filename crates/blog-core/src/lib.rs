//! # Blog Core
//!
//! The domain layer of the blog post service.
//! This crate holds the `BlogPost` entity, its validation rules and the store port,
//! with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::{DomainError, RepoError};
