//! # Blog Shared
//!
//! Wire types for the blog post API, shared by the server and its clients.

pub mod dto;
pub mod response;

pub use response::ErrorResponse;
