//! Data Transfer Objects - request/response types for the API.

use serde::{Deserialize, Serialize};

/// Body of `POST /posts`.
///
/// Fields are optional on the wire so a missing one can be reported by name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub author: Option<String>,
    pub title: Option<String>,
    pub content: Option<String>,
}

/// Body of `PUT /posts/{id}`. `id` must repeat the path id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePostRequest {
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// A serialized blog post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PostResponse {
    pub id: String,
    pub author: String,
    pub content: String,
    pub title: String,
    pub created: String,
}

/// Body of `GET /posts`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PostListResponse {
    pub posts: Vec<PostResponse>,
}
