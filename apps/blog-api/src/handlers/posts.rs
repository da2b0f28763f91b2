//! Blog post resource handlers.
//!
//! Every request is validated before the store is touched and performs at most
//! one store mutation.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use blog_core::domain::{BlogPost, BlogPostChanges, NewBlogPost, require_field};
use blog_core::error::{DomainError, RepoError};
use blog_core::ports::{BaseRepository, BlogPostRepository};
use blog_shared::dto::{CreatePostRequest, PostListResponse, PostResponse, UpdatePostRequest};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

fn to_response(post: BlogPost) -> PostResponse {
    PostResponse {
        id: post.id.to_string(),
        created: post.created_rfc3339(),
        author: post.author,
        content: post.content,
        title: post.title,
    }
}

fn parse_id(raw: &str) -> AppResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| AppError::BadRequest(format!("Invalid blog post id: {}", raw)))
}

/// GET /posts
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.find_all().await?;
    tracing::debug!(count = posts.len(), "Listing blog posts");

    Ok(HttpResponse::Ok().json(PostListResponse {
        posts: posts.into_iter().map(to_response).collect(),
    }))
}

/// GET /posts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;

    let post = state
        .posts
        .find_by_id(id)
        .await?
        .ok_or(DomainError::NotFound {
            entity_type: "BlogPost",
            id,
        })?;

    Ok(HttpResponse::Ok().json(to_response(post)))
}

/// POST /posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let new_post = NewBlogPost {
        author: require_field("author", req.author)?,
        title: require_field("title", req.title)?,
        content: req.content.unwrap_or_default(),
    };

    let post = state.posts.insert(new_post).await?;
    tracing::info!(post_id = %post.id, "Blog post created");

    Ok(HttpResponse::Created().json(to_response(post)))
}

/// PUT /posts/{id}
///
/// The body must repeat the path id. Only the supplied fields change.
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let path_id = path.into_inner();
    let req = body.into_inner();

    if req.id.as_deref() != Some(path_id.as_str()) {
        return Err(AppError::BadRequest(format!(
            "Request path id ({}) and request body id ({}) must match",
            path_id,
            req.id.as_deref().unwrap_or("missing")
        )));
    }
    let id = parse_id(&path_id)?;

    let changes = BlogPostChanges {
        author: req.author,
        title: req.title,
        content: req.content,
    };
    changes.validate()?;

    state
        .posts
        .update_by_id(id, changes)
        .await
        .map_err(|err| match err {
            RepoError::NotFound => AppError::from(DomainError::NotFound {
                entity_type: "BlogPost",
                id,
            }),
            other => other.into(),
        })?;
    tracing::info!(post_id = %id, "Blog post updated");

    Ok(HttpResponse::NoContent().finish())
}

/// DELETE /posts/{id}
///
/// Succeeds whether or not the post existed.
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;

    let removed = state.posts.delete_by_id(id).await?;
    tracing::info!(post_id = %id, removed, "Blog post deleted");

    Ok(HttpResponse::NoContent().finish())
}
