use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// BlogPost entity - a single article in the blog.
///
/// `id` and `created` are minted by [`BlogPost::new`] and never change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: Uuid,
    pub author: String,
    pub title: String,
    pub content: String,
    pub created: DateTime<Utc>,
}

impl BlogPost {
    /// Create a new post with a generated ID and creation timestamp.
    ///
    /// The timestamp is truncated to microseconds, the precision of a
    /// Postgres `timestamptz`, so it reads back exactly as written.
    pub fn new(new: NewBlogPost) -> Result<Self, DomainError> {
        new.validate()?;
        Ok(Self {
            id: Uuid::new_v4(),
            author: new.author,
            title: new.title,
            content: new.content,
            created: Utc::now().trunc_subsecs(6),
        })
    }

    /// Apply a partial update. Only the supplied fields are overwritten.
    pub fn apply(&mut self, changes: BlogPostChanges) {
        if let Some(author) = changes.author {
            self.author = author;
        }
        if let Some(title) = changes.title {
            self.title = title;
        }
        if let Some(content) = changes.content {
            self.content = content;
        }
    }

    /// Canonical text form of `created`, identical on every read and write path.
    pub fn created_rfc3339(&self) -> String {
        self.created.to_rfc3339_opts(SecondsFormat::Micros, true)
    }
}

/// Fields supplied by a caller when creating a post.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewBlogPost {
    pub author: String,
    pub title: String,
    #[serde(default)]
    pub content: String,
}

impl NewBlogPost {
    pub fn new(
        author: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            author: author.into(),
            title: title.into(),
            content: content.into(),
        }
    }

    /// `author` and `title` must be non-empty; `content` may be empty.
    pub fn validate(&self) -> Result<(), DomainError> {
        require_non_blank("author", &self.author)?;
        require_non_blank("title", &self.title)
    }
}

/// Partial update of a post. `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPostChanges {
    pub author: Option<String>,
    pub title: Option<String>,
    pub content: Option<String>,
}

impl BlogPostChanges {
    pub fn is_empty(&self) -> bool {
        self.author.is_none() && self.title.is_none() && self.content.is_none()
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if let Some(author) = &self.author {
            require_non_blank("author", author)?;
        }
        if let Some(title) = &self.title {
            require_non_blank("title", title)?;
        }
        Ok(())
    }
}

/// Unwrap a required request field, naming it in the error when absent.
pub fn require_field(field: &'static str, value: Option<String>) -> Result<String, DomainError> {
    let value =
        value.ok_or_else(|| DomainError::Validation(format!("Missing `{field}` in request body")))?;
    require_non_blank(field, &value)?;
    Ok(value)
}

pub fn require_non_blank(field: &'static str, value: &str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::Validation(format!("`{field}` must not be empty")));
    }
    Ok(())
}
