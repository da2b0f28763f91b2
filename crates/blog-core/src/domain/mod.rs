//! Domain entities - the core business objects.

mod post;

pub use post::{BlogPost, BlogPostChanges, NewBlogPost, require_field, require_non_blank};
