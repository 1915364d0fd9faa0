//! Domain entities and rules.

mod id_policy;
mod post;
mod query;

pub use id_policy::{IdAllocator, IdPolicy};
pub use post::{NewPost, Post, PostId, PostUpdate, format_timestamp};
pub use query::{SortField, collate, compare_authors, filter_by_author, sort_posts};
