//! Response bodies that are not posts.

use serde::{Deserialize, Serialize};

/// `{"message": "..."}` - used for deletes and every error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub const POST_NOT_FOUND: &'static str = "Post not found";
    pub const POST_DELETED: &'static str = "Post deleted successfully";

    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn post_not_found() -> Self {
        Self::new(Self::POST_NOT_FOUND)
    }

    pub fn post_deleted() -> Self {
        Self::new(Self::POST_DELETED)
    }
}
