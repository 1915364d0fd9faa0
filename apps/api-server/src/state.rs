//! Application state - shared across all handlers.

use std::sync::Arc;

use blog_core::domain::IdPolicy;
use blog_core::ports::PostRepository;
use blog_infra::InMemoryPostRepository;

use crate::config::AppConfig;

/// Shared application state.
///
/// Built once in `main` and cloned into every worker; the post store behind
/// the `Arc` is the single instance for the whole process.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
}

impl AppState {
    /// Build the application state from configuration.
    pub fn new(config: &AppConfig) -> Self {
        Self::in_memory(config.id_policy)
    }

    /// State backed by an empty in-memory post store.
    pub fn in_memory(id_policy: IdPolicy) -> Self {
        let posts: Arc<dyn PostRepository> = Arc::new(InMemoryPostRepository::new(id_policy));

        tracing::info!(id_policy = %id_policy, "Application state initialized");

        Self { posts }
    }
}
