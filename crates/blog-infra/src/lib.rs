//! # Blog Infrastructure
//!
//! Concrete implementations of the ports defined in `blog-core`.
//! Posts are held in process memory only; nothing survives a restart.

pub mod posts;

pub use posts::InMemoryPostRepository;
