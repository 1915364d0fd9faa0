//! # Blog Core
//!
//! The domain layer of the blog API.
//! Post entity, ordering and filtering rules, id allocation, and the
//! repository port. No infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::{DomainError, RepoError};
