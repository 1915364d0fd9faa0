//! # Blog Shared
//!
//! Wire types shared by the server and any Rust client.

pub mod dto;
pub mod response;

pub use response::MessageResponse;
