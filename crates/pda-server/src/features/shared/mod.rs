//! Shared utilities and types for feature modules
//!
//! # Contents
//!
//! - **pagination**: Common pagination types and helpers for list queries

pub mod pagination;

// Re-export commonly used types
pub use pagination::{PaginationMetadata, PaginationParams};
