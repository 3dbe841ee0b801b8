//! PDA Common Library
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Shared types, utilities, and error handling for the PDA project.
//!
//! # Overview
//!
//! This crate provides common functionality used across all PDA workspace members:
//!
//! - **Error Handling**: Custom error types and result types
//! - **Logging**: Centralized tracing setup (console/file, text/JSON)
//! - **Sequences**: Amino-acid sequence validation and checksums
//!
//! # Example
//!
//! ```no_run
//! use pda_common::{Result, PdaError};
//! use pda_common::sequence::{validate_sequence, sequence_checksum};
//!
//! fn register(sequence: &str) -> Result<String> {
//!     validate_sequence(sequence)?;
//!     Ok(sequence_checksum(sequence))
//! }
//! ```

pub mod error;
pub mod logging;
pub mod sequence;

// Re-export commonly used types
pub use error::{PdaError, Result};
