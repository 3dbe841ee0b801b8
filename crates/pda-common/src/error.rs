//! Error types for PDA

use thiserror::Error;

/// Result type alias for PDA operations
pub type Result<T> = std::result::Result<T, PdaError>;

/// Main error type for PDA
#[derive(Error, Debug)]
pub enum PdaError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Empty sequence")]
    EmptySequence,

    #[error("Invalid residue '{residue}' at position {position}")]
    InvalidResidue { position: usize, residue: char },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Parse error: {0}")]
    Parse(String),
}
