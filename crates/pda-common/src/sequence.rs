//! Amino-acid sequence utilities
//!
//! Validation of protein sequences against the accepted residue alphabet and
//! SHA-256 checksums for detecting sequence drift between loads.

use crate::error::{PdaError, Result};
use sha2::{Digest, Sha256};

/// Accepted residue letters: the twenty standard amino acids plus the
/// ambiguity codes B and Z, the rare residues U and O, and X for unknown.
const VALID_RESIDUES: &str = "ABCDEFGHIKLMNOPQRSTUVWXYZ";

/// Check a single residue letter against the accepted alphabet
pub fn is_valid_residue(residue: char) -> bool {
    VALID_RESIDUES.contains(residue)
}

/// Validate a full protein sequence
///
/// Positions in errors are 1-based, matching domain coordinates.
pub fn validate_sequence(sequence: &str) -> Result<()> {
    if sequence.is_empty() {
        return Err(PdaError::EmptySequence);
    }

    for (index, residue) in sequence.chars().enumerate() {
        if !is_valid_residue(residue) {
            return Err(PdaError::InvalidResidue {
                position: index + 1,
                residue,
            });
        }
    }

    Ok(())
}

/// Compute the SHA-256 checksum of a sequence, hex-encoded
pub fn sequence_checksum(sequence: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(sequence.as_bytes());
    hex::encode(hasher.finalize())
}
