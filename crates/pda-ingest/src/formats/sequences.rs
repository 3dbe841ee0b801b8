//! Protein sequence CSV parsing
//!
//! Parses the headerless sequence set, one `protein_id,sequence` pair per
//! row. Sequences are checked against the amino acid alphabet; a bad row
//! fails the whole parse.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

/// One validated row of the sequence set
#[derive(Debug, Clone, PartialEq)]
pub struct SequenceRecord {
    pub protein_id: String,
    pub sequence: String,
}

#[derive(Debug, thiserror::Error)]
pub enum SequenceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Row {row}: protein id is empty")]
    EmptyProteinId { row: usize },
    #[error("Row {row}: invalid sequence for {protein_id}: {source}")]
    InvalidSequence {
        row: usize,
        protein_id: String,
        #[source]
        source: pda_common::PdaError,
    },
}

#[derive(Debug, Deserialize)]
struct RawRow {
    protein_id: String,
    sequence: String,
}

/// Parse the sequence set from a reader
pub fn parse<R: Read>(reader: R) -> Result<Vec<SequenceRecord>, SequenceError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    for (idx, result) in csv_reader.deserialize::<RawRow>().enumerate() {
        let row = idx + 1;
        let raw: RawRow = result?;

        if raw.protein_id.is_empty() {
            return Err(SequenceError::EmptyProteinId { row });
        }
        if let Err(source) = pda_common::sequence::validate_sequence(&raw.sequence) {
            return Err(SequenceError::InvalidSequence {
                row,
                protein_id: raw.protein_id,
                source,
            });
        }

        records.push(SequenceRecord {
            protein_id: raw.protein_id,
            sequence: raw.sequence,
        });
    }

    tracing::debug!("Parsed {} sequence rows", records.len());
    Ok(records)
}

/// Parse the sequence set from a file, decompressing `.gz` transparently
pub fn parse_file(path: impl AsRef<Path>) -> Result<Vec<SequenceRecord>, SequenceError> {
    let reader = super::open_input(path.as_ref())?;
    parse(reader)
}
