//! Domain annotation CSV parsing
//!
//! Parses the headerless annotation set. One row per domain annotation:
//!
//! ```text
//! protein_id,taxa_id,clade,organism name,description,domain_id,start,stop,length
//! A0A016S8J7,53326,E,Ancylostoma ceylanicum,SH3 domain,PF00018,40,94,390
//! ```
//!
//! The organism name column splits at the first space into genus and the
//! species epithet. Coordinates are validated (`1 <= start <= stop`); a bad
//! row fails the whole parse.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

/// One validated row of the annotation set
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotationRecord {
    pub protein_id: String,
    pub taxa_id: i32,
    pub clade: Option<String>,
    pub genus: Option<String>,
    pub species: Option<String>,
    pub description: String,
    pub domain_id: String,
    pub start: i32,
    pub stop: i32,
    /// Protein length as claimed by the source file. The database derives
    /// the authoritative value from the sequence.
    pub length: i32,
}

#[derive(Debug, thiserror::Error)]
pub enum AnnotationError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Row {row}: protein id is empty")]
    EmptyProteinId { row: usize },
    #[error("Row {row}: domain id is empty")]
    EmptyDomainId { row: usize },
    #[error("Row {row}: taxa id must be positive, got {taxa_id}")]
    InvalidTaxaId { row: usize, taxa_id: i32 },
    #[error("Row {row}: invalid domain span {start}..{stop}")]
    InvalidSpan { row: usize, start: i32, stop: i32 },
}

#[derive(Debug, Deserialize)]
struct RawRow {
    protein_id: String,
    taxa_id: i32,
    clade: String,
    organism: String,
    description: String,
    domain_id: String,
    start: i32,
    stop: i32,
    length: i32,
}

/// Parse the annotation set from a reader
pub fn parse<R: Read>(reader: R) -> Result<Vec<AnnotationRecord>, AnnotationError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    for (idx, result) in csv_reader.deserialize::<RawRow>().enumerate() {
        let row = idx + 1;
        let raw = result?;
        records.push(validate_row(raw, row)?);
    }

    tracing::debug!("Parsed {} annotation rows", records.len());
    Ok(records)
}

/// Parse the annotation set from a file, decompressing `.gz` transparently
pub fn parse_file(path: impl AsRef<Path>) -> Result<Vec<AnnotationRecord>, AnnotationError> {
    let reader = super::open_input(path.as_ref())?;
    parse(reader)
}

fn validate_row(raw: RawRow, row: usize) -> Result<AnnotationRecord, AnnotationError> {
    if raw.protein_id.is_empty() {
        return Err(AnnotationError::EmptyProteinId { row });
    }
    if raw.domain_id.is_empty() {
        return Err(AnnotationError::EmptyDomainId { row });
    }
    if raw.taxa_id < 1 {
        return Err(AnnotationError::InvalidTaxaId {
            row,
            taxa_id: raw.taxa_id,
        });
    }
    if raw.start < 1 || raw.stop < raw.start {
        return Err(AnnotationError::InvalidSpan {
            row,
            start: raw.start,
            stop: raw.stop,
        });
    }

    let (genus, species) = match raw.organism.split_once(' ') {
        Some((genus, species)) => (Some(genus.to_string()), Some(species.to_string())),
        None if raw.organism.is_empty() => (None, None),
        None => (Some(raw.organism), None),
    };

    Ok(AnnotationRecord {
        protein_id: raw.protein_id,
        taxa_id: raw.taxa_id,
        clade: Some(raw.clade).filter(|c| !c.is_empty()),
        genus,
        species,
        description: raw.description,
        domain_id: raw.domain_id,
        start: raw.start,
        stop: raw.stop,
        length: raw.length,
    })
}
