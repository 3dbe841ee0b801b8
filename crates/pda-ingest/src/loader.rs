//! Database loader
//!
//! Writes parsed annotation and sequence records into PostgreSQL. Organisms
//! are upserted by taxa id. Pfam records are deduplicated in memory, with
//! the first description seen per domain id winning. Proteins are only
//! created when a sequence is known; annotation rows for sequence-less
//! proteins are counted and skipped.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use indicatif::{ProgressBar, ProgressStyle};
use sqlx::PgPool;
use uuid::Uuid;

use crate::formats::annotations::AnnotationRecord;
use crate::formats::sequences::SequenceRecord;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Pfam domain '{0}' already exists")]
    DuplicatePfam(String),
    #[error("Protein '{0}' already exists")]
    DuplicateProtein(String),
    #[error("Annotation already exists: {protein_id} {domain_id} {start}..{stop}")]
    DuplicateAnnotation {
        protein_id: String,
        domain_id: String,
        start: i32,
        stop: i32,
    },
    #[error("Referenced record missing: {0}")]
    MissingReference(String),
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Counts of what a load run wrote and skipped
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LoadSummary {
    pub organisms: u64,
    pub pfams: u64,
    pub proteins: u64,
    pub annotations: u64,
    pub skipped_missing_sequence: u64,
}

impl fmt::Display for LoadSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "loaded {} organisms, {} pfams, {} proteins, {} annotations ({} annotation rows skipped without sequence)",
            self.organisms, self.pfams, self.proteins, self.annotations, self.skipped_missing_sequence
        )
    }
}

/// Load parsed records into the database
///
/// With `replace` set, all four tables are truncated first so the load is
/// repeatable.
pub async fn load(
    pool: &PgPool,
    annotations: &[AnnotationRecord],
    sequences: &[SequenceRecord],
    replace: bool,
) -> Result<LoadSummary, LoadError> {
    let mut summary = LoadSummary::default();

    if replace {
        sqlx::query("TRUNCATE protein_domains, proteins, pfams, organisms")
            .execute(pool)
            .await?;
        tracing::info!("Cleared existing records");
    }

    let sequence_map = build_sequence_map(sequences);

    let organism_ids = load_organisms(pool, annotations, &mut summary).await?;
    let pfam_ids = load_pfams(pool, annotations, &mut summary).await?;
    let protein_ids =
        load_proteins(pool, annotations, &sequence_map, &organism_ids, &mut summary).await?;
    load_annotations(pool, annotations, &pfam_ids, &protein_ids, &mut summary).await?;

    tracing::info!(
        organisms = summary.organisms,
        pfams = summary.pfams,
        proteins = summary.proteins,
        annotations = summary.annotations,
        skipped = summary.skipped_missing_sequence,
        "Load complete"
    );

    Ok(summary)
}

/// Map protein ids to sequences, keeping the first row on duplicates
fn build_sequence_map(sequences: &[SequenceRecord]) -> HashMap<&str, &str> {
    let mut map: HashMap<&str, &str> = HashMap::new();
    for record in sequences {
        match map.get(record.protein_id.as_str()) {
            Some(existing) if *existing != record.sequence => {
                tracing::warn!(
                    protein_id = %record.protein_id,
                    "Conflicting duplicate sequence row, keeping the first"
                );
            },
            Some(_) => {},
            None => {
                map.insert(&record.protein_id, &record.sequence);
            },
        }
    }
    map
}

async fn load_organisms(
    pool: &PgPool,
    annotations: &[AnnotationRecord],
    summary: &mut LoadSummary,
) -> Result<HashMap<i32, Uuid>, LoadError> {
    let mut first_row_per_taxa: BTreeMap<i32, &AnnotationRecord> = BTreeMap::new();
    for record in annotations {
        first_row_per_taxa.entry(record.taxa_id).or_insert(record);
    }

    let mut ids = HashMap::new();
    for (taxa_id, record) in first_row_per_taxa {
        let result = sqlx::query(
            r#"
            INSERT INTO organisms (taxa_id, clade, genus, species)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (taxa_id) DO NOTHING
            "#,
        )
        .bind(taxa_id)
        .bind(&record.clade)
        .bind(&record.genus)
        .bind(&record.species)
        .execute(pool)
        .await?;
        summary.organisms += result.rows_affected();

        let id = sqlx::query_scalar::<_, Uuid>(
            r#"
            SELECT id FROM organisms WHERE taxa_id = $1
            "#,
        )
        .bind(taxa_id)
        .fetch_one(pool)
        .await?;
        ids.insert(taxa_id, id);
    }

    tracing::debug!("Upserted {} organisms", summary.organisms);
    Ok(ids)
}

async fn load_pfams<'a>(
    pool: &PgPool,
    annotations: &'a [AnnotationRecord],
    summary: &mut LoadSummary,
) -> Result<HashMap<&'a str, Uuid>, LoadError> {
    // First description seen per domain id wins
    let mut first_description: BTreeMap<&str, &str> = BTreeMap::new();
    for record in annotations {
        first_description
            .entry(record.domain_id.as_str())
            .or_insert(record.description.as_str());
    }

    let mut ids = HashMap::new();
    for (domain_id, description) in first_description {
        let id = sqlx::query_scalar::<_, Uuid>(
            r#"
            INSERT INTO pfams (domain_id, domain_description)
            VALUES ($1, $2)
            RETURNING id
            "#,
        )
        .bind(domain_id)
        .bind(description)
        .fetch_one(pool)
        .await
        .map_err(|e| {
            map_unique_violation(e, LoadError::DuplicatePfam(domain_id.to_string()))
        })?;
        summary.pfams += 1;
        ids.insert(domain_id, id);
    }

    tracing::debug!("Inserted {} pfams", summary.pfams);
    Ok(ids)
}

async fn load_proteins<'a>(
    pool: &PgPool,
    annotations: &'a [AnnotationRecord],
    sequence_map: &HashMap<&str, &str>,
    organism_ids: &HashMap<i32, Uuid>,
    summary: &mut LoadSummary,
) -> Result<HashMap<&'a str, Uuid>, LoadError> {
    let mut first_row_per_protein: BTreeMap<&str, &AnnotationRecord> = BTreeMap::new();
    for record in annotations {
        first_row_per_protein
            .entry(record.protein_id.as_str())
            .or_insert(record);
    }

    let mut ids = HashMap::new();
    for (protein_id, record) in first_row_per_protein {
        let Some(&sequence) = sequence_map.get(protein_id) else {
            tracing::warn!(
                protein_id = %protein_id,
                "No sequence for protein, skipping it and its annotations"
            );
            continue;
        };

        let organism_id = organism_ids.get(&record.taxa_id).copied().ok_or_else(|| {
            LoadError::MissingReference(format!("organism with taxa id {}", record.taxa_id))
        })?;

        let checksum = pda_common::sequence::sequence_checksum(sequence);
        let id = sqlx::query_scalar::<_, Uuid>(
            r#"
            INSERT INTO proteins (protein_id, sequence, organism_id, sequence_checksum)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(protein_id)
        .bind(sequence)
        .bind(organism_id)
        .bind(checksum)
        .fetch_one(pool)
        .await
        .map_err(|e| {
            map_unique_violation(e, LoadError::DuplicateProtein(protein_id.to_string()))
        })?;
        summary.proteins += 1;
        ids.insert(protein_id, id);
    }

    tracing::debug!("Inserted {} proteins", summary.proteins);
    Ok(ids)
}

async fn load_annotations(
    pool: &PgPool,
    annotations: &[AnnotationRecord],
    pfam_ids: &HashMap<&str, Uuid>,
    protein_ids: &HashMap<&str, Uuid>,
    summary: &mut LoadSummary,
) -> Result<(), LoadError> {
    let progress = ProgressBar::new(annotations.len() as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{msg}\n{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} ({eta})")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
    );
    progress.set_message("Loading annotations");

    for record in annotations {
        let Some(protein_id) = protein_ids.get(record.protein_id.as_str()).copied() else {
            summary.skipped_missing_sequence += 1;
            progress.inc(1);
            continue;
        };

        let pfam_id = pfam_ids
            .get(record.domain_id.as_str())
            .copied()
            .ok_or_else(|| {
                LoadError::MissingReference(format!("pfam domain {}", record.domain_id))
            })?;

        sqlx::query(
            r#"
            INSERT INTO protein_domains (protein_id, pfam_id, description, start, stop)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(protein_id)
        .bind(pfam_id)
        .bind(&record.description)
        .bind(record.start)
        .bind(record.stop)
        .execute(pool)
        .await
        .map_err(|e| map_annotation_violation(e, record))?;
        summary.annotations += 1;
        progress.inc(1);
    }

    progress.finish_with_message("Annotations loaded");
    Ok(())
}

// ============================================================================
// Constraint Violation Mapping
// ============================================================================

fn is_unique_violation(error: &sqlx::Error) -> bool {
    if let sqlx::Error::Database(db_err) = error {
        return db_err.is_unique_violation();
    }
    false
}

fn is_foreign_key_violation(error: &sqlx::Error) -> bool {
    if let sqlx::Error::Database(db_err) = error {
        return db_err.is_foreign_key_violation();
    }
    false
}

/// Map a unique violation to the given error, passing other errors through
fn map_unique_violation(error: sqlx::Error, unique_error: LoadError) -> LoadError {
    if is_unique_violation(&error) {
        unique_error
    } else {
        LoadError::Database(error)
    }
}

fn map_annotation_violation(error: sqlx::Error, record: &AnnotationRecord) -> LoadError {
    if is_unique_violation(&error) {
        LoadError::DuplicateAnnotation {
            protein_id: record.protein_id.clone(),
            domain_id: record.domain_id.clone(),
            start: record.start,
            stop: record.stop,
        }
    } else if is_foreign_key_violation(&error) {
        LoadError::MissingReference(format!(
            "protein {} or pfam domain {}",
            record.protein_id, record.domain_id
        ))
    } else {
        LoadError::Database(error)
    }
}
