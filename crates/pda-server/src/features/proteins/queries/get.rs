use mediator::Request;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetProteinQuery {
    pub protein_id: String,
}

/// Organism block nested under `taxonomy` in the protein payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxonomyInfo {
    pub taxa_id: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clade: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genus: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub species: Option<String>,
}

/// Pfam block nested under `pfam_id` in each domain annotation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PfamInfo {
    pub domain_id: String,
    pub domain_description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainAnnotation {
    pub pfam_id: PfamInfo,
    pub start: i32,
    pub stop: i32,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetProteinResponse {
    pub protein_id: String,
    pub sequence: String,
    pub length: i32,
    pub taxonomy: TaxonomyInfo,
    pub domains: Vec<DomainAnnotation>,
}

#[derive(Debug, thiserror::Error)]
pub enum GetProteinError {
    #[error("Protein id is required")]
    ProteinIdRequired,
    #[error("Protein not found: {0}")]
    NotFound(String),
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl Request<Result<GetProteinResponse, GetProteinError>> for GetProteinQuery {}

impl GetProteinQuery {
    pub fn validate(&self) -> Result<(), GetProteinError> {
        if self.protein_id.trim().is_empty() {
            return Err(GetProteinError::ProteinIdRequired);
        }
        Ok(())
    }
}

#[tracing::instrument(skip(pool))]
pub async fn handle(
    pool: PgPool,
    query: GetProteinQuery,
) -> Result<GetProteinResponse, GetProteinError> {
    query.validate()?;

    let record = sqlx::query_as::<_, ProteinRecord>(
        r#"
        SELECT p.id, p.protein_id, p.sequence, p.length,
               o.taxa_id, o.clade, o.genus, o.species
        FROM proteins p
        JOIN organisms o ON o.id = p.organism_id
        WHERE p.protein_id = $1
        "#,
    )
    .bind(&query.protein_id)
    .fetch_optional(&pool)
    .await?;

    let protein = record.ok_or_else(|| GetProteinError::NotFound(query.protein_id.clone()))?;

    let annotations = sqlx::query_as::<_, AnnotationRecord>(
        r#"
        SELECT f.domain_id, f.domain_description, d.start, d.stop, d.description
        FROM protein_domains d
        JOIN pfams f ON f.id = d.pfam_id
        WHERE d.protein_id = $1
        ORDER BY d.start, d.stop
        "#,
    )
    .bind(protein.id)
    .fetch_all(&pool)
    .await?;

    let domains = annotations
        .into_iter()
        .map(|row| DomainAnnotation {
            pfam_id: PfamInfo {
                domain_id: row.domain_id,
                domain_description: row.domain_description,
            },
            start: row.start,
            stop: row.stop,
            description: row.description,
        })
        .collect();

    Ok(GetProteinResponse {
        protein_id: protein.protein_id,
        sequence: protein.sequence,
        length: protein.length,
        taxonomy: TaxonomyInfo {
            taxa_id: protein.taxa_id,
            clade: protein.clade,
            genus: protein.genus,
            species: protein.species,
        },
        domains,
    })
}

#[derive(Debug, sqlx::FromRow)]
struct ProteinRecord {
    id: Uuid,
    protein_id: String,
    sequence: String,
    length: i32,
    taxa_id: i32,
    clade: Option<String>,
    genus: Option<String>,
    species: Option<String>,
}

#[derive(Debug, sqlx::FromRow)]
struct AnnotationRecord {
    domain_id: String,
    domain_description: String,
    start: i32,
    stop: i32,
    description: String,
}
