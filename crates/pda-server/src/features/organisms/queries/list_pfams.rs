use mediator::Request;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::features::shared::pagination::{PaginationMetadata, PaginationParams};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListOrganismPfamsQuery {
    pub taxa_id: i32,
    #[serde(default)]
    pub pagination: PaginationParams,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PfamListItem {
    pub domain_id: String,
    pub domain_description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListOrganismPfamsResponse {
    pub items: Vec<PfamListItem>,
    pub pagination: PaginationMetadata,
}

#[derive(Debug, thiserror::Error)]
pub enum ListOrganismPfamsError {
    #[error("Taxa id must be greater than 0")]
    InvalidTaxaId,
    #[error("Page must be greater than 0")]
    InvalidPage,
    #[error("Per page must be between 1 and 100")]
    InvalidPerPage,
    #[error("Organism not found: {0}")]
    NotFound(i32),
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl Request<Result<ListOrganismPfamsResponse, ListOrganismPfamsError>> for ListOrganismPfamsQuery {}

impl ListOrganismPfamsQuery {
    pub fn validate(&self) -> Result<(), ListOrganismPfamsError> {
        if self.taxa_id < 1 {
            return Err(ListOrganismPfamsError::InvalidTaxaId);
        }
        if let Some(page) = self.pagination.page {
            if page < 1 {
                return Err(ListOrganismPfamsError::InvalidPage);
            }
        }
        if let Some(per_page) = self.pagination.per_page {
            if per_page < 1 || per_page > 100 {
                return Err(ListOrganismPfamsError::InvalidPerPage);
            }
        }
        Ok(())
    }
}

#[tracing::instrument(skip(pool))]
pub async fn handle(
    pool: PgPool,
    query: ListOrganismPfamsQuery,
) -> Result<ListOrganismPfamsResponse, ListOrganismPfamsError> {
    query.validate()?;

    let organism_id = sqlx::query_scalar::<_, Uuid>(
        r#"
        SELECT id
        FROM organisms
        WHERE taxa_id = $1
        "#,
    )
    .bind(query.taxa_id)
    .fetch_optional(&pool)
    .await?
    .ok_or(ListOrganismPfamsError::NotFound(query.taxa_id))?;

    let total = sqlx::query_scalar::<_, i64>(
        r#"
        SELECT COUNT(DISTINCT f.id)
        FROM protein_domains d
        JOIN pfams f ON f.id = d.pfam_id
        JOIN proteins p ON p.id = d.protein_id
        WHERE p.organism_id = $1
        "#,
    )
    .bind(organism_id)
    .fetch_one(&pool)
    .await?;

    let records = sqlx::query_as::<_, PfamRecord>(
        r#"
        SELECT DISTINCT f.domain_id, f.domain_description
        FROM protein_domains d
        JOIN pfams f ON f.id = d.pfam_id
        JOIN proteins p ON p.id = d.protein_id
        WHERE p.organism_id = $1
        ORDER BY f.domain_id
        LIMIT $2
        OFFSET $3
        "#,
    )
    .bind(organism_id)
    .bind(query.pagination.per_page())
    .bind(query.pagination.offset())
    .fetch_all(&pool)
    .await?;

    let items = records
        .into_iter()
        .map(|r| PfamListItem {
            domain_id: r.domain_id,
            domain_description: r.domain_description,
        })
        .collect();

    Ok(ListOrganismPfamsResponse {
        items,
        pagination: PaginationMetadata::from_params(&query.pagination, total),
    })
}

#[derive(Debug, sqlx::FromRow)]
struct PfamRecord {
    domain_id: String,
    domain_description: String,
}
