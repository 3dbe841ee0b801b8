use mediator::Request;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::features::shared::pagination::{PaginationMetadata, PaginationParams};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListOrganismProteinsQuery {
    pub taxa_id: i32,
    #[serde(default)]
    pub pagination: PaginationParams,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProteinListItem {
    pub protein_id: String,
    pub length: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListOrganismProteinsResponse {
    pub items: Vec<ProteinListItem>,
    pub pagination: PaginationMetadata,
}

#[derive(Debug, thiserror::Error)]
pub enum ListOrganismProteinsError {
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

impl Request<Result<ListOrganismProteinsResponse, ListOrganismProteinsError>>
    for ListOrganismProteinsQuery
{
}

impl ListOrganismProteinsQuery {
    pub fn validate(&self) -> Result<(), ListOrganismProteinsError> {
        if self.taxa_id < 1 {
            return Err(ListOrganismProteinsError::InvalidTaxaId);
        }
        if let Some(page) = self.pagination.page {
            if page < 1 {
                return Err(ListOrganismProteinsError::InvalidPage);
            }
        }
        if let Some(per_page) = self.pagination.per_page {
            if per_page < 1 || per_page > 100 {
                return Err(ListOrganismProteinsError::InvalidPerPage);
            }
        }
        Ok(())
    }
}

#[tracing::instrument(skip(pool))]
pub async fn handle(
    pool: PgPool,
    query: ListOrganismProteinsQuery,
) -> Result<ListOrganismProteinsResponse, ListOrganismProteinsError> {
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
    .ok_or(ListOrganismProteinsError::NotFound(query.taxa_id))?;

    let total = sqlx::query_scalar::<_, i64>(
        r#"
        SELECT COUNT(*)
        FROM proteins
        WHERE organism_id = $1
        "#,
    )
    .bind(organism_id)
    .fetch_one(&pool)
    .await?;

    let records = sqlx::query_as::<_, ProteinRecord>(
        r#"
        SELECT protein_id, length
        FROM proteins
        WHERE organism_id = $1
        ORDER BY protein_id
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
        .map(|r| ProteinListItem {
            protein_id: r.protein_id,
            length: r.length,
        })
        .collect();

    Ok(ListOrganismProteinsResponse {
        items,
        pagination: PaginationMetadata::from_params(&query.pagination, total),
    })
}

#[derive(Debug, sqlx::FromRow)]
struct ProteinRecord {
    protein_id: String,
    length: i32,
}
