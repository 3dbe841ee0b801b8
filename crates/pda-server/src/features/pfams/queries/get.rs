use mediator::Request;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetPfamQuery {
    pub domain_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetPfamResponse {
    pub domain_id: String,
    pub domain_description: String,
}

#[derive(Debug, thiserror::Error)]
pub enum GetPfamError {
    #[error("Domain id is required")]
    DomainIdRequired,
    #[error("Pfam domain not found: {0}")]
    NotFound(String),
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl Request<Result<GetPfamResponse, GetPfamError>> for GetPfamQuery {}

impl GetPfamQuery {
    pub fn validate(&self) -> Result<(), GetPfamError> {
        if self.domain_id.trim().is_empty() {
            return Err(GetPfamError::DomainIdRequired);
        }
        Ok(())
    }
}

#[tracing::instrument(skip(pool))]
pub async fn handle(pool: PgPool, query: GetPfamQuery) -> Result<GetPfamResponse, GetPfamError> {
    query.validate()?;

    let record = sqlx::query_as::<_, PfamRecord>(
        r#"
        SELECT domain_id, domain_description
        FROM pfams
        WHERE domain_id = $1
        "#,
    )
    .bind(&query.domain_id)
    .fetch_optional(&pool)
    .await?;

    let pfam = record.ok_or_else(|| GetPfamError::NotFound(query.domain_id.clone()))?;

    Ok(GetPfamResponse {
        domain_id: pfam.domain_id,
        domain_description: pfam.domain_description,
    })
}

#[derive(Debug, sqlx::FromRow)]
struct PfamRecord {
    domain_id: String,
    domain_description: String,
}
