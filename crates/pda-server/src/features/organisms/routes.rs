//! Organism API routes
//!
//! This module wires the organism-scoped listing queries to Axum HTTP
//! handlers. Organisms are addressed by NCBI taxonomy id rather than by
//! internal UUID.
//!
//! # Route Structure
//!
//! - `GET /api/v1/organisms/:taxa_id/proteins` - List proteins for an organism
//! - `GET /api/v1/organisms/:taxa_id/pfams` - List distinct Pfam domains
//!   annotated on an organism's proteins

use crate::api::response::ErrorResponse;
use crate::features::shared::pagination::PaginationParams;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use sqlx::PgPool;

use super::queries::{
    ListOrganismPfamsError, ListOrganismPfamsQuery, ListOrganismProteinsError,
    ListOrganismProteinsQuery,
};

// ============================================================================
// Router Configuration
// ============================================================================

/// Creates the organisms router with all routes configured
///
/// Only `GET` is routed; Axum answers other methods on a matched path
/// with `405 Method Not Allowed`.
pub fn organisms_routes() -> Router<PgPool> {
    Router::new()
        .route("/:taxa_id/proteins", get(list_organism_proteins))
        .route("/:taxa_id/pfams", get(list_organism_pfams))
}

// ============================================================================
// Query Handlers (Read Operations)
// ============================================================================

/// List proteins belonging to an organism
///
/// # Endpoint
///
/// `GET /api/v1/organisms/:taxa_id/proteins?page=1&per_page=20`
///
/// # Query Parameters
///
/// - `page` - Page number (default: 1)
/// - `per_page` - Items per page (default: 20, max: 100)
///
/// # Response
///
/// - `200 OK` - Paginated protein accessions with sequence lengths
/// - `400 Bad Request` - Invalid pagination parameters
/// - `404 Not Found` - No organism with the given taxa id
/// - `500 Internal Server Error` - Database error
#[tracing::instrument(
    skip(pool, pagination),
    fields(taxa_id = %taxa_id, page = ?pagination.page, per_page = ?pagination.per_page)
)]
async fn list_organism_proteins(
    State(pool): State<PgPool>,
    Path(taxa_id): Path<i32>,
    Query(pagination): Query<PaginationParams>,
) -> Result<Response, OrganismApiError> {
    let query = ListOrganismProteinsQuery {
        taxa_id,
        pagination,
    };

    let response = super::queries::list_proteins::handle(pool, query).await?;

    tracing::debug!(
        taxa_id = taxa_id,
        count = response.items.len(),
        total = response.pagination.total,
        "Organism proteins listed via API"
    );

    Ok((StatusCode::OK, Json(response)).into_response())
}

/// List distinct Pfam domains annotated on an organism's proteins
///
/// # Endpoint
///
/// `GET /api/v1/organisms/:taxa_id/pfams?page=1&per_page=20`
///
/// # Query Parameters
///
/// - `page` - Page number (default: 1)
/// - `per_page` - Items per page (default: 20, max: 100)
///
/// # Response
///
/// - `200 OK` - Paginated distinct Pfam records
/// - `400 Bad Request` - Invalid pagination parameters
/// - `404 Not Found` - No organism with the given taxa id
/// - `500 Internal Server Error` - Database error
#[tracing::instrument(
    skip(pool, pagination),
    fields(taxa_id = %taxa_id, page = ?pagination.page, per_page = ?pagination.per_page)
)]
async fn list_organism_pfams(
    State(pool): State<PgPool>,
    Path(taxa_id): Path<i32>,
    Query(pagination): Query<PaginationParams>,
) -> Result<Response, OrganismApiError> {
    let query = ListOrganismPfamsQuery {
        taxa_id,
        pagination,
    };

    let response = super::queries::list_pfams::handle(pool, query).await?;

    tracing::debug!(
        taxa_id = taxa_id,
        count = response.items.len(),
        total = response.pagination.total,
        "Organism pfams listed via API"
    );

    Ok((StatusCode::OK, Json(response)).into_response())
}

// ============================================================================
// Error Handling
// ============================================================================

/// Unified error type for organism API endpoints
#[derive(Debug)]
enum OrganismApiError {
    ProteinsError(ListOrganismProteinsError),
    PfamsError(ListOrganismPfamsError),
}

impl From<ListOrganismProteinsError> for OrganismApiError {
    fn from(err: ListOrganismProteinsError) -> Self {
        Self::ProteinsError(err)
    }
}

impl From<ListOrganismPfamsError> for OrganismApiError {
    fn from(err: ListOrganismPfamsError) -> Self {
        Self::PfamsError(err)
    }
}

impl IntoResponse for OrganismApiError {
    fn into_response(self) -> Response {
        match self {
            // Proteins listing errors
            OrganismApiError::ProteinsError(ListOrganismProteinsError::InvalidTaxaId)
            | OrganismApiError::ProteinsError(ListOrganismProteinsError::InvalidPage)
            | OrganismApiError::ProteinsError(ListOrganismProteinsError::InvalidPerPage) => {
                let error = ErrorResponse::new("VALIDATION_ERROR", self.to_string());
                (StatusCode::BAD_REQUEST, Json(error)).into_response()
            },
            OrganismApiError::ProteinsError(ListOrganismProteinsError::NotFound(taxa_id)) => {
                let error = ErrorResponse::new(
                    "NOT_FOUND",
                    format!("Organism with taxa id '{}' not found", taxa_id),
                );
                (StatusCode::NOT_FOUND, Json(error)).into_response()
            },
            OrganismApiError::ProteinsError(ListOrganismProteinsError::Database(_)) => {
                tracing::error!("Database error during organism proteins listing: {}", self);
                let error = ErrorResponse::new("INTERNAL_ERROR", "A database error occurred");
                (StatusCode::INTERNAL_SERVER_ERROR, Json(error)).into_response()
            },

            // Pfams listing errors
            OrganismApiError::PfamsError(ListOrganismPfamsError::InvalidTaxaId)
            | OrganismApiError::PfamsError(ListOrganismPfamsError::InvalidPage)
            | OrganismApiError::PfamsError(ListOrganismPfamsError::InvalidPerPage) => {
                let error = ErrorResponse::new("VALIDATION_ERROR", self.to_string());
                (StatusCode::BAD_REQUEST, Json(error)).into_response()
            },
            OrganismApiError::PfamsError(ListOrganismPfamsError::NotFound(taxa_id)) => {
                let error = ErrorResponse::new(
                    "NOT_FOUND",
                    format!("Organism with taxa id '{}' not found", taxa_id),
                );
                (StatusCode::NOT_FOUND, Json(error)).into_response()
            },
            OrganismApiError::PfamsError(ListOrganismPfamsError::Database(_)) => {
                tracing::error!("Database error during organism pfams listing: {}", self);
                let error = ErrorResponse::new("INTERNAL_ERROR", "A database error occurred");
                (StatusCode::INTERNAL_SERVER_ERROR, Json(error)).into_response()
            },
        }
    }
}

impl std::fmt::Display for OrganismApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ProteinsError(e) => write!(f, "{}", e),
            Self::PfamsError(e) => write!(f, "{}", e),
        }
    }
}
