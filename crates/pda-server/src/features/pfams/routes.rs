//! Pfam API routes
//!
//! This module wires the Pfam queries to Axum HTTP handlers. The Pfam
//! surface is read-only; records are written by the ingest pipeline.
//!
//! # Route Structure
//!
//! - `GET /api/v1/pfams/:domain_id` - Get a single Pfam domain by accession

use crate::api::response::ErrorResponse;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use sqlx::PgPool;

use super::queries::{GetPfamError, GetPfamQuery};

// ============================================================================
// Router Configuration
// ============================================================================

/// Creates the pfams router with all routes configured
///
/// Only `GET` is routed; Axum answers other methods on a matched path
/// with `405 Method Not Allowed`.
pub fn pfams_routes() -> Router<PgPool> {
    Router::new().route("/:domain_id", get(get_pfam))
}

// ============================================================================
// Query Handlers (Read Operations)
// ============================================================================

/// Get a single Pfam domain by accession
///
/// # Endpoint
///
/// `GET /api/v1/pfams/:domain_id`
///
/// # Response
///
/// - `200 OK` - Pfam domain found
/// - `404 Not Found` - No Pfam with the given accession
/// - `500 Internal Server Error` - Database error
#[tracing::instrument(
    skip(pool),
    fields(domain_id = %domain_id)
)]
async fn get_pfam(
    State(pool): State<PgPool>,
    Path(domain_id): Path<String>,
) -> Result<Response, PfamApiError> {
    let query = GetPfamQuery { domain_id };

    let response = super::queries::get::handle(pool, query).await?;

    tracing::debug!(
        domain_id = %response.domain_id,
        "Pfam domain retrieved via API"
    );

    Ok((StatusCode::OK, Json(response)).into_response())
}

// ============================================================================
// Error Handling
// ============================================================================

/// Unified error type for Pfam API endpoints
#[derive(Debug)]
enum PfamApiError {
    GetError(GetPfamError),
}

impl From<GetPfamError> for PfamApiError {
    fn from(err: GetPfamError) -> Self {
        Self::GetError(err)
    }
}

impl IntoResponse for PfamApiError {
    fn into_response(self) -> Response {
        match self {
            PfamApiError::GetError(GetPfamError::DomainIdRequired) => {
                let error = ErrorResponse::new("VALIDATION_ERROR", self.to_string());
                (StatusCode::BAD_REQUEST, Json(error)).into_response()
            },
            PfamApiError::GetError(GetPfamError::NotFound(domain_id)) => {
                let error = ErrorResponse::new(
                    "NOT_FOUND",
                    format!("Pfam domain '{}' not found", domain_id),
                );
                (StatusCode::NOT_FOUND, Json(error)).into_response()
            },
            PfamApiError::GetError(GetPfamError::Database(_)) => {
                tracing::error!("Database error during Pfam retrieval: {}", self);
                let error = ErrorResponse::new("INTERNAL_ERROR", "A database error occurred");
                (StatusCode::INTERNAL_SERVER_ERROR, Json(error)).into_response()
            },
        }
    }
}

impl std::fmt::Display for PfamApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::GetError(e) => write!(f, "{}", e),
        }
    }
}
