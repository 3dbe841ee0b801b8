//! Protein API routes
//!
//! This module wires the protein queries to Axum HTTP handlers. The protein
//! surface is read-only; records are written by the ingest pipeline.
//!
//! # Route Structure
//!
//! - `GET /api/v1/proteins/:protein_id` - Get a protein with its taxonomy and
//!   domain annotations

use crate::api::response::ErrorResponse;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use sqlx::PgPool;

use super::queries::{GetProteinError, GetProteinQuery};

// ============================================================================
// Router Configuration
// ============================================================================

/// Creates the proteins router with all routes configured
///
/// Only `GET` is routed; Axum answers other methods on a matched path
/// with `405 Method Not Allowed`.
pub fn proteins_routes() -> Router<PgPool> {
    Router::new().route("/:protein_id", get(get_protein))
}

// ============================================================================
// Query Handlers (Read Operations)
// ============================================================================

/// Get a protein by UniProt accession
///
/// # Endpoint
///
/// `GET /api/v1/proteins/:protein_id`
///
/// # Response
///
/// - `200 OK` - Protein found, with nested taxonomy and domain annotations
/// - `404 Not Found` - No protein with the given accession
/// - `500 Internal Server Error` - Database error
#[tracing::instrument(
    skip(pool),
    fields(protein_id = %protein_id)
)]
async fn get_protein(
    State(pool): State<PgPool>,
    Path(protein_id): Path<String>,
) -> Result<Response, ProteinApiError> {
    let query = GetProteinQuery { protein_id };

    let response = super::queries::get::handle(pool, query).await?;

    tracing::debug!(
        protein_id = %response.protein_id,
        domain_count = response.domains.len(),
        "Protein retrieved via API"
    );

    Ok((StatusCode::OK, Json(response)).into_response())
}

// ============================================================================
// Error Handling
// ============================================================================

/// Unified error type for protein API endpoints
#[derive(Debug)]
enum ProteinApiError {
    GetError(GetProteinError),
}

impl From<GetProteinError> for ProteinApiError {
    fn from(err: GetProteinError) -> Self {
        Self::GetError(err)
    }
}

impl IntoResponse for ProteinApiError {
    fn into_response(self) -> Response {
        match self {
            ProteinApiError::GetError(GetProteinError::ProteinIdRequired) => {
                let error = ErrorResponse::new("VALIDATION_ERROR", self.to_string());
                (StatusCode::BAD_REQUEST, Json(error)).into_response()
            },
            ProteinApiError::GetError(GetProteinError::NotFound(protein_id)) => {
                let error = ErrorResponse::new(
                    "NOT_FOUND",
                    format!("Protein '{}' not found", protein_id),
                );
                (StatusCode::NOT_FOUND, Json(error)).into_response()
            },
            ProteinApiError::GetError(GetProteinError::Database(_)) => {
                tracing::error!("Database error during protein retrieval: {}", self);
                let error = ErrorResponse::new("INTERNAL_ERROR", "A database error occurred");
                (StatusCode::INTERNAL_SERVER_ERROR, Json(error)).into_response()
            },
        }
    }
}

impl std::fmt::Display for ProteinApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::GetError(e) => write!(f, "{}", e),
        }
    }
}
