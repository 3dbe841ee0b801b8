//! HTTP surface assembly
//!
//! Builds the application router so both the binary and integration tests
//! serve the same routes and middleware stack.

pub mod response;

use crate::config::Config;
use crate::db;
use crate::features;
use crate::middleware;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;
use sqlx::PgPool;
use tower_http::compression::CompressionLayer;

/// Create the application router with all routes and middleware
pub fn create_router(pool: PgPool, config: &Config) -> Router {
    let feature_state = features::FeatureState { db: pool.clone() };

    // Feature routes (CQRS architecture)
    let feature_routes = features::router(feature_state);

    Router::new()
        .route("/health", get(health_check))
        .with_state(pool)
        .nest("/api/v1", feature_routes)
        // Apply layers from innermost to outermost
        .layer(CompressionLayer::new())
        .layer(middleware::tracing_layer())
        .layer(middleware::cors_layer(&config.cors))
}

/// Health check handler
async fn health_check(State(pool): State<PgPool>) -> Result<Response, StatusCode> {
    match db::health_check(&pool).await {
        Ok(()) => Ok((
            StatusCode::OK,
            Json(json!({
                "status": "healthy",
                "database": "connected"
            })),
        )
            .into_response()),
        Err(e) => {
            tracing::error!("Database health check failed: {:?}", e);
            Err(StatusCode::SERVICE_UNAVAILABLE)
        },
    }
}
