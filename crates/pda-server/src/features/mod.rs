//! Feature modules implementing the PDA API
//!
//! This module contains all feature slices following the CQRS (Command Query
//! Responsibility Segregation) pattern. Each feature is organized as a
//! vertical slice with its own queries and routes.
//!
//! # Features
//!
//! - **pfams**: Pfam domain family lookups
//! - **proteins**: Protein detail lookups with taxonomy and domain annotations
//! - **organisms**: Organism-scoped listings of proteins and domain families
//!
//! # Architecture
//!
//! Each feature module follows the structure:
//! - `queries/` - Read operations (get, list)
//! - `routes.rs` - HTTP route definitions
//!
//! The HTTP surface is GET-only; axum answers any other method on these
//! routes with 405 Method Not Allowed. Queries implement the mediator
//! pattern using the `mediator` crate.

pub mod organisms;
pub mod pfams;
pub mod proteins;
pub mod shared;

use axum::Router;

/// Shared state for all feature routes
#[derive(Clone)]
pub struct FeatureState {
    /// PostgreSQL connection pool for database operations
    pub db: sqlx::PgPool,
}

/// Creates the main API router with all feature routes mounted
///
/// Each feature is mounted under its own path prefix:
/// - `/pfams` - Pfam domain family lookups
/// - `/proteins` - Protein detail lookups
/// - `/organisms` - Organism-scoped listings
pub fn router(state: FeatureState) -> Router<()> {
    Router::new()
        .nest("/pfams", pfams::pfams_routes().with_state(state.db.clone()))
        .nest("/proteins", proteins::proteins_routes().with_state(state.db.clone()))
        .nest("/organisms", organisms::organisms_routes().with_state(state.db.clone()))
}
