//! PDA Server Library
//!
//! HTTP server exposing protein domain-annotation records.
//!
//! # Overview
//!
//! The PDA server provides a read-only REST API over a relational
//! annotation store:
//!
//! - **API Endpoints**: Pfam and protein detail lookups, organism-scoped
//!   listings
//! - **Database Management**: PostgreSQL integration with SQLx
//! - **Configuration**: Environment-based configuration management
//! - **Middleware**: CORS, response compression, and request logging
//!
//! # Architecture
//!
//! The server follows a **CQRS (Command Query Responsibility Segregation)**
//! architecture. All HTTP operations are queries (read operations); writes
//! enter the store exclusively through the `pda-ingest` loader.
//!
//! Each feature is a vertical slice with its own queries and routes, wired
//! to handlers via the `mediator` crate.
//!
//! ## Framework Stack
//!
//! - **Axum**: Modern, ergonomic web framework
//! - **SQLx**: Async PostgreSQL driver and migration runner
//! - **Tower**: Middleware and service abstractions
//!
//! # Example
//!
//! ```no_run
//! use pda_server::{api, config::Config};
//! use sqlx::PgPool;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load()?;
//!     let pool = PgPool::connect(&config.database.url).await?;
//!     let app = api::create_router(pool, &config);
//!     # let _ = app;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod cqrs;
pub mod db;
pub mod features;
pub mod middleware;
