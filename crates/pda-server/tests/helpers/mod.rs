//! Test helpers for PDA server integration tests
//!
//! This module provides utilities for:
//! - Building the application router against a test pool
//! - Fixture builders for organisms, proteins, Pfam records and annotations
//! - Common test assertions

pub mod fixtures;

use pda_server::api;
use pda_server::config::Config;
use sqlx::PgPool;

// Re-export fixtures for convenience
#[allow(unused_imports)]
pub use fixtures::*;

/// Test application wrapper for integration tests
///
/// Wraps the same router the binary serves so tests exercise the full
/// middleware stack.
#[allow(dead_code)]
pub struct TestApp {
    pub router: axum::Router,
}

#[allow(dead_code)]
impl TestApp {
    /// Create a new test application over the given pool
    pub fn new(pool: PgPool) -> Self {
        let config = Config::default();
        let router = api::create_router(pool, &config);

        Self { router }
    }
}

/// Common test assertions
#[allow(dead_code)]
pub mod assertions {
    use sqlx::PgPool;

    /// Assert that a table has a specific row count
    pub async fn assert_table_count(
        pool: &PgPool,
        table: &str,
        expected: i64,
    ) -> Result<(), sqlx::Error> {
        let count: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {}", table))
            .fetch_one(pool)
            .await?;

        assert_eq!(
            count, expected,
            "Expected {} rows in table '{}', found {}",
            expected, table, count
        );
        Ok(())
    }

    /// Snapshot the row counts of all domain tables
    pub async fn table_counts(pool: &PgPool) -> Result<Vec<i64>, sqlx::Error> {
        let mut counts = Vec::new();
        for table in ["organisms", "pfams", "proteins", "protein_domains"] {
            let count: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {}", table))
                .fetch_one(pool)
                .await?;
            counts.push(count);
        }
        Ok(counts)
    }
}
