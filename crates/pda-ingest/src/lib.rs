//! PDA Ingest Library
//!
//! Tools for loading protein domain annotation data into the PDA database.
//!
//! # Pipeline
//!
//! - **formats**: Parsers for the annotation and sequence CSV files
//! - **loader**: Writes parsed records into PostgreSQL
//!
//! # Example
//!
//! ```no_run
//! use pda_ingest::{formats, loader};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let annotations = formats::annotations::parse_file("data/annotations.csv.gz")?;
//!     let sequences = formats::sequences::parse_file("data/sequences.csv")?;
//!
//!     let pool = sqlx::PgPool::connect(&std::env::var("DATABASE_URL")?).await?;
//!     let summary = loader::load(&pool, &annotations, &sequences, false).await?;
//!     println!("{}", summary);
//!     Ok(())
//! }
//! ```

pub mod formats;
pub mod loader;
