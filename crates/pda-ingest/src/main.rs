//! PDA Ingest - Annotation data loading tool

use anyhow::Result;
use clap::Parser;
use pda_common::logging::{init_logging, LogConfig, LogLevel};
use pda_ingest::{formats, loader};
use sqlx::postgres::PgPoolOptions;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "pda-ingest")]
#[command(author, version, about = "PDA annotation data loading tool")]
struct Cli {
    /// Command to run
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Parser, Debug)]
enum Commands {
    /// Parse annotation and sequence files and load them into the database
    Load {
        /// Annotation CSV file (.csv or .csv.gz)
        #[arg(long)]
        annotations: String,

        /// Sequence CSV file (.csv or .csv.gz)
        #[arg(long)]
        sequences: String,

        /// Truncate existing records before loading
        #[arg(long)]
        replace: bool,
    },

    /// Parse both files without touching the database
    Validate {
        /// Annotation CSV file (.csv or .csv.gz)
        #[arg(long)]
        annotations: String,

        /// Sequence CSV file (.csv or .csv.gz)
        #[arg(long)]
        sequences: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Initialize logging based on verbose flag
    let log_level = if cli.verbose {
        LogLevel::Debug
    } else {
        LogLevel::Info
    };

    let log_config = LogConfig::builder()
        .level(log_level)
        .log_file_prefix("pda-ingest".to_string())
        .build();

    // Merge with environment variables (they take precedence)
    let log_config = LogConfig::from_env().unwrap_or(log_config);

    let _log_guard = init_logging(&log_config)?;

    match cli.command {
        Commands::Load {
            annotations,
            sequences,
            replace,
        } => {
            let annotations = formats::annotations::parse_file(&annotations)?;
            let sequences = formats::sequences::parse_file(&sequences)?;
            info!(
                "Parsed {} annotation rows and {} sequence rows",
                annotations.len(),
                sequences.len()
            );

            let database_url = std::env::var("DATABASE_URL")
                .map_err(|_| anyhow::anyhow!("DATABASE_URL must be set"))?;
            let pool = PgPoolOptions::new()
                .max_connections(5)
                .connect(&database_url)
                .await?;

            let summary = loader::load(&pool, &annotations, &sequences, replace).await?;
            info!("{}", summary);
        },
        Commands::Validate {
            annotations,
            sequences,
        } => {
            let annotations = formats::annotations::parse_file(&annotations)?;
            let sequences = formats::sequences::parse_file(&sequences)?;
            info!(
                "Validated {} annotation rows and {} sequence rows",
                annotations.len(),
                sequences.len()
            );
        },
    }

    info!("Done");
    Ok(())
}
