use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use finmock_db::{DatabaseConfig, DatabaseReader, DatasetLoader};
use finmock_gen::{generate_to_path, GenerateOutcome, GeneratorConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// A command-line runner for fixture generation and loading.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate the mock fixture, skipping when it already exists.
    Generate {
        /// Output path for the fixture document.
        #[arg(long, default_value = "data/mock_data.json")]
        out: PathBuf,
        /// Fixed RNG seed for reproducible output.
        #[arg(long)]
        seed: Option<u64>,
        /// Size of the journal entry pool.
        #[arg(long, default_value_t = 500)]
        journal_entries: usize,
    },
    /// Load the fixture into the database. Reruns are no-ops for every
    /// keyed table.
    Load {
        /// Path of the fixture document to load.
        #[arg(long, default_value = "data/mock_data.json")]
        data: PathBuf,
        /// Database path; defaults to FINMOCK_DB_PATH or finmock.db.
        #[arg(long)]
        db: Option<String>,
    },
    /// Serve the fixture browse API.
    Serve {
        /// Path of the fixture document to serve.
        #[arg(long, default_value = "data/mock_data.json")]
        data: PathBuf,
        /// Listen port; defaults to PORT or 3000.
        #[arg(long)]
        port: Option<u16>,
    },
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,finmock_gen=debug,finmock_db=debug")),
        )
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    match cli.command {
        Commands::Generate {
            out,
            seed,
            journal_entries,
        } => {
            let mut config = GeneratorConfig::new().with_journal_entries(journal_entries);
            if let Some(seed) = seed {
                config = config.with_seed(seed);
            }
            match generate_to_path(&config, &out)? {
                GenerateOutcome::Written => info!("Fixture written to {}", out.display()),
                GenerateOutcome::SkippedExisting => info!("Fixture already present, nothing to do"),
            }
        }
        Commands::Load { data, db } => {
            let config = match db {
                Some(path) => DatabaseConfig::new(path),
                None => DatabaseConfig::from_env(),
            };
            let loader = DatasetLoader::new(config).await?;
            let report = loader.load_file(&data).await?;
            let reader = DatabaseReader::from_config(&loader.config).await?;
            for table in &report.tables {
                let total = reader.table_count(&table.table).await?;
                println!(
                    "{:<36} {:>6} inserted, {:>3} null rows skipped, {:>6} rows total",
                    table.table, table.inserted, table.skipped_null, total
                );
            }
            println!(
                "Loaded {} rows in {}ms",
                report.inserted(),
                report.duration_ms
            );
        }
        Commands::Serve { data, port } => {
            let port = port
                .or_else(|| std::env::var("PORT").ok().and_then(|p| p.parse().ok()))
                .unwrap_or(3000);
            finmock_api::serve(&data, port).await?;
        }
    }
    Ok(())
}
