//! # Finmock Database Library
//!
//! Materializes the generated fixture into SQLite/Turso storage: table
//! creation, insert-if-absent writes keyed on primary keys, and read-side
//! row counts.
//!
//! Loading is idempotent by contract: a row that already exists is never
//! modified by a later load, and rerunning the loader against a populated
//! database leaves keyed tables unchanged.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use finmock_db::{DatabaseConfig, DatasetLoader};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::new("finmock.db");
//!     let loader = DatasetLoader::new(config).await?;
//!     let report = loader.load_file("data/mock_data.json").await?;
//!     println!("Inserted {} rows", report.inserted());
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod loader;
pub mod reader;
pub mod schema;

pub use config::DatabaseConfig;
pub use error::{DatabaseError, Result};
pub use loader::{DatasetLoader, LoadReport, TableLoad};
pub use reader::DatabaseReader;
