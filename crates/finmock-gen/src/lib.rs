//! # Finmock Generator Library
//!
//! Produces a complete, internally-consistent synthetic dataset: CRM-side
//! and ledger-side customers, a general ledger, a journal entry pool, FX
//! rates and dimension tables, serialized as a single JSON fixture.
//!
//! All randomness flows through one seeded [`MockGenerator`], so a fixed
//! seed yields a fully deterministic dataset.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::path::Path;
//! use finmock_gen::{generate_to_path, GeneratorConfig};
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = GeneratorConfig::new();
//!     let outcome = generate_to_path(&config, Path::new("data/mock_data.json"))?;
//!     println!("{outcome:?}");
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod constants;
pub mod dimensions;
pub mod fixture;
pub mod generator;
pub mod months;

pub use config::GeneratorConfig;
pub use dimensions::DerivedDimensions;
pub use fixture::{generate_to_path, write_fixture, GenerateOutcome};
pub use generator::MockGenerator;
