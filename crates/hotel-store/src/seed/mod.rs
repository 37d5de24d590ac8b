//! Seed import system
//!
//! Provides:
//! - Seed Format v0 schema
//! - YAML parser with validation
//! - Transactional importer
//! - The built-in demo seed

pub mod format_v0;
pub mod importer;
pub mod parser;

pub use format_v0::SeedV0;
pub use importer::{import_demo, import_seed, import_seed_str, ImportSummary, DEMO_SEED};
pub use parser::{parse_seed_file, parse_seed_str};
