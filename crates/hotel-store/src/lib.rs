//! Hotel Store - SQLite persistence for customers, rooms and bookings
//!
//! Provides:
//! - Connection management (`db`)
//! - Embedded, checksummed schema migrations
//! - Row-level SQL for the three record stores (`repo::SqliteRepo`)
//! - Seed Format v0 parser and transactional importer

pub mod db;
pub mod errors;
pub mod migrations;
pub mod repo;
pub mod seed;

// Re-export key types
pub use errors::Result;
pub use repo::SqliteRepo;
