//! Repository layer: row-level persistence of the domain models

pub mod sqlite_repo;

pub use sqlite_repo::SqliteRepo;
