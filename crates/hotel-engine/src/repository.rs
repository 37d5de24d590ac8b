//! Repository construction, seed import and shared helpers

#![allow(clippy::result_large_err)]

use hotel_core::model::{CustomerId, RoomId};
use hotel_core::{log_op_end, log_op_error, log_op_start, HotelError};
use hotel_store::errors::Result;
use hotel_store::seed::{self, ImportSummary};
use hotel_store::{db, migrations, SqliteRepo};
use rusqlite::Connection;
use std::path::Path;
use std::time::Instant;

/// Process-wide handle on the hotel database
///
/// Construct once at startup and pass by reference. Reads take `&self`;
/// writes take `&mut self` because they may open a transaction.
pub struct Repository {
    pub(crate) conn: Connection,
}

impl Repository {
    /// Open (or create) the database file at `path` and bring its schema up to date
    ///
    /// # Errors
    /// `Io` if the parent directory cannot be created, `Persistence` or
    /// `ConstraintViolation` from connection setup and migrations.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = db::open(path)?;
        Self::from_connection(conn)
    }

    /// Fresh in-memory database, for tests and throwaway sessions
    pub fn open_in_memory() -> Result<Self> {
        Self::from_connection(db::open_in_memory()?)
    }

    /// Adopt an existing connection: configure it and apply migrations
    pub fn from_connection(mut conn: Connection) -> Result<Self> {
        db::configure(&conn)?;
        migrations::apply_migrations(&mut conn)?;
        Ok(Self { conn })
    }

    /// Borrow the underlying connection for read-only inspection
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Import a Seed Format v0 file in one transaction
    pub fn import_seed(&mut self, path: &Path) -> Result<ImportSummary> {
        log_op_start!("import_seed", path = %path.display());
        let start = Instant::now();

        let result = seed::import_seed(path, &mut self.conn);
        finish_op("import_seed", start, result)
    }

    /// Import the built-in sample data
    pub fn import_demo(&mut self) -> Result<ImportSummary> {
        log_op_start!("import_demo");
        let start = Instant::now();

        let result = seed::import_demo(&mut self.conn);
        finish_op("import_demo", start, result)
    }
}

/// Emit the closing boundary event for `op` and pass the result through
pub(crate) fn finish_op<T>(op: &'static str, start: Instant, result: Result<T>) -> Result<T> {
    let duration_ms = start.elapsed().as_millis() as u64;
    match &result {
        Ok(_) => log_op_end!(op, duration_ms = duration_ms),
        Err(e) => log_op_error!(op, e.clone(), duration_ms = duration_ms),
    }
    result
}

pub(crate) fn ensure_customer_exists(conn: &Connection, customer_id: CustomerId) -> Result<()> {
    match SqliteRepo::get_customer(conn, customer_id)? {
        Some(_) => Ok(()),
        None => Err(HotelError::CustomerNotFound { customer_id }.into()),
    }
}

pub(crate) fn ensure_room_exists(conn: &Connection, room_id: RoomId) -> Result<()> {
    match SqliteRepo::get_room(conn, room_id)? {
        Some(_) => Ok(()),
        None => Err(HotelError::RoomNotFound { room_id }.into()),
    }
}
