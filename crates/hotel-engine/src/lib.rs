//! Hotel Engine - the repository callers talk to
//!
//! `Repository` owns the SQLite connection for the life of the process and
//! exposes the CRUD operations over customers, rooms and bookings. It
//! validates input, checks references, wraps multi-statement writes in a
//! transaction and owns boundary logging for every operation.

pub mod commands;
pub mod repository;

pub use repository::Repository;
