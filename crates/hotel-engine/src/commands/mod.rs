//! Operation handlers, one module per record store
//!
//! ## Logging Ownership
//!
//! Each public operation emits `log_op_start!` at entry and exactly one of
//! `log_op_end!` / `log_op_error!` on exit. The store layer below only uses
//! `tracing::debug!`.

pub mod booking;
pub mod customer;
pub mod room;
