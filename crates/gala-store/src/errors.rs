//! Error types for the store subsystem.
//!
//! [`StoreError`] is returned by every store operation. "Not found" is
//! never an error here — finds return `Option`/`Vec` and leave the
//! decision to the caller.

use thiserror::Error;

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// `SQLite` database error.
    #[error("sqlite error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Connection pool error.
    #[error("connection pool error: {0}")]
    Pool(#[from] r2d2::Error),

    /// A stored role tag does not match any known variant.
    #[error("invalid role in store: {0}")]
    InvalidRole(String),

    /// A stored date is not a valid calendar date.
    #[error("invalid date in store: {0}")]
    InvalidDate(String),
}

/// Convenience type alias for store results.
pub type Result<T> = std::result::Result<T, StoreError>;

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
