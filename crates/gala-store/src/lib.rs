//! # gala-store
//!
//! Entities, store contracts, and `SQLite` persistence for the gala
//! event-management service.
//!
//! This crate provides:
//!
//! - **Entities**: [`Participant`], [`Event`], [`Logistics`] with
//!   deduplicated association containers
//! - **Store contracts**: [`EventStore`], [`ParticipantStore`],
//!   [`LogisticsStore`] traits consumed by the service layer
//! - **`SQLite` backend**: `rusqlite` facade with repository pattern
//!   (participant, event, logistics) over an `r2d2` connection pool
//!
//! Finds never treat "not found" as an error — they return
//! `Result<Option<..>>` or `Result<Vec<..>>`; an `Err` always means the
//! store itself failed.

#![deny(unsafe_code)]

pub mod errors;
pub mod sqlite;
pub mod store;
pub mod types;

pub use errors::{Result, StoreError};
pub use sqlite::{SqliteEventStore, SqliteLogisticsStore, SqliteParticipantStore};
pub use store::{EventStore, LogisticsStore, ParticipantStore};
pub use types::{Event, Logistics, Participant};
