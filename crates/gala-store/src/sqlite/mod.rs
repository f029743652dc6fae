//! `SQLite` backend: connection pool, migrations, repositories, and the
//! pool-backed store implementations.

pub mod connection;
pub mod migrations;
pub mod repositories;
mod rows;
mod stores;

pub use connection::{ConnectionConfig, ConnectionPool, PooledConnection};
pub use migrations::run_migrations;
pub use stores::{SqliteEventStore, SqliteLogisticsStore, SqliteParticipantStore};
