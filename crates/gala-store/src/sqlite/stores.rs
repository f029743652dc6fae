//! Pool-backed implementations of the store contracts.
//!
//! Each store holds a clone of the shared connection pool and delegates
//! to the stateless repositories. No transaction demarcation happens
//! here — each repository call runs against a single pooled connection.

use chrono::NaiveDate;
use tracing::debug;

use gala_core::ids::ParticipantId;
use gala_core::role::Role;

use crate::errors::Result;
use crate::sqlite::connection::{ConnectionPool, PooledConnection};
use crate::sqlite::repositories::{EventRepo, LogisticsRepo, ParticipantRepo};
use crate::store::{EventStore, LogisticsStore, ParticipantStore};
use crate::types::{Event, Logistics, Participant};

/// [`EventStore`] backed by `SQLite`.
#[derive(Clone)]
pub struct SqliteEventStore {
    pool: ConnectionPool,
}

impl SqliteEventStore {
    /// Create a store over the given connection pool.
    pub fn new(pool: ConnectionPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> Result<PooledConnection> {
        Ok(self.pool.get()?)
    }
}

impl EventStore for SqliteEventStore {
    fn save(&self, event: Event) -> Result<Event> {
        debug!(event_id = %event.id, description = %event.description, "saving event");
        EventRepo::save(&*self.conn()?, event)
    }

    fn find_by_description(&self, description: &str) -> Result<Option<Event>> {
        EventRepo::find_by_description(&*self.conn()?, description)
    }

    fn find_by_start_date_between(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<Event>> {
        EventRepo::find_by_start_date_between(&*self.conn()?, start, end)
    }

    fn find_by_organizer(
        &self,
        last_name: &str,
        first_name: &str,
        role: Role,
    ) -> Result<Vec<Event>> {
        EventRepo::find_by_organizer(&*self.conn()?, last_name, first_name, role)
    }
}

/// [`ParticipantStore`] backed by `SQLite`.
#[derive(Clone)]
pub struct SqliteParticipantStore {
    pool: ConnectionPool,
}

impl SqliteParticipantStore {
    /// Create a store over the given connection pool.
    pub fn new(pool: ConnectionPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> Result<PooledConnection> {
        Ok(self.pool.get()?)
    }
}

impl ParticipantStore for SqliteParticipantStore {
    fn save(&self, participant: Participant) -> Result<Participant> {
        debug!(participant_id = %participant.id, "saving participant");
        ParticipantRepo::save(&*self.conn()?, participant)
    }

    fn find_by_id(&self, id: ParticipantId) -> Result<Option<Participant>> {
        ParticipantRepo::find_by_id(&*self.conn()?, id)
    }
}

/// [`LogisticsStore`] backed by `SQLite`.
#[derive(Clone)]
pub struct SqliteLogisticsStore {
    pool: ConnectionPool,
}

impl SqliteLogisticsStore {
    /// Create a store over the given connection pool.
    pub fn new(pool: ConnectionPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> Result<PooledConnection> {
        Ok(self.pool.get()?)
    }
}

impl LogisticsStore for SqliteLogisticsStore {
    fn save(&self, logistics: Logistics) -> Result<Logistics> {
        debug!(logistics_id = %logistics.id, "saving logistics item");
        LogisticsRepo::save(&*self.conn()?, logistics)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
