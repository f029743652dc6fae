//! Raw row types bridging `SQLite` rows and entities.
//!
//! Role tags and dates are stored as TEXT; conversion into the typed
//! entities happens here so a corrupt row surfaces as
//! [`StoreError::InvalidRole`] or [`StoreError::InvalidDate`] instead of
//! a panic deep inside a query.

use chrono::NaiveDate;
use gala_core::ids::{EventId, LogisticsId, ParticipantId};
use rusqlite::Row;

use crate::errors::{Result, StoreError};
use crate::types::{Event, Logistics, Participant};

/// Raw `participants` row.
pub(crate) struct ParticipantRow {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub role: String,
}

impl ParticipantRow {
    pub fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            first_name: row.get(1)?,
            last_name: row.get(2)?,
            role: row.get(3)?,
        })
    }

    /// Convert into a [`Participant`] with an empty event set.
    pub fn into_participant(self) -> Result<Participant> {
        let role = self
            .role
            .parse()
            .map_err(|_| StoreError::InvalidRole(self.role))?;
        Ok(Participant::new(
            ParticipantId::new(self.id),
            self.first_name,
            self.last_name,
            role,
        ))
    }
}

/// Raw `events` row.
pub(crate) struct EventRow {
    pub id: i64,
    pub description: String,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub cost: f64,
}

impl EventRow {
    pub fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            description: row.get(1)?,
            start_date: row.get(2)?,
            end_date: row.get(3)?,
            cost: row.get(4)?,
        })
    }

    /// Convert into an [`Event`] with empty association sets.
    pub fn into_event(self) -> Result<Event> {
        let mut event = Event::new(EventId::new(self.id), self.description);
        event.start_date = parse_date(self.start_date)?;
        event.end_date = parse_date(self.end_date)?;
        event.cost = self.cost;
        Ok(event)
    }
}

/// Raw `logistics` row.
pub(crate) struct LogisticsRow {
    pub id: i64,
    pub description: String,
    pub quantity: u32,
    pub unit_price: f64,
    pub reserved: bool,
}

impl LogisticsRow {
    pub fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            description: row.get(1)?,
            quantity: row.get(2)?,
            unit_price: row.get(3)?,
            reserved: row.get(4)?,
        })
    }

    pub fn into_logistics(self) -> Logistics {
        Logistics::new(
            LogisticsId::new(self.id),
            self.description,
            self.quantity,
            self.unit_price,
            self.reserved,
        )
    }
}

fn parse_date(raw: Option<String>) -> Result<Option<NaiveDate>> {
    raw.map(|s| s.parse::<NaiveDate>().map_err(|_| StoreError::InvalidDate(s)))
        .transpose()
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
