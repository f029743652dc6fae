//! Event repository — CRUD for the `events` table plus the event side of
//! both associations.
//!
//! Saving persists scalar columns, adds participant links, and claims
//! logistics rows — all additively, and only for associated entities that
//! already carry an assigned id. Loaded events are one association level
//! deep: participants come without their own event sets.

use chrono::NaiveDate;
use rusqlite::{Connection, OptionalExtension, params};

use gala_core::ids::EventId;
use gala_core::role::Role;

use crate::errors::Result;
use crate::sqlite::repositories::logistics::LogisticsRepo;
use crate::sqlite::rows::{EventRow, ParticipantRow};
use crate::types::{Event, Participant};

/// Event repository — stateless, every method takes `&Connection`.
pub struct EventRepo;

impl EventRepo {
    /// Persist an event. An unassigned id is replaced by a fresh row id;
    /// an assigned id updates the row in place. Participant links are
    /// added and logistics rows claimed for every associated entity with
    /// an assigned id.
    pub fn save(conn: &Connection, event: Event) -> Result<Event> {
        let mut event = event;
        let start = event.start_date.map(|d| d.to_string());
        let end = event.end_date.map(|d| d.to_string());

        if event.id.is_unassigned() {
            let _ = conn.execute(
                "INSERT INTO events (description, start_date, end_date, cost)
                 VALUES (?1, ?2, ?3, ?4)",
                params![event.description, start, end, event.cost],
            )?;
            event.id = EventId::new(conn.last_insert_rowid());
        } else {
            let _ = conn.execute(
                "INSERT INTO events (id, description, start_date, end_date, cost)
                 VALUES (?1, ?2, ?3, ?4, ?5)
                 ON CONFLICT(id) DO UPDATE SET
                     description = excluded.description,
                     start_date = excluded.start_date,
                     end_date = excluded.end_date,
                     cost = excluded.cost",
                params![event.id.as_i64(), event.description, start, end, event.cost],
            )?;
        }

        for participant in &event.participants {
            if participant.id.is_unassigned() {
                continue;
            }
            let _ = conn.execute(
                "INSERT OR IGNORE INTO event_participants (event_id, participant_id)
                 VALUES (?1, ?2)",
                params![event.id.as_i64(), participant.id.as_i64()],
            )?;
        }

        for logistics in &event.logistics {
            if logistics.id.is_unassigned() {
                continue;
            }
            let _ = conn.execute(
                "UPDATE logistics SET event_id = ?1 WHERE id = ?2",
                params![event.id.as_i64(), logistics.id.as_i64()],
            )?;
        }

        Ok(event)
    }

    /// Look up the event with the given description, if any, with its
    /// participants and logistics loaded.
    pub fn find_by_description(conn: &Connection, description: &str) -> Result<Option<Event>> {
        let row = conn
            .query_row(
                "SELECT id, description, start_date, end_date, cost
                 FROM events WHERE description = ?1",
                params![description],
                EventRow::from_row,
            )
            .optional()?;
        let Some(row) = row else {
            return Ok(None);
        };
        Ok(Some(Self::load(conn, row)?))
    }

    /// All events whose start date lies in the inclusive range, with
    /// their associations loaded. Events without a start date never match.
    pub fn find_by_start_date_between(
        conn: &Connection,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Event>> {
        let mut stmt = conn.prepare(
            "SELECT id, description, start_date, end_date, cost
             FROM events
             WHERE start_date IS NOT NULL AND start_date >= ?1 AND start_date <= ?2
             ORDER BY id",
        )?;
        let rows = stmt
            .query_map(
                params![start.to_string(), end.to_string()],
                EventRow::from_row,
            )?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        rows.into_iter().map(|row| Self::load(conn, row)).collect()
    }

    /// All events that have a participant matching the given last name,
    /// first name, and role, with their associations loaded.
    pub fn find_by_organizer(
        conn: &Connection,
        last_name: &str,
        first_name: &str,
        role: Role,
    ) -> Result<Vec<Event>> {
        let mut stmt = conn.prepare(
            "SELECT DISTINCT e.id, e.description, e.start_date, e.end_date, e.cost
             FROM events e
             JOIN event_participants ep ON ep.event_id = e.id
             JOIN participants p ON p.id = ep.participant_id
             WHERE p.last_name = ?1 AND p.first_name = ?2 AND p.role = ?3
             ORDER BY e.id",
        )?;
        let rows = stmt
            .query_map(
                params![last_name, first_name, role.as_sql()],
                EventRow::from_row,
            )?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        rows.into_iter().map(|row| Self::load(conn, row)).collect()
    }

    /// Attach associations to a raw event row.
    fn load(conn: &Connection, row: EventRow) -> Result<Event> {
        let mut event = row.into_event()?;
        event.participants = Self::participants_for(conn, event.id)?;
        event.logistics = LogisticsRepo::for_event(conn, event.id)?;
        Ok(event)
    }

    /// Participants linked to an event, without their own event sets.
    fn participants_for(conn: &Connection, event_id: EventId) -> Result<Vec<Participant>> {
        let mut stmt = conn.prepare(
            "SELECT p.id, p.first_name, p.last_name, p.role
             FROM participants p
             JOIN event_participants ep ON ep.participant_id = p.id
             WHERE ep.event_id = ?1
             ORDER BY p.id",
        )?;
        let rows = stmt
            .query_map(params![event_id.as_i64()], ParticipantRow::from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        rows.into_iter().map(ParticipantRow::into_participant).collect()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
