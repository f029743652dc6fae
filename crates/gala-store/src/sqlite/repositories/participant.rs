//! Participant repository — CRUD for the `participants` table plus the
//! participant side of the `event_participants` join table.
//!
//! Event links are persisted additively and only for events that already
//! carry an assigned id. A loaded participant carries its events one
//! association level deep: each event comes with its logistics but
//! without nested participants.

use rusqlite::{Connection, OptionalExtension, params};

use gala_core::ids::ParticipantId;

use crate::errors::Result;
use crate::sqlite::repositories::logistics::LogisticsRepo;
use crate::sqlite::rows::{EventRow, ParticipantRow};
use crate::types::{Event, Participant};

/// Participant repository — stateless, every method takes `&Connection`.
pub struct ParticipantRepo;

impl ParticipantRepo {
    /// Persist a participant. An unassigned id is replaced by a fresh
    /// row id; an assigned id updates the row in place. Event links are
    /// added for every event in the set with an assigned id.
    pub fn save(conn: &Connection, participant: Participant) -> Result<Participant> {
        let mut participant = participant;
        if participant.id.is_unassigned() {
            let _ = conn.execute(
                "INSERT INTO participants (first_name, last_name, role) VALUES (?1, ?2, ?3)",
                params![
                    participant.first_name,
                    participant.last_name,
                    participant.role.as_sql(),
                ],
            )?;
            participant.id = ParticipantId::new(conn.last_insert_rowid());
        } else {
            let _ = conn.execute(
                "INSERT INTO participants (id, first_name, last_name, role)
                 VALUES (?1, ?2, ?3, ?4)
                 ON CONFLICT(id) DO UPDATE SET
                     first_name = excluded.first_name,
                     last_name = excluded.last_name,
                     role = excluded.role",
                params![
                    participant.id.as_i64(),
                    participant.first_name,
                    participant.last_name,
                    participant.role.as_sql(),
                ],
            )?;
        }

        for event in &participant.events {
            if event.id.is_unassigned() {
                continue;
            }
            let _ = conn.execute(
                "INSERT OR IGNORE INTO event_participants (event_id, participant_id)
                 VALUES (?1, ?2)",
                params![event.id.as_i64(), participant.id.as_i64()],
            )?;
        }

        Ok(participant)
    }

    /// Look up a participant by id, with its events loaded.
    pub fn find_by_id(conn: &Connection, id: ParticipantId) -> Result<Option<Participant>> {
        let row = conn
            .query_row(
                "SELECT id, first_name, last_name, role FROM participants WHERE id = ?1",
                params![id.as_i64()],
                ParticipantRow::from_row,
            )
            .optional()?;
        let Some(row) = row else {
            return Ok(None);
        };
        let mut participant = row.into_participant()?;
        participant.events = Self::events_for(conn, participant.id)?;
        Ok(Some(participant))
    }

    /// Events linked to a participant, each with its logistics but
    /// without nested participants.
    fn events_for(conn: &Connection, participant_id: ParticipantId) -> Result<Vec<Event>> {
        let mut stmt = conn.prepare(
            "SELECT e.id, e.description, e.start_date, e.end_date, e.cost
             FROM events e
             JOIN event_participants ep ON ep.event_id = e.id
             WHERE ep.participant_id = ?1
             ORDER BY e.id",
        )?;
        let rows = stmt
            .query_map(params![participant_id.as_i64()], EventRow::from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        let mut events = Vec::with_capacity(rows.len());
        for row in rows {
            let mut event = row.into_event()?;
            event.logistics = LogisticsRepo::for_event(conn, event.id)?;
            events.push(event);
        }
        Ok(events)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
