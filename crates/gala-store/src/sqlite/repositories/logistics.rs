//! Logistics repository — CRUD for the `logistics` table.
//!
//! The `event_id` column is owned by the event side of the association:
//! saving a logistics item never touches it, so re-saving an attached
//! item does not detach it from its event.

use rusqlite::{Connection, params};

use gala_core::ids::{EventId, LogisticsId};

use crate::errors::Result;
use crate::sqlite::rows::LogisticsRow;
use crate::types::Logistics;

/// Logistics repository — stateless, every method takes `&Connection`.
pub struct LogisticsRepo;

impl LogisticsRepo {
    /// Persist a logistics item. An unassigned id is replaced by a fresh
    /// row id; an assigned id updates the row in place.
    pub fn save(conn: &Connection, logistics: Logistics) -> Result<Logistics> {
        let mut logistics = logistics;
        if logistics.id.is_unassigned() {
            let _ = conn.execute(
                "INSERT INTO logistics (description, quantity, unit_price, reserved)
                 VALUES (?1, ?2, ?3, ?4)",
                params![
                    logistics.description,
                    logistics.quantity,
                    logistics.unit_price,
                    logistics.reserved,
                ],
            )?;
            logistics.id = LogisticsId::new(conn.last_insert_rowid());
        } else {
            let _ = conn.execute(
                "INSERT INTO logistics (id, description, quantity, unit_price, reserved)
                 VALUES (?1, ?2, ?3, ?4, ?5)
                 ON CONFLICT(id) DO UPDATE SET
                     description = excluded.description,
                     quantity = excluded.quantity,
                     unit_price = excluded.unit_price,
                     reserved = excluded.reserved",
                params![
                    logistics.id.as_i64(),
                    logistics.description,
                    logistics.quantity,
                    logistics.unit_price,
                    logistics.reserved,
                ],
            )?;
        }
        Ok(logistics)
    }

    /// All logistics items attached to an event, in id order.
    pub fn for_event(conn: &Connection, event_id: EventId) -> Result<Vec<Logistics>> {
        let mut stmt = conn.prepare(
            "SELECT id, description, quantity, unit_price, reserved
             FROM logistics WHERE event_id = ?1 ORDER BY id",
        )?;
        let rows = stmt
            .query_map(params![event_id.as_i64()], LogisticsRow::from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(rows.into_iter().map(LogisticsRow::into_logistics).collect())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
