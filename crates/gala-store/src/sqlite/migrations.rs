//! Schema migration runner for the gala database.
//!
//! The schema is applied in a single transaction guarded by
//! `PRAGMA user_version` — running the migrator is idempotent, and a
//! failure rolls back cleanly with no partial schema state.

use rusqlite::Connection;
use tracing::{debug, info};

use crate::errors::Result;

/// Version stamped into `user_version` once the schema is applied.
const SCHEMA_VERSION: i64 = 1;

const SCHEMA: &str = "
CREATE TABLE participants (
    id         INTEGER PRIMARY KEY AUTOINCREMENT,
    first_name TEXT NOT NULL,
    last_name  TEXT NOT NULL,
    role       TEXT NOT NULL
);

CREATE TABLE events (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    description TEXT NOT NULL UNIQUE,
    start_date  TEXT,
    end_date    TEXT,
    cost        REAL NOT NULL DEFAULT 0
);

CREATE TABLE event_participants (
    event_id       INTEGER NOT NULL REFERENCES events(id),
    participant_id INTEGER NOT NULL REFERENCES participants(id),
    PRIMARY KEY (event_id, participant_id)
);

CREATE TABLE logistics (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    description TEXT NOT NULL,
    quantity    INTEGER NOT NULL DEFAULT 0,
    unit_price  REAL NOT NULL DEFAULT 0,
    reserved    INTEGER NOT NULL DEFAULT 0,
    event_id    INTEGER REFERENCES events(id)
);

CREATE INDEX idx_events_start_date ON events(start_date);
CREATE INDEX idx_event_participants_participant ON event_participants(participant_id);
CREATE INDEX idx_logistics_event ON logistics(event_id);
";

/// Apply the schema if the database is behind [`SCHEMA_VERSION`].
///
/// Returns `true` if the schema was applied, `false` if it was already
/// current.
pub fn run_migrations(conn: &Connection) -> Result<bool> {
    let current: i64 = conn.query_row("PRAGMA user_version", [], |row| row.get(0))?;
    if current >= SCHEMA_VERSION {
        debug!(version = current, "schema already current, skipping");
        return Ok(false);
    }

    let tx = conn.unchecked_transaction()?;
    tx.execute_batch(SCHEMA)?;
    tx.pragma_update(None, "user_version", SCHEMA_VERSION)?;
    tx.commit()?;

    info!(version = SCHEMA_VERSION, "schema applied");
    Ok(true)
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
#[allow(unused_results)]
mod tests {
    use super::*;

    #[test]
    fn applies_schema_once() {
        let conn = Connection::open_in_memory().unwrap();
        assert!(run_migrations(&conn).unwrap());
        assert!(!run_migrations(&conn).unwrap());
    }

    #[test]
    fn stamps_user_version() {
        let conn = Connection::open_in_memory().unwrap();
        let _ = run_migrations(&conn).unwrap();
        let version: i64 = conn
            .query_row("PRAGMA user_version", [], |row| row.get(0))
            .unwrap();
        assert_eq!(version, SCHEMA_VERSION);
    }

    #[test]
    fn creates_all_tables() {
        let conn = Connection::open_in_memory().unwrap();
        let _ = run_migrations(&conn).unwrap();
        for table in ["participants", "events", "event_participants", "logistics"] {
            let count: i64 = conn
                .query_row(
                    "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1",
                    rusqlite::params![table],
                    |row| row.get(0),
                )
                .unwrap();
            assert_eq!(count, 1, "missing table {table}");
        }
    }

    #[test]
    fn event_description_is_unique() {
        let conn = Connection::open_in_memory().unwrap();
        let _ = run_migrations(&conn).unwrap();
        conn.execute("INSERT INTO events (description) VALUES ('Gala')", [])
            .unwrap();
        let duplicate = conn.execute("INSERT INTO events (description) VALUES ('Gala')", []);
        assert!(duplicate.is_err());
    }
}
