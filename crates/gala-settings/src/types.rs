//! Settings type definitions.
//!
//! All types use `#[serde(rename_all = "camelCase")]` and implement
//! [`Default`] with the compiled defaults from `gala-core`. Types carry
//! `#[serde(default)]` so a partial settings file is valid — missing
//! fields fall back to their default value during deserialization.

use gala_core::constants::{
    DEFAULT_DB_PATH, SWEEP_ORGANIZER_FIRST_NAME, SWEEP_ORGANIZER_LAST_NAME, SWEEP_ORGANIZER_ROLE,
};
use gala_core::role::Role;
use serde::{Deserialize, Serialize};

/// Root settings type for the gala service.
///
/// Loaded from `gala.settings.json` with defaults applied for missing
/// fields. Environment variables can override specific values.
///
/// # JSON Format
///
/// All field names are camelCase. Example:
///
/// ```json
/// {
///   "database": { "path": "events.db" },
///   "costSweep": { "organizerLastName": "Tounsi" }
/// }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GalaSettings {
    /// SQLite database settings.
    pub database: DatabaseSettings,
    /// Cost-sweep organizer filter settings.
    pub cost_sweep: CostSweepSettings,
}

/// SQLite database settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DatabaseSettings {
    /// Path of the database file.
    pub path: String,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            path: DEFAULT_DB_PATH.to_string(),
        }
    }
}

/// Organizer filter applied by the cost sweep.
///
/// The sweep recomputes costs only for events that have a participant
/// matching all three fields.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CostSweepSettings {
    /// First name of the organizer to match.
    pub organizer_first_name: String,
    /// Last name of the organizer to match.
    pub organizer_last_name: String,
    /// Role of the organizer to match.
    pub organizer_role: Role,
}

impl Default for CostSweepSettings {
    fn default() -> Self {
        Self {
            organizer_first_name: SWEEP_ORGANIZER_FIRST_NAME.to_string(),
            organizer_last_name: SWEEP_ORGANIZER_LAST_NAME.to_string(),
            organizer_role: SWEEP_ORGANIZER_ROLE,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
