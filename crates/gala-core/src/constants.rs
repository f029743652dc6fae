//! Compiled defaults shared across gala crates.

use crate::role::Role;

/// First name of the cost-sweep organizer filter.
///
/// The sweep recomputes costs only for events that have a participant
/// matching this exact first name, last name, and role. The `cost_sweep`
/// settings section can override each field.
pub const SWEEP_ORGANIZER_FIRST_NAME: &str = "Ahmed";

/// Last name of the cost-sweep organizer filter.
pub const SWEEP_ORGANIZER_LAST_NAME: &str = "Tounsi";

/// Role of the cost-sweep organizer filter.
pub const SWEEP_ORGANIZER_ROLE: Role = Role::Organizer;

/// Default path of the SQLite database file.
pub const DEFAULT_DB_PATH: &str = "gala.db";
