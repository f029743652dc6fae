//! The participant role tag.
//!
//! A participant carries exactly one role per record. The cost sweep
//! filters events on the [`Role::Organizer`] tag.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when a role tag does not match any known variant.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown role: {0}")]
pub struct ParseRoleError(pub String);

/// Role of a participant within an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Runs the event. The cost sweep selects events through this role.
    Organizer,
    /// Presents at the event.
    Speaker,
    /// Attends the event.
    Attendee,
}

impl Role {
    /// Text form stored in SQL and settings files.
    pub const fn as_sql(self) -> &'static str {
        match self {
            Role::Organizer => "organizer",
            Role::Speaker => "speaker",
            Role::Attendee => "attendee",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sql())
    }
}

impl FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "organizer" => Ok(Role::Organizer),
            "speaker" => Ok(Role::Speaker),
            "attendee" => Ok(Role::Attendee),
            other => Err(ParseRoleError(other.to_string())),
        }
    }
}
