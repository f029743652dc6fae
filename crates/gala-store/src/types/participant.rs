//! The participant entity.

use gala_core::ids::ParticipantId;
use gala_core::role::Role;
use serde::{Deserialize, Serialize};

use super::Event;

/// A person attached to events, tagged with a single [`Role`].
///
/// The event set is the participant-owned side of the many-to-many
/// participant↔event relationship.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    /// Identifier. Zero until a store assigns one.
    pub id: ParticipantId,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Role tag.
    pub role: Role,
    /// Events this participant is attached to, deduplicated by event id.
    #[serde(default)]
    pub events: Vec<Event>,
}

impl Participant {
    /// Create a participant with an empty event set.
    pub fn new(
        id: ParticipantId,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        role: Role,
    ) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            role,
            events: Vec::new(),
        }
    }

    /// Add an event to this participant's event set.
    ///
    /// Returns `false` without modifying anything if an event with the
    /// same id is already present.
    pub fn attach_event(&mut self, event: Event) -> bool {
        if self.events.iter().any(|e| e.id == event.id) {
            return false;
        }
        self.events.push(event);
        true
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
