//! The event entity.

use chrono::NaiveDate;
use gala_core::ids::EventId;
use serde::{Deserialize, Serialize};

use super::{Logistics, Participant};

/// An event with its participants, logistics, and aggregate cost.
///
/// The description doubles as a lookup key and is unique in the store.
/// `cost` is only ever written by the cost sweep — it equals the sum of
/// `quantity × unit_price` over the reserved logistics items.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Identifier. Zero until a store assigns one.
    pub id: EventId,
    /// Description, used as a lookup key.
    pub description: String,
    /// First day of the event.
    pub start_date: Option<NaiveDate>,
    /// Last day of the event.
    pub end_date: Option<NaiveDate>,
    /// Participants attached to this event, deduplicated by participant id.
    #[serde(default)]
    pub participants: Vec<Participant>,
    /// Logistics items attached to this event, deduplicated by logistics id.
    #[serde(default)]
    pub logistics: Vec<Logistics>,
    /// Aggregate cost of the reserved logistics items.
    pub cost: f64,
}

impl Event {
    /// Create an event with no dates, empty association sets, and zero cost.
    pub fn new(id: EventId, description: impl Into<String>) -> Self {
        Self {
            id,
            description: description.into(),
            start_date: None,
            end_date: None,
            participants: Vec::new(),
            logistics: Vec::new(),
            cost: 0.0,
        }
    }

    /// Add a participant to this event's participant set.
    ///
    /// Returns `false` without modifying anything if a participant with
    /// the same id is already present.
    pub fn attach_participant(&mut self, participant: Participant) -> bool {
        if self.participants.iter().any(|p| p.id == participant.id) {
            return false;
        }
        self.participants.push(participant);
        true
    }

    /// Add a logistics item to this event's logistics set.
    ///
    /// Returns `false` without modifying anything if an item with the
    /// same id is already present.
    pub fn attach_logistics(&mut self, logistics: Logistics) -> bool {
        if self.logistics.iter().any(|l| l.id == logistics.id) {
            return false;
        }
        self.logistics.push(logistics);
        true
    }

    /// Sum of `quantity × unit_price` over the reserved logistics items.
    pub fn reserved_total(&self) -> f64 {
        self.logistics
            .iter()
            .filter(|l| l.reserved)
            .map(Logistics::line_total)
            .sum()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
