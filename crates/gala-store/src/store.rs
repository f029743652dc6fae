//! Store contracts consumed by the service layer.
//!
//! The three traits mirror the persistence surface the service needs and
//! nothing more. Saves are id-preserving upserts: an entity with an
//! unassigned (zero) id is inserted and returned with its new id; an
//! entity with an assigned id has its row updated in place.
//!
//! Association links are persisted additively and only for entities that
//! already carry an assigned id — saving never removes a link, matching
//! the no-delete lifecycle of the entities themselves.

use chrono::NaiveDate;
use gala_core::ids::ParticipantId;
use gala_core::role::Role;

use crate::errors::Result;
use crate::types::{Event, Logistics, Participant};

/// Persistence contract for events.
pub trait EventStore {
    /// Persist an event, returning the stored value.
    fn save(&self, event: Event) -> Result<Event>;

    /// Look up the event with the given description, if any.
    fn find_by_description(&self, description: &str) -> Result<Option<Event>>;

    /// All events whose start date lies in the inclusive range.
    ///
    /// Events without a start date never match.
    fn find_by_start_date_between(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<Event>>;

    /// All events that have a participant matching the given last name,
    /// first name, and role.
    fn find_by_organizer(
        &self,
        last_name: &str,
        first_name: &str,
        role: Role,
    ) -> Result<Vec<Event>>;
}

/// Persistence contract for participants.
pub trait ParticipantStore {
    /// Persist a participant, returning the stored value.
    fn save(&self, participant: Participant) -> Result<Participant>;

    /// Look up a participant by id, if any.
    fn find_by_id(&self, id: ParticipantId) -> Result<Option<Participant>>;
}

/// Persistence contract for logistics items.
pub trait LogisticsStore {
    /// Persist a logistics item, returning the stored value.
    fn save(&self, logistics: Logistics) -> Result<Logistics>;
}
