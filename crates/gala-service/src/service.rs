//! The event service facade.
//!
//! Every operation is a short sequence of store calls: look up, mutate
//! an association in memory, persist. Key business rules:
//!
//! - **Asymmetric association**: attaching an event to a participant
//!   updates the participant's event set only — the event's own
//!   participant set is never touched by the association operations.
//! - **Tolerant scans**: unresolvable participants in an event's set and
//!   unmatched event descriptions are skipped, not errors. Only the
//!   single-id association path fails on a missing participant.
//! - **Reserved-only accounting**: cost totals and date-range collection
//!   consider logistics items with `reserved == true` and nothing else.

use std::collections::HashSet;

use chrono::NaiveDate;
use tracing::{debug, warn};

use gala_core::constants::{
    SWEEP_ORGANIZER_FIRST_NAME, SWEEP_ORGANIZER_LAST_NAME, SWEEP_ORGANIZER_ROLE,
};
use gala_core::ids::{LogisticsId, ParticipantId};
use gala_core::role::Role;
use gala_settings::CostSweepSettings;
use gala_store::{Event, EventStore, Logistics, LogisticsStore, Participant, ParticipantStore};

use crate::errors::{Result, ServiceError};

/// Participant criteria selecting the events the cost sweep recomputes.
///
/// An event matches when it has a participant whose first name, last
/// name, and role all equal the filter's fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrganizerFilter {
    /// First name to match.
    pub first_name: String,
    /// Last name to match.
    pub last_name: String,
    /// Role to match.
    pub role: Role,
}

impl Default for OrganizerFilter {
    fn default() -> Self {
        Self {
            first_name: SWEEP_ORGANIZER_FIRST_NAME.to_string(),
            last_name: SWEEP_ORGANIZER_LAST_NAME.to_string(),
            role: SWEEP_ORGANIZER_ROLE,
        }
    }
}

impl From<CostSweepSettings> for OrganizerFilter {
    fn from(settings: CostSweepSettings) -> Self {
        Self {
            first_name: settings.organizer_first_name,
            last_name: settings.organizer_last_name,
            role: settings.organizer_role,
        }
    }
}

/// Facade over the three store contracts.
pub struct EventService<E, P, L> {
    events: E,
    participants: P,
    logistics: L,
    sweep_filter: OrganizerFilter,
}

impl<E, P, L> EventService<E, P, L>
where
    E: EventStore,
    P: ParticipantStore,
    L: LogisticsStore,
{
    /// Create a service with the default cost-sweep filter.
    pub fn new(events: E, participants: P, logistics: L) -> Self {
        Self {
            events,
            participants,
            logistics,
            sweep_filter: OrganizerFilter::default(),
        }
    }

    /// Replace the cost-sweep filter.
    #[must_use]
    pub fn with_sweep_filter(mut self, sweep_filter: OrganizerFilter) -> Self {
        self.sweep_filter = sweep_filter;
        self
    }

    /// Persist a participant unchanged.
    pub fn add_participant(&self, participant: Participant) -> Result<Participant> {
        debug!(participant_id = %participant.id, "adding participant");
        Ok(self.participants.save(participant)?)
    }

    /// Attach an event to the participant with the given id.
    ///
    /// The participant gains the event in its event set and is persisted,
    /// then the event itself is persisted and returned. The event's own
    /// participant set is not touched.
    ///
    /// Fails with [`ServiceError::ParticipantNotFound`] when no
    /// participant has the given id.
    pub fn attach_event_to_participant(
        &self,
        event: Event,
        participant_id: ParticipantId,
    ) -> Result<Event> {
        debug!(%participant_id, event_id = %event.id, "attaching event to participant");
        let mut participant = self
            .participants
            .find_by_id(participant_id)?
            .ok_or(ServiceError::ParticipantNotFound(participant_id))?;
        let _ = participant.attach_event(event.clone());
        let _ = self.participants.save(participant)?;
        Ok(self.events.save(event)?)
    }

    /// Attach an event to every resolvable participant already referenced
    /// in its participant set.
    ///
    /// Each participant found by its own id gains the event in its event
    /// set and is persisted; unresolvable participants are skipped. The
    /// event is persisted exactly once afterwards and returned.
    pub fn attach_event_to_participants(&self, event: Event) -> Result<Event> {
        debug!(
            event_id = %event.id,
            participants = event.participants.len(),
            "attaching event to its participants"
        );
        for referenced in &event.participants {
            match self.participants.find_by_id(referenced.id)? {
                Some(mut participant) => {
                    let _ = participant.attach_event(event.clone());
                    let _ = self.participants.save(participant)?;
                }
                None => {
                    warn!(participant_id = %referenced.id, "participant not found, skipping");
                }
            }
        }
        Ok(self.events.save(event)?)
    }

    /// Attach a logistics item to the event with the given description.
    ///
    /// When the description matches an event, the event gains the item in
    /// its logistics set and is persisted. Either way the item itself is
    /// persisted exactly once and returned — an unmatched description is
    /// not an error.
    pub fn attach_logistics(
        &self,
        logistics: Logistics,
        event_description: &str,
    ) -> Result<Logistics> {
        debug!(logistics_id = %logistics.id, event_description, "attaching logistics item");
        match self.events.find_by_description(event_description)? {
            Some(mut event) => {
                let _ = event.attach_logistics(logistics.clone());
                let _ = self.events.save(event)?;
            }
            None => {
                warn!(event_description, "no matching event, saving item unassociated");
            }
        }
        Ok(self.logistics.save(logistics)?)
    }

    /// Reserved logistics items of every event whose start date lies in
    /// the inclusive range, deduplicated by id. Ordering is unspecified.
    pub fn reserved_logistics_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Logistics>> {
        debug!(%start, %end, "collecting reserved logistics in range");
        let mut seen: HashSet<LogisticsId> = HashSet::new();
        let mut collected = Vec::new();
        for event in self.events.find_by_start_date_between(start, end)? {
            for item in event.logistics {
                if item.reserved && seen.insert(item.id) {
                    collected.push(item);
                }
            }
        }
        Ok(collected)
    }

    /// The cost sweep: recompute and persist the cost of every event
    /// matching the configured organizer filter.
    ///
    /// Each matching event's cost becomes the sum of
    /// `quantity × unit_price` over its reserved logistics items, and the
    /// event is persisted exactly once.
    pub fn recompute_event_costs(&self) -> Result<()> {
        let filter = &self.sweep_filter;
        debug!(
            first_name = %filter.first_name,
            last_name = %filter.last_name,
            role = %filter.role,
            "running cost sweep"
        );
        let matching =
            self.events
                .find_by_organizer(&filter.last_name, &filter.first_name, filter.role)?;
        for mut event in matching {
            event.cost = event.reserved_total();
            debug!(event_id = %event.id, cost = event.cost, "recomputed event cost");
            let _ = self.events.save(event)?;
        }
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
