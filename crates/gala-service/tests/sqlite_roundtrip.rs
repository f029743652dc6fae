//! End-to-end tests wiring [`EventService`] to the `SQLite` stores.
//!
//! Entities are seeded through the stores directly (creation is a store
//! concern, not a service operation), then the service operations are
//! exercised and verified by reading back through the stores.

use chrono::NaiveDate;
use tempfile::TempDir;

use gala_core::ids::{EventId, LogisticsId, ParticipantId};
use gala_core::role::Role;
use gala_service::{EventService, OrganizerFilter, ServiceError};
use gala_settings::GalaSettings;
use gala_store::sqlite::{
    SqliteEventStore, SqliteLogisticsStore, SqliteParticipantStore, connection, run_migrations,
};
use gala_store::{Event, EventStore, Logistics, LogisticsStore, Participant, ParticipantStore};

struct Harness {
    _dir: TempDir,
    service: EventService<SqliteEventStore, SqliteParticipantStore, SqliteLogisticsStore>,
    events: SqliteEventStore,
    participants: SqliteParticipantStore,
    logistics: SqliteLogisticsStore,
}

fn setup() -> Harness {
    gala_core::logging::init();
    let dir = tempfile::tempdir().unwrap();
    let mut settings = GalaSettings::default();
    settings.database.path = dir
        .path()
        .join("gala.db")
        .to_str()
        .unwrap()
        .to_string();

    let pool = connection::from_settings(&settings.database).unwrap();
    let _ = run_migrations(&pool.get().unwrap()).unwrap();

    let events = SqliteEventStore::new(pool.clone());
    let participants = SqliteParticipantStore::new(pool.clone());
    let logistics = SqliteLogisticsStore::new(pool);
    let service = EventService::new(events.clone(), participants.clone(), logistics.clone())
        .with_sweep_filter(OrganizerFilter::from(settings.cost_sweep));

    Harness {
        _dir: dir,
        service,
        events,
        participants,
        logistics,
    }
}

fn organizer() -> Participant {
    Participant::new(ParticipantId::default(), "Ahmed", "Tounsi", Role::Organizer)
}

fn event_named(description: &str) -> Event {
    Event::new(EventId::default(), description)
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn add_participant_assigns_id_and_round_trips() {
    let h = setup();
    let added = h.service.add_participant(organizer()).unwrap();
    assert!(!added.id.is_unassigned());

    let found = h.participants.find_by_id(added.id).unwrap().unwrap();
    assert_eq!(found.first_name, "Ahmed");
    assert_eq!(found.last_name, "Tounsi");
    assert_eq!(found.role, Role::Organizer);
}

#[test]
fn attaching_event_by_id_links_the_participant_side() {
    let h = setup();
    let participant = h.service.add_participant(organizer()).unwrap();
    let gala = h.events.save(event_named("Gala")).unwrap();

    let returned = h
        .service
        .attach_event_to_participant(gala.clone(), participant.id)
        .unwrap();
    assert_eq!(returned.id, gala.id);

    let found = h.participants.find_by_id(participant.id).unwrap().unwrap();
    assert!(found.events.iter().any(|e| e.id == gala.id));
}

#[test]
fn attaching_event_to_missing_participant_fails() {
    let h = setup();
    let gala = h.events.save(event_named("Gala")).unwrap();

    let err = h
        .service
        .attach_event_to_participant(gala, ParticipantId::new(99))
        .unwrap_err();
    assert!(matches!(err, ServiceError::ParticipantNotFound(_)));
}

#[test]
fn attaching_event_from_its_participant_set_links_each_member() {
    let h = setup();
    let first = h.service.add_participant(organizer()).unwrap();
    let second = h
        .service
        .add_participant(Participant::new(
            ParticipantId::default(),
            "Lina",
            "Ben Salah",
            Role::Speaker,
        ))
        .unwrap();

    let mut gala = h.events.save(event_named("Gala")).unwrap();
    let _ = gala.attach_participant(first.clone());
    let _ = gala.attach_participant(second.clone());

    let _ = h.service.attach_event_to_participants(gala.clone()).unwrap();

    for participant_id in [first.id, second.id] {
        let found = h.participants.find_by_id(participant_id).unwrap().unwrap();
        assert!(found.events.iter().any(|e| e.id == gala.id));
    }
}

#[test]
fn attaching_logistics_by_description_links_the_event() {
    let h = setup();
    let _ = h.events.save(event_named("Gala")).unwrap();
    let item = h
        .logistics
        .save(Logistics::new(
            LogisticsId::default(),
            "Chairs",
            10,
            100.0,
            true,
        ))
        .unwrap();

    let returned = h.service.attach_logistics(item.clone(), "Gala").unwrap();
    assert_eq!(returned.id, item.id);

    let found = h.events.find_by_description("Gala").unwrap().unwrap();
    assert!(found.logistics.iter().any(|l| l.id == item.id));
}

#[test]
fn attaching_logistics_with_unknown_description_still_persists() {
    let h = setup();
    let item = h
        .service
        .attach_logistics(
            Logistics::new(LogisticsId::default(), "Chairs", 10, 100.0, true),
            "Nowhere",
        )
        .unwrap();
    assert!(!item.id.is_unassigned());
}

#[test]
fn range_collection_returns_reserved_items_of_in_range_events() {
    let h = setup();

    let mut june = event_named("June fair");
    june.start_date = Some(date(2024, 6, 1));
    let _ = h.events.save(june).unwrap();

    let mut next_year = event_named("Next year");
    next_year.start_date = Some(date(2025, 3, 1));
    let _ = h.events.save(next_year).unwrap();

    let reserved = h
        .logistics
        .save(Logistics::new(
            LogisticsId::default(),
            "Chairs",
            10,
            100.0,
            true,
        ))
        .unwrap();
    let unreserved = h
        .logistics
        .save(Logistics::new(
            LogisticsId::default(),
            "Tables",
            5,
            50.0,
            false,
        ))
        .unwrap();
    let _ = h.service.attach_logistics(reserved.clone(), "June fair").unwrap();
    let _ = h.service.attach_logistics(unreserved, "June fair").unwrap();

    let mut out_of_range = Logistics::new(LogisticsId::default(), "Stage", 1, 250.0, true);
    out_of_range = h.logistics.save(out_of_range).unwrap();
    let _ = h.service.attach_logistics(out_of_range, "Next year").unwrap();

    let collected = h
        .service
        .reserved_logistics_between(date(2024, 1, 1), date(2024, 12, 31))
        .unwrap();
    assert_eq!(collected.len(), 1);
    assert_eq!(collected[0].id, reserved.id);
}

#[test]
fn cost_sweep_recomputes_and_persists_matching_event_costs() {
    let h = setup();

    let participant = h.service.add_participant(organizer()).unwrap();
    let gala = h.events.save(event_named("Gala")).unwrap();
    let _ = h
        .service
        .attach_event_to_participant(gala.clone(), participant.id)
        .unwrap();

    let item = h
        .logistics
        .save(Logistics::new(
            LogisticsId::default(),
            "Chairs",
            10,
            100.0,
            true,
        ))
        .unwrap();
    let _ = h.service.attach_logistics(item, "Gala").unwrap();

    h.service.recompute_event_costs().unwrap();

    let found = h.events.find_by_description("Gala").unwrap().unwrap();
    assert!((found.cost - 1000.0).abs() < f64::EPSILON);
}

#[test]
fn cost_sweep_ignores_events_without_the_configured_organizer() {
    let h = setup();

    let speaker = h
        .service
        .add_participant(Participant::new(
            ParticipantId::default(),
            "Lina",
            "Ben Salah",
            Role::Speaker,
        ))
        .unwrap();
    let fair = h.events.save(event_named("Fair")).unwrap();
    let _ = h
        .service
        .attach_event_to_participant(fair, speaker.id)
        .unwrap();

    let item = h
        .logistics
        .save(Logistics::new(
            LogisticsId::default(),
            "Chairs",
            10,
            100.0,
            true,
        ))
        .unwrap();
    let _ = h.service.attach_logistics(item, "Fair").unwrap();

    h.service.recompute_event_costs().unwrap();

    let found = h.events.find_by_description("Fair").unwrap().unwrap();
    assert!(found.cost.abs() < f64::EPSILON);
}
