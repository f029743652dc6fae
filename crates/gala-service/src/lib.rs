//! # gala-service
//!
//! The service facade of the gala event-management system.
//!
//! [`EventService`] orchestrates the three store contracts from
//! `gala-store` and enforces the business rules:
//!
//! - Registering participants
//! - Attaching events to participants (by id, or from an event's
//!   pre-populated participant set)
//! - Attaching logistics items to events found by description
//! - Collecting reserved logistics items over a start-date range
//! - The cost sweep: recomputing every matching event's cost from its
//!   reserved logistics items
//!
//! The service holds no state of its own — each operation is a
//! synchronous sequence of store calls.

#![deny(unsafe_code)]

pub mod errors;
pub mod service;

pub use errors::{Result, ServiceError};
pub use service::{EventService, OrganizerFilter};
