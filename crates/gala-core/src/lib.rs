//! # gala-core
//!
//! Foundation types and shared vocabulary for the gala event-management
//! service.
//!
//! This crate provides what every other gala crate depends on:
//!
//! - **Branded IDs**: [`ids::ParticipantId`], [`ids::EventId`],
//!   [`ids::LogisticsId`] as `i64` newtypes
//! - **Roles**: the [`role::Role`] participant tag used by the cost sweep
//! - **Constants**: [`constants`] with the compiled cost-sweep defaults
//! - **Logging**: [`logging::init`] for the process-wide `tracing` subscriber
//!
//! ## Crate Position
//!
//! Foundation crate. Depended on by all other gala crates.

#![deny(unsafe_code)]

pub mod constants;
pub mod ids;
pub mod logging;
pub mod role;
