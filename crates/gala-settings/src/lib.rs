//! # gala-settings
//!
//! Configuration management with layered sources for the gala service.
//!
//! Settings are loaded from three layers (in priority order):
//! 1. **Compiled defaults** — [`GalaSettings::default()`]
//! 2. **Settings file** — `gala.settings.json` (deep-merged over defaults)
//! 3. **Environment variables** — `GALA_*` overrides (highest priority)
//!
//! The settings file is optional; a missing file yields compiled defaults
//! with env overrides applied.

#![deny(unsafe_code)]

pub mod errors;
pub mod loader;
pub mod types;

pub use errors::{Result, SettingsError};
pub use loader::{deep_merge, load_settings, load_settings_from_path, settings_path};
pub use types::{CostSweepSettings, DatabaseSettings, GalaSettings};
