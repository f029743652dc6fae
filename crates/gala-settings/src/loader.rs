//! Settings loading with deep merge and environment variable overrides.
//!
//! Loading flow:
//! 1. Start with compiled [`GalaSettings::default()`]
//! 2. If `gala.settings.json` exists, deep-merge file values over defaults
//! 3. Apply `GALA_*` environment variable overrides (highest priority)
//!
//! Deep merge rules:
//! - Objects are merged recursively (source overrides target per-key)
//! - Arrays and primitives are replaced entirely by source
//! - Null values in source are skipped (preserving target)

use std::path::{Path, PathBuf};

use gala_core::role::Role;
use serde_json::Value;
use tracing::debug;

use crate::errors::Result;
use crate::types::GalaSettings;

/// Resolve the path to the settings file.
///
/// `GALA_SETTINGS` overrides the location; otherwise `gala.settings.json`
/// in the working directory.
pub fn settings_path() -> PathBuf {
    std::env::var("GALA_SETTINGS")
        .map_or_else(|_| PathBuf::from("gala.settings.json"), PathBuf::from)
}

/// Load settings from the default path with env var overrides.
pub fn load_settings() -> Result<GalaSettings> {
    load_settings_from_path(&settings_path())
}

/// Load settings from a specific path with env var overrides.
///
/// If the file does not exist, returns defaults. If the file contains
/// invalid JSON, returns an error.
pub fn load_settings_from_path(path: &Path) -> Result<GalaSettings> {
    let defaults = serde_json::to_value(GalaSettings::default())?;

    let merged = if path.exists() {
        debug!(?path, "loading settings from file");
        let content = std::fs::read_to_string(path)?;
        let file: Value = serde_json::from_str(&content)?;
        deep_merge(defaults, file)
    } else {
        debug!(?path, "settings file not found, using defaults");
        defaults
    };

    let mut settings: GalaSettings = serde_json::from_value(merged)?;
    apply_env_overrides(&mut settings);
    Ok(settings)
}

/// Recursive deep merge of two JSON values.
///
/// - Objects are merged recursively (source overrides target per-key)
/// - Arrays and primitives are replaced entirely by source
/// - Null values in source are skipped (preserving target)
pub fn deep_merge(target: Value, source: Value) -> Value {
    match (target, source) {
        (Value::Object(mut target_map), Value::Object(source_map)) => {
            for (key, source_val) in source_map {
                if source_val.is_null() {
                    continue;
                }
                let merged = if let Some(target_val) = target_map.remove(&key) {
                    deep_merge(target_val, source_val)
                } else {
                    source_val
                };
                let _ = target_map.insert(key, merged);
            }
            Value::Object(target_map)
        }
        (_, source) => source,
    }
}

/// Apply environment variable overrides to loaded settings.
///
/// Invalid values are ignored with a warning (fall back to file/default).
pub fn apply_env_overrides(settings: &mut GalaSettings) {
    if let Some(v) = read_env_string("GALA_DB_PATH") {
        settings.database.path = v;
    }
    if let Some(v) = read_env_string("GALA_SWEEP_FIRST_NAME") {
        settings.cost_sweep.organizer_first_name = v;
    }
    if let Some(v) = read_env_string("GALA_SWEEP_LAST_NAME") {
        settings.cost_sweep.organizer_last_name = v;
    }
    if let Some(v) = read_env_role("GALA_SWEEP_ROLE") {
        settings.cost_sweep.organizer_role = v;
    }
}

// ── Env var readers ─────────────────────────────────────────────────────────

fn read_env_string(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

fn read_env_role(name: &str) -> Option<Role> {
    let val = std::env::var(name).ok()?;
    let result = val.parse::<Role>().ok();
    if result.is_none() {
        tracing::warn!(key = name, value = %val, "invalid role env var, ignoring");
    }
    result
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::SettingsError;

    // ── deep_merge ──────────────────────────────────────────────────

    #[test]
    fn merge_simple_override() {
        let target = serde_json::json!({"a": 1, "b": 2});
        let source = serde_json::json!({"a": 10});
        let merged = deep_merge(target, source);
        assert_eq!(merged["a"], 10);
        assert_eq!(merged["b"], 2);
    }

    #[test]
    fn merge_nested_override() {
        let target = serde_json::json!({
            "database": {"path": "gala.db"},
            "costSweep": {"organizerLastName": "Tounsi"}
        });
        let source = serde_json::json!({
            "database": {"path": "other.db"}
        });
        let merged = deep_merge(target, source);
        assert_eq!(merged["database"]["path"], "other.db");
        assert_eq!(merged["costSweep"]["organizerLastName"], "Tounsi");
    }

    #[test]
    fn merge_null_preserves_target() {
        let target = serde_json::json!({"a": 1, "b": 2});
        let source = serde_json::json!({"a": null});
        let merged = deep_merge(target, source);
        assert_eq!(merged["a"], 1);
        assert_eq!(merged["b"], 2);
    }

    #[test]
    fn merge_new_keys_added() {
        let target = serde_json::json!({"a": 1});
        let source = serde_json::json!({"b": 2});
        let merged = deep_merge(target, source);
        assert_eq!(merged["a"], 1);
        assert_eq!(merged["b"], 2);
    }

    #[test]
    fn merge_primitive_replaces_object() {
        let target = serde_json::json!({"a": {"nested": true}});
        let source = serde_json::json!({"a": 42});
        let merged = deep_merge(target, source);
        assert_eq!(merged["a"], 42);
    }

    // ── load_settings_from_path ─────────────────────────────────────

    #[test]
    fn load_missing_file_returns_defaults() {
        let path = Path::new("/nonexistent/gala.settings.json");
        let settings = load_settings_from_path(path).unwrap();
        assert_eq!(settings.database.path, "gala.db");
        assert_eq!(settings.cost_sweep.organizer_last_name, "Tounsi");
    }

    #[test]
    fn load_empty_json_returns_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gala.settings.json");
        std::fs::write(&path, "{}").unwrap();

        let settings = load_settings_from_path(&path).unwrap();
        assert_eq!(settings, GalaSettings::default());
    }

    #[test]
    fn load_partial_json_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gala.settings.json");
        std::fs::write(
            &path,
            r#"{"database": {"path": "events.db"}, "costSweep": {"organizerRole": "speaker"}}"#,
        )
        .unwrap();

        let settings = load_settings_from_path(&path).unwrap();
        assert_eq!(settings.database.path, "events.db");
        assert_eq!(settings.cost_sweep.organizer_role, Role::Speaker);
        assert_eq!(settings.cost_sweep.organizer_first_name, "Ahmed");
    }

    #[test]
    fn load_invalid_json_returns_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gala.settings.json");
        std::fs::write(&path, "not valid json").unwrap();

        let result = load_settings_from_path(&path);
        assert!(matches!(result.unwrap_err(), SettingsError::Parse(_)));
    }

    #[test]
    fn load_unknown_role_in_file_returns_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gala.settings.json");
        std::fs::write(&path, r#"{"costSweep": {"organizerRole": "chairman"}}"#).unwrap();

        let result = load_settings_from_path(&path);
        assert!(matches!(result.unwrap_err(), SettingsError::Parse(_)));
    }
}
