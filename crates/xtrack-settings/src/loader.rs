//! Settings loading: JSON file deep-merged over compiled defaults, then
//! `XTRACK_*` environment overrides on top.

use std::path::Path;

use serde_json::Value;

use crate::errors::Result;
use crate::types::TrackSettings;

/// Load settings from a JSON file.
///
/// The file may be partial: it is deep-merged over the compiled defaults,
/// then environment overrides are applied. Returns an error if the file
/// cannot be read or parsed — the caller decides whether to fall back to
/// defaults.
pub fn load_settings_from_path(path: &Path) -> Result<TrackSettings> {
    let raw = std::fs::read_to_string(path)?;
    let file_value: Value = serde_json::from_str(&raw)?;
    let defaults = serde_json::to_value(TrackSettings::default())?;
    let merged = deep_merge(defaults, file_value);
    let mut settings: TrackSettings = serde_json::from_value(merged)?;
    apply_env_overrides(&mut settings);
    tracing::debug!(?path, "settings loaded");
    Ok(settings)
}

/// Recursively merge `overlay` into `base`.
///
/// Objects merge key-by-key; any other value in the overlay replaces the
/// base value wholesale.
#[must_use]
pub fn deep_merge(base: Value, overlay: Value) -> Value {
    match (base, overlay) {
        (Value::Object(mut base_map), Value::Object(overlay_map)) => {
            for (key, overlay_value) in overlay_map {
                let merged = match base_map.remove(&key) {
                    Some(base_value) => deep_merge(base_value, overlay_value),
                    None => overlay_value,
                };
                let _ = base_map.insert(key, merged);
            }
            Value::Object(base_map)
        }
        (_, overlay) => overlay,
    }
}

/// Apply `XTRACK_*` environment variable overrides.
pub fn apply_env_overrides(settings: &mut TrackSettings) {
    apply_overrides_from(settings, |name| std::env::var(name).ok());
}

/// Override application with an injectable variable source, so tests do not
/// have to mutate process-global env state.
pub fn apply_overrides_from<F>(settings: &mut TrackSettings, get: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(endpoint) = get("XTRACK_LRS_ENDPOINT") {
        settings.lrs.endpoint = endpoint;
    }
    if let Some(username) = get("XTRACK_LRS_USERNAME") {
        settings.lrs.username = username;
    }
    if let Some(password) = get("XTRACK_LRS_PASSWORD") {
        settings.lrs.password = password;
    }
    if let Some(version) = get("XTRACK_LRS_VERSION") {
        settings.lrs.version = version;
    }
    if let Some(host) = get("XTRACK_HOST") {
        settings.site.host = host;
    }
    if let Some(platform) = get("XTRACK_PLATFORM") {
        settings.site.platform = platform;
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deep_merge_combines_disjoint_keys() {
        let merged = deep_merge(json!({"x": 1}), json!({"y": 2}));
        assert_eq!(merged["x"], 1);
        assert_eq!(merged["y"], 2);
    }

    #[test]
    fn deep_merge_overlay_wins_on_conflict() {
        let merged = deep_merge(json!({"x": 1}), json!({"x": 9}));
        assert_eq!(merged["x"], 9);
    }

    #[test]
    fn deep_merge_recurses_into_objects() {
        let merged = deep_merge(
            json!({"site": {"host": "a", "platform": "p"}}),
            json!({"site": {"host": "b"}}),
        );
        assert_eq!(merged["site"]["host"], "b");
        assert_eq!(merged["site"]["platform"], "p");
    }

    #[test]
    fn deep_merge_non_object_overlay_replaces() {
        let merged = deep_merge(json!({"supported": ["en", "it"]}), json!({"supported": ["el"]}));
        assert_eq!(merged["supported"], json!(["el"]));
    }

    #[test]
    fn load_from_partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("xtrack.json");
        std::fs::write(&path, r#"{"lrs": {"endpoint": "https://lrs.example.org/xAPI"}}"#)
            .unwrap();

        let settings = load_settings_from_path(&path).unwrap();
        assert_eq!(settings.lrs.endpoint, "https://lrs.example.org/xAPI");
        assert_eq!(settings.lrs.version, "1.0.1");
        assert_eq!(settings.site.host, "www.commonspaces.eu");
    }

    #[test]
    fn load_from_missing_file_is_an_error() {
        let result = load_settings_from_path(Path::new("/nonexistent/xtrack.json"));
        assert!(matches!(result, Err(crate::errors::SettingsError::Io(_))));
    }

    #[test]
    fn load_from_invalid_json_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("xtrack.json");
        std::fs::write(&path, "{not json").unwrap();
        let result = load_settings_from_path(&path);
        assert!(matches!(result, Err(crate::errors::SettingsError::Parse(_))));
    }

    #[test]
    fn env_overrides_apply_in_place() {
        let mut settings = TrackSettings::default();
        apply_overrides_from(&mut settings, |name| match name {
            "XTRACK_LRS_ENDPOINT" => Some("https://lrs.example.org/xAPI".to_string()),
            "XTRACK_LRS_USERNAME" => Some("client".to_string()),
            "XTRACK_HOST" => Some("staging.commonspaces.eu".to_string()),
            _ => None,
        });
        assert_eq!(settings.lrs.endpoint, "https://lrs.example.org/xAPI");
        assert_eq!(settings.lrs.username, "client");
        assert_eq!(settings.site.host, "staging.commonspaces.eu");
        // Untouched values stay at their defaults
        assert_eq!(settings.lrs.version, "1.0.1");
    }

    #[test]
    fn env_overrides_absent_vars_change_nothing() {
        let mut settings = TrackSettings::default();
        let before = settings.clone();
        apply_overrides_from(&mut settings, |_| None);
        assert_eq!(settings, before);
    }
}
