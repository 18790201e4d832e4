//! # xtrack-settings
//!
//! Configuration for the xtrack statement pipeline.
//!
//! Settings are loaded from up to three layers (in priority order):
//! 1. **Compiled defaults** — [`TrackSettings::default()`]
//! 2. **JSON file** — deep-merged over defaults, may be partial
//! 3. **Environment variables** — `XTRACK_*` overrides (highest priority)
//!
//! There is deliberately no global settings singleton: the pipeline takes
//! its configuration as an explicit value, constructed once at process
//! start and passed by reference into the resolvers. Call
//! [`TrackSettings::validate`] at startup so configuration defects fail
//! fast instead of surfacing per request.
//!
//! # Usage
//!
//! ```no_run
//! use xtrack_settings::{load_settings_from_path, TrackSettings};
//!
//! let settings = load_settings_from_path("/etc/xtrack.json".as_ref())
//!     .unwrap_or_else(|_| TrackSettings::default());
//! settings.validate().expect("unusable configuration");
//! ```

#![deny(unsafe_code)]

pub mod errors;
pub mod loader;
pub mod types;

pub use errors::{Result, SettingsError};
pub use loader::{apply_env_overrides, deep_merge, load_settings_from_path};
pub use types::{LocaleSettings, LrsSettings, SiteSettings, TrackSettings};
