//! Locale resolution.
//!
//! Two concerns: which language the current session is in, and which
//! language an individual object should be labeled in. The session locale
//! falls back exact tag → base subtag → configured default (by the same
//! two steps). An object authored in another language keeps its authoring
//! language for labels even when the viewer's session differs.

use xtrack_core::domain::TrackedObject;
use xtrack_core::errors::{Result, TrackError};
use xtrack_core::statement::LanguageTag;
use xtrack_settings::LocaleSettings;

/// Resolves session and per-object locales against the configured
/// supported set.
pub struct LocaleResolver<'a> {
    settings: &'a LocaleSettings,
}

impl<'a> LocaleResolver<'a> {
    /// Resolver over the given locale configuration.
    #[must_use]
    pub fn new(settings: &'a LocaleSettings) -> Self {
        Self { settings }
    }

    /// Resolve the current session locale.
    ///
    /// `requested` is the locale the request carries, when any. Fallback
    /// chain: exact match in the supported set → base subtag ("en" for
    /// "en-us") → the configured default, itself resolved by the same two
    /// steps. An unresolvable default is a configuration defect, reported
    /// as [`TrackError::Configuration`]; startup validation should have
    /// caught it already.
    pub fn current(&self, requested: Option<&LanguageTag>) -> Result<LanguageTag> {
        if let Some(tag) = requested {
            if let Some(found) = self.lookup(tag) {
                return Ok(found);
            }
        }
        let default = LanguageTag::new(&self.settings.default);
        self.lookup(&default).ok_or_else(|| {
            TrackError::Configuration(format!(
                "default locale {:?} is not in the supported set",
                self.settings.default
            ))
        })
    }

    /// The language an object's labels should use: the declared authoring
    /// language when present, the current session locale otherwise.
    #[must_use]
    pub fn for_object(&self, object: &TrackedObject, current: &LanguageTag) -> LanguageTag {
        match &object.original_language {
            Some(original) => original.clone(),
            None => current.clone(),
        }
    }

    /// Exact-then-base lookup in the supported set. Returns the supported
    /// entry (normalized) rather than the probe, so callers always end up
    /// with a tag from the configured set.
    fn lookup(&self, tag: &LanguageTag) -> Option<LanguageTag> {
        let exact = self
            .settings
            .supported
            .iter()
            .map(|entry| LanguageTag::new(entry))
            .find(|entry| entry == tag);
        if exact.is_some() {
            return exact;
        }
        let base = tag.base();
        self.settings
            .supported
            .iter()
            .map(|entry| LanguageTag::new(entry))
            .find(|entry| *entry == base)
    }
}
