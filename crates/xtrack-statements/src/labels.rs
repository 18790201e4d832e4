//! Display labels for tracked objects.
//!
//! Best-effort text extraction: the display string as the name, and the
//! long description preferred over the short one. Empty strings count as
//! absent so the assembler never emits an empty language map entry.

use xtrack_core::domain::TrackedObject;

/// The object's display name. Empty when the adapter had nothing.
#[must_use]
pub fn name(object: &TrackedObject) -> &str {
    &object.display
}

/// The object's description text: `description` preferred, `short` as the
/// fallback, `None` when neither carries text.
#[must_use]
pub fn description(object: &TrackedObject) -> Option<&str> {
    non_empty(object.description.as_deref()).or_else(|| non_empty(object.short.as_deref()))
}

fn non_empty(text: Option<&str>) -> Option<&str> {
    text.filter(|t| !t.is_empty())
}
