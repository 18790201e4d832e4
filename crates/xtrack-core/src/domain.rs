//! Domain adaptation types.
//!
//! Application objects (ORM models, request objects) are adapted into these
//! shapes once, at the boundary, before any statement logic runs. The
//! pipeline itself never probes attributes or dispatches on class names:
//! capabilities that were optional attributes upstream are `Option` fields
//! here, and the container hierarchy is a closed enum with the owning
//! project already resolved.

use crate::statement::LanguageTag;

// ─────────────────────────────────────────────────────────────────────────────
// Tracked objects
// ─────────────────────────────────────────────────────────────────────────────

/// A domain object as the statement pipeline sees it.
///
/// `type_name` keys the activity-type vocabulary lookup. All other fields
/// are the optional capabilities the original objects may or may not carry;
/// the adapter fills in whatever its object exposes.
#[derive(Clone, Debug, PartialEq)]
pub struct TrackedObject {
    /// Domain type name ("Lesson", "Folder", "Project", …).
    pub type_name: String,
    /// Numeric primary key, when the object has one.
    pub numeric_id: Option<u64>,
    /// Display string (the upstream `__str__` text). Empty when unset.
    pub display: String,
    /// Long description text, when present.
    pub description: Option<String>,
    /// Short description text, when present.
    pub short: Option<String>,
    /// Language the content was authored in, when declared.
    pub original_language: Option<LanguageTag>,
    /// Canonical path or URL the object knows for itself
    /// (the `absolute_url` capability). May be site-relative or absolute.
    pub canonical_path: Option<String>,
}

impl TrackedObject {
    /// New object of the given domain type, all capabilities absent.
    #[must_use]
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            numeric_id: None,
            display: String::new(),
            description: None,
            short: None,
            original_language: None,
            canonical_path: None,
        }
    }

    /// Set the numeric primary key.
    #[must_use]
    pub fn with_id(mut self, id: u64) -> Self {
        self.numeric_id = Some(id);
        self
    }

    /// Set the display string.
    #[must_use]
    pub fn with_display(mut self, display: impl Into<String>) -> Self {
        self.display = display.into();
        self
    }

    /// Set the long description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the short description.
    #[must_use]
    pub fn with_short(mut self, short: impl Into<String>) -> Self {
        self.short = Some(short.into());
        self
    }

    /// Declare the authoring language.
    #[must_use]
    pub fn with_original_language(mut self, tag: impl Into<LanguageTag>) -> Self {
        self.original_language = Some(tag.into());
        self
    }

    /// Set the canonical path the object reports for itself.
    #[must_use]
    pub fn with_canonical_path(mut self, path: impl Into<String>) -> Self {
        self.canonical_path = Some(path.into());
        self
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Containers
// ─────────────────────────────────────────────────────────────────────────────

/// The container a tracked action happened inside, with its owning project
/// already resolved by the adapter.
///
/// Only the listed variants contribute context activities; anything else is
/// adapted as [`Container::Other`] and yields none.
#[derive(Clone, Debug, PartialEq)]
pub enum Container {
    /// A folder; `project` is the folder's owning project, when it has one.
    Folder {
        /// The folder itself.
        item: TrackedObject,
        /// Owning project, resolved at the boundary.
        project: Option<TrackedObject>,
    },
    /// A discussion forum; `project` resolved via the forum's own lookup.
    Forum {
        /// The forum itself.
        item: TrackedObject,
        /// Owning project, resolved at the boundary.
        project: Option<TrackedObject>,
    },
    /// A learning path with an optional direct project reference.
    LearningPath {
        /// The learning path itself.
        item: TrackedObject,
        /// Directly referenced project, when set.
        project: Option<TrackedObject>,
    },
    /// A project, referenced directly as grouping.
    Project(TrackedObject),
    /// Any other container type: contributes no context activities.
    Other(TrackedObject),
}

impl Container {
    /// The contained object regardless of variant.
    #[must_use]
    pub fn item(&self) -> &TrackedObject {
        match self {
            Self::Folder { item, .. }
            | Self::Forum { item, .. }
            | Self::LearningPath { item, .. } => item,
            Self::Project(item) | Self::Other(item) => item,
        }
    }

    /// The vocabulary type name for the container itself.
    ///
    /// For the closed variants this is the variant name, so dispatch and
    /// vocabulary key cannot drift apart; `Other` falls back to the adapted
    /// object's own type name.
    #[must_use]
    pub fn type_name(&self) -> &str {
        match self {
            Self::Folder { .. } => "Folder",
            Self::Forum { .. } => "Forum",
            Self::LearningPath { .. } => "LearningPath",
            Self::Project(_) => "Project",
            Self::Other(item) => &item.type_name,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Users and requests
// ─────────────────────────────────────────────────────────────────────────────

/// The acting user, reduced to what the actor needs.
#[derive(Clone, Debug, PartialEq)]
pub struct UserRef {
    /// Display name.
    pub display_name: String,
    /// Email address. Not validated — mailbox identity is taken as-is.
    pub email: String,
}

impl UserRef {
    /// Build a user reference.
    #[must_use]
    pub fn new(display_name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            email: email.into(),
        }
    }
}

/// Per-request context: the scheme/host to absolutize paths against, plus
/// the session locale the request carries.
#[derive(Clone, Debug, PartialEq)]
pub struct RequestContext {
    /// Request scheme ("https").
    pub scheme: String,
    /// Request host, port included when non-default.
    pub host: String,
    /// Locale of the current session, when known.
    pub locale: Option<LanguageTag>,
}

impl RequestContext {
    /// Build a request context for a scheme/host pair.
    #[must_use]
    pub fn new(scheme: impl Into<String>, host: impl Into<String>) -> Self {
        Self {
            scheme: scheme.into(),
            host: host.into(),
            locale: None,
        }
    }

    /// Attach the session locale.
    #[must_use]
    pub fn with_locale(mut self, tag: impl Into<LanguageTag>) -> Self {
        self.locale = Some(tag.into());
        self
    }

    /// Resolve a site-relative path against this request's scheme and host.
    #[must_use]
    pub fn absolutize(&self, path: &str) -> String {
        format!("{}://{}{}", self.scheme, self.host, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_object_has_no_capabilities() {
        let object = TrackedObject::new("Lesson");
        assert_eq!(object.type_name, "Lesson");
        assert!(object.numeric_id.is_none());
        assert!(object.canonical_path.is_none());
        assert!(object.display.is_empty());
    }

    #[test]
    fn builder_fills_capabilities() {
        let object = TrackedObject::new("Lesson")
            .with_id(42)
            .with_display("Intro lesson")
            .with_short("intro")
            .with_original_language("it");
        assert_eq!(object.numeric_id, Some(42));
        assert_eq!(object.short.as_deref(), Some("intro"));
        assert_eq!(object.original_language, Some("it".into()));
    }

    #[test]
    fn container_type_name_follows_variant() {
        let folder = Container::Folder {
            item: TrackedObject::new("Folder"),
            project: None,
        };
        assert_eq!(folder.type_name(), "Folder");

        let other = Container::Other(TrackedObject::new("Comment"));
        assert_eq!(other.type_name(), "Comment");
    }

    #[test]
    fn request_absolutize_joins_scheme_host_path() {
        let request = RequestContext::new("https", "staging.commonspaces.eu");
        assert_eq!(
            request.absolutize("/Lesson/42/"),
            "https://staging.commonspaces.eu/Lesson/42/"
        );
    }
}
