//! Static verb and activity-type vocabulary.
//!
//! Two lookup tables keyed by application-level concepts: a verb key
//! ("completed", "bookmarked") maps to its canonical IRI plus display
//! labels, and a domain type name ("Lesson", "Folder") maps to an
//! activity-type IRI.
//!
//! Both tables must be fully populated before any statement referencing a
//! key is assembled: a miss is a typed failure surfaced immediately, never
//! a silent default. Lookups happen before any network call.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::errors::{Result, TrackError};
use crate::iri::Iri;
use crate::statement::LanguageMap;

/// A verb's canonical IRI and display labels.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VerbEntry {
    /// Canonical verb IRI.
    pub id: Iri,
    /// Labels per language.
    pub display: LanguageMap,
}

/// Verb and activity-type lookup tables.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vocabulary {
    verbs: HashMap<String, VerbEntry>,
    activity_types: HashMap<String, Iri>,
}

impl Vocabulary {
    /// Empty vocabulary. Useful when the deployment supplies its own tables.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a verb under its application-level key.
    pub fn insert_verb(&mut self, key: impl Into<String>, entry: VerbEntry) {
        let _ = self.verbs.insert(key.into(), entry);
    }

    /// Register an activity-type IRI under a domain type name.
    pub fn insert_activity_type(&mut self, type_name: impl Into<String>, iri: Iri) {
        let _ = self.activity_types.insert(type_name.into(), iri);
    }

    /// Look up a verb by key.
    pub fn verb(&self, key: &str) -> Result<&VerbEntry> {
        self.verbs
            .get(key)
            .ok_or_else(|| TrackError::UnknownVerb(key.to_string()))
    }

    /// Look up the activity-type IRI for a domain type name.
    pub fn activity_type(&self, type_name: &str) -> Result<&Iri> {
        self.activity_types
            .get(type_name)
            .ok_or_else(|| TrackError::UnknownActivityType(type_name.to_string()))
    }

    /// The vocabulary the CommonSpaces deployment ships with.
    ///
    /// Verb IRIs come from the ADL, `activitystrea.ms`, and `tincanapi.com`
    /// registries; activity types cover the domain object and container
    /// types the platform tracks.
    #[must_use]
    pub fn builtin() -> Self {
        let mut vocabulary = Self::new();

        for (key, id, en, it) in [
            ("accessed", "http://activitystrea.ms/schema/1.0/access", "accessed", "ha acceduto a"),
            ("viewed", "http://id.tincanapi.com/verb/viewed", "viewed", "ha visualizzato"),
            ("played", "https://w3id.org/xapi/video/verbs/played", "played", "ha riprodotto"),
            ("created", "http://activitystrea.ms/schema/1.0/create", "created", "ha creato"),
            ("modified", "http://activitystrea.ms/schema/1.0/update", "modified", "ha modificato"),
            ("edited", "http://curatr3.com/define/verb/edited", "edited", "ha editato"),
            ("deleted", "http://activitystrea.ms/schema/1.0/delete", "deleted", "ha cancellato"),
            ("bookmarked", "http://id.tincanapi.com/verb/bookmarked", "bookmarked", "ha messo un segnalibro a"),
            ("rated", "http://id.tincanapi.com/verb/rated", "rated", "ha valutato"),
            ("commented", "http://adlnet.gov/expapi/verbs/commented", "commented", "ha commentato"),
            ("searched", "http://activitystrea.ms/schema/1.0/search", "searched", "ha cercato"),
            ("sent", "http://activitystrea.ms/schema/1.0/send", "sent", "ha inviato"),
            ("joined", "http://activitystrea.ms/schema/1.0/join", "joined", "si è unito a"),
            ("completed", "http://adlnet.gov/expapi/verbs/completed", "completed", "ha completato"),
            ("submitted", "http://activitystrea.ms/schema/1.0/submit", "submitted", "ha sottomesso"),
            ("accepted", "http://activitystrea.ms/schema/1.0/accept", "accepted", "ha accettato"),
            ("rejected", "http://activitystrea.ms/schema/1.0/reject", "rejected", "ha rifiutato"),
        ] {
            let mut display = LanguageMap::single("en".into(), en);
            display.insert("it".into(), it);
            vocabulary.insert_verb(key, VerbEntry { id: builtin_iri(id), display });
        }

        for (type_name, iri) in [
            ("Project", "http://activitystrea.ms/schema/1.0/group"),
            ("Folder", "http://activitystrea.ms/schema/1.0/collection"),
            ("Forum", "http://id.tincanapi.com/activitytype/discussion"),
            ("LearningPath", "http://adlnet.gov/expapi/activities/course"),
            ("PathNode", "http://adlnet.gov/expapi/activities/module"),
            ("Lesson", "http://adlnet.gov/expapi/activities/lesson"),
            ("LessonPlan", "http://adlnet.gov/expapi/activities/lesson"),
            ("OER", "http://id.tincanapi.com/activitytype/resource"),
            ("SharedOer", "http://id.tincanapi.com/activitytype/resource"),
            ("Document", "http://id.tincanapi.com/activitytype/document"),
            ("Topic", "http://id.tincanapi.com/activitytype/forum-topic"),
            ("Message", "http://id.tincanapi.com/activitytype/forum-reply"),
            ("Room", "http://id.tincanapi.com/activitytype/chat-channel"),
            ("WebPage", "http://activitystrea.ms/schema/1.0/page"),
        ] {
            vocabulary.insert_activity_type(type_name, builtin_iri(iri));
        }

        vocabulary
    }
}

/// Parse a builtin table literal. The literals are fixed and valid.
fn builtin_iri(literal: &str) -> Iri {
    Iri::parse(literal).expect("builtin vocabulary IRI literals are valid")
}
