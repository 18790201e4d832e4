//! Statement wire types.
//!
//! The xAPI shapes a statement is serialized into: actor, verb, object
//! activity, and context. Field names follow the xAPI JSON convention
//! (`objectType`, `contextActivities`, `definition.type`), so serializing a
//! [`Statement`] with `serde_json` yields the exact payload the LRS accepts.
//!
//! A statement is an immutable value: assembled once, submitted once,
//! discarded after the call returns.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::iri::Iri;

// ─────────────────────────────────────────────────────────────────────────────
// Language tags and maps
// ─────────────────────────────────────────────────────────────────────────────

/// A language code as the deployment uses them ("en", "en-us", "it").
///
/// Normalized to lowercase on construction so lookups against the supported
/// set never miss on case. Deserialization goes through [`LanguageTag::new`],
/// so the invariant also holds for tags read from the wire.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct LanguageTag(String);

impl<'de> Deserialize<'de> for LanguageTag {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        String::deserialize(deserializer).map(Self::new)
    }
}

impl LanguageTag {
    /// Create a tag, lowercasing the input.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into().to_ascii_lowercase())
    }

    /// The tag as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The base subtag: "en" for "en-us", unchanged for a bare tag.
    #[must_use]
    pub fn base(&self) -> Self {
        match self.0.split_once('-') {
            Some((base, _)) => Self(base.to_string()),
            None => self.clone(),
        }
    }

    /// The fixed "en" tag used for parent context-activity labels.
    #[must_use]
    pub fn en() -> Self {
        Self("en".to_string())
    }
}

impl From<&str> for LanguageTag {
    fn from(tag: &str) -> Self {
        Self::new(tag)
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Mapping from language tag to display text.
///
/// Serializes as a JSON object (`{"en": "completed"}`). Most maps in this
/// pipeline hold exactly one entry — the resolved language of the object.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageMap(BTreeMap<LanguageTag, String>);

impl LanguageMap {
    /// Empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Map holding a single entry.
    #[must_use]
    pub fn single(tag: LanguageTag, text: impl Into<String>) -> Self {
        let mut map = BTreeMap::new();
        let _ = map.insert(tag, text.into());
        Self(map)
    }

    /// Insert an entry, replacing any previous text for the tag.
    pub fn insert(&mut self, tag: LanguageTag, text: impl Into<String>) {
        let _ = self.0.insert(tag, text.into());
    }

    /// Look up the text for a tag.
    #[must_use]
    pub fn get(&self, tag: &LanguageTag) -> Option<&str> {
        self.0.get(tag).map(String::as_str)
    }

    /// Whether the map has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(LanguageTag, String)> for LanguageMap {
    fn from_iter<I: IntoIterator<Item = (LanguageTag, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Actor
// ─────────────────────────────────────────────────────────────────────────────

fn agent_object_type() -> String {
    "Agent".to_string()
}

/// The actor of a statement.
///
/// Exactly one inverse functional identifier is present — the [`ActorId`]
/// enum makes mbox and account mutually exclusive, which the xAPI spec
/// requires. Only the mbox form is produced by the assembler.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    /// Always `"Agent"`.
    #[serde(rename = "objectType", default = "agent_object_type")]
    pub object_type: String,
    /// Display name of the user.
    pub name: String,
    /// The single identifying method.
    #[serde(flatten)]
    pub id: ActorId,
}

/// Inverse functional identifier of an actor.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ActorId {
    /// `mailto:` mailbox identity.
    Mbox {
        /// The mailbox URI, `mailto:` scheme included.
        mbox: String,
    },
    /// Account on some system identified by a home page.
    Account {
        /// The account reference.
        account: AgentAccount,
    },
}

/// An account-based actor identity.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentAccount {
    /// Account name on the home-page system.
    pub name: String,
    /// The system the account lives on.
    pub home_page: Iri,
}

impl Actor {
    /// Actor identified by a `mailto:` mailbox built from an email address.
    ///
    /// The email is not validated — format checking is deliberately out of
    /// scope here.
    #[must_use]
    pub fn from_mbox(name: impl Into<String>, email: &str) -> Self {
        Self {
            object_type: agent_object_type(),
            name: name.into(),
            id: ActorId::Mbox {
                mbox: format!("mailto:{email}"),
            },
        }
    }

    /// Actor identified by an account on an external system.
    #[must_use]
    pub fn from_account(name: impl Into<String>, account: AgentAccount) -> Self {
        Self {
            object_type: agent_object_type(),
            name: name.into(),
            id: ActorId::Account { account },
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Verb and activities
// ─────────────────────────────────────────────────────────────────────────────

/// The verb of a statement, resolved from the vocabulary.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Verb {
    /// Canonical verb IRI.
    pub id: Iri,
    /// Human-readable labels per language.
    pub display: LanguageMap,
}

/// Definition of an activity: labels plus its canonical type IRI.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActivityDefinition {
    /// Display name, keyed by the resolved language of the object.
    pub name: LanguageMap,
    /// Optional description text; omitted entirely when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<LanguageMap>,
    /// Activity-type IRI from the vocabulary.
    #[serde(rename = "type")]
    pub activity_type: Iri,
}

fn activity_object_type() -> String {
    "Activity".to_string()
}

/// An activity referenced by a statement — the object itself or a
/// parent/grouping context entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    /// Always `"Activity"`.
    #[serde(rename = "objectType", default = "activity_object_type")]
    pub object_type: String,
    /// Stable, dereferenceable identifier of the domain object.
    pub id: Iri,
    /// Type and labels.
    pub definition: ActivityDefinition,
}

impl Activity {
    /// Build an activity from its id and definition.
    #[must_use]
    pub fn new(id: Iri, definition: ActivityDefinition) -> Self {
        Self {
            object_type: activity_object_type(),
            id,
            definition,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Context
// ─────────────────────────────────────────────────────────────────────────────

/// Parent and grouping context entries.
///
/// Never serialized when both are absent — the context carries
/// `Option<ContextActivities>` and the assembler omits the empty container.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ContextActivities {
    /// The direct container of the object (folder, forum, learning path).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<Activity>,
    /// The project the container belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grouping: Option<Activity>,
}

impl ContextActivities {
    /// Whether neither entry is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parent.is_none() && self.grouping.is_none()
    }
}

/// Context of a statement: platform, session language, and the optional
/// container graph.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Context {
    /// Configured platform identifier.
    pub platform: String,
    /// The current session locale.
    pub language: LanguageTag,
    /// Parent/grouping entries, present only when the target yields any.
    #[serde(rename = "contextActivities", skip_serializing_if = "Option::is_none")]
    pub context_activities: Option<ContextActivities>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Statement
// ─────────────────────────────────────────────────────────────────────────────

/// A complete statement, ready to submit.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Statement {
    /// Who did it.
    pub actor: Actor,
    /// What they did.
    pub verb: Verb,
    /// What they did it to.
    pub object: Activity,
    /// Where and in which language.
    pub context: Context,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn lesson_activity() -> Activity {
        Activity::new(
            Iri::parse("https://www.commonspaces.eu/Lesson/42/").unwrap(),
            ActivityDefinition {
                name: LanguageMap::single("en".into(), "Intro lesson"),
                description: None,
                activity_type: Iri::parse("http://adlnet.gov/expapi/activities/lesson").unwrap(),
            },
        )
    }

    // ── LanguageTag ─────────────────────────────────────────────────────

    #[test]
    fn tag_lowercases_on_construction() {
        assert_eq!(LanguageTag::new("EN-US").as_str(), "en-us");
    }

    #[test]
    fn tag_base_strips_region() {
        assert_eq!(LanguageTag::new("en-us").base().as_str(), "en");
    }

    #[test]
    fn tag_base_of_bare_tag_is_identity() {
        let tag = LanguageTag::new("it");
        assert_eq!(tag.base(), tag);
    }

    #[test]
    fn tag_lowercases_on_deserialization() {
        let tag: LanguageTag = serde_json::from_value(json!("EN-US")).unwrap();
        assert_eq!(tag, LanguageTag::new("en-us"));
    }

    #[test]
    fn map_keys_are_normalized_on_deserialization() {
        let map: LanguageMap = serde_json::from_value(json!({"IT": "completato"})).unwrap();
        assert_eq!(map.get(&"it".into()), Some("completato"));
    }

    // ── LanguageMap ─────────────────────────────────────────────────────

    #[test]
    fn single_map_serializes_as_object() {
        let map = LanguageMap::single("it".into(), "completato");
        assert_eq!(serde_json::to_value(&map).unwrap(), json!({"it": "completato"}));
    }

    #[test]
    fn map_get_after_insert() {
        let mut map = LanguageMap::new();
        map.insert("en".into(), "completed");
        assert_eq!(map.get(&"en".into()), Some("completed"));
        assert_eq!(map.get(&"it".into()), None);
    }

    // ── Actor ───────────────────────────────────────────────────────────

    #[test]
    fn mbox_actor_wire_shape() {
        let actor = Actor::from_mbox("Ada Lovelace", "ada@example.org");
        let value = serde_json::to_value(&actor).unwrap();
        assert_eq!(
            value,
            json!({
                "objectType": "Agent",
                "name": "Ada Lovelace",
                "mbox": "mailto:ada@example.org"
            })
        );
    }

    #[test]
    fn account_actor_wire_shape() {
        let actor = Actor::from_account(
            "Ada Lovelace",
            AgentAccount {
                name: "1729".into(),
                home_page: Iri::parse("https://www.commonspaces.eu").unwrap(),
            },
        );
        let value = serde_json::to_value(&actor).unwrap();
        assert_eq!(value["account"]["name"], "1729");
        assert_eq!(value["account"]["homePage"], "https://www.commonspaces.eu/");
        assert!(value.get("mbox").is_none(), "mbox and account are exclusive");
    }

    #[test]
    fn actor_email_is_not_validated() {
        let actor = Actor::from_mbox("n", "not-an-email");
        let value = serde_json::to_value(&actor).unwrap();
        assert_eq!(value["mbox"], "mailto:not-an-email");
    }

    // ── Activity / definition ───────────────────────────────────────────

    #[test]
    fn definition_type_field_is_renamed() {
        let value = serde_json::to_value(lesson_activity()).unwrap();
        assert_eq!(value["definition"]["type"], "http://adlnet.gov/expapi/activities/lesson");
        assert_eq!(value["objectType"], "Activity");
    }

    #[test]
    fn definition_omits_absent_description() {
        let value = serde_json::to_value(lesson_activity()).unwrap();
        assert!(value["definition"].get("description").is_none());
    }

    // ── Context ─────────────────────────────────────────────────────────

    #[test]
    fn context_omits_absent_context_activities() {
        let context = Context {
            platform: "CommonSpaces".into(),
            language: "en".into(),
            context_activities: None,
        };
        let value = serde_json::to_value(&context).unwrap();
        assert!(value.get("contextActivities").is_none());
    }

    #[test]
    fn context_activities_empty_check() {
        assert!(ContextActivities::default().is_empty());
        let with_parent = ContextActivities {
            parent: Some(lesson_activity()),
            grouping: None,
        };
        assert!(!with_parent.is_empty());
    }

    #[test]
    fn statement_round_trips() {
        let statement = Statement {
            actor: Actor::from_mbox("Ada", "ada@example.org"),
            verb: Verb {
                id: Iri::parse("http://adlnet.gov/expapi/verbs/completed").unwrap(),
                display: LanguageMap::single("en".into(), "completed"),
            },
            object: lesson_activity(),
            context: Context {
                platform: "CommonSpaces".into(),
                language: "en".into(),
                context_activities: None,
            },
        };
        let json = serde_json::to_string(&statement).unwrap();
        let back: Statement = serde_json::from_str(&json).unwrap();
        assert_eq!(back, statement);
    }
}
