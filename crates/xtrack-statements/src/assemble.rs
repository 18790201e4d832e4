//! Statement assembly.
//!
//! Composes actor, verb, object activity, and context into one statement.
//! Pure — all lookups and resolution happen here, no network I/O. Anything
//! that can fail (vocabulary misses, unresolvable locales or identifiers)
//! fails before the caller ever touches the transport.

use tracing::debug;
use xtrack_core::domain::{Container, RequestContext, TrackedObject, UserRef};
use xtrack_core::errors::Result;
use xtrack_core::statement::{
    Activity, ActivityDefinition, Actor, Context, LanguageMap, Statement, Verb,
};
use xtrack_core::vocabulary::Vocabulary;
use xtrack_settings::TrackSettings;

use crate::context::ContextGraphBuilder;
use crate::ident::IdentifierResolver;
use crate::labels;
use crate::locale::LocaleResolver;

/// Assembles statements from adapted domain events.
///
/// Construct once per process (settings and vocabulary are borrowed) and
/// reuse across calls; each call builds a fresh statement.
pub struct StatementBuilder<'a> {
    settings: &'a TrackSettings,
    vocabulary: &'a Vocabulary,
}

impl<'a> StatementBuilder<'a> {
    /// Builder over the given configuration and vocabulary.
    #[must_use]
    pub fn new(settings: &'a TrackSettings, vocabulary: &'a Vocabulary) -> Self {
        Self { settings, vocabulary }
    }

    /// Assemble the statement for `user` performing `verb_key` on `object`,
    /// optionally inside `target`.
    pub fn assemble(
        &self,
        request: Option<&RequestContext>,
        user: &UserRef,
        verb_key: &str,
        object: &TrackedObject,
        target: Option<&Container>,
    ) -> Result<Statement> {
        let verb_entry = self.vocabulary.verb(verb_key)?;
        let activity_type = self.vocabulary.activity_type(&object.type_name)?.clone();

        let locale = LocaleResolver::new(&self.settings.locale);
        let current = locale.current(request.and_then(|r| r.locale.as_ref()))?;

        let ident = IdentifierResolver::new(&self.settings.site);
        let id = ident.resolve(object, request)?;

        let object_language = locale.for_object(object, &current);
        let name = LanguageMap::single(object_language.clone(), labels::name(object));
        let description = labels::description(object)
            .map(|text| LanguageMap::single(object_language.clone(), text));

        let object_activity = Activity::new(
            id,
            ActivityDefinition {
                name,
                description,
                activity_type,
            },
        );

        let context_activities = match target {
            Some(container) => {
                ContextGraphBuilder::new(self.settings, self.vocabulary).build(container, request)?
            }
            None => None,
        };

        let statement = Statement {
            actor: Actor::from_mbox(&user.display_name, &user.email),
            verb: Verb {
                id: verb_entry.id.clone(),
                display: verb_entry.display.clone(),
            },
            object: object_activity,
            context: Context {
                platform: self.settings.site.platform.clone(),
                language: current,
                context_activities,
            },
        };

        debug!(
            verb = verb_key,
            object = %statement.object.id,
            has_context_activities = statement.context.context_activities.is_some(),
            "statement assembled"
        );
        Ok(statement)
    }
}
