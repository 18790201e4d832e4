//! Context-activity graph.
//!
//! A tracked action can happen inside a container; the statement's context
//! then carries up to two auxiliary activities: `parent` (the container
//! itself) and `grouping` (the project the container belongs to). Only the
//! closed set of container kinds contributes entries — anything else yields
//! no context activities at all.
//!
//! Parent labels are keyed `"en"` while grouping labels use the grouped
//! object's resolved language. The asymmetry is inherited behavior that
//! downstream reporting depends on; keep it.

use xtrack_core::domain::{Container, RequestContext, TrackedObject};
use xtrack_core::errors::Result;
use xtrack_core::statement::{
    Activity, ActivityDefinition, ContextActivities, LanguageMap, LanguageTag,
};
use xtrack_core::vocabulary::Vocabulary;
use xtrack_settings::TrackSettings;

use crate::ident::IdentifierResolver;
use crate::labels;
use crate::locale::LocaleResolver;

/// Builds parent/grouping context entries for a target container.
pub struct ContextGraphBuilder<'a> {
    settings: &'a TrackSettings,
    vocabulary: &'a Vocabulary,
}

impl<'a> ContextGraphBuilder<'a> {
    /// Builder over the given configuration and vocabulary.
    #[must_use]
    pub fn new(settings: &'a TrackSettings, vocabulary: &'a Vocabulary) -> Self {
        Self { settings, vocabulary }
    }

    /// Build the context activities for `target`.
    ///
    /// Returns `None` (not an empty container) when the target kind
    /// contributes nothing, so the caller can omit the field entirely.
    /// Vocabulary misses fail here, before any network call.
    pub fn build(
        &self,
        target: &Container,
        request: Option<&RequestContext>,
    ) -> Result<Option<ContextActivities>> {
        let ident = IdentifierResolver::new(&self.settings.site);
        let locale = LocaleResolver::new(&self.settings.locale);

        match target {
            Container::Folder { item, project }
            | Container::Forum { item, project }
            | Container::LearningPath { item, project } => {
                // Parent labels are always English.
                let parent =
                    self.entry(target.type_name(), item, request, LanguageTag::en(), &ident)?;
                let grouping = match project {
                    Some(project) => {
                        Some(self.grouping_entry(project, request, &ident, &locale)?)
                    }
                    None => None,
                };
                Ok(Some(ContextActivities {
                    parent: Some(parent),
                    grouping,
                }))
            }
            Container::Project(item) => {
                let grouping = self.grouping_entry(item, request, &ident, &locale)?;
                Ok(Some(ContextActivities {
                    parent: None,
                    grouping: Some(grouping),
                }))
            }
            Container::Other(_) => Ok(None),
        }
    }

    /// Grouping entry for a project, labeled in the project's resolved
    /// language.
    fn grouping_entry(
        &self,
        project: &TrackedObject,
        request: Option<&RequestContext>,
        ident: &IdentifierResolver<'_>,
        locale: &LocaleResolver<'_>,
    ) -> Result<Activity> {
        let current = locale.current(request.and_then(|r| r.locale.as_ref()))?;
        let language = locale.for_object(project, &current);
        self.entry(&project.type_name, project, request, language, ident)
    }

    /// One context entry: resolved id, vocabulary type, single-language
    /// name label. Context entries carry no description.
    fn entry(
        &self,
        type_name: &str,
        object: &TrackedObject,
        request: Option<&RequestContext>,
        label_language: LanguageTag,
        ident: &IdentifierResolver<'_>,
    ) -> Result<Activity> {
        let activity_type = self.vocabulary.activity_type(type_name)?.clone();
        let id = ident.resolve(object, request)?;
        Ok(Activity::new(
            id,
            ActivityDefinition {
                name: LanguageMap::single(label_language, labels::name(object)),
                description: None,
                activity_type,
            },
        ))
    }
}
