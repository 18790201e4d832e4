//! Stable object identifiers.
//!
//! Every tracked object gets a globally dereferenceable IRI: its own
//! canonical path when it reports one, a synthesized `/{Type}/{id}/` path
//! otherwise, absolutized against the current request's scheme/host (so
//! staging and multi-tenant hosts produce their own identifiers) or against
//! the configured site when no request is at hand.

use tracing::debug;
use xtrack_core::domain::{RequestContext, TrackedObject};
use xtrack_core::errors::{Result, TrackError};
use xtrack_core::iri::Iri;
use xtrack_settings::SiteSettings;

/// Hostname of the retired deployment whose identifiers must keep
/// resolving. A single literal-to-literal substitution, exact host match
/// only — never a general rewrite.
const LEGACY_HOST: &str = "cs.up2university.eu";

/// Canonical replacement for [`LEGACY_HOST`].
const CANONICAL_HOST: &str = "www.commonspaces.eu";

/// Derives activity IRIs for tracked objects.
pub struct IdentifierResolver<'a> {
    site: &'a SiteSettings,
}

impl<'a> IdentifierResolver<'a> {
    /// Resolver over the configured site identity.
    #[must_use]
    pub fn new(site: &'a SiteSettings) -> Self {
        Self { site }
    }

    /// Resolve the IRI identifying `object`.
    ///
    /// Idempotent: the same object and request always yield the identical
    /// IRI. Fails with [`TrackError::Resolution`] when the object has
    /// neither a canonical path nor a numeric id, or when no request is
    /// given and no host is configured.
    pub fn resolve(&self, object: &TrackedObject, request: Option<&RequestContext>) -> Result<Iri> {
        let location = match &object.canonical_path {
            Some(path) => path.clone(),
            None => {
                let id = object.numeric_id.ok_or_else(|| {
                    TrackError::Resolution(format!(
                        "object of type {:?} has neither a canonical path nor a numeric id",
                        object.type_name
                    ))
                })?;
                format!("/{}/{id}/", object.type_name)
            }
        };

        let absolute = if location.starts_with("http://") || location.starts_with("https://") {
            location
        } else if let Some(request) = request {
            request.absolutize(&location)
        } else if !self.site.host.is_empty() {
            format!("{}://{}{}", self.site.protocol, self.site.host, location)
        } else {
            return Err(TrackError::Resolution(format!(
                "cannot absolutize {location:?}: no request context and no configured host"
            )));
        };

        let mut iri = Iri::parse(&absolute)?;
        if iri.host_str() == Some(LEGACY_HOST) {
            debug!(original = %iri, "rewriting legacy deployment host");
            iri.set_host(CANONICAL_HOST)?;
        }
        Ok(iri)
    }
}
