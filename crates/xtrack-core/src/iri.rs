//! Branded identifier types.
//!
//! - [`Iri`]: a syntactically valid absolute IRI. Every activity id in a
//!   statement is an `Iri`, so the validity invariant holds by construction.
//! - [`StatementId`]: the UUID the LRS assigns to a saved statement.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use url::Url;
use uuid::Uuid;

use crate::errors::{Result, TrackError};

/// A validated absolute IRI.
///
/// Construction goes through [`Iri::parse`], which rejects relative
/// references and syntactically invalid input. Serializes as a plain string.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Iri(Url);

impl Iri {
    /// Parse an absolute IRI from a string.
    pub fn parse(input: &str) -> Result<Self> {
        let url = Url::parse(input)
            .map_err(|e| TrackError::Resolution(format!("invalid IRI {input:?}: {e}")))?;
        Ok(Self(url))
    }

    /// The IRI as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// The host component, when the IRI has one.
    #[must_use]
    pub fn host_str(&self) -> Option<&str> {
        self.0.host_str()
    }

    /// Replace the host component.
    ///
    /// Used by the identifier resolver's legacy-host rewrite; fails on IRIs
    /// that cannot carry a host (e.g. `mailto:`).
    pub fn set_host(&mut self, host: &str) -> Result<()> {
        self.0
            .set_host(Some(host))
            .map_err(|e| TrackError::Resolution(format!("cannot set host {host:?}: {e}")))
    }
}

impl fmt::Display for Iri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for Iri {
    type Err = TrackError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Identifier assigned to a statement by the LRS on save.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatementId(Uuid);

impl StatementId {
    /// Wrap an already-parsed UUID.
    #[must_use]
    pub const fn new(id: Uuid) -> Self {
        Self(id)
    }

    /// The underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for StatementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for StatementId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> std::result::Result<Self, uuid::Error> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}
