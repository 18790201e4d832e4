//! # xtrack-lrs
//!
//! The network-facing edge of xtrack: a transport trait the pipeline is
//! generic over, an HTTP implementation of it, and the save-then-retrieve
//! verification that makes a submission count.
//!
//! - [`client::LrsClient`]: the trait boundary; the wire format behind it
//!   is opaque to the rest of the system
//! - [`remote::RemoteLrs`]: reqwest-backed client configured from
//!   [`xtrack_settings::LrsSettings`]
//! - [`verify::submit_and_verify`]: single-shot save + read-back
//! - [`track`]: the whole pipeline in one call — assemble, submit, verify
//!
//! # Usage
//!
//! ```no_run
//! use xtrack_core::domain::{TrackedObject, UserRef};
//! use xtrack_core::vocabulary::Vocabulary;
//! use xtrack_lrs::{track, RemoteLrs};
//! use xtrack_settings::TrackSettings;
//!
//! # async fn run() -> xtrack_core::Result<()> {
//! let settings = TrackSettings::default();
//! let vocabulary = Vocabulary::builtin();
//! let lrs = RemoteLrs::new(&settings.lrs).expect("LRS client");
//!
//! let user = UserRef::new("Ada Lovelace", "ada@example.org");
//! let lesson = TrackedObject::new("Lesson").with_id(42).with_display("Intro");
//! let id = track(&lrs, &settings, &vocabulary, None, &user, "completed", &lesson, None).await?;
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]

pub mod client;
pub mod remote;
pub mod verify;

pub use client::{LrsClient, LrsError, LrsResponse, LrsResult, SavedStatementRef};
pub use remote::RemoteLrs;
pub use verify::submit_and_verify;

use xtrack_core::domain::{Container, RequestContext, TrackedObject, UserRef};
use xtrack_core::errors::Result;
use xtrack_core::iri::StatementId;
use xtrack_core::vocabulary::Vocabulary;
use xtrack_settings::TrackSettings;
use xtrack_statements::StatementBuilder;

/// Assemble a statement for a domain event, submit it, and verify it was
/// recorded. Returns the id the LRS assigned.
///
/// One synchronous round trip per call, nothing cached or retried; every
/// failure mode of assembly and submission surfaces as a
/// [`xtrack_core::TrackError`].
#[allow(clippy::too_many_arguments)]
pub async fn track(
    client: &dyn LrsClient,
    settings: &TrackSettings,
    vocabulary: &Vocabulary,
    request: Option<&RequestContext>,
    user: &UserRef,
    verb_key: &str,
    object: &TrackedObject,
    target: Option<&Container>,
) -> Result<StatementId> {
    let statement =
        StatementBuilder::new(settings, vocabulary).assemble(request, user, verb_key, object, target)?;
    submit_and_verify(client, &statement).await
}
