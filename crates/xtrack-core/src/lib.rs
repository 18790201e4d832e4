//! # xtrack-core
//!
//! Foundation types for the xtrack statement pipeline.
//!
//! This crate provides the shared vocabulary that the other xtrack crates
//! depend on:
//!
//! - **Statement model**: [`statement::Statement`] and its parts — actor,
//!   verb, object activity, context — in the xAPI wire shape
//! - **Branded IDs**: [`iri::Iri`] (validated absolute IRIs) and
//!   [`iri::StatementId`] (LRS-assigned statement identifiers)
//! - **Vocabulary**: [`vocabulary::Vocabulary`] lookup tables mapping verb
//!   keys and domain type names to canonical IRIs
//! - **Domain adaptation**: [`domain::TrackedObject`], [`domain::Container`],
//!   [`domain::UserRef`], [`domain::RequestContext`] — the boundary shape
//!   application objects are adapted into before any statement logic runs
//! - **Errors**: [`errors::TrackError`] taxonomy via `thiserror`
//!
//! ## Crate Position
//!
//! Foundation crate. Depended on by all other xtrack crates.

#![deny(unsafe_code)]

pub mod domain;
pub mod errors;
pub mod iri;
pub mod statement;
pub mod vocabulary;

pub use errors::{Result, TrackError};
