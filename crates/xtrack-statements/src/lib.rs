//! # xtrack-statements
//!
//! The semantic core of xtrack: turning an application event — a user
//! performing an action on some content object, optionally inside a
//! container — into a ready-to-submit statement.
//!
//! - [`locale::LocaleResolver`]: session and per-object language fallback
//! - [`ident::IdentifierResolver`]: stable, dereferenceable object IRIs
//! - [`labels`]: display name and description extraction
//! - [`context::ContextGraphBuilder`]: parent/grouping context entries from
//!   the container hierarchy
//! - [`assemble::StatementBuilder`]: the composing entry point
//!
//! Everything here is pure: no network I/O, no retained state between
//! calls. Submission lives in `xtrack-lrs`.

#![deny(unsafe_code)]

pub mod assemble;
pub mod context;
pub mod ident;
pub mod labels;
pub mod locale;

pub use assemble::StatementBuilder;
pub use context::ContextGraphBuilder;
pub use ident::IdentifierResolver;
pub use locale::LocaleResolver;
