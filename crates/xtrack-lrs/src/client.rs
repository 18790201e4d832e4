//! The transport client boundary.
//!
//! The statement pipeline is transport-agnostic: it talks to an
//! [`LrsClient`], which performs the actual save and retrieve calls against
//! the Learning Record Store. The wire format behind the trait is opaque to
//! the rest of the system.
//!
//! A save or retrieve can fail three distinct ways, and the verifier treats
//! them differently: a transport-level failure (`Err`), no response object
//! at all (`Ok(None)`), or a response flagged unsuccessful
//! (`Ok(Some(response))` with `success == false`, raw diagnostics attached).

use async_trait::async_trait;
use xtrack_core::iri::StatementId;
use xtrack_core::statement::Statement;

/// Convenience alias for transport operations.
pub type LrsResult<T> = std::result::Result<T, LrsError>;

/// Transport-level failures, below the response protocol.
#[derive(Debug, thiserror::Error)]
pub enum LrsError {
    /// The HTTP request itself failed (connect, timeout, TLS).
    #[error("http transport error: {0}")]
    Http(#[from] reqwest::Error),

    /// Credentials could not be turned into a valid auth header.
    #[error("invalid LRS credentials: {0}")]
    Auth(String),

    /// The LRS answered with something the client cannot interpret.
    #[error("malformed LRS response: {0}")]
    InvalidResponse(String),
}

/// Reference to a statement the LRS has stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SavedStatementRef {
    /// The id the LRS assigned on save.
    pub id: StatementId,
}

/// Outcome of a save or retrieve call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LrsResponse {
    /// Whether the LRS reported the operation as successful.
    pub success: bool,
    /// The stored-statement reference a successful save carries.
    pub content: Option<SavedStatementRef>,
    /// Raw response body, kept for diagnostics on failure.
    pub data: Option<String>,
}

impl LrsResponse {
    /// Successful save response carrying the assigned id.
    #[must_use]
    pub fn saved(id: StatementId) -> Self {
        Self {
            success: true,
            content: Some(SavedStatementRef { id }),
            data: None,
        }
    }

    /// Successful response without content (retrieve).
    #[must_use]
    pub fn ok() -> Self {
        Self {
            success: true,
            content: None,
            data: None,
        }
    }

    /// Unsuccessful response with the raw body attached.
    #[must_use]
    pub fn failure(data: impl Into<String>) -> Self {
        Self {
            success: false,
            content: None,
            data: Some(data.into()),
        }
    }
}

/// A client that can save statements to an LRS and read them back.
#[async_trait]
pub trait LrsClient: Send + Sync {
    /// Save a statement. `Ok(None)` means the transport produced no
    /// response object at all.
    async fn save_statement(&self, statement: &Statement) -> LrsResult<Option<LrsResponse>>;

    /// Retrieve a statement by the id a save assigned.
    async fn retrieve_statement(&self, id: StatementId) -> LrsResult<Option<LrsResponse>>;
}
