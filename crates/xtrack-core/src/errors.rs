//! Error taxonomy for statement assembly and submission.
//!
//! Every variant is returned to the immediate caller; nothing is retried or
//! swallowed inside the pipeline. A failed submission is simply lost from
//! this crate's perspective — the surrounding application decides whether
//! to retry or log-and-continue.

/// Convenience alias used across the xtrack crates.
pub type Result<T> = std::result::Result<T, TrackError>;

/// Errors raised while assembling or submitting a statement.
#[derive(Debug, thiserror::Error)]
pub enum TrackError {
    /// Locale or host configuration cannot satisfy a resolution request.
    ///
    /// Fatal and not retried — this is a startup-time configuration defect,
    /// not a per-request condition.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// An object identifier could not be constructed (no request context
    /// and no configured host, or an unidentifiable object).
    #[error("identifier resolution failed: {0}")]
    Resolution(String),

    /// Verb key missing from the vocabulary. Caller error, never defaulted.
    #[error("unknown verb key: {0:?}")]
    UnknownVerb(String),

    /// Domain type name missing from the activity-type vocabulary.
    #[error("unknown activity type: {0:?}")]
    UnknownActivityType(String),

    /// The transport save failed or returned no response.
    #[error("statement failed to save: {message}")]
    Submission {
        /// What went wrong, in one line.
        message: String,
        /// Raw response content from the transport, when available.
        content: Option<String>,
        /// Raw response data from the transport, when available.
        data: Option<String>,
    },

    /// The transport could not retrieve a just-saved statement.
    #[error("statement could not be retrieved: {0}")]
    Verification(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submission_display_carries_message() {
        let e = TrackError::Submission {
            message: "response was unsuccessful".into(),
            content: Some("{\"error\":true}".into()),
            data: None,
        };
        assert!(e.to_string().contains("response was unsuccessful"));
    }

    #[test]
    fn unknown_verb_display_names_key() {
        let e = TrackError::UnknownVerb("frobnicated".into());
        assert!(e.to_string().contains("frobnicated"));
    }

    #[test]
    fn configuration_display() {
        let e = TrackError::Configuration("default locale 'xx' not supported".into());
        assert!(e.to_string().starts_with("configuration error"));
    }
}
