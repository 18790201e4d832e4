//! Save-then-retrieve verification.
//!
//! A submission only counts once the LRS both accepted the statement and
//! can produce it again by its assigned id. The two calls are sequential —
//! retrieve needs the id the save response carries — and single-shot: no
//! retry, no buffering. A failure here means the tracked event was not
//! reliably recorded; the caller decides what to do about that.

use tracing::{debug, instrument};
use xtrack_core::errors::{Result, TrackError};
use xtrack_core::iri::StatementId;
use xtrack_core::statement::Statement;

use crate::client::LrsClient;

/// Submit `statement` and confirm the LRS can read it back.
///
/// Returns the id the LRS assigned. Fails with [`TrackError::Submission`]
/// when the save produces no response, an unsuccessful response (raw
/// content/data attached), or no assigned id; with
/// [`TrackError::Verification`] when the follow-up retrieve does not
/// succeed. Retrieve is never attempted after a failed save.
#[instrument(skip_all)]
pub async fn submit_and_verify(
    client: &dyn LrsClient,
    statement: &Statement,
) -> Result<StatementId> {
    let saved = client
        .save_statement(statement)
        .await
        .map_err(|e| TrackError::Submission {
            message: format!("transport error: {e}"),
            content: None,
            data: None,
        })?;

    let saved = saved.ok_or_else(|| TrackError::Submission {
        message: "no response from save".to_string(),
        content: None,
        data: None,
    })?;

    if !saved.success {
        return Err(TrackError::Submission {
            message: "response was unsuccessful".to_string(),
            content: saved.content.map(|c| c.id.to_string()),
            data: saved.data,
        });
    }

    let id = saved
        .content
        .ok_or_else(|| TrackError::Submission {
            message: "save response carried no statement id".to_string(),
            content: None,
            data: saved.data.clone(),
        })?
        .id;
    debug!(%id, "statement saved, verifying");

    let retrieved = client
        .retrieve_statement(id)
        .await
        .map_err(|e| TrackError::Verification(format!("transport error: {e}")))?;

    match retrieved {
        Some(response) if response.success => {
            debug!(%id, "statement verified");
            Ok(id)
        }
        Some(_) => Err(TrackError::Verification(format!(
            "LRS could not produce statement {id}"
        ))),
        None => Err(TrackError::Verification(
            "no response from retrieve".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use xtrack_core::domain::{TrackedObject, UserRef};
    use xtrack_core::vocabulary::Vocabulary;
    use xtrack_settings::TrackSettings;
    use xtrack_statements::StatementBuilder;

    use crate::client::{LrsResponse, LrsResult};

    const ID: &str = "2b6a6cb7-d1b0-4ab6-9b13-2d5b83c2a9cf";

    /// Scripted client that records the order of calls.
    struct ScriptedLrs {
        save: LrsResult<Option<LrsResponse>>,
        retrieve: LrsResult<Option<LrsResponse>>,
        calls: Mutex<Vec<&'static str>>,
    }

    impl ScriptedLrs {
        fn new(
            save: LrsResult<Option<LrsResponse>>,
            retrieve: LrsResult<Option<LrsResponse>>,
        ) -> Self {
            Self {
                save,
                retrieve,
                calls: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<&'static str> {
            self.calls.lock().unwrap().clone()
        }
    }

    fn clone_result(r: &LrsResult<Option<LrsResponse>>) -> LrsResult<Option<LrsResponse>> {
        match r {
            Ok(v) => Ok(v.clone()),
            Err(e) => Err(crate::client::LrsError::InvalidResponse(e.to_string())),
        }
    }

    #[async_trait]
    impl LrsClient for ScriptedLrs {
        async fn save_statement(&self, _: &Statement) -> LrsResult<Option<LrsResponse>> {
            self.calls.lock().unwrap().push("save");
            clone_result(&self.save)
        }

        async fn retrieve_statement(&self, _: StatementId) -> LrsResult<Option<LrsResponse>> {
            self.calls.lock().unwrap().push("retrieve");
            clone_result(&self.retrieve)
        }
    }

    fn statement() -> Statement {
        let settings = TrackSettings::default();
        let vocabulary = Vocabulary::builtin();
        StatementBuilder::new(&settings, &vocabulary)
            .assemble(
                None,
                &UserRef::new("Ada", "ada@example.org"),
                "completed",
                &TrackedObject::new("Lesson").with_id(42).with_display("Intro"),
                None,
            )
            .unwrap()
    }

    fn saved() -> LrsResult<Option<LrsResponse>> {
        Ok(Some(LrsResponse::saved(ID.parse().unwrap())))
    }

    // ── Success path ────────────────────────────────────────────────────

    #[tokio::test]
    async fn save_then_retrieve_returns_the_assigned_id() {
        let client = ScriptedLrs::new(saved(), Ok(Some(LrsResponse::ok())));
        let id = submit_and_verify(&client, &statement()).await.unwrap();
        assert_eq!(id.to_string(), ID);
        assert_eq!(client.calls(), vec!["save", "retrieve"]);
    }

    // ── Save failures ───────────────────────────────────────────────────

    #[tokio::test]
    async fn unsuccessful_save_fails_without_attempting_retrieve() {
        let client = ScriptedLrs::new(
            Ok(Some(LrsResponse::failure("{\"error\":\"conflict\"}"))),
            Ok(Some(LrsResponse::ok())),
        );
        let err = submit_and_verify(&client, &statement()).await.unwrap_err();
        assert_matches!(
            err,
            TrackError::Submission { data: Some(data), .. } if data.contains("conflict")
        );
        assert_eq!(client.calls(), vec!["save"], "retrieve must not run after a failed save");
    }

    #[tokio::test]
    async fn missing_save_response_is_a_submission_error() {
        let client = ScriptedLrs::new(Ok(None), Ok(Some(LrsResponse::ok())));
        let err = submit_and_verify(&client, &statement()).await.unwrap_err();
        assert_matches!(err, TrackError::Submission { .. });
        assert_eq!(client.calls(), vec!["save"]);
    }

    #[tokio::test]
    async fn save_without_an_id_is_a_submission_error() {
        let client = ScriptedLrs::new(Ok(Some(LrsResponse::ok())), Ok(Some(LrsResponse::ok())));
        let err = submit_and_verify(&client, &statement()).await.unwrap_err();
        assert_matches!(err, TrackError::Submission { message, .. } if message.contains("no statement id"));
    }

    #[tokio::test]
    async fn save_transport_error_is_a_submission_error() {
        let client = ScriptedLrs::new(
            Err(crate::client::LrsError::InvalidResponse("boom".into())),
            Ok(Some(LrsResponse::ok())),
        );
        let err = submit_and_verify(&client, &statement()).await.unwrap_err();
        assert_matches!(err, TrackError::Submission { .. });
    }

    // ── Retrieve failures ───────────────────────────────────────────────

    #[tokio::test]
    async fn unsuccessful_retrieve_is_a_verification_error() {
        let client = ScriptedLrs::new(saved(), Ok(Some(LrsResponse::failure("gone"))));
        let err = submit_and_verify(&client, &statement()).await.unwrap_err();
        assert_matches!(err, TrackError::Verification(_));
        assert_eq!(client.calls(), vec!["save", "retrieve"]);
    }

    #[tokio::test]
    async fn missing_retrieve_response_is_a_verification_error() {
        let client = ScriptedLrs::new(saved(), Ok(None));
        let err = submit_and_verify(&client, &statement()).await.unwrap_err();
        assert_matches!(err, TrackError::Verification(_));
    }

    #[tokio::test]
    async fn retrieve_transport_error_is_a_verification_error() {
        let client = ScriptedLrs::new(
            saved(),
            Err(crate::client::LrsError::InvalidResponse("boom".into())),
        );
        let err = submit_and_verify(&client, &statement()).await.unwrap_err();
        assert_matches!(err, TrackError::Verification(_));
    }
}
