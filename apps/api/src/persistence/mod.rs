//! Result persistence — best-effort storage of completed assessments.
//!
//! Scoring never waits on or fails because of storage: callers use
//! `persist_best_effort`, which logs a failure and turns it into a
//! user-visible warning instead of an error.

pub mod handlers;
pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;
use tracing::{info, warn};
use uuid::Uuid;

use crate::models::assessment::{AssessmentKind, AssessmentResultRow};

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// A completed assessment ready to store.
#[derive(Debug, Clone)]
pub struct NewAssessmentRecord {
    pub kind: AssessmentKind,
    pub result: Value,
    pub answers: Value,
}

impl NewAssessmentRecord {
    pub fn new<R, A>(kind: AssessmentKind, result: &R, answers: &A) -> Result<Self, PersistenceError>
    where
        R: serde::Serialize,
        A: serde::Serialize,
    {
        Ok(Self {
            kind,
            result: serde_json::to_value(result)?,
            answers: serde_json::to_value(answers)?,
        })
    }
}

/// Storage contract for assessment results, keyed by an opaque user id.
/// A later save supersedes earlier ones when reading `latest`.
#[async_trait]
pub trait ResultRepository: Send + Sync {
    async fn save(
        &self,
        user_id: Uuid,
        record: NewAssessmentRecord,
    ) -> Result<Uuid, PersistenceError>;

    /// All results for a user, newest first.
    async fn list_for_user(&self, user_id: Uuid)
        -> Result<Vec<AssessmentResultRow>, PersistenceError>;

    async fn get(&self, id: Uuid) -> Result<Option<AssessmentResultRow>, PersistenceError>;

    async fn latest(
        &self,
        user_id: Uuid,
        kind: AssessmentKind,
    ) -> Result<Option<AssessmentResultRow>, PersistenceError>;
}

/// Saves when a user id is present. Failures are logged and pushed onto
/// `warnings`; the caller's result stands either way.
pub async fn persist_best_effort<R, A>(
    repo: &dyn ResultRepository,
    user_id: Option<Uuid>,
    kind: AssessmentKind,
    result: &R,
    answers: &A,
    warnings: &mut Vec<String>,
) -> Option<Uuid>
where
    R: serde::Serialize + Sync,
    A: serde::Serialize + Sync,
{
    let user_id = user_id?;
    let outcome = match NewAssessmentRecord::new(kind, result, answers) {
        Ok(record) => repo.save(user_id, record).await,
        Err(e) => Err(e),
    };
    match outcome {
        Ok(id) => {
            info!("Saved {} result {id} for user {user_id}", kind.as_str());
            Some(id)
        }
        Err(e) => {
            warn!("Failed to save {} result for user {user_id}: {e}", kind.as_str());
            warnings.push("Your result was not saved; it is still shown below.".to_string());
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::memory::InMemoryResultRepository;
    use serde_json::json;

    struct FailingRepository;

    #[async_trait]
    impl ResultRepository for FailingRepository {
        async fn save(&self, _: Uuid, _: NewAssessmentRecord) -> Result<Uuid, PersistenceError> {
            Err(PersistenceError::Unavailable("down".into()))
        }
        async fn list_for_user(
            &self,
            _: Uuid,
        ) -> Result<Vec<AssessmentResultRow>, PersistenceError> {
            Ok(vec![])
        }
        async fn get(&self, _: Uuid) -> Result<Option<AssessmentResultRow>, PersistenceError> {
            Ok(None)
        }
        async fn latest(
            &self,
            _: Uuid,
            _: AssessmentKind,
        ) -> Result<Option<AssessmentResultRow>, PersistenceError> {
            Ok(None)
        }
    }

    #[tokio::test]
    async fn test_no_user_skips_save() {
        let repo = InMemoryResultRepository::new();
        let mut warnings = Vec::new();
        let id = persist_best_effort(
            &repo,
            None,
            AssessmentKind::Brand,
            &json!({}),
            &json!({}),
            &mut warnings,
        )
        .await;
        assert!(id.is_none());
        assert!(warnings.is_empty());
    }

    #[tokio::test]
    async fn test_failure_becomes_warning() {
        let mut warnings = Vec::new();
        let id = persist_best_effort(
            &FailingRepository,
            Some(Uuid::new_v4()),
            AssessmentKind::CareerFit,
            &json!({"total": 80}),
            &json!({}),
            &mut warnings,
        )
        .await;
        assert!(id.is_none());
        assert_eq!(warnings.len(), 1);
    }

    #[tokio::test]
    async fn test_success_returns_record_id() {
        let repo = InMemoryResultRepository::new();
        let user = Uuid::new_v4();
        let mut warnings = Vec::new();
        let id = persist_best_effort(
            &repo,
            Some(user),
            AssessmentKind::Brand,
            &json!({"best_fit": 71}),
            &json!({"0": 5}),
            &mut warnings,
        )
        .await
        .unwrap();
        let stored = repo.get(id).await.unwrap().unwrap();
        assert_eq!(stored.user_id, user);
        assert_eq!(stored.kind, "brand");
        assert_eq!(stored.result["best_fit"], 71);
    }
}
