use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use super::{NewAssessmentRecord, PersistenceError, ResultRepository};
use crate::models::assessment::{AssessmentKind, AssessmentResultRow};

/// Process-local store, used when running without Postgres and in tests.
#[derive(Default)]
pub struct InMemoryResultRepository {
    rows: Mutex<Vec<AssessmentResultRow>>,
}

impl InMemoryResultRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ResultRepository for InMemoryResultRepository {
    async fn save(
        &self,
        user_id: Uuid,
        record: NewAssessmentRecord,
    ) -> Result<Uuid, PersistenceError> {
        let id = Uuid::new_v4();
        let mut rows = self.rows.lock().unwrap_or_else(|e| e.into_inner());
        rows.push(AssessmentResultRow {
            id,
            user_id,
            kind: record.kind.as_str().to_string(),
            result: record.result,
            answers: record.answers,
            created_at: Utc::now(),
        });
        Ok(id)
    }

    async fn list_for_user(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<AssessmentResultRow>, PersistenceError> {
        let rows = self.rows.lock().unwrap_or_else(|e| e.into_inner());
        // Insertion order breaks timestamp ties.
        Ok(rows
            .iter()
            .rev()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn get(&self, id: Uuid) -> Result<Option<AssessmentResultRow>, PersistenceError> {
        let rows = self.rows.lock().unwrap_or_else(|e| e.into_inner());
        Ok(rows.iter().find(|r| r.id == id).cloned())
    }

    async fn latest(
        &self,
        user_id: Uuid,
        kind: AssessmentKind,
    ) -> Result<Option<AssessmentResultRow>, PersistenceError> {
        let rows = self.rows.lock().unwrap_or_else(|e| e.into_inner());
        Ok(rows
            .iter()
            .rev()
            .find(|r| r.user_id == user_id && r.kind == kind.as_str())
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(kind: AssessmentKind, marker: u32) -> NewAssessmentRecord {
        NewAssessmentRecord {
            kind,
            result: json!({ "marker": marker }),
            answers: json!({}),
        }
    }

    #[tokio::test]
    async fn test_list_is_newest_first_and_scoped_to_user() {
        let repo = InMemoryResultRepository::new();
        let alice = Uuid::new_v4();
        let bob = Uuid::new_v4();
        repo.save(alice, record(AssessmentKind::Brand, 1)).await.unwrap();
        repo.save(bob, record(AssessmentKind::Brand, 2)).await.unwrap();
        repo.save(alice, record(AssessmentKind::CareerFit, 3)).await.unwrap();

        let rows = repo.list_for_user(alice).await.unwrap();
        let markers: Vec<_> = rows.iter().map(|r| r.result["marker"].clone()).collect();
        assert_eq!(markers, vec![json!(3), json!(1)]);
    }

    #[tokio::test]
    async fn test_latest_supersedes_earlier_save() {
        let repo = InMemoryResultRepository::new();
        let user = Uuid::new_v4();
        repo.save(user, record(AssessmentKind::Brand, 1)).await.unwrap();
        repo.save(user, record(AssessmentKind::Brand, 2)).await.unwrap();
        repo.save(user, record(AssessmentKind::CareerFit, 9)).await.unwrap();

        let latest = repo
            .latest(user, AssessmentKind::Brand)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(latest.result["marker"], 2);
    }

    #[tokio::test]
    async fn test_get_unknown_id() {
        let repo = InMemoryResultRepository::new();
        assert!(repo.get(Uuid::new_v4()).await.unwrap().is_none());
    }
}
