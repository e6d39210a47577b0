use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;
use uuid::Uuid;

use super::{NewAssessmentRecord, PersistenceError, ResultRepository};
use crate::models::assessment::{AssessmentKind, AssessmentResultRow};

/// Stores results in the `assessment_results` table.
pub struct PgResultRepository {
    pool: PgPool,
}

impl PgResultRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ResultRepository for PgResultRepository {
    async fn save(
        &self,
        user_id: Uuid,
        record: NewAssessmentRecord,
    ) -> Result<Uuid, PersistenceError> {
        let id = Uuid::new_v4();
        sqlx::query(
            r#"
            INSERT INTO assessment_results (id, user_id, kind, result, answers)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(id)
        .bind(user_id)
        .bind(record.kind.as_str())
        .bind(&record.result)
        .bind(&record.answers)
        .execute(&self.pool)
        .await?;

        debug!("Inserted assessment result {id}");
        Ok(id)
    }

    async fn list_for_user(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<AssessmentResultRow>, PersistenceError> {
        Ok(sqlx::query_as::<_, AssessmentResultRow>(
            "SELECT * FROM assessment_results WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?)
    }

    async fn get(&self, id: Uuid) -> Result<Option<AssessmentResultRow>, PersistenceError> {
        Ok(
            sqlx::query_as::<_, AssessmentResultRow>(
                "SELECT * FROM assessment_results WHERE id = $1",
            )
            .bind(id)
            .fetch_optional(&self.pool)
            .await?,
        )
    }

    async fn latest(
        &self,
        user_id: Uuid,
        kind: AssessmentKind,
    ) -> Result<Option<AssessmentResultRow>, PersistenceError> {
        Ok(sqlx::query_as::<_, AssessmentResultRow>(
            r#"
            SELECT * FROM assessment_results
            WHERE user_id = $1 AND kind = $2
            ORDER BY created_at DESC
            LIMIT 1
            "#,
        )
        .bind(user_id)
        .bind(kind.as_str())
        .fetch_optional(&self.pool)
        .await?)
    }
}
