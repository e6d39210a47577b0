use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

/// Which assessment produced a stored result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssessmentKind {
    Brand,
    CareerFit,
}

impl AssessmentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssessmentKind::Brand => "brand",
            AssessmentKind::CareerFit => "career_fit",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AssessmentResultRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub kind: String,
    pub result: Value,
    pub answers: Value,
    pub created_at: DateTime<Utc>,
}
