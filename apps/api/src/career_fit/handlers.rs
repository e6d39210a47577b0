use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

use crate::career_fit::catalog::{
    CertificationTier, Course, Grade, CERTIFICATIONS, DEPARTMENTS, EXPERIENCES, HOLLAND_CODES,
};
use crate::career_fit::profile::ProfileKind;
use crate::career_fit::scorer::{validate, CareerFitInput, CareerFitReport};
use crate::errors::AppError;
use crate::handoff::take_best_effort;
use crate::models::assessment::AssessmentKind;
use crate::persistence::{persist_best_effort, ResultRepository};
use crate::state::AppState;

#[derive(Serialize)]
pub struct SemesterView {
    pub grade: Grade,
    pub courses: &'static [Course],
}

#[derive(Serialize)]
pub struct DepartmentView {
    pub key: &'static str,
    pub name: &'static str,
    pub holland: &'static [&'static str],
    pub careers: &'static [&'static str],
    pub semesters: Vec<SemesterView>,
}

#[derive(Serialize)]
pub struct OptionView {
    pub key: &'static str,
    pub label: &'static str,
}

#[derive(Serialize)]
pub struct CertificationView {
    pub tier: CertificationTier,
    pub description: &'static str,
}

#[derive(Serialize)]
pub struct CatalogResponse {
    pub departments: Vec<DepartmentView>,
    pub grades: Vec<Grade>,
    pub experiences: Vec<OptionView>,
    pub certifications: Vec<CertificationView>,
    pub holland_codes: Vec<&'static str>,
}

#[derive(Deserialize)]
pub struct CareerFitRequest {
    #[serde(default)]
    pub profile: ProfileKind,
    #[serde(flatten)]
    pub input: CareerFitInput,
    pub user_id: Option<Uuid>,
    pub session_id: Option<String>,
}

#[derive(Serialize)]
pub struct CareerFitResponse {
    pub report: CareerFitReport,
    /// True when the Holland code came from an earlier brand test.
    pub holland_synced: bool,
    pub record_id: Option<Uuid>,
    pub warnings: Vec<String>,
}

/// GET /api/v1/career-fit/departments
pub async fn handle_catalog() -> Json<CatalogResponse> {
    let departments = DEPARTMENTS
        .iter()
        .map(|d| DepartmentView {
            key: d.key,
            name: d.name,
            holland: d.holland,
            careers: d.careers,
            semesters: Grade::ALL
                .iter()
                .map(|&grade| SemesterView {
                    grade,
                    courses: d.courses_for(grade),
                })
                .filter(|s| !s.courses.is_empty())
                .collect(),
        })
        .collect();

    Json(CatalogResponse {
        departments,
        grades: Grade::ALL.to_vec(),
        experiences: EXPERIENCES
            .iter()
            .map(|&(key, label)| OptionView { key, label })
            .collect(),
        certifications: CERTIFICATIONS
            .iter()
            .map(|&(tier, description)| CertificationView { tier, description })
            .collect(),
        holland_codes: HOLLAND_CODES.to_vec(),
    })
}

/// Holland letters from the user's most recent stored brand result.
async fn latest_brand_code(
    repo: &dyn ResultRepository,
    user_id: Uuid,
    warnings: &mut Vec<String>,
) -> Vec<String> {
    match repo.latest(user_id, AssessmentKind::Brand).await {
        Ok(Some(row)) => row.result["result"]["composite_code"]
            .as_str()
            .map(|code| code.chars().map(|c| c.to_string()).collect())
            .unwrap_or_default(),
        Ok(None) => Vec::new(),
        Err(e) => {
            warn!("Failed to load latest brand result for user {user_id}: {e}");
            warnings.push("Your brand-test Holland code could not be loaded.".to_string());
            Vec::new()
        }
    }
}

/// POST /api/v1/career-fit/score
pub async fn handle_score(
    State(state): State<AppState>,
    Json(req): Json<CareerFitRequest>,
) -> Result<Json<CareerFitResponse>, AppError> {
    let CareerFitRequest {
        profile,
        mut input,
        user_id,
        session_id,
    } = req;
    let mut warnings = Vec::new();

    // Rejected requests must leave the handoff unread.
    validate(&input)?;

    // An explicit selection wins; otherwise use the session handoff, then stored results.
    let mut holland_synced = false;
    if input.holland.is_empty() {
        if let Some(session_id) = session_id.as_deref() {
            input.holland =
                take_best_effort(state.handoff.as_ref(), session_id, &mut warnings).await;
        }
        if input.holland.is_empty() {
            if let Some(user_id) = user_id {
                input.holland =
                    latest_brand_code(state.results.as_ref(), user_id, &mut warnings).await;
            }
        }
        holland_synced = !input.holland.is_empty();
    }

    let report = state.career_fit.get(profile).evaluate(&input)?;

    let record_id = persist_best_effort(
        state.results.as_ref(),
        user_id,
        AssessmentKind::CareerFit,
        &report,
        &input,
        &mut warnings,
    )
    .await;

    Ok(Json(CareerFitResponse {
        report,
        holland_synced,
        record_id,
        warnings,
    }))
}
