use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::assessment::engine::BrandScorer;
use crate::assessment::questions::{Category, SCALE_MAX, SCALE_MIN};
use crate::assessment::report::{build_brand_report, BrandReport};
use crate::assessment::responses::{
    AnswerSet, PageProgress, ResponseCollector, SubmittedAnswers,
};
use crate::errors::AppError;
use crate::handoff::publish_best_effort;
use crate::models::assessment::AssessmentKind;
use crate::persistence::persist_best_effort;
use crate::scoring::ScoringModel;
use crate::state::AppState;

#[derive(Serialize)]
pub struct QuestionView {
    pub index: usize,
    pub number: usize,
    pub text: &'static str,
    pub category: Category,
    pub code: &'static str,
}

#[derive(Serialize)]
pub struct QuestionsResponse {
    pub questions: Vec<QuestionView>,
    pub scale_min: u8,
    pub scale_max: u8,
    pub page_size: usize,
    pub page_count: usize,
}

#[derive(Deserialize)]
pub struct PageCheckRequest {
    #[serde(default)]
    pub answers: SubmittedAnswers,
}

#[derive(Serialize)]
pub struct PageCheckResponse {
    pub progress: PageProgress,
    pub completion_percent: u8,
}

#[derive(Deserialize)]
pub struct ScoreRequest {
    #[serde(default)]
    pub answers: SubmittedAnswers,
    /// Score even with unanswered questions; gaps count as the midpoint.
    #[serde(default)]
    pub force: bool,
    pub user_id: Option<Uuid>,
    pub session_id: Option<String>,
}

#[derive(Serialize)]
pub struct ScoreResponse {
    pub report: BrandReport,
    pub completion_percent: u8,
    pub record_id: Option<Uuid>,
    pub warnings: Vec<String>,
}

#[derive(Deserialize, Default)]
pub struct DemoRequest {
    pub seed: Option<u64>,
}

#[derive(Serialize)]
pub struct DemoResponse {
    pub seed: u64,
    pub answers: AnswerSet,
    pub report: BrandReport,
}

fn collector<'a>(
    scorer: &BrandScorer<'a>,
    page_size: usize,
    answers: &SubmittedAnswers,
) -> Result<ResponseCollector<'a>, AppError> {
    Ok(ResponseCollector::from_submitted(scorer.bank(), page_size, answers)?)
}

/// GET /api/v1/brand/questions
pub async fn handle_questions(State(state): State<AppState>) -> Json<QuestionsResponse> {
    let bank = state.brand.bank();
    let pages = ResponseCollector::with_page_size(bank, state.config.quiz_page_size);
    let questions = bank
        .iter()
        .map(|(index, q)| QuestionView {
            index,
            number: index + 1,
            text: q.text,
            category: q.trait_key.category,
            code: q.trait_key.code,
        })
        .collect();

    Json(QuestionsResponse {
        questions,
        scale_min: SCALE_MIN,
        scale_max: SCALE_MAX,
        page_size: pages.page_size(),
        page_count: pages.page_count(),
    })
}

/// POST /api/v1/brand/pages/:page/check
pub async fn handle_check_page(
    State(state): State<AppState>,
    Path(page): Path<usize>,
    Json(req): Json<PageCheckRequest>,
) -> Result<Json<PageCheckResponse>, AppError> {
    let collector = collector(&state.brand, state.config.quiz_page_size, &req.answers)?;
    let progress = collector.advance(page)?;
    Ok(Json(PageCheckResponse {
        progress,
        completion_percent: collector.completion_percent(),
    }))
}

/// POST /api/v1/brand/score
pub async fn handle_score(
    State(state): State<AppState>,
    Json(req): Json<ScoreRequest>,
) -> Result<Json<ScoreResponse>, AppError> {
    let collector = collector(&state.brand, state.config.quiz_page_size, &req.answers)?;
    let completion_percent = collector.completion_percent();
    let answers = collector.finalize(req.force)?;

    let result = state.brand.score(&answers);
    let report = build_brand_report(result, state.brand.rubric());

    let mut warnings = Vec::new();
    let record_id = persist_best_effort(
        state.results.as_ref(),
        req.user_id,
        AssessmentKind::Brand,
        &report,
        &answers,
        &mut warnings,
    )
    .await;
    if let Some(session_id) = req.session_id.as_deref() {
        publish_best_effort(
            state.handoff.as_ref(),
            session_id,
            &report.result.composite_code,
            &mut warnings,
        )
        .await;
    }

    Ok(Json(ScoreResponse {
        report,
        completion_percent,
        record_id,
        warnings,
    }))
}

/// POST /api/v1/brand/demo
/// Fills every question with a plausible answer and scores it. Nothing is stored.
pub async fn handle_demo(
    State(state): State<AppState>,
    Json(req): Json<DemoRequest>,
) -> Result<Json<DemoResponse>, AppError> {
    let seed = req
        .seed
        .unwrap_or_else(|| chrono::Utc::now().timestamp_subsec_nanos() as u64);
    let mut collector =
        ResponseCollector::with_page_size(state.brand.bank(), state.config.quiz_page_size);
    collector.fill_demo(seed);
    let answers = collector.finalize(false)?;

    let report = build_brand_report(state.brand.score(&answers), state.brand.rubric());
    Ok(Json(DemoResponse {
        seed,
        answers,
        report,
    }))
}
