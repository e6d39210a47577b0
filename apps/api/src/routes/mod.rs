pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::assessment::handlers as brand;
use crate::career_fit::handlers as career_fit;
use crate::persistence::handlers as results;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Brand test
        .route("/api/v1/brand/questions", get(brand::handle_questions))
        .route(
            "/api/v1/brand/pages/:page/check",
            post(brand::handle_check_page),
        )
        .route("/api/v1/brand/score", post(brand::handle_score))
        .route("/api/v1/brand/demo", post(brand::handle_demo))
        // Career-fit check
        .route(
            "/api/v1/career-fit/departments",
            get(career_fit::handle_catalog),
        )
        .route("/api/v1/career-fit/score", post(career_fit::handle_score))
        // Stored results
        .route("/api/v1/results", get(results::handle_list_results))
        .route("/api/v1/results/:id", get(results::handle_get_result))
        .with_state(state)
}
