use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::persistence::PersistenceError;

/// Errors raised by the assessment domain before any scoring happens.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AssessmentError {
    #[error("Validation error: {0}")]
    Validation(String),

    /// `page` is 0-based; the message shows it numbered from 1 like the questions.
    #[error("Please answer question {question_number} before leaving page {}", .page + 1)]
    IncompletePage { page: usize, question_number: usize },

    #[error("{missing} question(s) unanswered, starting with question {first_question_number}")]
    IncompleteSubmission {
        missing: usize,
        first_question_number: usize,
    },
}

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Assessment(#[from] AssessmentError),

    #[error("Persistence error: {0}")]
    Persistence(#[from] PersistenceError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Assessment(e) => match e {
                AssessmentError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                AssessmentError::IncompletePage { .. } => (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "INCOMPLETE_PAGE",
                    e.to_string(),
                ),
                AssessmentError::IncompleteSubmission { .. } => (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "INCOMPLETE_SUBMISSION",
                    e.to_string(),
                ),
            },
            AppError::Persistence(e) => {
                tracing::error!("Persistence error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "PERSISTENCE_ERROR",
                    "Stored results are unavailable".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_incomplete_page_message_names_question() {
        let e = AssessmentError::IncompletePage {
            page: 2,
            question_number: 13,
        };
        assert_eq!(
            e.to_string(),
            "Please answer question 13 before leaving page 3"
        );
    }

    #[test]
    fn test_status_codes() {
        let validation: AppError = AssessmentError::Validation("bad".into()).into();
        assert_eq!(validation.into_response().status(), StatusCode::BAD_REQUEST);

        let incomplete: AppError = AssessmentError::IncompleteSubmission {
            missing: 3,
            first_question_number: 1,
        }
        .into();
        assert_eq!(
            incomplete.into_response().status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );

        let missing = AppError::NotFound("x".into());
        assert_eq!(missing.into_response().status(), StatusCode::NOT_FOUND);

        let storage: AppError = PersistenceError::Unavailable("down".into()).into();
        assert_eq!(
            storage.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
