//! Brand-test scorer: answers in, `FitResult` out.
//!
//! Pure function of (question bank, rubric, answers). Holds only shared
//! references to the static tables, so one scorer serves every request.

use serde::{Deserialize, Serialize};

use crate::assessment::axes::{axis_scores, AxisScore};
use crate::assessment::fit::{best_match, fit_by_category, CategoryFit, ScoreAccumulator};
use crate::assessment::questions::{default_bank, Category, QuestionBank};
use crate::assessment::ranking::{composite_code, rank, top_k, RankedTrait, TOP_STRENGTHS};
use crate::assessment::responses::AnswerSet;
use crate::assessment::rubric::{default_rubric, Rubric};
use crate::scoring::ScoringModel;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FitResult {
    pub per_category_fit: Vec<CategoryFit>,
    pub best_category: String,
    pub best_fit: u8,
    pub axis_scores: Vec<AxisScore>,
    pub ranked_strengths: Vec<RankedTrait>, // top 5
    pub ranked_interests: Vec<RankedTrait>, // all six Holland codes
    pub composite_code: String,
}

#[derive(Debug, Clone, Copy)]
pub struct BrandScorer<'a> {
    bank: &'a QuestionBank,
    rubric: &'a Rubric,
}

impl BrandScorer<'static> {
    pub fn with_default_tables() -> Self {
        Self::new(default_bank(), default_rubric())
    }
}

impl<'a> BrandScorer<'a> {
    pub fn new(bank: &'a QuestionBank, rubric: &'a Rubric) -> Self {
        Self { bank, rubric }
    }

    pub fn bank(&self) -> &'a QuestionBank {
        self.bank
    }

    pub fn rubric(&self) -> &'a Rubric {
        self.rubric
    }

    pub fn compute(&self, answers: &AnswerSet) -> FitResult {
        let acc = ScoreAccumulator::from_answers(self.bank, answers);

        let per_category_fit = fit_by_category(&acc, self.rubric);
        let (best_category, best_fit) = best_match(&per_category_fit)
            .map(|b| (b.category.clone(), b.fit))
            .unwrap_or_default();

        let ranked_interests = rank(&acc, Category::InterestCode);
        let composite_code = composite_code(&ranked_interests);

        FitResult {
            best_category,
            best_fit,
            per_category_fit,
            axis_scores: axis_scores(&acc, self.rubric),
            ranked_strengths: top_k(&acc, Category::Strength, TOP_STRENGTHS),
            ranked_interests,
            composite_code,
        }
    }
}

impl ScoringModel for BrandScorer<'_> {
    type Input = AnswerSet;
    type Output = FitResult;

    fn score(&self, answers: &AnswerSet) -> FitResult {
        self.compute(answers)
    }
}
