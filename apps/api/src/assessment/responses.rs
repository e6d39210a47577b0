//! Response collection: validated Likert answers, completion, and the page gate.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::assessment::questions::{QuestionBank, SCALE_MAX, SCALE_MIDPOINT, SCALE_MIN};
use crate::errors::AssessmentError;

pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Question index → response in 1..=5. Serializes as a JSON object keyed by index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet {
    responses: BTreeMap<usize, u8>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, index: usize) -> Option<u8> {
        self.responses.get(&index).copied()
    }

    /// The recorded response, or the scale midpoint when the question is unanswered.
    pub fn value_or_midpoint(&self, index: usize) -> u8 {
        self.get(index).unwrap_or(SCALE_MIDPOINT)
    }

    pub fn len(&self) -> usize {
        self.responses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.responses.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, u8)> + '_ {
        self.responses.iter().map(|(&i, &v)| (i, v))
    }

    fn insert(&mut self, index: usize, value: u8) {
        self.responses.insert(index, value);
    }
}

/// Answers as a client sends them: any JSON keys and values. Nothing is
/// trusted until `ResponseCollector::from_submitted` has checked it.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct SubmittedAnswers(BTreeMap<String, serde_json::Value>);

/// Outcome of a successful page advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "page", rename_all = "snake_case")]
pub enum PageProgress {
    Next(usize),
    Finished,
}

/// Collects answers against a question bank.
///
/// Invalid input is rejected before any state changes. Re-answering a
/// question overwrites the earlier response.
#[derive(Debug, Clone)]
pub struct ResponseCollector<'a> {
    bank: &'a QuestionBank,
    answers: AnswerSet,
    page_size: usize,
}

impl<'a> ResponseCollector<'a> {
    pub fn new(bank: &'a QuestionBank) -> Self {
        Self::with_page_size(bank, DEFAULT_PAGE_SIZE)
    }

    pub fn with_page_size(bank: &'a QuestionBank, page_size: usize) -> Self {
        Self {
            bank,
            answers: AnswerSet::new(),
            page_size: page_size.max(1),
        }
    }

    /// Builds a collector from answers as submitted over the wire, validating
    /// every key and value before anything is recorded.
    pub fn from_submitted(
        bank: &'a QuestionBank,
        page_size: usize,
        submitted: &SubmittedAnswers,
    ) -> Result<Self, AssessmentError> {
        let mut collector = Self::with_page_size(bank, page_size);
        for (key, value) in &submitted.0 {
            let index = key.trim().parse::<usize>().map_err(|_| {
                AssessmentError::Validation(format!("'{key}' is not a question index"))
            })?;
            let value = value.as_i64().ok_or_else(|| {
                AssessmentError::Validation(format!(
                    "response for question {} must be a whole number between {SCALE_MIN} and {SCALE_MAX}",
                    index + 1
                ))
            })?;
            collector.record_value(index, value)?;
        }
        Ok(collector)
    }

    pub fn record(&mut self, index: usize, value: u8) -> Result<(), AssessmentError> {
        self.record_value(index, i64::from(value))
    }

    fn record_value(&mut self, index: usize, value: i64) -> Result<(), AssessmentError> {
        if self.bank.get(index).is_none() {
            return Err(AssessmentError::Validation(format!(
                "question index {index} is out of range (0..{})",
                self.bank.len()
            )));
        }
        let value = u8::try_from(value)
            .ok()
            .filter(|v| (SCALE_MIN..=SCALE_MAX).contains(v))
            .ok_or_else(|| {
                AssessmentError::Validation(format!(
                    "response {value} for question {} must be between {SCALE_MIN} and {SCALE_MAX}",
                    index + 1
                ))
            })?;
        self.answers.insert(index, value);
        Ok(())
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    pub fn completion_percent(&self) -> u8 {
        crate::scoring::rounded_percent(self.answered_count() as u64, self.bank.len() as u64)
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn page_count(&self) -> usize {
        self.bank.len().div_ceil(self.page_size)
    }

    /// Question index range covered by `page` (0-based).
    pub fn page_bounds(&self, page: usize) -> Result<std::ops::Range<usize>, AssessmentError> {
        if page >= self.page_count() {
            return Err(AssessmentError::Validation(format!(
                "page {page} is out of range (0..{})",
                self.page_count()
            )));
        }
        let start = page * self.page_size;
        let end = (start + self.page_size).min(self.bank.len());
        Ok(start..end)
    }

    /// Fails with the first unanswered question on `page`, numbered from 1.
    pub fn check_page(&self, page: usize) -> Result<(), AssessmentError> {
        let bounds = self.page_bounds(page)?;
        match bounds.into_iter().find(|&i| self.answers.get(i).is_none()) {
            Some(index) => Err(AssessmentError::IncompletePage {
                page,
                question_number: index + 1,
            }),
            None => Ok(()),
        }
    }

    pub fn advance(&self, page: usize) -> Result<PageProgress, AssessmentError> {
        self.check_page(page)?;
        if page + 1 >= self.page_count() {
            Ok(PageProgress::Finished)
        } else {
            Ok(PageProgress::Next(page + 1))
        }
    }

    /// Indices with no recorded response.
    pub fn missing(&self) -> Vec<usize> {
        (0..self.bank.len())
            .filter(|&i| self.answers.get(i).is_none())
            .collect()
    }

    /// Hands over the answer set for scoring. With `force`, gaps are left for
    /// the scorer to fill with the midpoint; without it, gaps are an error.
    pub fn finalize(self, force: bool) -> Result<AnswerSet, AssessmentError> {
        let missing = self.missing();
        if !missing.is_empty() && !force {
            return Err(AssessmentError::IncompleteSubmission {
                missing: missing.len(),
                first_question_number: missing[0] + 1,
            });
        }
        Ok(self.answers)
    }

    /// Fills every question with a value in 3..=5 derived from `seed`.
    pub fn fill_demo(&mut self, seed: u64) {
        let mut state = seed;
        for index in 0..self.bank.len() {
            state = state
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1_442_695_040_888_963_407);
            let value = SCALE_MIDPOINT + ((state >> 33) % 3) as u8;
            self.answers.insert(index, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::questions::default_bank;

    #[test]
    fn test_record_rejects_out_of_range_value() {
        let mut collector = ResponseCollector::new(default_bank());
        assert!(matches!(
            collector.record(0, 0),
            Err(AssessmentError::Validation(_))
        ));
        assert!(matches!(
            collector.record(0, 6),
            Err(AssessmentError::Validation(_))
        ));
        assert_eq!(collector.answered_count(), 0);
    }

    #[test]
    fn test_record_rejects_unknown_index() {
        let mut collector = ResponseCollector::new(default_bank());
        let err = collector.record(30, 3).unwrap_err();
        assert!(err.to_string().contains("out of range"));
        assert!(collector.answers().is_empty());
    }

    #[test]
    fn test_record_overwrites() {
        let mut collector = ResponseCollector::new(default_bank());
        collector.record(4, 2).unwrap();
        collector.record(4, 5).unwrap();
        assert_eq!(collector.answered_count(), 1);
        assert_eq!(collector.answers().get(4), Some(5));
    }

    #[test]
    fn test_completion_percent() {
        let mut collector = ResponseCollector::new(default_bank());
        assert_eq!(collector.completion_percent(), 0);
        for i in 0..10 {
            collector.record(i, 4).unwrap();
        }
        assert_eq!(collector.completion_percent(), 33);
        for i in 10..30 {
            collector.record(i, 4).unwrap();
        }
        assert_eq!(collector.completion_percent(), 100);
    }

    #[test]
    fn test_page_bounds() {
        let collector = ResponseCollector::new(default_bank());
        assert_eq!(collector.page_count(), 6);
        assert_eq!(collector.page_bounds(0).unwrap(), 0..5);
        assert_eq!(collector.page_bounds(5).unwrap(), 25..30);
        assert!(collector.page_bounds(6).is_err());
    }

    #[test]
    fn test_short_last_page() {
        let collector = ResponseCollector::with_page_size(default_bank(), 7);
        assert_eq!(collector.page_count(), 5);
        assert_eq!(collector.page_bounds(4).unwrap(), 28..30);
    }

    #[test]
    fn test_advance_refused_names_first_unanswered() {
        let mut collector = ResponseCollector::new(default_bank());
        collector.record(5, 3).unwrap();
        collector.record(6, 3).unwrap();
        collector.record(8, 3).unwrap();
        let err = collector.advance(1).unwrap_err();
        match err {
            AssessmentError::IncompletePage {
                page,
                question_number,
            } => {
                assert_eq!(page, 1);
                assert_eq!(question_number, 8);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_advance_moves_to_next_then_finishes() {
        let mut collector = ResponseCollector::new(default_bank());
        for i in 0..30 {
            collector.record(i, 3).unwrap();
        }
        assert_eq!(collector.advance(0).unwrap(), PageProgress::Next(1));
        assert_eq!(collector.advance(5).unwrap(), PageProgress::Finished);
    }

    #[test]
    fn test_finalize_without_force_requires_all_answers() {
        let mut collector = ResponseCollector::new(default_bank());
        collector.record(0, 5).unwrap();
        let err = collector.finalize(false).unwrap_err();
        assert!(matches!(
            err,
            AssessmentError::IncompleteSubmission {
                missing: 29,
                first_question_number: 2
            }
        ));
    }

    #[test]
    fn test_finalize_with_force_keeps_gaps() {
        let mut collector = ResponseCollector::new(default_bank());
        collector.record(0, 5).unwrap();
        let answers = collector.finalize(true).unwrap();
        assert_eq!(answers.len(), 1);
        assert_eq!(answers.value_or_midpoint(1), 3);
    }

    fn submitted(json: &str) -> SubmittedAnswers {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_from_submitted_validates_each_entry() {
        let answers = submitted(r#"{"0": 5, "1": 9}"#);
        let result = ResponseCollector::from_submitted(default_bank(), 5, &answers);
        assert!(matches!(result, Err(AssessmentError::Validation(_))));
    }

    #[test]
    fn test_from_submitted_rejects_malformed_values_as_validation() {
        for json in [
            r#"{"0": 300}"#,
            r#"{"0": -1}"#,
            r#"{"0": 2.5}"#,
            r#"{"0": "4"}"#,
            r#"{"x": 3}"#,
            r#"{"-1": 3}"#,
        ] {
            let result = ResponseCollector::from_submitted(default_bank(), 5, &submitted(json));
            assert!(
                matches!(result, Err(AssessmentError::Validation(_))),
                "{json} was not rejected as a validation error"
            );
        }
    }

    #[test]
    fn test_from_submitted_accepts_valid_map() {
        let answers = submitted(r#"{"0": 1, "29": 5}"#);
        let collector = ResponseCollector::from_submitted(default_bank(), 5, &answers).unwrap();
        assert_eq!(collector.answers().get(0), Some(1));
        assert_eq!(collector.answers().get(29), Some(5));
    }

    #[test]
    fn test_fill_demo_is_seeded_and_in_range() {
        let mut a = ResponseCollector::new(default_bank());
        let mut b = ResponseCollector::new(default_bank());
        a.fill_demo(42);
        b.fill_demo(42);
        assert_eq!(a.answers(), b.answers());
        assert_eq!(a.answered_count(), 30);
        assert!(a.answers().iter().all(|(_, v)| (3..=5).contains(&v)));
    }
}
