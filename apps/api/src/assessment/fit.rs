//! Trait accumulation and per-department fit.
//!
//! Algorithm:
//! 1. Fold every question's response (midpoint when unanswered) into a
//!    per-trait sum, keeping the question count per trait.
//! 2. For each department, over every trait with positive weight:
//!    numerator   += sum[trait] × weight
//!    denominator += count[trait] × 5 × weight
//! 3. fit = round(100 × numerator / denominator), 0 when the denominator is 0.
//! 4. Best match = highest fit; ties go to the department listed first.

use serde::{Deserialize, Serialize};

use crate::assessment::questions::{Category, QuestionBank, TraitKey, SCALE_MAX};
use crate::assessment::responses::AnswerSet;
use crate::assessment::rubric::{Rubric, TargetWeights};
use crate::scoring::WeightedRatio;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraitTally {
    pub key: TraitKey,
    pub sum: u32,
    pub questions: u32,
}

impl TraitTally {
    /// Score if every question for this trait were answered with the top response.
    pub fn ceiling(&self) -> u32 {
        self.questions * u32::from(SCALE_MAX)
    }
}

/// Summed responses per trait, in question-table order of first appearance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreAccumulator {
    tallies: Vec<TraitTally>,
}

impl ScoreAccumulator {
    pub fn from_answers(bank: &QuestionBank, answers: &AnswerSet) -> Self {
        let mut tallies: Vec<TraitTally> = Vec::new();
        for (index, question) in bank.iter() {
            let value = u32::from(answers.value_or_midpoint(index));
            match tallies.iter_mut().find(|t| t.key == question.trait_key) {
                Some(tally) => {
                    tally.sum += value;
                    tally.questions += 1;
                }
                None => tallies.push(TraitTally {
                    key: question.trait_key,
                    sum: value,
                    questions: 1,
                }),
            }
        }
        Self { tallies }
    }

    pub fn tally(&self, key: TraitKey) -> Option<&TraitTally> {
        self.tallies.iter().find(|t| t.key == key)
    }

    pub fn sum(&self, key: TraitKey) -> u32 {
        self.tally(key).map(|t| t.sum).unwrap_or(0)
    }

    pub fn question_count(&self, key: TraitKey) -> u32 {
        self.tally(key).map(|t| t.questions).unwrap_or(0)
    }

    pub fn category(&self, category: Category) -> impl Iterator<Item = &TraitTally> {
        self.tallies
            .iter()
            .filter(move |t| t.key.category == category)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryFit {
    pub category: String,
    pub fit: u8, // 0 – 100
}

pub fn category_fit(acc: &ScoreAccumulator, target: &TargetWeights) -> u8 {
    let mut ratio = WeightedRatio::default();
    for (key, weight) in target.weighted_traits() {
        let ceiling = acc.question_count(key) * u32::from(SCALE_MAX);
        ratio.add(acc.sum(key), ceiling, weight);
    }
    ratio.percent()
}

/// Fit for every department, in rubric order.
pub fn fit_by_category(acc: &ScoreAccumulator, rubric: &Rubric) -> Vec<CategoryFit> {
    rubric
        .targets
        .iter()
        .map(|target| CategoryFit {
            category: target.name.to_string(),
            fit: category_fit(acc, target),
        })
        .collect()
}

/// Highest fit; the earliest entry wins a tie.
pub fn best_match(fits: &[CategoryFit]) -> Option<&CategoryFit> {
    fits.iter()
        .fold(None, |best: Option<&CategoryFit>, candidate| match best {
            Some(b) if b.fit >= candidate.fit => Some(b),
            _ => Some(candidate),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::questions::{default_bank, Question};
    use crate::assessment::rubric::default_rubric;

    fn answers(pairs: &[(usize, u8)]) -> AnswerSet {
        let json: serde_json::Map<String, serde_json::Value> = pairs
            .iter()
            .map(|(i, v)| (i.to_string(), serde_json::json!(v)))
            .collect();
        serde_json::from_value(serde_json::Value::Object(json)).unwrap()
    }

    fn three_question_setup() -> (QuestionBank, TargetWeights) {
        let bank = QuestionBank::new(vec![
            Question::new("q0", TraitKey::interest("A")),
            Question::new("q1", TraitKey::interest("A")),
            Question::new("q2", TraitKey::interest("B")),
        ]);
        let target = TargetWeights {
            name: "Only",
            interest: vec![("A", 1), ("B", 0)],
            strengths: vec![],
        };
        (bank, target)
    }

    #[test]
    fn test_accumulator_defaults_missing_to_midpoint() {
        let bank = default_bank();
        let acc = ScoreAccumulator::from_answers(bank, &AnswerSet::new());
        assert_eq!(acc.sum(TraitKey::interest("I")), 9);
        assert_eq!(acc.sum(TraitKey::strength("Developer")), 3);
        assert_eq!(acc.question_count(TraitKey::interest("I")), 3);
    }

    #[test]
    fn test_accumulator_separates_categories() {
        let bank = default_bank();
        let acc = ScoreAccumulator::from_answers(bank, &AnswerSet::new());
        assert_eq!(acc.category(Category::Strength).count(), 10);
        assert_eq!(acc.category(Category::InterestCode).count(), 6);
    }

    #[test]
    fn test_full_marks_scenario() {
        let (bank, target) = three_question_setup();
        let acc = ScoreAccumulator::from_answers(&bank, &answers(&[(0, 5), (1, 5), (2, 1)]));
        assert_eq!(category_fit(&acc, &target), 100);
    }

    #[test]
    fn test_partial_scenario_with_default() {
        let (bank, target) = three_question_setup();
        let acc = ScoreAccumulator::from_answers(&bank, &answers(&[(0, 3), (1, 3)]));
        assert_eq!(category_fit(&acc, &target), 60);
    }

    #[test]
    fn test_zero_weight_target_scores_zero() {
        let (bank, _) = three_question_setup();
        let target = TargetWeights {
            name: "Empty",
            interest: vec![("A", 0)],
            strengths: vec![],
        };
        let acc = ScoreAccumulator::from_answers(&bank, &answers(&[(0, 5), (1, 5), (2, 5)]));
        assert_eq!(category_fit(&acc, &target), 0);
    }

    #[test]
    fn test_weighted_trait_without_questions_is_ignored() {
        let (bank, _) = three_question_setup();
        let target = TargetWeights {
            name: "Sparse",
            interest: vec![("A", 2), ("Z", 10)],
            strengths: vec![],
        };
        let acc = ScoreAccumulator::from_answers(&bank, &answers(&[(0, 4), (1, 4)]));
        assert_eq!(category_fit(&acc, &target), 80);
    }

    #[test]
    fn test_all_top_answers_give_100_everywhere() {
        let bank = default_bank();
        let all_five = answers(&(0..30).map(|i| (i, 5)).collect::<Vec<_>>());
        let acc = ScoreAccumulator::from_answers(bank, &all_five);
        for fit in fit_by_category(&acc, default_rubric()) {
            assert_eq!(fit.fit, 100, "{}", fit.category);
        }
    }

    #[test]
    fn test_all_bottom_answers_give_20_everywhere() {
        let bank = default_bank();
        let all_one = answers(&(0..30).map(|i| (i, 1)).collect::<Vec<_>>());
        let acc = ScoreAccumulator::from_answers(bank, &all_one);
        for fit in fit_by_category(&acc, default_rubric()) {
            assert_eq!(fit.fit, 20, "{}", fit.category);
        }
    }

    #[test]
    fn test_best_match_prefers_first_on_tie() {
        let fits = vec![
            CategoryFit {
                category: "a".into(),
                fit: 70,
            },
            CategoryFit {
                category: "b".into(),
                fit: 80,
            },
            CategoryFit {
                category: "c".into(),
                fit: 80,
            },
        ];
        assert_eq!(best_match(&fits).unwrap().category, "b");
    }

    #[test]
    fn test_best_match_all_zero_is_first() {
        let fits = vec![
            CategoryFit {
                category: "a".into(),
                fit: 0,
            },
            CategoryFit {
                category: "b".into(),
                fit: 0,
            },
        ];
        assert_eq!(best_match(&fits).unwrap().category, "a");
        assert!(best_match(&[]).is_none());
    }

    #[test]
    fn test_technical_answers_favor_cs() {
        let bank = default_bank();
        let pairs: Vec<(usize, u8)> = bank
            .iter()
            .map(|(i, q)| {
                let high = matches!(q.trait_key.code, "Analytical" | "Focus" | "R" | "I");
                (i, if high { 5 } else { 1 })
            })
            .collect();
        let acc = ScoreAccumulator::from_answers(bank, &answers(&pairs));
        let fits = fit_by_category(&acc, default_rubric());
        assert_eq!(best_match(&fits).unwrap().category, "Computer Science (CS)");
    }
}
