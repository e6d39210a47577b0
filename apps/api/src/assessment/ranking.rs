use serde::{Deserialize, Serialize};

use crate::assessment::fit::ScoreAccumulator;
use crate::assessment::questions::Category;

pub const TOP_STRENGTHS: usize = 5;
pub const COMPOSITE_CODE_LEN: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedTrait {
    pub code: String,
    pub score: u32,
    pub ceiling: u32,
}

/// All traits of `category`, highest sum first. Ties keep question-table order.
pub fn rank(acc: &ScoreAccumulator, category: Category) -> Vec<RankedTrait> {
    let mut ranked: Vec<RankedTrait> = acc
        .category(category)
        .map(|t| RankedTrait {
            code: t.key.code.to_string(),
            score: t.sum,
            ceiling: t.ceiling(),
        })
        .collect();
    // sort_by is stable
    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked
}

pub fn top_k(acc: &ScoreAccumulator, category: Category, k: usize) -> Vec<RankedTrait> {
    let mut ranked = rank(acc, category);
    ranked.truncate(k);
    ranked
}

/// Concatenates the top three interest codes with a non-zero score.
/// Fewer scored traits give a shorter code; it is never padded.
pub fn composite_code(ranked_interests: &[RankedTrait]) -> String {
    ranked_interests
        .iter()
        .filter(|t| t.score > 0)
        .take(COMPOSITE_CODE_LEN)
        .map(|t| t.code.as_str())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::questions::{default_bank, Question, QuestionBank, TraitKey};
    use crate::assessment::responses::AnswerSet;

    fn ranked(pairs: &[(&str, u32)]) -> Vec<RankedTrait> {
        pairs
            .iter()
            .map(|(c, s)| RankedTrait {
                code: c.to_string(),
                score: *s,
                ceiling: 15,
            })
            .collect()
    }

    #[test]
    fn test_rank_descending() {
        let answers: AnswerSet =
            serde_json::from_str(r#"{"15": 1, "16": 1, "17": 5, "18": 5, "27": 5}"#).unwrap();
        let acc = ScoreAccumulator::from_answers(default_bank(), &answers);
        let interests = rank(&acc, Category::InterestCode);
        assert_eq!(interests[0].code, "I");
        assert_eq!(interests[0].score, 15);
        assert_eq!(interests[0].ceiling, 15);
        assert_eq!(interests.last().unwrap().code, "R");
    }

    #[test]
    fn test_rank_tie_keeps_table_order() {
        // Every strength defaults to 3 per question; single-question traits tie at 3.
        let acc = ScoreAccumulator::from_answers(default_bank(), &AnswerSet::new());
        let strengths = rank(&acc, Category::Strength);
        let singles: Vec<&str> = strengths
            .iter()
            .filter(|t| t.score == 3)
            .map(|t| t.code.as_str())
            .collect();
        assert_eq!(
            singles,
            vec!["Ideation", "Communication", "Achiever", "Responsibility", "Developer"]
        );
        let doubles: Vec<&str> = strengths
            .iter()
            .take(5)
            .map(|t| t.code.as_str())
            .collect();
        assert_eq!(
            doubles,
            vec!["Strategic", "Learner", "Analytical", "Focus", "Relator"]
        );
    }

    #[test]
    fn test_top_k_truncates() {
        let acc = ScoreAccumulator::from_answers(default_bank(), &AnswerSet::new());
        assert_eq!(top_k(&acc, Category::Strength, TOP_STRENGTHS).len(), 5);
        assert_eq!(top_k(&acc, Category::InterestCode, 10).len(), 6);
    }

    #[test]
    fn test_composite_code_top_three() {
        let r = ranked(&[("R", 15), ("I", 14), ("A", 13), ("S", 5), ("E", 4), ("C", 3)]);
        assert_eq!(composite_code(&r), "RIA");
    }

    #[test]
    fn test_composite_code_short_when_sparse() {
        let r = ranked(&[("I", 9), ("R", 0)]);
        assert_eq!(composite_code(&r), "I");
        assert_eq!(composite_code(&[]), "");
    }

    #[test]
    fn test_composite_code_from_bank_with_two_interest_traits() {
        let bank = QuestionBank::new(vec![
            Question::new("q", TraitKey::interest("S")),
            Question::new("q", TraitKey::interest("E")),
        ]);
        let answers: AnswerSet = serde_json::from_str(r#"{"0": 2, "1": 4}"#).unwrap();
        let acc = ScoreAccumulator::from_answers(&bank, &answers);
        assert_eq!(composite_code(&rank(&acc, Category::InterestCode)), "ES");
    }
}
