use serde::{Deserialize, Serialize};

use crate::assessment::fit::ScoreAccumulator;
use crate::assessment::questions::SCALE_MAX;
use crate::assessment::rubric::{AxisDefinition, BenchmarkTier, Rubric};
use crate::scoring::rounded_percent;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisScore {
    pub axis: String,
    pub score: u8, // 0 – 100
    pub tier: BenchmarkTier,
}

/// Σ member sums / (Σ member question counts × 5), as a rounded percentage.
/// An axis with no contributing questions scores 0.
pub fn axis_score(acc: &ScoreAccumulator, axis: &AxisDefinition) -> u8 {
    let (sum, questions) = axis.members.iter().fold((0u64, 0u64), |(s, q), key| {
        (
            s + u64::from(acc.sum(*key)),
            q + u64::from(acc.question_count(*key)),
        )
    });
    rounded_percent(sum, questions * u64::from(SCALE_MAX))
}

/// Scores for every axis, in rubric order.
pub fn axis_scores(acc: &ScoreAccumulator, rubric: &Rubric) -> Vec<AxisScore> {
    rubric
        .axes
        .iter()
        .map(|axis| {
            let score = axis_score(acc, axis);
            AxisScore {
                axis: axis.name.to_string(),
                score,
                tier: BenchmarkTier::for_score(score),
            }
        })
        .collect()
}

/// The highest-scoring axis; the first one listed wins a tie.
pub fn strongest_axis(scores: &[AxisScore]) -> Option<&AxisScore> {
    scores.iter().fold(None, |best: Option<&AxisScore>, s| match best {
        Some(b) if b.score >= s.score => Some(b),
        _ => Some(s),
    })
}
