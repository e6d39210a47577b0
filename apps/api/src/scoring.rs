//! Shared scoring interface.
//!
//! Both assessments reduce to a weighted linear combination over bounded
//! sub-scores. The brand test accumulates `(achieved, ceiling)` pairs per
//! weighted trait and reports their ratio; the career-fit check evaluates a
//! fixed set of dimension rules and sums them under a weight vector.
//!
//! `ScoringModel` is the seam callers hold on to, so either scorer can be
//! swapped or reconfigured without touching handler code.

use serde::{Deserialize, Serialize};

/// A deterministic scorer from some input to a structured result.
pub trait ScoringModel: Send + Sync {
    type Input;
    type Output;

    fn score(&self, input: &Self::Input) -> Self::Output;
}

// ────────────────────────────────────────────────────────────────────────────
// Ratio accumulation (brand test)
// ────────────────────────────────────────────────────────────────────────────

/// Running numerator/denominator of a weighted fit ratio.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WeightedRatio {
    achieved: u64,
    ceiling: u64,
}

impl WeightedRatio {
    pub fn add(&mut self, achieved: u32, ceiling: u32, weight: u32) {
        self.achieved += u64::from(achieved) * u64::from(weight);
        self.ceiling += u64::from(ceiling) * u64::from(weight);
    }

    pub fn achieved(&self) -> u64 {
        self.achieved
    }

    pub fn ceiling(&self) -> u64 {
        self.ceiling
    }

    /// 0–100, rounded half up. An empty ceiling scores 0.
    pub fn percent(&self) -> u8 {
        rounded_percent(self.achieved, self.ceiling)
    }
}

/// `round(100 * numerator / denominator)` in integer arithmetic, clamped to 100.
/// Returns 0 when `denominator` is 0.
pub fn rounded_percent(numerator: u64, denominator: u64) -> u8 {
    if denominator == 0 {
        return 0;
    }
    let scaled = (200 * numerator + denominator) / (2 * denominator);
    scaled.min(100) as u8
}

// ────────────────────────────────────────────────────────────────────────────
// Linear model (career-fit check)
// ────────────────────────────────────────────────────────────────────────────

type DimensionRule<I> = Box<dyn Fn(&I) -> u32 + Send + Sync>;

/// One weighted dimension: a named rule producing a 0–100 sub-score.
pub struct Dimension<I> {
    pub key: &'static str,
    pub weight: f64,
    rule: DimensionRule<I>,
}

impl<I> std::fmt::Debug for Dimension<I> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dimension")
            .field("key", &self.key)
            .field("weight", &self.weight)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionScore {
    pub key: String,
    pub score: u32,
    pub weight: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearScore {
    pub dimensions: Vec<DimensionScore>,
    pub total: u32, // 0 – 100
}

impl LinearScore {
    pub fn dimension(&self, key: &str) -> Option<u32> {
        self.dimensions
            .iter()
            .find(|d| d.key == key)
            .map(|d| d.score)
    }
}

/// Weighted sum of independent dimension rules.
///
/// Each rule result is capped at 100. The total is `round(Σ score × weight)`
/// clamped to 0–100, so weight vectors are expected to sum to 1.0.
#[derive(Debug)]
pub struct LinearModel<I> {
    dimensions: Vec<Dimension<I>>,
}

impl<I> Default for LinearModel<I> {
    fn default() -> Self {
        Self { dimensions: Vec::new() }
    }
}

impl<I> LinearModel<I> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dimension<F>(mut self, key: &'static str, weight: f64, rule: F) -> Self
    where
        F: Fn(&I) -> u32 + Send + Sync + 'static,
    {
        self.dimensions.push(Dimension {
            key,
            weight,
            rule: Box::new(rule),
        });
        self
    }

    pub fn total_weight(&self) -> f64 {
        self.dimensions.iter().map(|d| d.weight).sum()
    }

    pub fn evaluate(&self, input: &I) -> LinearScore {
        let dimensions: Vec<DimensionScore> = self
            .dimensions
            .iter()
            .map(|d| DimensionScore {
                key: d.key.to_string(),
                score: (d.rule)(input).min(100),
                weight: d.weight,
            })
            .collect();

        let weighted: f64 = dimensions
            .iter()
            .map(|d| f64::from(d.score) * d.weight)
            .sum();

        LinearScore {
            dimensions,
            total: weighted.round().clamp(0.0, 100.0) as u32,
        }
    }
}

impl<I> ScoringModel for LinearModel<I> {
    type Input = I;
    type Output = LinearScore;

    fn score(&self, input: &I) -> LinearScore {
        self.evaluate(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounded_percent_half_up() {
        assert_eq!(rounded_percent(1, 2), 50);
        assert_eq!(rounded_percent(1, 8), 13); // 12.5 → 13
        assert_eq!(rounded_percent(1, 3), 33);
        assert_eq!(rounded_percent(2, 3), 67);
    }

    #[test]
    fn test_rounded_percent_zero_denominator() {
        assert_eq!(rounded_percent(10, 0), 0);
    }

    #[test]
    fn test_rounded_percent_clamped() {
        assert_eq!(rounded_percent(30, 10), 100);
    }

    #[test]
    fn test_weighted_ratio_accumulates_weighted_terms() {
        let mut ratio = WeightedRatio::default();
        ratio.add(10, 10, 1);
        ratio.add(4, 10, 3);
        assert_eq!(ratio.achieved(), 22);
        assert_eq!(ratio.ceiling(), 40);
        assert_eq!(ratio.percent(), 55);
    }

    #[test]
    fn test_linear_model_weighted_total() {
        let model = LinearModel::<u32>::new()
            .dimension("a", 0.5, |x| *x)
            .dimension("b", 0.5, |_| 100);
        let score = model.evaluate(&60);
        assert_eq!(score.total, 80);
        assert_eq!(score.dimension("a"), Some(60));
        assert_eq!(score.dimension("missing"), None);
    }

    #[test]
    fn test_linear_model_caps_dimension_scores() {
        let model = LinearModel::<u32>::new().dimension("a", 1.0, |x| *x);
        let score = model.evaluate(&250);
        assert_eq!(score.dimensions[0].score, 100);
        assert_eq!(score.total, 100);
    }

    #[test]
    fn test_linear_model_total_weight() {
        let model = LinearModel::<()>::new()
            .dimension("a", 0.25, |_| 0)
            .dimension("b", 0.75, |_| 0);
        assert!((model.total_weight() - 1.0).abs() < f64::EPSILON);
    }
}
