use serde::{Deserialize, Serialize};

/// Which threshold set to score with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileKind {
    #[default]
    Standard,
    Pro,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum AcademicRule {
    /// round(100 × completed / listed) over all listed courses.
    CompletionRatio,
    /// round(required_weight × required done / required listed) + bonus per elective.
    RequiredWithElectiveBonus {
        required_weight: f64,
        elective_bonus: u32,
    },
}

/// Decision-table thresholds for one variant of the career-fit check.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CareerFitProfile {
    pub kind: ProfileKind,
    pub academic: AcademicRule,
    pub practical_per_experience: u32,
    pub skill_tier_a: u32,
    pub skill_tier_b: u32,
    pub skill_baseline: u32,
    pub match_two_or_more: u32,
    pub match_one: u32,
    pub match_none: u32,
    pub communication_signal: u32,
    pub communication_baseline: u32,
    /// Experience keys that count as a soft-skill signal.
    pub communication_keys: &'static [&'static str],
    /// academic, practical, skill, match, communication
    pub weights: [f64; 5],
    pub strength_thresholds: StrengthThresholds,
}

/// Cut-offs for the strengths/weaknesses sentences. `inclusive` selects
/// `>=` over `>`; a `None` skill threshold produces no skill sentence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StrengthThresholds {
    pub academic: u32,
    pub practical: u32,
    pub skill: Option<u32>,
    pub inclusive: bool,
}

impl StrengthThresholds {
    pub fn passes(&self, score: u32, threshold: u32) -> bool {
        if self.inclusive {
            score >= threshold
        } else {
            score > threshold
        }
    }
}

impl CareerFitProfile {
    pub fn standard() -> Self {
        Self {
            kind: ProfileKind::Standard,
            academic: AcademicRule::CompletionRatio,
            practical_per_experience: 30,
            skill_tier_a: 100,
            skill_tier_b: 70,
            skill_baseline: 20,
            match_two_or_more: 90,
            match_one: 70,
            match_none: 50,
            communication_signal: 90,
            communication_baseline: 65,
            communication_keys: &["club_lead", "competition"],
            weights: [0.22, 0.20, 0.22, 0.18, 0.18],
            strength_thresholds: StrengthThresholds {
                academic: 80,
                practical: 50,
                skill: Some(70),
                inclusive: true,
            },
        }
    }

    pub fn pro() -> Self {
        Self {
            kind: ProfileKind::Pro,
            academic: AcademicRule::RequiredWithElectiveBonus {
                required_weight: 80.0,
                elective_bonus: 5,
            },
            practical_per_experience: 25,
            skill_tier_a: 100,
            skill_tier_b: 70,
            skill_baseline: 30,
            match_two_or_more: 95,
            match_one: 70,
            match_none: 45,
            communication_signal: 90,
            communication_baseline: 60,
            communication_keys: &["club_lead", "club", "competition"],
            weights: [0.25, 0.20, 0.20, 0.20, 0.15],
            strength_thresholds: StrengthThresholds {
                academic: 80,
                practical: 50,
                skill: None,
                inclusive: false,
            },
        }
    }

    pub fn for_kind(kind: ProfileKind) -> Self {
        match kind {
            ProfileKind::Standard => Self::standard(),
            ProfileKind::Pro => Self::pro(),
        }
    }
}
