//! Static rubric tables: department weights, radar axes, and trait display info.

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::assessment::questions::TraitKey;

/// Weight table for one target category (a department).
#[derive(Debug, Clone)]
pub struct TargetWeights {
    pub name: &'static str,
    pub interest: Vec<(&'static str, u32)>,
    pub strengths: Vec<(&'static str, u32)>,
}

impl TargetWeights {
    /// Positively weighted traits, interest codes first, in table order.
    pub fn weighted_traits(&self) -> impl Iterator<Item = (TraitKey, u32)> + '_ {
        let interest = self
            .interest
            .iter()
            .map(|&(code, w)| (TraitKey::interest(code), w));
        let strengths = self
            .strengths
            .iter()
            .map(|&(code, w)| (TraitKey::strength(code), w));
        interest.chain(strengths).filter(|&(_, w)| w > 0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BenchmarkTier {
    Low,
    Mid,
    High,
}

impl BenchmarkTier {
    pub fn for_score(score: u8) -> Self {
        match score {
            s if s < 50 => BenchmarkTier::Low,
            s if s < 75 => BenchmarkTier::Mid,
            _ => BenchmarkTier::High,
        }
    }
}

/// Descriptions of what a low, mid, or high axis score means.
#[derive(Debug, Clone, Copy)]
pub struct Benchmark {
    pub low: &'static str,
    pub mid: &'static str,
    pub high: &'static str,
}

impl Benchmark {
    pub fn describe(&self, tier: BenchmarkTier) -> &'static str {
        match tier {
            BenchmarkTier::Low => self.low,
            BenchmarkTier::Mid => self.mid,
            BenchmarkTier::High => self.high,
        }
    }
}

/// A radar axis aggregating several traits.
#[derive(Debug, Clone)]
pub struct AxisDefinition {
    pub name: &'static str,
    pub members: Vec<TraitKey>,
    pub benchmark: Benchmark,
}

#[derive(Debug, Clone)]
pub struct Rubric {
    pub targets: Vec<TargetWeights>,
    pub axes: Vec<AxisDefinition>,
}

impl Rubric {
    pub fn axis(&self, name: &str) -> Option<&AxisDefinition> {
        self.axes.iter().find(|a| a.name == name)
    }
}

/// Keyword in a department name that selects the technical narrative phrasing.
pub const TECHNICAL_KEYWORD: &str = "Computer Science";

pub fn default_rubric() -> &'static Rubric {
    static RUBRIC: OnceLock<Rubric> = OnceLock::new();
    RUBRIC.get_or_init(|| Rubric {
        targets: vec![
            TargetWeights {
                name: "Computer Science (CS)",
                interest: vec![("R", 8), ("I", 8), ("A", 1), ("S", 0), ("E", 1), ("C", 5)],
                strengths: vec![
                    ("Analytical", 8),
                    ("Focus", 8),
                    ("Learner", 5),
                    ("Strategic", 3),
                    ("Achiever", 3),
                    ("Ideation", 1),
                    ("Communication", 0),
                    ("Relator", 0),
                    ("Developer", 0),
                    ("Responsibility", 3),
                ],
            },
            TargetWeights {
                name: "Information Management (IM)",
                interest: vec![("R", 1), ("I", 3), ("A", 1), ("S", 3), ("E", 8), ("C", 8)],
                strengths: vec![
                    ("Strategic", 8),
                    ("Achiever", 5),
                    ("Responsibility", 5),
                    ("Communication", 5),
                    ("Analytical", 3),
                    ("Focus", 1),
                    ("Learner", 1),
                    ("Ideation", 1),
                    ("Relator", 3),
                    ("Developer", 3),
                ],
            },
            TargetWeights {
                name: "Communication & Media (Comm)",
                interest: vec![("R", 1), ("I", 1), ("A", 8), ("S", 8), ("E", 5), ("C", 1)],
                strengths: vec![
                    ("Communication", 8),
                    ("Ideation", 8),
                    ("Relator", 5),
                    ("Developer", 5),
                    ("Strategic", 1),
                    ("Achiever", 1),
                    ("Analytical", 0),
                    ("Focus", 0),
                    ("Learner", 3),
                    ("Responsibility", 1),
                ],
            },
        ],
        axes: vec![
            AxisDefinition {
                name: "Logical Analysis",
                members: vec![
                    TraitKey::strength("Analytical"),
                    TraitKey::strength("Focus"),
                    TraitKey::interest("I"),
                ],
                benchmark: Benchmark {
                    low: "Relies on intuition when deciding",
                    mid: "Can read and interpret basic data",
                    high: "Breaks down complex systems and draws sharp insight from data",
                },
            },
            AxisDefinition {
                name: "Project Execution",
                members: vec![
                    TraitKey::strength("Achiever"),
                    TraitKey::strength("Responsibility"),
                    TraitKey::interest("C"),
                ],
                benchmark: Benchmark {
                    low: "Needs explicit instructions",
                    mid: "Delivers on time",
                    high: "Strong ownership, improves process and guarantees quality output",
                },
            },
            AxisDefinition {
                name: "Strategic Thinking",
                members: vec![
                    TraitKey::strength("Strategic"),
                    TraitKey::interest("E"),
                    TraitKey::strength("Learner"),
                ],
                benchmark: Benchmark {
                    low: "Focused on immediate execution",
                    mid: "Can plan short-term goals",
                    high: "Sees the big picture, anticipates risk and plans for the long term",
                },
            },
            AxisDefinition {
                name: "Interpersonal Communication",
                members: vec![
                    TraitKey::strength("Communication"),
                    TraitKey::strength("Relator"),
                    TraitKey::interest("S"),
                ],
                benchmark: Benchmark {
                    low: "Prefers working alone",
                    mid: "Collaborates within a team",
                    high: "Communicates across departments, resolves conflict and has influence",
                },
            },
            AxisDefinition {
                name: "Innovation",
                members: vec![TraitKey::strength("Ideation"), TraitKey::interest("A")],
                benchmark: Benchmark {
                    low: "Prefers standard procedures",
                    mid: "Suggests improvements",
                    high: "Thinks in breakthroughs and builds solutions from zero to one",
                },
            },
            AxisDefinition {
                name: "Technical Implementation",
                members: vec![TraitKey::interest("R")],
                benchmark: Benchmark {
                    low: "Prefers theory",
                    mid: "Operates basic tools",
                    high: "Strong hands-on drive, turns concepts into working things",
                },
            },
        ],
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Trait display info
// ────────────────────────────────────────────────────────────────────────────

const STRENGTH_NAMES: &[(&str, &str)] = &[
    ("Strategic", "Strategic Thinking"),
    ("Learner", "Love of Learning"),
    ("Analytical", "Logical Analysis"),
    ("Ideation", "Creative Ideation"),
    ("Communication", "Communication"),
    ("Achiever", "Achievement Drive"),
    ("Focus", "Goal Focus"),
    ("Responsibility", "Responsibility"),
    ("Developer", "Developing Others"),
    ("Relator", "Deep Relationships"),
];

const HOLLAND_TYPES: &[(&str, &str)] = &[
    ("R", "Realistic"),
    ("I", "Investigative"),
    ("A", "Artistic"),
    ("S", "Social"),
    ("E", "Enterprising"),
    ("C", "Conventional"),
];

/// Display name of a strength code; unknown codes are returned unchanged.
pub fn strength_name(code: &str) -> &str {
    STRENGTH_NAMES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| *name)
        .unwrap_or(code)
}

/// Holland type name for a single-letter code.
pub fn holland_type(code: &str) -> Option<&'static str> {
    HOLLAND_TYPES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| *name)
}
