//! Career-fit check — a résumé health index from declared academic record,
//! experience, certifications, and Holland interests.
//!
//! Inputs are first reduced to `CareerFitFacts` (counts and flags), then fed
//! through a `LinearModel` whose five dimension rules and weight vector come
//! from the selected `CareerFitProfile`.

use serde::{Deserialize, Serialize};

use crate::career_fit::catalog::{
    department, is_known_experience, CertificationTier, CourseKind, Department, Grade,
    HOLLAND_CODES,
};
use crate::career_fit::profile::{AcademicRule, CareerFitProfile, ProfileKind};
use crate::errors::AssessmentError;
use crate::scoring::{rounded_percent, DimensionScore, LinearModel, ScoringModel};

pub const ACADEMIC: &str = "academic";
pub const PRACTICAL: &str = "practical";
pub const SKILL: &str = "skill";
pub const MATCH: &str = "match";
pub const COMMUNICATION: &str = "communication";

const UNSPECIFIED_CODE: &str = "unspecified";
const HIGH_MATCH: u32 = 80;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareerFitInput {
    pub department: String,
    pub grade: Grade,
    #[serde(default)]
    pub completed_courses: Vec<String>,
    #[serde(default)]
    pub experiences: Vec<String>,
    #[serde(default)]
    pub certifications: Vec<CertificationTier>,
    /// Holland letters in the order the user picked them.
    #[serde(default)]
    pub holland: Vec<String>,
}

/// Counts and flags the dimension rules read.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CareerFitFacts {
    pub listed_courses: u32,
    pub completed_courses: u32,
    pub required_listed: u32,
    pub required_done: u32,
    pub electives_done: u32,
    pub experience_count: u32,
    pub has_soft_signal: bool,
    pub best_tier: Option<CertificationTier>,
    pub holland_overlap: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActionStep {
    pub day: String,
    pub action: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MatchLevel {
    High,
    Typical,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CareerFitReport {
    pub profile: ProfileKind,
    pub department: String,
    pub department_name: String,
    pub total: u32, // 0 – 100
    pub dimensions: Vec<DimensionScore>,
    pub holland_code: String,
    pub department_traits: Vec<String>,
    pub match_level: MatchLevel,
    pub careers: Vec<String>,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub action_plan: Vec<ActionStep>,
}

// ────────────────────────────────────────────────────────────────────────────
// Fact extraction
// ────────────────────────────────────────────────────────────────────────────

fn dedup(items: &[String]) -> Vec<&str> {
    let mut seen: Vec<&str> = Vec::new();
    for item in items {
        if !seen.contains(&item.as_str()) {
            seen.push(item);
        }
    }
    seen
}

/// Checks department, experience keys and any Holland letters against the catalog.
pub fn validate(input: &CareerFitInput) -> Result<&'static Department, AssessmentError> {
    let dept = department(&input.department).ok_or_else(|| {
        AssessmentError::Validation(format!("unknown department '{}'", input.department))
    })?;
    if let Some(bad) = input.experiences.iter().find(|e| !is_known_experience(e)) {
        return Err(AssessmentError::Validation(format!(
            "unknown experience '{bad}'"
        )));
    }
    if let Some(bad) = input
        .holland
        .iter()
        .find(|h| !HOLLAND_CODES.contains(&h.as_str()))
    {
        return Err(AssessmentError::Validation(format!(
            "'{bad}' is not a Holland code (expected one of R, I, A, S, E, C)"
        )));
    }
    Ok(dept)
}

/// Reduces the declared record to counts. Courses not listed for the
/// department and grade are ignored.
pub fn extract_facts(
    input: &CareerFitInput,
    dept: &Department,
    profile: &CareerFitProfile,
) -> CareerFitFacts {
    let courses = dept.courses_for(input.grade);
    let completed = dedup(&input.completed_courses);
    let done = |kind: Option<CourseKind>| {
        courses
            .iter()
            .filter(|c| kind.map_or(true, |k| c.kind == k))
            .filter(|c| completed.contains(&c.name))
            .count() as u32
    };

    let experiences = dedup(&input.experiences);
    let holland = dedup(&input.holland);

    CareerFitFacts {
        listed_courses: courses.len() as u32,
        completed_courses: done(None),
        required_listed: courses
            .iter()
            .filter(|c| c.kind == CourseKind::Required)
            .count() as u32,
        required_done: done(Some(CourseKind::Required)),
        electives_done: done(Some(CourseKind::Elective)),
        experience_count: experiences.len() as u32,
        has_soft_signal: experiences
            .iter()
            .any(|e| profile.communication_keys.contains(e)),
        best_tier: input.certifications.iter().min().copied(),
        holland_overlap: holland
            .iter()
            .filter(|h| dept.holland.contains(h))
            .count() as u32,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Model
// ────────────────────────────────────────────────────────────────────────────

fn build_model(profile: &CareerFitProfile) -> LinearModel<CareerFitFacts> {
    let p = profile;
    let [w_academic, w_practical, w_skill, w_match, w_communication] = profile.weights;

    let academic = p.academic;
    let per_experience = p.practical_per_experience;
    let (tier_a, tier_b, baseline) = (p.skill_tier_a, p.skill_tier_b, p.skill_baseline);
    let (two, one, none) = (p.match_two_or_more, p.match_one, p.match_none);
    let (signal, quiet) = (p.communication_signal, p.communication_baseline);

    LinearModel::new()
        .dimension(ACADEMIC, w_academic, move |f: &CareerFitFacts| match academic {
            AcademicRule::CompletionRatio => {
                u32::from(rounded_percent(
                    u64::from(f.completed_courses),
                    u64::from(f.listed_courses),
                ))
            }
            AcademicRule::RequiredWithElectiveBonus {
                required_weight,
                elective_bonus,
            } => {
                let base = if f.required_listed > 0 {
                    f64::from(f.required_done) / f64::from(f.required_listed) * required_weight
                } else {
                    0.0
                };
                let bonus = f64::from(f.electives_done * elective_bonus);
                ((base + bonus).round() as u32).min(100)
            }
        })
        .dimension(PRACTICAL, w_practical, move |f: &CareerFitFacts| {
            (f.experience_count * per_experience).min(100)
        })
        .dimension(SKILL, w_skill, move |f: &CareerFitFacts| match f.best_tier {
            Some(CertificationTier::A) => tier_a,
            Some(CertificationTier::B) => tier_b,
            _ => baseline,
        })
        .dimension(MATCH, w_match, move |f: &CareerFitFacts| {
            match f.holland_overlap {
                n if n >= 2 => two,
                1 => one,
                _ => none,
            }
        })
        .dimension(
            COMMUNICATION,
            w_communication,
            move |f: &CareerFitFacts| if f.has_soft_signal { signal } else { quiet },
        )
}

/// Career-fit scorer for one profile. Build once, share across requests.
#[derive(Debug)]
pub struct CareerFitScorer {
    profile: CareerFitProfile,
    model: LinearModel<CareerFitFacts>,
}

impl CareerFitScorer {
    pub fn new(profile: CareerFitProfile) -> Self {
        let model = build_model(&profile);
        debug_assert!(
            (model.total_weight() - 1.0).abs() < 1e-9,
            "{:?} weights must sum to 1.0",
            profile.kind
        );
        Self { profile, model }
    }

    pub fn evaluate(&self, input: &CareerFitInput) -> Result<CareerFitReport, AssessmentError> {
        let dept = validate(input)?;
        let facts = extract_facts(input, dept, &self.profile);
        let score = self.model.evaluate(&facts);

        let dim = |key: &str| score.dimension(key).unwrap_or(0);
        let (strengths, weaknesses) =
            strengths_and_weaknesses(&self.profile, dim(ACADEMIC), dim(PRACTICAL), dim(SKILL));

        let holland_code = match dedup(&input.holland) {
            codes if codes.is_empty() => UNSPECIFIED_CODE.to_string(),
            codes => codes.into_iter().take(3).collect(),
        };

        Ok(CareerFitReport {
            profile: self.profile.kind,
            department: dept.key.to_string(),
            department_name: dept.name.to_string(),
            total: score.total,
            holland_code,
            department_traits: dept.holland.iter().map(|h| h.to_string()).collect(),
            match_level: if dim(MATCH) >= HIGH_MATCH {
                MatchLevel::High
            } else {
                MatchLevel::Typical
            },
            careers: dept.careers.iter().map(|c| c.to_string()).collect(),
            strengths,
            weaknesses,
            action_plan: action_plan(input.grade),
            dimensions: score.dimensions,
        })
    }
}

impl ScoringModel for CareerFitScorer {
    type Input = CareerFitInput;
    type Output = Result<CareerFitReport, AssessmentError>;

    fn score(&self, input: &CareerFitInput) -> Self::Output {
        self.evaluate(input)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Advice
// ────────────────────────────────────────────────────────────────────────────

fn strengths_and_weaknesses(
    profile: &CareerFitProfile,
    academic: u32,
    practical: u32,
    skill: u32,
) -> (Vec<String>, Vec<String>) {
    let t = profile.strength_thresholds;
    let mut strengths = Vec::new();
    let mut weaknesses = Vec::new();

    if t.passes(academic, t.academic) {
        strengths.push("Solid academic foundation with most core courses completed.".to_string());
    } else {
        weaknesses.push("Gaps in required credits; prioritise completing them.".to_string());
    }

    if t.passes(practical, t.practical) {
        strengths.push("Hands-on experience makes the résumé competitive.".to_string());
    } else {
        weaknesses.push(
            "Little project or internship experience; try a hackathon or a side project."
                .to_string(),
        );
    }

    if let Some(threshold) = t.skill {
        if t.passes(skill, threshold) {
            strengths.push("Good base of certifications and skills.".to_string());
        } else {
            weaknesses.push("Earn a relevant certification or finish a skills course.".to_string());
        }
    }

    (strengths, weaknesses)
}

fn step(day: &str, action: &str) -> ActionStep {
    ActionStep {
        day: day.to_string(),
        action: action.to_string(),
    }
}

/// 30/60/90-day plan: exploration for first and second years, job
/// preparation afterwards.
pub fn action_plan(grade: Grade) -> Vec<ActionStep> {
    if grade.is_early() {
        vec![
            step("30 days", "Explore department electives and join a club or study group that interests you."),
            step("60 days", "Keep your GPA up and try basic programming or design tools (Git/Figma)."),
            step("90 days", "Plan a summer internship or enter an on- or off-campus competition."),
        ]
    } else {
        vec![
            step("30 days", "Organise your GitHub/Behance portfolio and list the key skills you are missing."),
            step("60 days", "Send out internship applications and finish one complete side project."),
            step("90 days", "Practise mock interviews and build a professional network."),
        ]
    }
}
