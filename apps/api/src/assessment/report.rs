//! Full brand-test report: the scored result plus the text and
//! recommendations shown alongside the charts.

use serde::Serialize;

use crate::assessment::engine::FitResult;
use crate::assessment::narrative::{advisor_prompt, resume_draft};
use crate::assessment::rubric::{holland_type, strength_name, BenchmarkTier, Rubric};

#[derive(Debug, Clone, Serialize)]
pub struct PlatformRecommendation {
    pub holland_code: String,
    pub holland_type: &'static str,
    pub platform: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ActionCard {
    pub strength: String,
    pub strength_name: String,
    pub book: &'static str,
    pub skill: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct AxisInsight {
    pub axis: String,
    pub score: u8,
    pub tier: BenchmarkTier,
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct BrandReport {
    pub result: FitResult,
    pub resume_draft: String,
    pub advisor_prompt: String,
    pub platform: Option<PlatformRecommendation>,
    pub action_card: Option<ActionCard>,
    pub axis_insights: Vec<AxisInsight>,
}

const PLATFORMS: &[(&str, &str, &str)] = &[
    ("R", "GitHub / tech blog", "Show your repositories, project architecture and technical notes to catch the eye of engineering leads."),
    ("I", "Medium / ResearchGate", "Publish in-depth analysis or research to build authority in your field."),
    ("A", "Instagram / Behance", "Use a visual portfolio to show taste and creativity; suits a brand with a strong personal style."),
    ("S", "Facebook groups / podcast", "Build community ties and share views by voice or text to grow your personal influence."),
    ("E", "LinkedIn", "Grow a professional network and share industry insight and project results to build a business and leadership image."),
    ("C", "Notion / personal website", "Curate a structured knowledge base or résumé that shows you are organised and dependable."),
];

const ACTION_CARDS: &[(&str, &str, &str)] = &[
    ("Strategic", "Good Strategy Bad Strategy", "Mind mapping, SWOT analysis"),
    ("Learner", "Peak: Secrets from the New Science of Expertise", "Speed reading, personal knowledge management (Obsidian)"),
    ("Analytical", "Thinking, Fast and Slow", "Python data analysis, Tableau visualisation"),
    ("Ideation", "Creative Confidence", "Design thinking, brainstorm facilitation"),
    ("Communication", "Talk Like TED", "Presentation design, storytelling"),
    ("Achiever", "Atomic Habits", "Project management (Agile/Scrum), time management (Pomodoro)"),
    ("Focus", "Deep Work", "Goal setting (OKR), triggering flow"),
    ("Responsibility", "The Oz Principle", "Risk management, quality control"),
    ("Developer", "Trillion Dollar Coach", "Coaching, training design"),
    ("Relator", "How to Win Friends and Influence People", "Empathic listening, conflict management"),
];

fn platform_for(code: &str) -> Option<PlatformRecommendation> {
    let &(_, platform, description) = PLATFORMS.iter().find(|(c, _, _)| *c == code)?;
    Some(PlatformRecommendation {
        holland_code: code.to_string(),
        holland_type: holland_type(code)?,
        platform,
        description,
    })
}

fn action_card_for(code: &str) -> Option<ActionCard> {
    let &(_, book, skill) = ACTION_CARDS.iter().find(|(c, _, _)| *c == code)?;
    Some(ActionCard {
        strength: code.to_string(),
        strength_name: strength_name(code).to_string(),
        book,
        skill,
    })
}

pub fn build_brand_report(result: FitResult, rubric: &Rubric) -> BrandReport {
    let platform = result.composite_code.get(..1).and_then(platform_for);
    let action_card = result
        .ranked_strengths
        .first()
        .and_then(|s| action_card_for(&s.code));

    let axis_insights = result
        .axis_scores
        .iter()
        .filter_map(|score| {
            let axis = rubric.axis(&score.axis)?;
            Some(AxisInsight {
                axis: score.axis.clone(),
                score: score.score,
                tier: score.tier,
                description: axis.benchmark.describe(score.tier),
            })
        })
        .collect();

    BrandReport {
        resume_draft: resume_draft(&result),
        advisor_prompt: advisor_prompt(&result),
        platform,
        action_card,
        axis_insights,
        result,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::engine::BrandScorer;
    use crate::assessment::responses::AnswerSet;
    use crate::scoring::ScoringModel;

    #[test]
    fn test_report_for_default_answers() {
        let scorer = BrandScorer::with_default_tables();
        let result = scorer.score(&AnswerSet::new());
        let report = build_brand_report(result, scorer.rubric());

        let platform = report.platform.expect("platform");
        assert_eq!(platform.holland_code, "I");
        assert_eq!(platform.holland_type, "Investigative");

        let card = report.action_card.expect("action card");
        assert_eq!(card.strength, "Strategic");
        assert_eq!(card.book, "Good Strategy Bad Strategy");

        assert_eq!(report.axis_insights.len(), 6);
        assert_eq!(report.axis_insights[0].description, "Can read and interpret basic data");
        assert!(!report.resume_draft.is_empty());
        assert!(report.advisor_prompt.contains("200 words"));
    }

    #[test]
    fn test_report_without_code_has_no_platform() {
        let scorer = BrandScorer::with_default_tables();
        let mut result = scorer.score(&AnswerSet::new());
        result.composite_code.clear();
        result.ranked_strengths.clear();
        let report = build_brand_report(result, scorer.rubric());
        assert!(report.platform.is_none());
        assert!(report.action_card.is_none());
    }

    #[test]
    fn test_every_trait_has_display_entries() {
        for (code, _, _) in PLATFORMS {
            assert!(platform_for(code).is_some());
        }
        for (code, _, _) in ACTION_CARDS {
            assert!(action_card_for(code).is_some());
        }
    }
}
