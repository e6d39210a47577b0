//! Deterministic text generation from a `FitResult`.
//!
//! Pure interpolation; the only branch is the department-keyword clause.

use crate::assessment::axes::strongest_axis;
use crate::assessment::engine::FitResult;
use crate::assessment::rubric::{holland_type, strength_name, TECHNICAL_KEYWORD};

const NAME_PLACEHOLDER: &str = "[Your Name]";

fn strength_list(result: &FitResult) -> String {
    result
        .ranked_strengths
        .iter()
        .map(|s| strength_name(&s.code))
        .collect::<Vec<_>>()
        .join(", ")
}

fn leading_strength(result: &FitResult) -> &str {
    result
        .ranked_strengths
        .first()
        .map(|s| strength_name(&s.code))
        .unwrap_or("core")
}

fn leading_holland_type(result: &FitResult) -> &'static str {
    result
        .composite_code
        .get(..1)
        .and_then(holland_type)
        .unwrap_or("balanced")
}

fn top_axis(result: &FitResult) -> &str {
    strongest_axis(&result.axis_scores)
        .map(|a| a.axis.as_str())
        .unwrap_or("overall")
}

fn focus_clause(category: &str) -> &'static str {
    if category.contains(TECHNICAL_KEYWORD) {
        "solve technical problems effectively"
    } else {
        "integrate resources and communicate effectively"
    }
}

/// Self-introduction draft used to pre-fill a résumé.
pub fn resume_draft(result: &FitResult) -> String {
    let dept = &result.best_category;
    format!(
        "[Self-introduction draft]\n\n\
         I am {NAME_PLACEHOLDER}, an explorer with a passion for {dept}. \
         A professional assessment shows my core strengths are \"{strengths}\", \
         which let me bring my {lead} to the challenges of {dept} and {clause}.\n\n\
         My Holland career-interest code is {code}, which points to a {holland} orientation. \
         My \"{axis}\" stands out in particular and will help me take on a key role in a team.\n\n\
         Going forward, I want to turn these traits into concrete project results and create value for my team.",
        strengths = strength_list(result),
        lead = leading_strength(result),
        clause = focus_clause(dept),
        code = result.composite_code,
        holland = leading_holland_type(result),
        axis = top_axis(result),
    )
}

/// Prompt text a user can hand to a career advisor or writing assistant.
pub fn advisor_prompt(result: &FitResult) -> String {
    format!(
        "You are a professional career advisor. Please refine my résumé using the following data:\n\
         1. Target: {dept}\n\
         2. Traits: {code} ({strengths})\n\
         3. Advantage: exceptionally strong {axis}\n\
         Write a confident statement of motivation of about 200 words and give 3 examples of quantified achievements.",
        dept = result.best_category,
        code = result.composite_code,
        strengths = strength_list(result),
        axis = top_axis(result),
    )
}
