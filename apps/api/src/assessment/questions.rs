use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

pub const SCALE_MIN: u8 = 1;
pub const SCALE_MAX: u8 = 5;
/// Substituted for any question without a recorded response.
pub const SCALE_MIDPOINT: u8 = 3;

/// Which accumulator a question feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Strength,
    InterestCode,
}

/// A measured trait: a strength name or a Holland interest letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TraitKey {
    pub category: Category,
    pub code: &'static str,
}

impl TraitKey {
    pub const fn strength(code: &'static str) -> Self {
        Self {
            category: Category::Strength,
            code,
        }
    }

    pub const fn interest(code: &'static str) -> Self {
        Self {
            category: Category::InterestCode,
            code,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Question {
    pub text: &'static str,
    #[serde(rename = "trait")]
    pub trait_key: TraitKey,
}

impl Question {
    pub const fn new(text: &'static str, trait_key: TraitKey) -> Self {
        Self { text, trait_key }
    }
}

/// Ordered, immutable question table. Indices are the answer-set keys.
#[derive(Debug, Clone)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &Question)> {
        self.questions.iter().enumerate()
    }

    /// Number of questions measuring `key`.
    pub fn question_count(&self, key: TraitKey) -> u32 {
        self.questions.iter().filter(|q| q.trait_key == key).count() as u32
    }
}

/// The brand-test bank: 15 strength questions followed by 15 Holland questions.
pub fn default_bank() -> &'static QuestionBank {
    static BANK: OnceLock<QuestionBank> = OnceLock::new();
    BANK.get_or_init(|| {
        let s = TraitKey::strength;
        let h = TraitKey::interest;
        QuestionBank::new(vec![
            Question::new("Faced with complex, ambiguous project requirements, I quickly identify the risks and several ways forward.", s("Strategic")),
            Question::new("New technologies and unfamiliar fields excite me, and I pick up their core concepts fast enough to apply them at work.", s("Learner")),
            Question::new("In meetings I ask for data, reasoning or concrete evidence to back decisions rather than going on gut feeling.", s("Analytical")),
            Question::new("I often step outside existing frameworks and propose unconventional solutions that surprise the team.", s("Ideation")),
            Question::new("I can turn complex technical language into business value or a story that non-technical people understand.", s("Communication")),
            Question::new("Finishing a task is the baseline for me; I set myself higher KPIs or optimisation targets.", s("Achiever")),
            Question::new("Even with many distractions around me I stay locked on the key goal and keep producing efficiently for long stretches.", s("Focus")),
            Question::new("I treat agreed deadlines as absolute commitments and will remove obstacles on my own to meet them.", s("Responsibility")),
            Question::new("I notice the potential of teammates and gladly offer guidance or resources to help them break through.", s("Developer")),
            Question::new("Rather than small talk, I build long-term, deep and trusting working relationships with stakeholders.", s("Relator")),
            Question::new("When a system or process breaks, my instinct is to take apart the underlying logic and find the root cause.", s("Analytical")),
            Question::new("I break big goals into actionable steps and plan the schedule and resources up front.", s("Strategic")),
            Question::new("I see continuous learning as a career necessity and often study industry news after work.", s("Learner")),
            Question::new("I separate urgent from important and keep resources on the 20% of work that matters most to the organisation.", s("Focus")),
            Question::new("I care about psychological safety and keep the team in harmony and good spirits under pressure.", s("Relator")),
            Question::new("I enjoy operating precision instruments, writing low-level code, or maintaining and assembling hardware.", h("R")),
            Question::new("Rather than abstract strategy talk, I enjoy seeing a product I built with my own hands actually run.", h("R")),
            Question::new("I like digging into algorithms, mathematical models or complex system architectures to find the optimal solution.", h("I")),
            Question::new("When facing an unknown problem I first gather broad data and literature, then draw conclusions.", h("I")),
            Question::new("I hold user interfaces, visual layout and product aesthetics to a high standard and cannot stand output without design sense.", h("A")),
            Question::new("I dislike being bound by fixed procedures and need a workplace where I can express creativity and personal style.", h("A")),
            Question::new("I like handling people problems: mentoring others, resolving customer complaints or running training.", h("S")),
            Question::new("In cross-department projects I often act as the coordinator who makes sure everyone reaches consensus.", h("S")),
            Question::new("I like being the project lead, driving the team towards targets and owning the outcome.", h("E")),
            Question::new("I am persuasive and enjoy pitching to clients or selling my ideas and product value in meetings.", h("E")),
            Question::new("I am good at building filing systems with clear classification so information is easy to retrieve later.", h("C")),
            Question::new("I value detail and precision and follow standards and quality rules strictly when executing tasks.", h("C")),
            Question::new("I attend technical conferences or read papers to stay at the front of my field.", h("I")),
            Question::new("I enjoy speaking in public or presenting the achievements of myself or my team.", h("E")),
            Question::new("I cannot tolerate chaotic or inefficient ways of working and push for optimisation and standardisation.", h("C")),
        ])
    })
}
