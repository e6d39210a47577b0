use std::sync::Arc;

use crate::assessment::engine::BrandScorer;
use crate::career_fit::profile::{CareerFitProfile, ProfileKind};
use crate::career_fit::scorer::CareerFitScorer;
use crate::config::Config;
use crate::handoff::HandoffStore;
use crate::persistence::ResultRepository;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Brand-test scorer over the built-in question bank and rubric.
    pub brand: BrandScorer<'static>,
    pub career_fit: CareerFitScorers,
    pub results: Arc<dyn ResultRepository>,
    /// Brand test → career-fit Holland code handoff, keyed by session id.
    pub handoff: Arc<dyn HandoffStore>,
}

/// One prebuilt scorer per profile.
#[derive(Clone)]
pub struct CareerFitScorers {
    standard: Arc<CareerFitScorer>,
    pro: Arc<CareerFitScorer>,
}

impl CareerFitScorers {
    pub fn new() -> Self {
        Self {
            standard: Arc::new(CareerFitScorer::new(CareerFitProfile::standard())),
            pro: Arc::new(CareerFitScorer::new(CareerFitProfile::pro())),
        }
    }

    pub fn get(&self, kind: ProfileKind) -> &CareerFitScorer {
        match kind {
            ProfileKind::Standard => &self.standard,
            ProfileKind::Pro => &self.pro,
        }
    }
}

impl Default for CareerFitScorers {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new(
        config: Config,
        results: Arc<dyn ResultRepository>,
        handoff: Arc<dyn HandoffStore>,
    ) -> Self {
        Self {
            config,
            brand: BrandScorer::with_default_tables(),
            career_fit: CareerFitScorers::new(),
            results,
            handoff,
        }
    }
}
