mod model;
mod rules;

pub use model::{
    PlanMultipliers, PriorityThresholds, ScoreBounds, ScoringModel, SignalCeilings,
    SignalWeights, DEFAULT_HOT_THRESHOLD, UPSELL_CANDIDATE_THRESHOLD,
};

use super::domain::{EngagementSignals, Priority, ScoredUser, SubscriptionPlan, UpsellUser};
use serde::{Deserialize, Serialize};

/// Stateless scorer applying a [`ScoringModel`] to engagement signals.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScoreEngine {
    model: ScoringModel,
}

impl ScoreEngine {
    pub const fn new(model: ScoringModel) -> Self {
        Self { model }
    }

    pub const fn standard() -> Self {
        Self::new(ScoringModel::STANDARD)
    }

    pub fn model(&self) -> &ScoringModel {
        &self.model
    }

    /// Bounded upsell score in `[1.0, 10.0]`, rounded to one decimal.
    pub fn compute_score(&self, signals: &EngagementSignals, plan: SubscriptionPlan) -> f64 {
        rules::breakdown(&self.model, signals, plan).score
    }

    pub fn classify_priority(&self, score: f64) -> Priority {
        rules::classify(&self.model, score)
    }

    /// Per-signal contributions behind a score, for audit views.
    pub fn explain(&self, signals: &EngagementSignals, plan: SubscriptionPlan) -> ScoreBreakdown {
        rules::breakdown(&self.model, signals, plan)
    }

    pub fn score_user(&self, user: &UpsellUser) -> ScoredUser {
        let upsell_score = self.compute_score(&user.metrics, user.plan);
        ScoredUser {
            user: user.clone(),
            upsell_score,
            priority: self.classify_priority(upsell_score),
            feature_adoption_rate: (user.metrics.feature_depth * 100.0).round() as u32,
        }
    }

    /// Scores every user, preserving input order.
    pub fn attach_score(&self, users: &[UpsellUser]) -> Vec<ScoredUser> {
        users.iter().map(|user| self.score_user(user)).collect()
    }
}

/// Weighted contribution of each signal, before and after the plan lift.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub login: f64,
    pub feature_depth: f64,
    pub ai_assist: f64,
    pub seats: f64,
    pub expansion: f64,
    /// Sum of the weighted contributions, in `[0, 1]`.
    pub weighted: f64,
    pub plan_multiplier: f64,
    /// Scaled and lifted value before clamping and rounding.
    pub raw_score: f64,
    pub score: f64,
}

pub fn compute_score(signals: &EngagementSignals, plan: SubscriptionPlan) -> f64 {
    ScoreEngine::standard().compute_score(signals, plan)
}

pub fn classify_priority(score: f64) -> Priority {
    ScoreEngine::standard().classify_priority(score)
}

pub fn attach_score(users: &[UpsellUser]) -> Vec<ScoredUser> {
    ScoreEngine::standard().attach_score(users)
}
