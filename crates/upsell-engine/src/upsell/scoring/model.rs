use super::super::domain::SubscriptionPlan;
use serde::{Deserialize, Serialize};

/// Scores at or above this value count toward `upsell_candidates`.
pub const UPSELL_CANDIDATE_THRESHOLD: f64 = 7.5;

/// Default cut-off for hot target lists. Matches the Hot tier boundary but is
/// tuned independently of [`PriorityThresholds`].
pub const DEFAULT_HOT_THRESHOLD: f64 = 8.5;

/// Ceilings used to normalize the two unbounded signals into `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SignalCeilings {
    pub login_frequency: f64,
    pub team_seats: f64,
}

/// Weight of each normalized signal in the composite score. Sums to 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SignalWeights {
    pub login: f64,
    pub feature_depth: f64,
    pub ai_assist: f64,
    pub seats: f64,
    pub expansion: f64,
}

impl SignalWeights {
    pub fn total(&self) -> f64 {
        self.login + self.feature_depth + self.ai_assist + self.seats + self.expansion
    }
}

/// Per-plan lift applied after scaling. Lower tiers get more headroom.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanMultipliers {
    pub free: f64,
    pub basic: f64,
    pub premium: f64,
}

impl PlanMultipliers {
    pub const fn for_plan(&self, plan: SubscriptionPlan) -> f64 {
        match plan {
            SubscriptionPlan::Free => self.free,
            SubscriptionPlan::Basic => self.basic,
            SubscriptionPlan::Premium => self.premium,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBounds {
    pub min: f64,
    pub max: f64,
}

/// Lower bounds (inclusive) of the Hot and Warm tiers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriorityThresholds {
    pub hot: f64,
    pub warm: f64,
}

/// Complete set of constants the score engine reads.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringModel {
    pub ceilings: SignalCeilings,
    pub weights: SignalWeights,
    pub scale: f64,
    pub plan_multipliers: PlanMultipliers,
    pub bounds: ScoreBounds,
    pub thresholds: PriorityThresholds,
}

impl ScoringModel {
    pub const STANDARD: ScoringModel = ScoringModel {
        ceilings: SignalCeilings {
            login_frequency: 24.0,
            team_seats: 12.0,
        },
        weights: SignalWeights {
            login: 0.20,
            feature_depth: 0.27,
            ai_assist: 0.24,
            seats: 0.14,
            expansion: 0.15,
        },
        scale: 10.0,
        plan_multipliers: PlanMultipliers {
            free: 1.32,
            basic: 1.12,
            premium: 0.92,
        },
        bounds: ScoreBounds {
            min: 1.0,
            max: 10.0,
        },
        thresholds: PriorityThresholds {
            hot: 8.5,
            warm: 6.5,
        },
    };
}

impl Default for ScoringModel {
    fn default() -> Self {
        Self::STANDARD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_weights_sum_to_one() {
        let total = ScoringModel::STANDARD.weights.total();
        assert!((total - 1.0).abs() < 1e-9, "weights sum to {total}");
    }

    #[test]
    fn plan_multipliers_favor_lower_tiers() {
        let table = ScoringModel::STANDARD.plan_multipliers;
        assert_eq!(table.for_plan(SubscriptionPlan::Free), 1.32);
        assert_eq!(table.for_plan(SubscriptionPlan::Basic), 1.12);
        assert_eq!(table.for_plan(SubscriptionPlan::Premium), 0.92);
    }
}
