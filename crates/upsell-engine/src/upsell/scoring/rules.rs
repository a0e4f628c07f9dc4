use super::super::domain::{EngagementSignals, Priority, SubscriptionPlan};
use super::model::ScoringModel;
use super::ScoreBreakdown;

pub(crate) fn normalize(value: f64, ceiling: f64) -> f64 {
    if ceiling <= 0.0 {
        return 0.0;
    }
    (value / ceiling).clamp(0.0, 1.0)
}

pub(crate) fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

pub(crate) fn breakdown(
    model: &ScoringModel,
    signals: &EngagementSignals,
    plan: SubscriptionPlan,
) -> ScoreBreakdown {
    let weights = &model.weights;
    let login = normalize(signals.login_frequency, model.ceilings.login_frequency) * weights.login;
    let feature_depth = signals.feature_depth * weights.feature_depth;
    let ai_assist = signals.ai_assist_usage * weights.ai_assist;
    let seats = normalize(f64::from(signals.team_seats), model.ceilings.team_seats) * weights.seats;
    let expansion = signals.expansion_signals * weights.expansion;

    let weighted = login + feature_depth + ai_assist + seats + expansion;
    let plan_multiplier = model.plan_multipliers.for_plan(plan);
    let raw_score = weighted * model.scale * plan_multiplier;
    let score = round_to_tenth(raw_score.clamp(model.bounds.min, model.bounds.max));

    ScoreBreakdown {
        login,
        feature_depth,
        ai_assist,
        seats,
        expansion,
        weighted,
        plan_multiplier,
        raw_score,
        score,
    }
}

pub(crate) fn classify(model: &ScoringModel, score: f64) -> Priority {
    if score >= model.thresholds.hot {
        Priority::Hot
    } else if score >= model.thresholds.warm {
        Priority::Warm
    } else {
        Priority::Nurture
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_caps_at_ceiling() {
        assert_eq!(normalize(36.0, 24.0), 1.0);
        assert_eq!(normalize(6.0, 12.0), 0.5);
        assert_eq!(normalize(5.0, 0.0), 0.0);
    }

    #[test]
    fn rounding_keeps_one_decimal() {
        assert_eq!(round_to_tenth(7.686), 7.7);
        assert_eq!(round_to_tenth(8.449), 8.4);
        assert_eq!(round_to_tenth(10.0), 10.0);
    }
}
