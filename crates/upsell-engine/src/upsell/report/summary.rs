use super::super::domain::{Priority, ScoredUser};
use super::super::scoring::{DEFAULT_HOT_THRESHOLD, UPSELL_CANDIDATE_THRESHOLD};
use super::views::{FeatureAdoptionPoint, SummarySnapshot};
use std::collections::HashMap;

/// Workspace-level counts, recomputed from scratch on every call.
pub fn summarize(users: &[ScoredUser]) -> SummarySnapshot {
    let total_users = users.len();
    let mut upsell_candidates = 0;
    let mut premium_ready = 0;
    let mut total_feature_depth = 0.0;

    for scored in users {
        if scored.upsell_score >= UPSELL_CANDIDATE_THRESHOLD {
            upsell_candidates += 1;
        }
        if scored.priority == Priority::Hot {
            premium_ready += 1;
        }
        total_feature_depth += scored.user.metrics.feature_depth;
    }

    let average_feature_adoption = if total_users > 0 {
        ((total_feature_depth / total_users as f64) * 100.0).round() as u32
    } else {
        0
    };

    SummarySnapshot {
        total_users,
        upsell_candidates,
        average_feature_adoption,
        premium_ready,
    }
}

/// Population-wide usage per feature name, normalized against the busiest
/// feature. Points are emitted in order of first appearance.
pub fn adoption_breakdown(users: &[ScoredUser]) -> Vec<FeatureAdoptionPoint> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut totals: Vec<(&str, u64)> = Vec::new();

    for scored in users {
        for feature in &scored.user.features {
            let name = feature.name.as_str();
            let slot = *index.entry(name).or_insert_with(|| {
                totals.push((name, 0));
                totals.len() - 1
            });
            totals[slot].1 += u64::from(feature.frequency);
        }
    }

    let max_frequency = totals
        .iter()
        .map(|(_, frequency)| *frequency)
        .max()
        .unwrap_or(0)
        .max(1);

    totals
        .into_iter()
        .map(|(name, frequency)| FeatureAdoptionPoint {
            name: name.to_string(),
            frequency,
            adoption: ((frequency as f64 / max_frequency as f64) * 100.0).round() as u8,
        })
        .collect()
}

/// Users scoring at or above `threshold`, in input order.
pub fn filter_hot_targets(users: &[ScoredUser], threshold: f64) -> Vec<&ScoredUser> {
    users
        .iter()
        .filter(|scored| scored.upsell_score >= threshold)
        .collect()
}

pub fn hot_targets(users: &[ScoredUser]) -> Vec<&ScoredUser> {
    filter_hot_targets(users, DEFAULT_HOT_THRESHOLD)
}

pub fn find_user<'a>(users: &'a [ScoredUser], user_id: &str) -> Option<&'a ScoredUser> {
    users.iter().find(|scored| scored.user.id == user_id)
}
