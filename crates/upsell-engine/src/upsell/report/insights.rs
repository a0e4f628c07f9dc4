use super::super::domain::{EngagementSignals, ScoredUser};
use super::super::outreach::OutreachDraft;
use super::super::scoring::ScoreEngine;
use super::summary::{adoption_breakdown, filter_hot_targets, summarize};
use super::views::{
    DashboardView, MetricItem, SpotlightView, SummaryCard, SummarySnapshot, UserDetailView,
    UserRow,
};

const HOT_LEAD_NAME_LIMIT: usize = 3;
const TABLE_FEATURE_LIMIT: usize = 3;
const LOGIN_CEILING: f64 = 24.0;

fn percent(fraction: f64) -> u32 {
    (fraction * 100.0).round() as u32
}

/// Table row for a scored user.
pub fn user_row(scored: &ScoredUser) -> UserRow {
    let user = &scored.user;
    UserRow {
        id: user.id.clone(),
        name: user.name.clone(),
        title: user.title.clone(),
        company: user.company.clone(),
        plan: user.plan,
        plan_label: user.plan.label(),
        top_features: user
            .features
            .iter()
            .take(TABLE_FEATURE_LIMIT)
            .cloned()
            .collect(),
        ai_usage_pct: percent(user.metrics.ai_assist_usage),
        last_active: user.last_active.clone(),
        upsell_score: scored.upsell_score,
        priority: scored.priority,
        priority_label: scored.priority.label(),
    }
}

pub(crate) fn spotlight(scored: &ScoredUser) -> SpotlightView {
    let user = &scored.user;
    SpotlightView {
        user_id: user.id.clone(),
        name: user.name.clone(),
        upsell_score: scored.upsell_score,
        narrative: user.narrative.clone(),
        current_plan: user.plan.label(),
        preferred_upgrade: user.preferred_upgrade.clone(),
        top_feature: user.top_feature().map(|feature| feature.name.clone()),
        ai_usage_pct: percent(user.metrics.ai_assist_usage),
    }
}

pub fn summary_cards(snapshot: &SummarySnapshot) -> Vec<SummaryCard> {
    let total = snapshot.total_users;
    let candidate_share = if total > 0 {
        ((snapshot.upsell_candidates as f64 / total as f64) * 100.0)
            .round()
            .min(100.0) as u8
    } else {
        0
    };

    vec![
        SummaryCard {
            label: "Total Users",
            value: total.to_string(),
            secondary: format!(
                "{} active leaders",
                total.saturating_sub(snapshot.premium_ready)
            ),
            progress: total.saturating_mul(9).min(100) as u8,
        },
        SummaryCard {
            label: "Users to Upsell",
            value: snapshot.upsell_candidates.to_string(),
            secondary: format!("{} high intent this week", snapshot.premium_ready),
            progress: candidate_share,
        },
        SummaryCard {
            label: "Feature Adoption Rate",
            value: format!("{}%", snapshot.average_feature_adoption),
            secondary: "Across premium feature set".to_string(),
            progress: snapshot.average_feature_adoption.min(100) as u8,
        },
    ]
}

/// Display rows for the detail view's engagement panel.
pub fn metric_breakdown(signals: &EngagementSignals) -> Vec<MetricItem> {
    let fraction_item = |label, description, raw: f64| {
        let pct = (raw.min(1.0) * 100.0).round() as u8;
        MetricItem {
            label,
            description,
            value: format!("{pct}%"),
            percent: pct,
        }
    };

    vec![
        fraction_item(
            "Feature depth",
            "Advanced workflow adoption",
            signals.feature_depth,
        ),
        fraction_item(
            "AI automation",
            "AI assist usage share",
            signals.ai_assist_usage,
        ),
        MetricItem {
            label: "Weekly logins",
            description: "Team engagement cadence",
            value: format!("{} / {}", signals.login_frequency, LOGIN_CEILING),
            percent: ((signals.login_frequency / LOGIN_CEILING).min(1.0) * 100.0).round() as u8,
        },
        fraction_item(
            "Expansion signals",
            "Seats added, integrations, invites",
            signals.expansion_signals,
        ),
    ]
}

fn weekly_plays(hot_count: usize) -> Vec<String> {
    vec![
        "Launch a concierge onboarding review for premium-ready accounts.".to_string(),
        format!(
            "Send upgrade previews to {} high-intent user{} using the personalized script.",
            hot_count,
            if hot_count == 1 { "" } else { "s" }
        ),
        "Promote AI Assist and Usage Insights paths; they lead adoption for premium upsells."
            .to_string(),
    ]
}

pub fn build_dashboard(users: &[ScoredUser], hot_threshold: f64) -> DashboardView {
    let summary = summarize(users);
    let hot = filter_hot_targets(users, hot_threshold);

    DashboardView {
        hot_threshold,
        summary,
        summary_cards: summary_cards(&summary),
        spotlight: hot.first().map(|scored| spotlight(scored)),
        hot_lead_names: hot
            .iter()
            .take(HOT_LEAD_NAME_LIMIT)
            .map(|scored| scored.user.first_name().to_string())
            .collect(),
        hot_targets: hot.iter().map(|scored| user_row(scored)).collect(),
        feature_adoption: adoption_breakdown(users),
        users: users.iter().map(user_row).collect(),
        weekly_plays: weekly_plays(hot.len()),
    }
}

pub fn build_user_detail(engine: &ScoreEngine, scored: &ScoredUser) -> UserDetailView {
    let user = &scored.user;
    UserDetailView {
        row: user_row(scored),
        email: user.email.clone(),
        metrics: metric_breakdown(&user.metrics),
        score_breakdown: engine.explain(&user.metrics, user.plan),
        features: user.features.clone(),
        blockers: user.blockers.clone(),
        narrative: user.narrative.clone(),
        outreach: OutreachDraft::for_user(scored),
    }
}
