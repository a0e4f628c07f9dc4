use upsell_engine::upsell::{
    attach_score, classify_priority, compute_score, EngagementSignals, FeatureUsage, Priority,
    ScoreEngine, ScoringModel, StaticRoster, SubscriptionPlan, UpsellUser,
};

fn signals(login: f64, depth: f64, ai: f64, seats: u32, expansion: f64) -> EngagementSignals {
    EngagementSignals {
        login_frequency: login,
        feature_depth: depth,
        ai_assist_usage: ai,
        team_seats: seats,
        expansion_signals: expansion,
    }
}

fn user(id: &str, plan: SubscriptionPlan, metrics: EngagementSignals) -> UpsellUser {
    UpsellUser {
        id: id.to_string(),
        name: format!("User {id}"),
        title: "Ops".to_string(),
        company: "Acme".to_string(),
        email: format!("{id}@acme.example"),
        plan,
        features: vec![FeatureUsage {
            name: "AI Assist".to_string(),
            frequency: 4,
        }],
        metrics,
        last_active: "today".to_string(),
        preferred_upgrade: "Premium".to_string(),
        blockers: Vec::new(),
        narrative: String::new(),
    }
}

#[test]
fn strong_premium_user_lands_in_warm_tier() {
    let score = compute_score(&signals(20.0, 0.9, 0.85, 10, 0.7), SubscriptionPlan::Premium);
    assert_eq!(score, 7.7);
    assert_eq!(classify_priority(score), Priority::Warm);
}

#[test]
fn same_signals_score_higher_on_lower_plans() {
    let metrics = signals(14.0, 0.6, 0.5, 5, 0.4);
    let free = compute_score(&metrics, SubscriptionPlan::Free);
    let basic = compute_score(&metrics, SubscriptionPlan::Basic);
    let premium = compute_score(&metrics, SubscriptionPlan::Premium);
    assert!(free >= basic && basic >= premium, "{free} {basic} {premium}");
}

#[test]
fn scores_stay_within_scale_for_extreme_inputs() {
    let idle = compute_score(&signals(0.0, 0.0, 0.0, 0, 0.0), SubscriptionPlan::Premium);
    assert_eq!(idle, 1.0);

    let saturated = compute_score(&signals(500.0, 1.0, 1.0, 400, 1.0), SubscriptionPlan::Free);
    assert_eq!(saturated, 10.0);
}

#[test]
fn attach_score_preserves_order_and_inputs() {
    let users = vec![
        user("a", SubscriptionPlan::Basic, signals(3.0, 0.1, 0.1, 1, 0.0)),
        user("b", SubscriptionPlan::Free, signals(22.0, 0.9, 0.9, 11, 0.8)),
    ];
    let snapshot = users.clone();

    let scored = attach_score(&users);
    assert_eq!(users, snapshot);
    assert_eq!(scored.len(), 2);
    assert_eq!(scored[0].user.id, "a");
    assert_eq!(scored[1].user.id, "b");
    assert_eq!(scored[1].priority, Priority::Hot);
    assert_eq!(scored[1].feature_adoption_rate, 90);

    let rescored = attach_score(&users);
    assert_eq!(scored, rescored);
}

#[test]
fn sample_roster_scores_match_reference_tiers() {
    let roster = StaticRoster::sample();
    let scored = attach_score(roster.users());

    let hot: Vec<&str> = scored
        .iter()
        .filter(|user| user.priority == Priority::Hot)
        .map(|user| user.user.first_name())
        .collect();
    assert_eq!(hot, vec!["Ava", "Marcus", "Lena"]);
    assert!(scored.iter().all(|user| (1.0..=10.0).contains(&user.upsell_score)));
}

#[test]
fn injected_model_changes_tiers_without_touching_inputs() {
    let mut model = ScoringModel::STANDARD;
    model.thresholds.hot = 7.0;
    let engine = ScoreEngine::new(model);

    let metrics = signals(20.0, 0.9, 0.85, 10, 0.7);
    let score = engine.compute_score(&metrics, SubscriptionPlan::Premium);
    assert_eq!(score, 7.7);
    assert_eq!(engine.classify_priority(score), Priority::Hot);
    assert_eq!(classify_priority(score), Priority::Warm);
}
