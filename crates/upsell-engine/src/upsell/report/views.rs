use super::super::domain::{FeatureUsage, Priority, SubscriptionPlan};
use super::super::outreach::OutreachDraft;
use super::super::scoring::ScoreBreakdown;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SummarySnapshot {
    pub total_users: usize,
    pub upsell_candidates: usize,
    pub average_feature_adoption: u32,
    pub premium_ready: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureAdoptionPoint {
    pub name: String,
    pub frequency: u64,
    pub adoption: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryCard {
    pub label: &'static str,
    pub value: String,
    pub secondary: String,
    pub progress: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserRow {
    pub id: String,
    pub name: String,
    pub title: String,
    pub company: String,
    pub plan: SubscriptionPlan,
    pub plan_label: &'static str,
    pub top_features: Vec<FeatureUsage>,
    pub ai_usage_pct: u32,
    pub last_active: String,
    pub upsell_score: f64,
    pub priority: Priority,
    pub priority_label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpotlightView {
    pub user_id: String,
    pub name: String,
    pub upsell_score: f64,
    pub narrative: String,
    pub current_plan: &'static str,
    pub preferred_upgrade: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_feature: Option<String>,
    pub ai_usage_pct: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub hot_threshold: f64,
    pub summary: SummarySnapshot,
    pub summary_cards: Vec<SummaryCard>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spotlight: Option<SpotlightView>,
    pub hot_lead_names: Vec<String>,
    pub hot_targets: Vec<UserRow>,
    pub feature_adoption: Vec<FeatureAdoptionPoint>,
    pub users: Vec<UserRow>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub weekly_plays: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricItem {
    pub label: &'static str,
    pub description: &'static str,
    pub value: String,
    pub percent: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserDetailView {
    pub row: UserRow,
    pub email: String,
    pub metrics: Vec<MetricItem>,
    pub score_breakdown: ScoreBreakdown,
    pub features: Vec<FeatureUsage>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub blockers: Vec<String>,
    pub narrative: String,
    pub outreach: OutreachDraft,
}
