use super::super::domain::ScoredUser;
use serde::{Deserialize, Serialize};

pub const DEFAULT_SUBJECT: &str = "Upgrade preview & rollout plan";

const FEATURE_FALLBACK: &str = "our advanced features";
const CLOSING: &str = "Let me know a good time this week to walk through an upgrade preview.";

/// Builds the personalized upgrade pitch for a scored user.
///
/// Greeting, usage highlight, offer and closing are separated by blank lines so
/// the caller can edit each paragraph independently before sending.
pub fn compose_message(scored: &ScoredUser) -> String {
    let user = &scored.user;
    let greeting = format!("Hi {},", user.first_name());

    let highlight = match user.top_feature() {
        Some(feature) => format!(
            "I noticed your team engages with {} {} times per month.",
            feature.name, feature.frequency
        ),
        None => format!("I noticed your team engages with {FEATURE_FALLBACK} frequently."),
    };

    let offer = format!(
        "Based on your {}% AI adoption, our {} plan unlocks deeper automation and concierge rollout support.",
        (user.metrics.ai_assist_usage * 100.0).round() as u32,
        user.preferred_upgrade
    );

    [greeting, highlight, offer, CLOSING.to_string()].join("\n\n")
}

/// Editable outreach email prefilled from the user's data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutreachDraft {
    pub user_id: String,
    pub recipient: String,
    pub subject: String,
    pub message: String,
}

impl OutreachDraft {
    pub fn for_user(scored: &ScoredUser) -> Self {
        Self {
            user_id: scored.user.id.clone(),
            recipient: scored.user.email.clone(),
            subject: DEFAULT_SUBJECT.to_string(),
            message: compose_message(scored),
        }
    }
}
