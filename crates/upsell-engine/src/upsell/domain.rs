use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Subscription tier a workspace is currently billed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SubscriptionPlan {
    Free,
    Basic,
    Premium,
}

impl SubscriptionPlan {
    pub const fn ordered() -> [Self; 3] {
        [Self::Free, Self::Basic, Self::Premium]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Free => "Free",
            Self::Basic => "Basic",
            Self::Premium => "Premium",
        }
    }
}

impl fmt::Display for SubscriptionPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SubscriptionPlan {
    type Err = UnknownPlan;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "free" => Ok(Self::Free),
            "basic" => Ok(Self::Basic),
            "premium" => Ok(Self::Premium),
            _ => Err(UnknownPlan(value.trim().to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown subscription plan '{0}' (expected Free, Basic, or Premium)")]
pub struct UnknownPlan(pub String);

/// Monthly usage count of a named product feature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureUsage {
    pub name: String,
    pub frequency: u32,
}

/// Raw engagement metrics collected per user.
///
/// `login_frequency` is average logins per week and `team_seats` is a count of
/// active seats; both are unbounded above. The remaining fields are fractions
/// in `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngagementSignals {
    pub login_frequency: f64,
    pub feature_depth: f64,
    pub ai_assist_usage: f64,
    pub team_seats: u32,
    pub expansion_signals: f64,
}

impl EngagementSignals {
    pub fn validate(&self) -> Result<(), SignalError> {
        if !self.login_frequency.is_finite() || self.login_frequency < 0.0 {
            return Err(SignalError::NegativeOrNonFinite {
                field: "login_frequency",
                value: self.login_frequency,
            });
        }

        for (field, value) in [
            ("feature_depth", self.feature_depth),
            ("ai_assist_usage", self.ai_assist_usage),
            ("expansion_signals", self.expansion_signals),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(SignalError::FractionOutOfRange { field, value });
            }
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SignalError {
    #[error("{field} must be a finite, non-negative number (got {value})")]
    NegativeOrNonFinite { field: &'static str, value: f64 },
    #[error("{field} must be a fraction between 0 and 1 (got {value})")]
    FractionOutOfRange { field: &'static str, value: f64 },
}

/// Customer record as supplied by a roster source. Never mutated by scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpsellUser {
    pub id: String,
    pub name: String,
    pub title: String,
    pub company: String,
    pub email: String,
    pub plan: SubscriptionPlan,
    /// Ordered by priority; the first entry is the user's headline feature.
    pub features: Vec<FeatureUsage>,
    pub metrics: EngagementSignals,
    pub last_active: String,
    pub preferred_upgrade: String,
    #[serde(default)]
    pub blockers: Vec<String>,
    #[serde(default)]
    pub narrative: String,
}

impl UpsellUser {
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }

    pub fn top_feature(&self) -> Option<&FeatureUsage> {
        self.features.first()
    }
}

/// Outreach triage bucket derived from the upsell score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    Hot,
    Warm,
    Nurture,
}

impl Priority {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Hot => "Hot",
            Self::Warm => "Warm",
            Self::Nurture => "Nurture",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A user together with the values derived from it by the score engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredUser {
    #[serde(flatten)]
    pub user: UpsellUser,
    pub upsell_score: f64,
    pub priority: Priority,
    pub feature_adoption_rate: u32,
}
