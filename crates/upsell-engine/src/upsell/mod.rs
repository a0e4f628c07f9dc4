pub mod domain;
pub mod outreach;
pub mod report;
pub mod roster;
pub mod scoring;

pub use domain::{
    EngagementSignals, FeatureUsage, Priority, ScoredUser, SubscriptionPlan, UpsellUser,
};
pub use roster::{RosterSource, StaticRoster};
pub use scoring::{attach_score, classify_priority, compute_score, ScoreEngine, ScoringModel};
