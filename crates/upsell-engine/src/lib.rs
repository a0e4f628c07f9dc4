//! Upsell scoring and outreach for customer-success dashboards.
//!
//! Raw engagement signals are turned into bounded scores and priority tiers,
//! aggregated into workspace summaries and feature-adoption views, and used to
//! prefill outreach drafts. Everything runs in memory; sends are simulated.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod upsell;
