mod insights;
mod summary;
pub mod views;

pub use insights::{
    build_dashboard, build_user_detail, metric_breakdown, summary_cards, user_row,
};
pub use summary::{adoption_breakdown, filter_hot_targets, find_user, hot_targets, summarize};
pub use views::{
    DashboardView, FeatureAdoptionPoint, MetricItem, SpotlightView, SummaryCard,
    SummarySnapshot, UserDetailView, UserRow,
};
