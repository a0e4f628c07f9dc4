use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OutreachId(pub String);

/// Outbox entry for a simulated send.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutreachRecord {
    pub outreach_id: OutreachId,
    pub user_id: String,
    pub recipient: String,
    pub subject: String,
    pub message: String,
    pub sent_at: DateTime<Utc>,
}

/// Sink for outreach sends. Nothing is delivered; adapters only record.
pub trait OutreachOutbox: Send + Sync {
    fn record(&self, record: OutreachRecord) -> Result<OutreachRecord, OutboxError>;
    fn history(&self, user_id: &str) -> Result<Vec<OutreachRecord>, OutboxError>;
}

#[derive(Debug, thiserror::Error)]
pub enum OutboxError {
    #[error("outreach {0:?} already recorded")]
    Conflict(OutreachId),
    #[error("outbox unavailable: {0}")]
    Unavailable(String),
}
