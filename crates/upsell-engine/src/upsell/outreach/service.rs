use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::super::domain::ScoredUser;
use super::super::roster::{RosterError, RosterSource};
use super::super::scoring::ScoreEngine;
use super::message::OutreachDraft;
use super::repository::{OutboxError, OutreachId, OutreachOutbox, OutreachRecord};

/// Caller-edited outreach, submitted for a simulated send.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutreachRequest {
    pub user_id: String,
    pub subject: String,
    pub message: String,
}

/// Service composing the roster, score engine, and outbox.
pub struct OutreachService<R, O> {
    roster: Arc<R>,
    outbox: Arc<O>,
    engine: ScoreEngine,
}

static OUTREACH_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_outreach_id() -> OutreachId {
    let id = OUTREACH_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    OutreachId(format!("out-{id:06}"))
}

impl<R, O> OutreachService<R, O>
where
    R: RosterSource + 'static,
    O: OutreachOutbox + 'static,
{
    pub fn new(roster: Arc<R>, outbox: Arc<O>) -> Self {
        Self::with_engine(roster, outbox, ScoreEngine::standard())
    }

    pub fn with_engine(roster: Arc<R>, outbox: Arc<O>, engine: ScoreEngine) -> Self {
        Self {
            roster,
            outbox,
            engine,
        }
    }

    fn scored_user(&self, user_id: &str) -> Result<ScoredUser, OutreachServiceError> {
        self.roster
            .load()?
            .iter()
            .find(|user| user.id == user_id)
            .map(|user| self.engine.score_user(user))
            .ok_or_else(|| OutreachServiceError::UnknownUser(user_id.to_string()))
    }

    /// Prefilled draft for the outreach composer.
    pub fn draft(&self, user_id: &str) -> Result<OutreachDraft, OutreachServiceError> {
        let scored = self.scored_user(user_id)?;
        debug!(user_id, score = scored.upsell_score, "composed outreach draft");
        Ok(OutreachDraft::for_user(&scored))
    }

    /// Record an edited message in the outbox. Nothing leaves the process.
    pub fn send(&self, request: OutreachRequest) -> Result<OutreachRecord, OutreachServiceError> {
        let subject = request.subject.trim();
        if subject.is_empty() {
            return Err(OutreachServiceError::EmptySubject);
        }
        let message = request.message.trim();
        if message.is_empty() {
            return Err(OutreachServiceError::EmptyMessage);
        }

        let scored = self.scored_user(&request.user_id)?;
        let record = OutreachRecord {
            outreach_id: next_outreach_id(),
            user_id: scored.user.id.clone(),
            recipient: scored.user.email.clone(),
            subject: subject.to_string(),
            message: message.to_string(),
            sent_at: Utc::now(),
        };

        let stored = self.outbox.record(record)?;
        info!(
            outreach_id = %stored.outreach_id.0,
            user_id = %stored.user_id,
            priority = scored.priority.label(),
            "upgrade outreach recorded"
        );
        Ok(stored)
    }

    pub fn history(&self, user_id: &str) -> Result<Vec<OutreachRecord>, OutreachServiceError> {
        self.scored_user(user_id)?;
        Ok(self.outbox.history(user_id)?)
    }
}

/// Error raised by the outreach service.
#[derive(Debug, thiserror::Error)]
pub enum OutreachServiceError {
    #[error("no user with id '{0}' in the roster")]
    UnknownUser(String),
    #[error("outreach subject must not be empty")]
    EmptySubject,
    #[error("outreach message must not be empty")]
    EmptyMessage,
    #[error(transparent)]
    Roster(#[from] RosterError),
    #[error(transparent)]
    Outbox(#[from] OutboxError),
}
