use metrics_exporter_prometheus::PrometheusHandle;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use tracing::info;
use upsell_engine::upsell::outreach::{OutboxError, OutreachOutbox, OutreachRecord};
use upsell_engine::upsell::roster::{RosterImportError, StaticRoster};
use upsell_engine::upsell::ScoreEngine;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Roster and dashboard defaults shared by the read-only upsell routes.
#[derive(Clone)]
pub(crate) struct DashboardState {
    pub(crate) roster: Arc<StaticRoster>,
    pub(crate) engine: ScoreEngine,
    pub(crate) hot_threshold: f64,
}

impl DashboardState {
    pub(crate) fn new(roster: Arc<StaticRoster>, hot_threshold: f64) -> Self {
        Self {
            roster,
            engine: ScoreEngine::standard(),
            hot_threshold,
        }
    }
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryOutreachOutbox {
    records: Arc<Mutex<Vec<OutreachRecord>>>,
}

impl InMemoryOutreachOutbox {
    fn poisoned() -> OutboxError {
        OutboxError::Unavailable("outbox lock poisoned".to_string())
    }
}

impl OutreachOutbox for InMemoryOutreachOutbox {
    fn record(&self, record: OutreachRecord) -> Result<OutreachRecord, OutboxError> {
        let mut guard = self.records.lock().map_err(|_| Self::poisoned())?;
        if guard
            .iter()
            .any(|existing| existing.outreach_id == record.outreach_id)
        {
            return Err(OutboxError::Conflict(record.outreach_id));
        }
        guard.push(record.clone());
        Ok(record)
    }

    fn history(&self, user_id: &str) -> Result<Vec<OutreachRecord>, OutboxError> {
        let guard = self.records.lock().map_err(|_| Self::poisoned())?;
        Ok(guard
            .iter()
            .filter(|record| record.user_id == user_id)
            .cloned()
            .collect())
    }
}

/// Loads the roster export when one is configured, otherwise the bundled sample.
pub(crate) fn load_roster(path: Option<&Path>) -> Result<StaticRoster, RosterImportError> {
    match path {
        Some(path) => {
            let roster = StaticRoster::from_path(path)?;
            info!(path = %path.display(), users = roster.len(), "loaded roster export");
            Ok(roster)
        }
        None => Ok(StaticRoster::sample()),
    }
}
