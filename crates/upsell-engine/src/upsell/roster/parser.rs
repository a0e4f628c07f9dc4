use super::super::domain::{
    EngagementSignals, FeatureUsage, SignalError, SubscriptionPlan, UnknownPlan, UpsellUser,
};
use serde::{Deserialize, Deserializer};
use std::io::Read;

const LIST_SEPARATOR: char = ';';

#[derive(Debug, thiserror::Error)]
pub enum RosterImportError {
    #[error("failed to read roster export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid roster CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("row {row}: {field} must not be empty")]
    MissingField { row: usize, field: &'static str },
    #[error("row {row}: {source}")]
    InvalidPlan { row: usize, source: UnknownPlan },
    #[error("row {row}: feature entry '{entry}' must look like 'Name:count'")]
    InvalidFeature { row: usize, entry: String },
    #[error("row {row}: {source}")]
    InvalidSignal { row: usize, source: SignalError },
    #[error("row {row}: duplicate user id '{id}'")]
    DuplicateId { row: usize, id: String },
}

pub(crate) fn parse_users<R: Read>(reader: R) -> Result<Vec<UpsellUser>, RosterImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut users = Vec::new();

    for (position, record) in csv_reader.deserialize::<RosterRow>().enumerate() {
        let row = record?;
        users.push(row.into_user(position + 1)?);
    }

    Ok(users)
}

#[derive(Debug, Deserialize)]
struct RosterRow {
    id: String,
    name: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    company: String,
    #[serde(default)]
    email: String,
    plan: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    features: Option<String>,
    login_frequency: f64,
    feature_depth: f64,
    ai_assist_usage: f64,
    team_seats: u32,
    expansion_signals: f64,
    #[serde(default)]
    last_active: String,
    preferred_upgrade: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    blockers: Option<String>,
    #[serde(default)]
    narrative: String,
}

impl RosterRow {
    fn into_user(self, row: usize) -> Result<UpsellUser, RosterImportError> {
        for (field, value) in [
            ("id", &self.id),
            ("name", &self.name),
            ("preferred_upgrade", &self.preferred_upgrade),
        ] {
            if value.is_empty() {
                return Err(RosterImportError::MissingField { row, field });
            }
        }

        let plan = self
            .plan
            .parse::<SubscriptionPlan>()
            .map_err(|source| RosterImportError::InvalidPlan { row, source })?;

        let metrics = EngagementSignals {
            login_frequency: self.login_frequency,
            feature_depth: self.feature_depth,
            ai_assist_usage: self.ai_assist_usage,
            team_seats: self.team_seats,
            expansion_signals: self.expansion_signals,
        };
        metrics
            .validate()
            .map_err(|source| RosterImportError::InvalidSignal { row, source })?;

        let features = match self.features.as_deref() {
            Some(raw) => parse_features(raw, row)?,
            None => Vec::new(),
        };

        Ok(UpsellUser {
            id: self.id,
            name: self.name,
            title: self.title,
            company: self.company,
            email: self.email,
            plan,
            features,
            metrics,
            last_active: self.last_active,
            preferred_upgrade: self.preferred_upgrade,
            blockers: self.blockers.as_deref().map(split_list).unwrap_or_default(),
            narrative: self.narrative,
        })
    }
}

fn parse_features(raw: &str, row: usize) -> Result<Vec<FeatureUsage>, RosterImportError> {
    split_list(raw)
        .into_iter()
        .map(|entry| {
            let parsed = entry.rsplit_once(':').and_then(|(name, count)| {
                let name = name.trim();
                let frequency = count.trim().parse::<u32>().ok()?;
                (!name.is_empty()).then(|| FeatureUsage {
                    name: name.to_string(),
                    frequency,
                })
            });
            parsed.ok_or(RosterImportError::InvalidFeature { row, entry })
        })
        .collect()
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(LIST_SEPARATOR)
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
