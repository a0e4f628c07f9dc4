mod parser;
mod sample;

use super::domain::UpsellUser;
use std::collections::HashSet;
use std::io::Read;
use std::path::Path;
use tracing::debug;

pub use parser::RosterImportError;

/// Supplier of the ordered user collection the engine scores.
pub trait RosterSource: Send + Sync {
    fn load(&self) -> Result<Vec<UpsellUser>, RosterError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    #[error("roster unavailable: {0}")]
    Unavailable(String),
}

/// In-memory roster, either the bundled sample or a CSV import.
#[derive(Debug, Clone, Default)]
pub struct StaticRoster {
    users: Vec<UpsellUser>,
}

impl StaticRoster {
    pub fn new(users: Vec<UpsellUser>) -> Self {
        Self { users }
    }

    pub fn sample() -> Self {
        Self::new(sample::sample_users())
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, RosterImportError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let roster = Self::from_reader(file)?;
        debug!(path = %path.display(), users = roster.len(), "roster imported");
        Ok(roster)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, RosterImportError> {
        let users = parser::parse_users(reader)?;

        let mut seen = HashSet::new();
        for (position, user) in users.iter().enumerate() {
            if !seen.insert(user.id.as_str()) {
                return Err(RosterImportError::DuplicateId {
                    row: position + 1,
                    id: user.id.clone(),
                });
            }
        }

        Ok(Self::new(users))
    }

    pub fn users(&self) -> &[UpsellUser] {
        &self.users
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl RosterSource for StaticRoster {
    fn load(&self) -> Result<Vec<UpsellUser>, RosterError> {
        Ok(self.users.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const HEADER: &str = "id,name,title,company,email,plan,features,login_frequency,feature_depth,ai_assist_usage,team_seats,expansion_signals,last_active,preferred_upgrade,blockers,narrative\n";

    #[test]
    fn sample_roster_is_valid_and_unique() {
        let roster = StaticRoster::sample();
        assert!(!roster.is_empty());
        let ids: HashSet<_> = roster.users().iter().map(|user| user.id.as_str()).collect();
        assert_eq!(ids.len(), roster.len());
        for user in roster.users() {
            user.metrics.validate().expect("sample metrics are in range");
        }
    }

    #[test]
    fn from_reader_rejects_duplicate_ids() {
        let csv = format!(
            "{HEADER}u-1,Ana Ruiz,CTO,Acme,ana@acme.test,Free,AI Assist:4,5,0.2,0.1,2,0.1,today,Basic,,\n\
             u-1,Ben Ode,COO,Acme,ben@acme.test,Basic,,3,0.1,0.1,1,0.0,today,Premium,,\n"
        );

        match StaticRoster::from_reader(Cursor::new(csv)) {
            Err(RosterImportError::DuplicateId { row, id }) => {
                assert_eq!(row, 2);
                assert_eq!(id, "u-1");
            }
            other => panic!("expected duplicate id error, got {other:?}"),
        }
    }

    #[test]
    fn load_returns_users_in_order() {
        let roster = StaticRoster::sample();
        let loaded = roster.load().expect("static roster always loads");
        assert_eq!(loaded, roster.users());
    }
}
