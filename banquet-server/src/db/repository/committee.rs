//! Committee Repository

use shared::models::CommitteeGroup;

use super::{JsonStore, StoreResult};

pub const COMMITTEE_FILE: &str = "committee.json";

const DEFAULT_COMMITTEE: &str = include_str!("../../../seed/committee.json");

/// Built-in committee served until one is saved
pub fn default_committee() -> Vec<CommitteeGroup> {
    serde_json::from_str(DEFAULT_COMMITTEE).unwrap_or_else(|e| {
        tracing::error!(error = %e, "Built-in committee is malformed");
        Vec::new()
    })
}

#[derive(Clone)]
pub struct CommitteeRepository {
    store: JsonStore,
}

impl CommitteeRepository {
    pub fn new(store: JsonStore) -> Self {
        Self { store }
    }

    pub async fn load(&self) -> StoreResult<Vec<CommitteeGroup>> {
        self.store.read_or(COMMITTEE_FILE, default_committee).await
    }

    pub async fn save(&self, committee: &[CommitteeGroup]) -> StoreResult<()> {
        self.store.write(COMMITTEE_FILE, committee).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{all_members, validate_committee};

    #[test]
    fn test_default_committee() {
        let committee = default_committee();
        assert_eq!(committee.len(), 27);
        assert_eq!(committee[0].role, "大会主席");
        assert_eq!(committee[0].members, vec!["金明".to_string()]);
        assert!(validate_committee(&committee).is_ok());

        // 秀琴 and 国汉 hold two roles each
        let members = all_members(&committee);
        assert!(members.contains(&"秀琴"));
        assert_eq!(members.iter().filter(|m| **m == "国汉").count(), 1);
    }
}
