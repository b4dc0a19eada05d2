//! Program Repository

use shared::models::ProgramDay;

use super::{JsonStore, StoreResult};

pub const PROGRAM_FILE: &str = "program.json";

const DEFAULT_PROGRAM: &str = include_str!("../../../seed/program.json");

/// Built-in program served until one is saved
pub fn default_program() -> Vec<ProgramDay> {
    serde_json::from_str(DEFAULT_PROGRAM).unwrap_or_else(|e| {
        tracing::error!(error = %e, "Built-in program is malformed");
        Vec::new()
    })
}

#[derive(Clone)]
pub struct ProgramRepository {
    store: JsonStore,
}

impl ProgramRepository {
    pub fn new(store: JsonStore) -> Self {
        Self { store }
    }

    pub async fn load(&self) -> StoreResult<Vec<ProgramDay>> {
        self.store.read_or(PROGRAM_FILE, default_program).await
    }

    pub async fn save(&self, days: &[ProgramDay]) -> StoreResult<()> {
        self.store.write(PROGRAM_FILE, days).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_program() {
        let days = default_program();
        assert_eq!(days.len(), 1);
        assert_eq!(days[0].date, "2024-12-15");
        assert_eq!(days[0].events.len(), 11);
        assert!(days[0].validate().is_ok());

        let ribbon = &days[0].events[5];
        assert_eq!(ribbon.time, "19:40");
        assert!(ribbon.highlight);
        assert!(days[0].events[3].subtitle_highlight);
    }

    #[tokio::test]
    async fn test_load_defaults_then_saved() {
        let dir = tempfile::tempdir().unwrap();
        let repo = ProgramRepository::new(JsonStore::new(dir.path()));
        assert_eq!(repo.load().await.unwrap(), default_program());

        let mut days = default_program();
        days[0].events.truncate(2);
        repo.save(&days).await.unwrap();
        assert_eq!(repo.load().await.unwrap()[0].events.len(), 2);
    }
}
