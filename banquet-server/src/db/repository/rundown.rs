//! Rundown Repository

use shared::models::RundownDay;

use super::{JsonStore, StoreResult};

pub const RUNDOWN_FILE: &str = "rundown.json";

#[derive(Clone)]
pub struct RundownRepository {
    store: JsonStore,
}

impl RundownRepository {
    pub fn new(store: JsonStore) -> Self {
        Self { store }
    }

    /// Empty until a rundown is saved
    pub async fn load(&self) -> StoreResult<Vec<RundownDay>> {
        self.store.read_or(RUNDOWN_FILE, Vec::new).await
    }

    pub async fn save(&self, days: &[RundownDay]) -> StoreResult<()> {
        self.store.write(RUNDOWN_FILE, days).await
    }
}
