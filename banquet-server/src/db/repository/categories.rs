//! Category list Repository

use shared::models::CategoryLists;
use shared::seating::default_category_lists;

use super::{JsonStore, StoreResult};

pub const CATEGORIES_FILE: &str = "categories.json";

#[derive(Clone)]
pub struct CategoryRepository {
    store: JsonStore,
}

impl CategoryRepository {
    pub fn new(store: JsonStore) -> Self {
        Self { store }
    }

    /// Curated lists, or the built-in ones until lists are saved
    pub async fn load(&self) -> StoreResult<CategoryLists> {
        self.store.read_or(CATEGORIES_FILE, default_category_lists).await
    }

    pub async fn save(&self, lists: &CategoryLists) -> StoreResult<()> {
        self.store.write(CATEGORIES_FILE, lists).await
    }
}
