//! Seating Table Repository

use shared::models::{SeatingTable, SeatingTableCreate, SeatingTableUpdate};
use shared::seating::{
    ImportReport, ImportRow, allocate_batch, duplicate_table_numbers, next_table_number,
};
use shared::util::{snowflake_id, snowflake_ids};

use super::{JsonStore, StoreError, StoreResult};

pub const TABLES_FILE: &str = "tables.json";

#[derive(Clone)]
pub struct TableRepository {
    store: JsonStore,
}

impl TableRepository {
    pub fn new(store: JsonStore) -> Self {
        Self { store }
    }

    pub async fn find_all(&self) -> StoreResult<Vec<SeatingTable>> {
        self.store.read_or(TABLES_FILE, Vec::new).await
    }

    pub async fn find_by_id(&self, id: i64) -> StoreResult<Option<SeatingTable>> {
        Ok(self.find_all().await?.into_iter().find(|t| t.id == id))
    }

    async fn save(&self, tables: &[SeatingTable]) -> StoreResult<()> {
        self.store.write(TABLES_FILE, tables).await
    }

    /// Create a table; the number defaults to one past the highest in use
    pub async fn create(&self, data: SeatingTableCreate) -> StoreResult<SeatingTable> {
        let mut tables = self.find_all().await?;
        let table_number = data
            .table_number
            .unwrap_or_else(|| next_table_number(&tables));
        if tables.iter().any(|t| t.table_number == table_number) {
            return Err(StoreError::TableNumberTaken(table_number));
        }

        let table = data.into_table(snowflake_id(), table_number);
        tables.push(table.clone());
        self.save(&tables).await?;
        Ok(table)
    }

    /// Apply a partial update; `None` when the table does not exist
    pub async fn update(
        &self,
        id: i64,
        data: SeatingTableUpdate,
    ) -> StoreResult<Option<SeatingTable>> {
        let mut tables = self.find_all().await?;
        if let Some(number) = data.table_number
            && tables.iter().any(|t| t.id != id && t.table_number == number)
        {
            return Err(StoreError::TableNumberTaken(number));
        }
        let Some(table) = tables.iter_mut().find(|t| t.id == id) else {
            return Ok(None);
        };
        data.apply_to(table);
        let updated = table.clone();
        self.save(&tables).await?;
        Ok(Some(updated))
    }

    /// +/- pax control, clamped at 0
    pub async fn adjust_pax(&self, id: i64, delta: i32) -> StoreResult<Option<SeatingTable>> {
        let mut tables = self.find_all().await?;
        let Some(table) = tables.iter_mut().find(|t| t.id == id) else {
            return Ok(None);
        };
        table.adjust_pax(delta);
        let updated = table.clone();
        self.save(&tables).await?;
        Ok(Some(updated))
    }

    pub async fn delete(&self, id: i64) -> StoreResult<bool> {
        let mut tables = self.find_all().await?;
        let before = tables.len();
        tables.retain(|t| t.id != id);
        if tables.len() == before {
            return Ok(false);
        }
        self.save(&tables).await?;
        Ok(true)
    }

    /// Swap the whole plan. Tables with `id = 0` get a fresh id.
    pub async fn replace_all(&self, mut tables: Vec<SeatingTable>) -> StoreResult<Vec<SeatingTable>> {
        if let Some(&number) = duplicate_table_numbers(&tables).first() {
            return Err(StoreError::TableNumberTaken(number));
        }
        assign_ids(&mut tables);
        self.save(&tables).await?;
        Ok(tables)
    }

    /// Allocate imported rows and persist the produced tables.
    ///
    /// With `replace` the new tables become the whole plan; otherwise they
    /// are appended and must not reuse a number already in the plan.
    pub async fn import(&self, rows: &[ImportRow], replace: bool) -> StoreResult<ImportReport> {
        let allocation = allocate_batch(rows);
        let mut created = allocation.tables;

        if let Some(&number) = duplicate_table_numbers(&created).first() {
            return Err(StoreError::TableNumberTaken(number));
        }
        let mut tables = if replace {
            Vec::new()
        } else {
            self.find_all().await?
        };
        if let Some(taken) = created
            .iter()
            .find(|new| tables.iter().any(|t| t.table_number == new.table_number))
        {
            return Err(StoreError::TableNumberTaken(taken.table_number));
        }

        assign_ids(&mut created);
        tables.extend(created.iter().cloned());
        self.save(&tables).await?;

        Ok(ImportReport {
            created,
            warnings: allocation.warnings,
            skipped_lines: Vec::new(),
        })
    }
}

fn assign_ids(tables: &mut [SeatingTable]) {
    let missing = tables.iter().filter(|t| t.id == 0).count();
    let mut ids = snowflake_ids(missing).into_iter();
    for table in tables.iter_mut().filter(|t| t.id == 0) {
        if let Some(id) = ids.next() {
            table.id = id;
        }
    }
}
