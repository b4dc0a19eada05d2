//! Seating Table API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use shared::models::{SeatingTable, SeatingTableCreate, SeatingTableUpdate};
use shared::seating::{
    CategoryClassifier, ImportReport, ImportRequest, SeatingStats, filter_tables,
    parse_import_rows, sorted_by_number,
};

use crate::core::ServerState;
use crate::db::repository::{CategoryRepository, TableRepository};
use crate::utils::validation::{
    MAX_IMPORT_LEN, MAX_NAME_LEN, MAX_NOTE_LEN, validate_optional_text, validate_required_text,
    validate_table_number,
};
use crate::utils::{AppError, AppResult, ErrorCode, SaveResponse, saved_with_message};

#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub q: Option<String>,
}

/// GET /api/tables - 获取桌位列表
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<SeatingTable>>> {
    let repo = TableRepository::new(state.store.clone());
    let tables = repo.find_all().await?;
    let filtered: Vec<SeatingTable> = filter_tables(&tables, query.q.as_deref().unwrap_or(""))
        .into_iter()
        .cloned()
        .collect();
    Ok(Json(sorted_by_number(&filtered).into_iter().cloned().collect()))
}

/// GET /api/tables/:id - 获取单个桌位
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<SeatingTable>> {
    let repo = TableRepository::new(state.store.clone());
    let table = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::table_not_found(id))?;
    Ok(Json(table))
}

/// POST /api/tables - 新增桌位
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<SeatingTableCreate>,
) -> AppResult<Json<SeatingTable>> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_optional_text(&payload.category, "category", MAX_NAME_LEN)?;
    validate_optional_text(&payload.notes, "notes", MAX_NOTE_LEN)?;
    if let Some(n) = payload.table_number {
        validate_table_number(n)?;
    }

    let repo = TableRepository::new(state.store.clone());
    let table = repo.create(payload).await?;
    tracing::info!(id = table.id, table_number = table.table_number, "Table created");
    Ok(Json(table))
}

/// PUT /api/tables - 整体替换座位图
pub async fn replace(
    State(state): State<ServerState>,
    Json(tables): Json<Vec<SeatingTable>>,
) -> AppResult<Json<SaveResponse>> {
    for table in &tables {
        validate_required_text(&table.name, "name", MAX_NAME_LEN)?;
        validate_table_number(table.table_number)?;
    }

    let repo = TableRepository::new(state.store.clone());
    let saved = repo.replace_all(tables).await?;
    tracing::info!(tables = saved.len(), "Seating plan replaced");
    Ok(saved_with_message(format!("{} tables saved", saved.len())))
}

/// PUT /api/tables/:id - 更新桌位
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<SeatingTableUpdate>,
) -> AppResult<Json<SeatingTable>> {
    if let Some(name) = &payload.name {
        validate_required_text(name, "name", MAX_NAME_LEN)?;
    }
    validate_optional_text(&payload.category, "category", MAX_NAME_LEN)?;
    validate_optional_text(&payload.notes, "notes", MAX_NOTE_LEN)?;
    if let Some(n) = payload.table_number {
        validate_table_number(n)?;
    }

    let repo = TableRepository::new(state.store.clone());
    let table = repo
        .update(id, payload)
        .await?
        .ok_or_else(|| AppError::table_not_found(id))?;
    Ok(Json(table))
}

/// DELETE /api/tables/:id - 删除桌位
pub async fn delete(State(state): State<ServerState>, Path(id): Path<i64>) -> AppResult<Json<bool>> {
    let repo = TableRepository::new(state.store.clone());
    if !repo.delete(id).await? {
        return Err(AppError::table_not_found(id));
    }
    tracing::info!(id, "Table deleted");
    Ok(Json(true))
}

#[derive(Debug, Deserialize)]
pub struct PaxDelta {
    pub delta: i32,
}

/// POST /api/tables/:id/pax - 人数加减
pub async fn adjust_pax(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<PaxDelta>,
) -> AppResult<Json<SeatingTable>> {
    let repo = TableRepository::new(state.store.clone());
    let table = repo
        .adjust_pax(id, payload.delta)
        .await?
        .ok_or_else(|| AppError::table_not_found(id))?;
    Ok(Json(table))
}

/// POST /api/tables/import - 批量导入
///
/// Each line is `name<TAB>guests<TAB>tables`, e.g. `隆雪南陽葉氏公會\t40\t3/4/5/6`.
pub async fn import(
    State(state): State<ServerState>,
    Json(payload): Json<ImportRequest>,
) -> AppResult<Json<ImportReport>> {
    if payload.text.len() > MAX_IMPORT_LEN {
        return Err(AppError::validation(format!(
            "import text is too large (max {MAX_IMPORT_LEN} bytes)"
        )));
    }
    let batch = parse_import_rows(&payload.text);
    if batch.rows.is_empty() {
        return Err(AppError::new(ErrorCode::ImportEmpty)
            .with_detail("skippedLines", batch.skipped_lines.clone()));
    }

    let repo = TableRepository::new(state.store.clone());
    let mut report = repo.import(&batch.rows, payload.replace).await?;
    report.skipped_lines = batch.skipped_lines;

    for warning in &report.warnings {
        tracing::warn!("Import: {}", warning);
    }
    tracing::info!(
        created = report.created.len(),
        skipped = report.skipped_lines.len(),
        replace = payload.replace,
        "Tables imported"
    );
    Ok(Json(report))
}

/// GET /api/tables/stats - 座位统计
pub async fn stats(State(state): State<ServerState>) -> AppResult<Json<SeatingStats>> {
    let tables = TableRepository::new(state.store.clone()).find_all().await?;
    let lists = CategoryRepository::new(state.store.clone()).load().await?;
    let classifier = CategoryClassifier::from_lists(&lists);
    Ok(Json(SeatingStats::compute(&tables, &classifier)))
}
