//! Category API Handlers

use axum::{
    Json,
    extract::{Query, State},
};
use serde::{Deserialize, Serialize};
use shared::models::CategoryLists;
use shared::seating::{CategoryClassifier, CategoryGroup, GroupStyle, styles_for};

use crate::core::ServerState;
use crate::db::repository::CategoryRepository;
use crate::utils::{AppError, AppResult, ErrorCode, SaveResponse, saved};

/// GET /api/categories - 获取分类名单
pub async fn get(State(state): State<ServerState>) -> AppResult<Json<CategoryLists>> {
    let repo = CategoryRepository::new(state.store.clone());
    Ok(Json(repo.load().await?))
}

/// POST /api/categories - 整体替换分类名单
pub async fn replace(
    State(state): State<ServerState>,
    Json(mut lists): Json<CategoryLists>,
) -> AppResult<Json<SaveResponse>> {
    lists.normalize();
    lists
        .validate()
        .map_err(|msg| AppError::with_message(ErrorCode::CategoryListInvalid, msg))?;

    let repo = CategoryRepository::new(state.store.clone());
    repo.save(&lists).await?;
    tracing::info!(lists = lists.0.len(), "Category lists saved");
    Ok(saved())
}

/// GET /api/categories/names - 全部单位名称
pub async fn names(State(state): State<ServerState>) -> AppResult<Json<Vec<String>>> {
    let repo = CategoryRepository::new(state.store.clone());
    let lists = repo.load().await?;
    Ok(Json(lists.all_names().into_iter().map(str::to_string).collect()))
}

#[derive(Debug, Deserialize)]
pub struct ClassifyQuery {
    pub name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct Classification {
    pub name: String,
    pub group: CategoryGroup,
    pub label: &'static str,
    pub styles: GroupStyle,
}

/// GET /api/categories/classify?name= - 单位分组
pub async fn classify(
    State(state): State<ServerState>,
    Query(query): Query<ClassifyQuery>,
) -> AppResult<Json<Classification>> {
    let repo = CategoryRepository::new(state.store.clone());
    let classifier = CategoryClassifier::from_lists(&repo.load().await?);
    let group = classifier.classify(query.name.as_deref());
    Ok(Json(Classification {
        name: query.name.unwrap_or_default(),
        group,
        label: group.label(),
        styles: styles_for(group),
    }))
}
