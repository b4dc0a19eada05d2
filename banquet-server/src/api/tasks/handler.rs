//! Task API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use shared::models::serde_helpers::parse_flexible_datetime;
use shared::models::{Comment, Task, TaskCreate, TaskUpdate};
use shared::planning::{
    GanttLayout, RoleTemplates, TaskFilter, TaskSummary, ViewMode, default_templates,
    generate_tasks, overdue_tasks, sort_tasks, upcoming_tasks,
};
use shared::planning::gantt::layout as gantt_layout;

use crate::core::ServerState;
use crate::db::repository::{CommitteeRepository, TaskRepository};
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, validate_optional_text, validate_required_text,
};
use crate::utils::{AppError, AppResult, ErrorCode, SaveResponse, saved_with_message};

/// Upcoming tasks shown on the dashboard
const DASHBOARD_UPCOMING: usize = 5;

/// GET /api/tasks - 获取任务列表
///
/// Open tasks first, newest first within each group.
pub async fn list(
    State(state): State<ServerState>,
    Query(filter): Query<TaskFilter>,
) -> AppResult<Json<Vec<Task>>> {
    let tasks = TaskRepository::new(state.store.clone()).find_all().await?;
    let committee = if filter.role.is_some() {
        CommitteeRepository::new(state.store.clone()).load().await?
    } else {
        Vec::new()
    };

    let mut matched = filter.apply(&tasks, &committee);
    sort_tasks(&mut matched);
    Ok(Json(matched.into_iter().cloned().collect()))
}

/// GET /api/tasks/:id - 获取单个任务
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Task>> {
    let task = TaskRepository::new(state.store.clone())
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::task_not_found(&id))?;
    Ok(Json(task))
}

/// POST /api/tasks - 新建任务
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<TaskCreate>,
) -> AppResult<Json<Task>> {
    validate_required_text(&payload.title, "title", MAX_NAME_LEN)?;
    validate_optional_text(&payload.description, "description", MAX_NOTE_LEN)?;

    let task = payload
        .into_task(Utc::now())
        .map_err(|msg| AppError::with_message(ErrorCode::InvalidFormat, msg))?;
    let task = TaskRepository::new(state.store.clone()).create(task).await?;
    tracing::info!(id = %task.id, title = %task.title, "Task created");
    Ok(Json(task))
}

/// PUT /api/tasks/:id - 更新任务 (部分字段)
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<TaskUpdate>,
) -> AppResult<Json<Task>> {
    if let Some(title) = &payload.title {
        validate_required_text(title, "title", MAX_NAME_LEN)?;
    }
    validate_optional_text(&payload.description, "description", MAX_NOTE_LEN)?;

    let task = TaskRepository::new(state.store.clone())
        .update(&id, payload)
        .await?
        .ok_or_else(|| AppError::task_not_found(&id))?;
    Ok(Json(task))
}

/// DELETE /api/tasks/:id - 删除任务
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    if !TaskRepository::new(state.store.clone()).delete(&id).await? {
        return Err(AppError::task_not_found(&id));
    }
    tracing::info!(id = %id, "Task deleted");
    Ok(Json(true))
}

/// DELETE /api/tasks - 清空任务
pub async fn clear(State(state): State<ServerState>) -> AppResult<Json<SaveResponse>> {
    TaskRepository::new(state.store.clone()).replace_all(&[]).await?;
    tracing::info!("All tasks cleared");
    Ok(saved_with_message("All tasks cleared"))
}

#[derive(Debug, Deserialize)]
pub struct CommentPayload {
    pub text: String,
    pub author: Option<String>,
}

/// POST /api/tasks/:id/comments - 添加评论
pub async fn add_comment(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<CommentPayload>,
) -> AppResult<Json<Task>> {
    if payload.text.trim().is_empty() {
        return Err(AppError::new(ErrorCode::CommentEmpty));
    }
    validate_required_text(&payload.text, "text", MAX_NOTE_LEN)?;

    let comment = Comment::new(payload.text.trim(), payload.author, Utc::now());
    let task = TaskRepository::new(state.store.clone())
        .add_comment(&id, comment)
        .await?
        .ok_or_else(|| AppError::task_not_found(&id))?;
    Ok(Json(task))
}

/// POST /api/tasks/:id/advance - 状态轮转
pub async fn advance(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Task>> {
    let task = TaskRepository::new(state.store.clone())
        .advance_status(&id)
        .await?
        .ok_or_else(|| AppError::task_not_found(&id))?;
    tracing::info!(id = %id, status = task.status.as_str(), "Task status advanced");
    Ok(Json(task))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    /// `YYYY-MM-DD` or ISO timestamp
    pub dinner_date: String,
    /// Defaults to the built-in role templates
    pub templates: Option<Vec<RoleTemplates>>,
}

/// POST /api/tasks/generate - 按模板生成任务 (替换现有任务)
pub async fn generate(
    State(state): State<ServerState>,
    Json(payload): Json<GenerateRequest>,
) -> AppResult<Json<Vec<Task>>> {
    let dinner = parse_flexible_datetime(&payload.dinner_date)
        .ok()
        .flatten()
        .ok_or_else(|| {
            AppError::new(ErrorCode::InvalidDinnerDate)
                .with_detail("dinnerDate", payload.dinner_date.clone())
        })?;

    let committee = CommitteeRepository::new(state.store.clone()).load().await?;
    let templates = payload.templates.unwrap_or_else(default_templates);
    let tasks = generate_tasks(dinner, &committee, &templates, Utc::now());

    TaskRepository::new(state.store.clone())
        .replace_all(&tasks)
        .await?;
    tracing::info!(count = tasks.len(), dinner = %dinner.date_naive(), "Tasks generated");
    Ok(Json(tasks))
}

/// GET /api/tasks/status - 项目状态
pub async fn status(State(state): State<ServerState>) -> AppResult<Json<TaskSummary>> {
    let tasks = TaskRepository::new(state.store.clone()).find_all().await?;
    Ok(Json(TaskSummary::compute(&tasks, Utc::now())))
}

#[derive(Debug, Serialize)]
pub struct Dashboard {
    pub summary: TaskSummary,
    pub overdue: Vec<Task>,
    pub upcoming: Vec<Task>,
}

/// GET /api/tasks/dashboard - 仪表盘
pub async fn dashboard(State(state): State<ServerState>) -> AppResult<Json<Dashboard>> {
    let tasks = TaskRepository::new(state.store.clone()).find_all().await?;
    let now = Utc::now();
    Ok(Json(Dashboard {
        summary: TaskSummary::compute(&tasks, now),
        overdue: overdue_tasks(&tasks, now).into_iter().cloned().collect(),
        upcoming: upcoming_tasks(&tasks, now)
            .into_iter()
            .take(DASHBOARD_UPCOMING)
            .cloned()
            .collect(),
    }))
}

#[derive(Debug, Default, Deserialize)]
pub struct GanttQuery {
    #[serde(default)]
    pub mode: ViewMode,
}

/// GET /api/tasks/gantt?mode= - 甘特图布局
pub async fn gantt(
    State(state): State<ServerState>,
    Query(query): Query<GanttQuery>,
) -> AppResult<Json<GanttLayout>> {
    let tasks = TaskRepository::new(state.store.clone()).find_all().await?;
    Ok(Json(gantt_layout(&tasks, query.mode, Utc::now())))
}
