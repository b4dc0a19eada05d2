//! Rundown API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Deserialize;
use shared::models::{RundownDay, RundownSlot, add_slot as append_slot, validate_rundown};

use crate::core::ServerState;
use crate::db::repository::RundownRepository;
use crate::utils::validation::{MAX_NAME_LEN, MAX_NOTE_LEN, validate_required_text};
use crate::utils::{AppError, AppResult, ErrorCode, SaveResponse, saved};

/// GET /api/rundown - 获取流程表
pub async fn get(State(state): State<ServerState>) -> AppResult<Json<Vec<RundownDay>>> {
    let repo = RundownRepository::new(state.store.clone());
    Ok(Json(repo.load().await?))
}

/// POST /api/rundown - 整体替换流程表
pub async fn replace(
    State(state): State<ServerState>,
    Json(days): Json<Vec<RundownDay>>,
) -> AppResult<Json<SaveResponse>> {
    validate_rundown(&days).map_err(|msg| AppError::with_message(ErrorCode::RundownInvalid, msg))?;
    for slot in days.iter().flat_map(|d| &d.slots) {
        if slot.activity.chars().count() > MAX_NOTE_LEN || slot.remark.chars().count() > MAX_NOTE_LEN {
            return Err(AppError::with_message(
                ErrorCode::RundownInvalid,
                format!("slot {} text is too long (max {MAX_NOTE_LEN})", slot.id),
            ));
        }
    }

    let repo = RundownRepository::new(state.store.clone());
    repo.save(&days).await?;
    tracing::info!(days = days.len(), "Rundown saved");
    Ok(saved())
}

/// POST /api/rundown/days/:index/slots - 追加空白时段
pub async fn add_slot(
    State(state): State<ServerState>,
    Path(index): Path<usize>,
) -> AppResult<Json<RundownSlot>> {
    let repo = RundownRepository::new(state.store.clone());
    let mut days = repo.load().await?;
    let id = append_slot(&mut days, index)
        .ok_or_else(|| AppError::not_found(format!("Rundown day {}", index)))?;
    repo.save(&days).await?;

    let slot = find_slot(&days, id)?.clone();
    Ok(Json(slot))
}

#[derive(Debug, Deserialize)]
pub struct PersonPayload {
    pub name: String,
}

/// POST /api/rundown/slots/:id/people - 添加负责人 (重复忽略)
pub async fn add_person(
    State(state): State<ServerState>,
    Path(id): Path<u32>,
    Json(payload): Json<PersonPayload>,
) -> AppResult<Json<RundownSlot>> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;

    let repo = RundownRepository::new(state.store.clone());
    let mut days = repo.load().await?;
    let slot = find_slot_mut(&mut days, id)?;
    let added = slot.add_person(&payload.name);
    let slot = slot.clone();
    if added {
        repo.save(&days).await?;
    }
    Ok(Json(slot))
}

/// DELETE /api/rundown/slots/:id/people/:index - 移除负责人
pub async fn remove_person(
    State(state): State<ServerState>,
    Path((id, index)): Path<(u32, usize)>,
) -> AppResult<Json<RundownSlot>> {
    let repo = RundownRepository::new(state.store.clone());
    let mut days = repo.load().await?;
    let slot = find_slot_mut(&mut days, id)?;
    slot.remove_person_at(index)
        .ok_or_else(|| AppError::not_found(format!("Person {} of slot {}", index, id)))?;
    let slot = slot.clone();
    repo.save(&days).await?;
    Ok(Json(slot))
}

fn find_slot(days: &[RundownDay], id: u32) -> AppResult<&RundownSlot> {
    days.iter()
        .flat_map(|d| &d.slots)
        .find(|s| s.id == id)
        .ok_or_else(|| AppError::not_found(format!("Rundown slot {}", id)))
}

fn find_slot_mut(days: &mut [RundownDay], id: u32) -> AppResult<&mut RundownSlot> {
    days.iter_mut()
        .flat_map(|d| d.slots.iter_mut())
        .find(|s| s.id == id)
        .ok_or_else(|| AppError::not_found(format!("Rundown slot {}", id)))
}
