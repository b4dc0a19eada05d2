//! Program API Handlers

use axum::{Json, extract::State};
use serde::Serialize;
use shared::models::{ProgramDay, ProgramEvent};

use crate::core::ServerState;
use crate::db::repository::ProgramRepository;
use crate::utils::validation::{MAX_NAME_LEN, validate_optional_text, validate_required_text};
use crate::utils::{AppError, AppResult, ErrorCode, SaveResponse, saved};

/// GET /api/program - 获取节目表
pub async fn get(State(state): State<ServerState>) -> AppResult<Json<Vec<ProgramDay>>> {
    let repo = ProgramRepository::new(state.store.clone());
    Ok(Json(repo.load().await?))
}

/// POST /api/program - 整体替换节目表
pub async fn replace(
    State(state): State<ServerState>,
    Json(days): Json<Vec<ProgramDay>>,
) -> AppResult<Json<SaveResponse>> {
    for day in &days {
        day.validate()
            .map_err(|msg| AppError::with_message(ErrorCode::ProgramInvalid, msg))?;
        for event in &day.events {
            validate_required_text(&event.title, "title", MAX_NAME_LEN)?;
            validate_optional_text(&event.subtitle, "subtitle", MAX_NAME_LEN)?;
        }
    }

    let repo = ProgramRepository::new(state.store.clone());
    repo.save(&days).await?;
    tracing::info!(days = days.len(), "Program saved");
    Ok(saved())
}

/// A program event as printed
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrintedEvent {
    #[serde(flatten)]
    pub event: ProgramEvent,
    /// `7:30 PM`
    pub display_time: String,
}

#[derive(Debug, Serialize)]
pub struct PrintedDay {
    pub date: String,
    pub events: Vec<PrintedEvent>,
}

/// GET /api/program/print - 打印版节目表
pub async fn print(State(state): State<ServerState>) -> AppResult<Json<Vec<PrintedDay>>> {
    let repo = ProgramRepository::new(state.store.clone());
    let mut days = repo.load().await?;
    days.sort_by(|a, b| a.date.cmp(&b.date));

    let printed = days
        .into_iter()
        .map(|mut day| {
            day.sort_events();
            PrintedDay {
                date: day.date,
                events: day
                    .events
                    .into_iter()
                    .map(|event| PrintedEvent {
                        display_time: event.time_12h(),
                        event,
                    })
                    .collect(),
            }
        })
        .collect();
    Ok(Json(printed))
}
