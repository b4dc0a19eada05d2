//! Committee API Handlers

use axum::{Json, extract::State};
use serde::Serialize;
use shared::models::{CommitteeGroup, all_members, roles_of, validate_committee};

use crate::core::ServerState;
use crate::db::repository::CommitteeRepository;
use crate::utils::validation::{MAX_NAME_LEN, validate_required_text};
use crate::utils::{AppError, AppResult, ErrorCode, SaveResponse, saved};

/// GET /api/committee - 获取筹委会名单
pub async fn get(State(state): State<ServerState>) -> AppResult<Json<Vec<CommitteeGroup>>> {
    let repo = CommitteeRepository::new(state.store.clone());
    Ok(Json(repo.load().await?))
}

/// POST /api/committee - 整体替换名单
pub async fn replace(
    State(state): State<ServerState>,
    Json(mut committee): Json<Vec<CommitteeGroup>>,
) -> AppResult<Json<SaveResponse>> {
    validate_committee(&committee)
        .map_err(|msg| AppError::with_message(ErrorCode::CommitteeInvalid, msg))?;
    for group in &mut committee {
        validate_required_text(&group.role, "role", MAX_NAME_LEN)?;
        group.role = group.role.trim().to_string();
        group.members.retain(|m| !m.trim().is_empty());
    }

    let repo = CommitteeRepository::new(state.store.clone());
    repo.save(&committee).await?;
    tracing::info!(groups = committee.len(), "Committee saved");
    Ok(saved())
}

/// A member and every role they hold
#[derive(Debug, Serialize)]
pub struct MemberRoles {
    pub name: String,
    pub roles: Vec<String>,
}

/// GET /api/committee/members - 成员列表
pub async fn members(State(state): State<ServerState>) -> AppResult<Json<Vec<MemberRoles>>> {
    let repo = CommitteeRepository::new(state.store.clone());
    let committee = repo.load().await?;
    let members = all_members(&committee)
        .into_iter()
        .map(|name| MemberRoles {
            name: name.to_string(),
            roles: roles_of(&committee, name)
                .into_iter()
                .map(str::to_string)
                .collect(),
        })
        .collect();
    Ok(Json(members))
}
