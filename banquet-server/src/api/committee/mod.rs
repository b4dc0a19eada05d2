//! Committee API 模块
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/committee | GET | 读取筹委会名单 (无文件时返回内置名单) |
//! | /api/committee | POST | 整体替换名单 |
//! | /api/committee/members | GET | 去重后的成员及其职务 |

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/committee", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::get).post(handler::replace))
        .route("/members", get(handler::members))
}
