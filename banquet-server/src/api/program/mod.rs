//! Program API 模块
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/program | GET | 读取节目表 (无文件时返回内置节目表) |
//! | /api/program | POST | 整体替换节目表 |
//! | /api/program/print | GET | 打印版: 按时间排序, 12 小时制 |

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/program", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::get).post(handler::replace))
        .route("/print", get(handler::print))
}
