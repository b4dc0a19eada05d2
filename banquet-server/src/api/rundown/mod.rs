//! Rundown API 模块
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/rundown | GET | 读取流程表 (无文件时为空) |
//! | /api/rundown | POST | 整体替换流程表 |
//! | /api/rundown/days/{index}/slots | POST | 在某天末尾追加一个空白时段 |
//! | /api/rundown/slots/{id}/people | POST | 添加负责人 |
//! | /api/rundown/slots/{id}/people/{index} | DELETE | 移除负责人 |

mod handler;

use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/rundown", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::get).post(handler::replace))
        .route("/days/{index}/slots", post(handler::add_slot))
        .route("/slots/{id}/people", post(handler::add_person))
        .route("/slots/{id}/people/{index}", delete(handler::remove_person))
}
