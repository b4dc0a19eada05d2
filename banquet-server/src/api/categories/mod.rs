//! Category API 模块
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/categories | GET | 读取分类名单 (无文件时返回内置名单) |
//! | /api/categories | POST | 整体替换分类名单 |
//! | /api/categories/names | GET | 全部单位名称 (去重排序) |
//! | /api/categories/classify?name= | GET | 单位所属分组及配色 |

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/categories", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::get).post(handler::replace))
        .route("/names", get(handler::names))
        .route("/classify", get(handler::classify))
}
