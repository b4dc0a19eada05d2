//! Seating Table API 模块
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/tables | GET | 桌位列表 (按桌号排序, `?q=` 按名称/单位过滤) |
//! | /api/tables | POST | 新增桌位 |
//! | /api/tables | PUT | 整体替换座位图 |
//! | /api/tables/{id} | GET / PUT / DELETE | 单个桌位 |
//! | /api/tables/{id}/pax | POST | 人数加减 (最低为 0) |
//! | /api/tables/import | POST | 批量导入 (制表符分隔文本) |
//! | /api/tables/stats | GET | 座位统计 |

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/tables", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route(
            "/",
            get(handler::list)
                .post(handler::create)
                .put(handler::replace),
        )
        .route("/import", post(handler::import))
        .route("/stats", get(handler::stats))
        .route(
            "/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete),
        )
        .route("/{id}/pax", post(handler::adjust_pax))
}
