//! Task API 模块
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/tasks | GET | 任务列表 (`q`, `status`, `priority`, `assignee`, `role` 过滤) |
//! | /api/tasks | POST | 新建任务 |
//! | /api/tasks | DELETE | 清空任务 |
//! | /api/tasks/{id} | GET / PUT / DELETE | 单个任务 |
//! | /api/tasks/{id}/comments | POST | 添加评论 |
//! | /api/tasks/{id}/advance | POST | 状态轮转 todo → in_progress → done → todo |
//! | /api/tasks/generate | POST | 按筹委会职务模板重新生成任务 |
//! | /api/tasks/status | GET | 项目状态与计数 |
//! | /api/tasks/dashboard | GET | 计数 + 逾期 + 即将到期 |
//! | /api/tasks/gantt?mode= | GET | 甘特图布局 (day / week / month) |

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/tasks", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route(
            "/",
            get(handler::list)
                .post(handler::create)
                .delete(handler::clear),
        )
        .route("/generate", post(handler::generate))
        .route("/status", get(handler::status))
        .route("/dashboard", get(handler::dashboard))
        .route("/gantt", get(handler::gantt))
        .route(
            "/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete),
        )
        .route("/{id}/comments", post(handler::add_comment))
        .route("/{id}/advance", post(handler::advance))
}
