//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`program`] - 节目表接口
//! - [`rundown`] - 流程表接口
//! - [`committee`] - 筹委会接口
//! - [`categories`] - 分类名单与分类查询接口
//! - [`tables`] - 桌位管理接口 (含批量导入、统计)
//! - [`tasks`] - 任务管理接口 (含生成、仪表盘、甘特图)

pub mod health;

// Schedule
pub mod committee;
pub mod program;
pub mod rundown;

// Seating
pub mod categories;
pub mod tables;

// Planning
pub mod tasks;

// Re-export common types for handlers
pub use crate::utils::{AppError, AppResult};
