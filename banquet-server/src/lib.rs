//! Banquet Server - 宴会筹备系统后端
//!
//! # 架构概述
//!
//! 单进程 HTTP 服务，数据以 JSON 文件形式保存在 `DATA_DIR` 中：
//!
//! - **座位图** (`api/tables`): 桌位增删改、批量导入、统计
//! - **分类** (`api/categories`): 属会 / 其他社团名单与分组配色
//! - **任务** (`api/tasks`): 任务、评论、模板生成、仪表盘、甘特图
//! - **日程** (`api/program`, `api/rundown`, `api/committee`): 节目表、流程表、筹委会
//!
//! 纯计算逻辑 (分桌、分类、统计、甘特图) 在 `shared` crate 中。
//!
//! # 模块结构
//!
//! ```text
//! banquet-server/src/
//! ├── core/          # 配置、状态、服务器、错误
//! ├── db/            # JSON 文件存储与仓库
//! ├── services/      # 路由组装与中间件
//! ├── api/           # HTTP 路由和处理器
//! ├── utils/         # 日志、校验、响应
//! └── bin/           # import-tables 命令行工具
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod services;
pub mod utils;

// Re-export 公共类型
pub use core::{Config, Server, ServerState};
pub use db::{JsonStore, StoreError};
pub use services::{build_app, build_router};
pub use utils::{AppError, AppResult};

// Re-export unified error types from shared
pub use utils::{ErrorBody, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// 设置运行环境: 加载 `.env`，读取配置，初始化日志
pub fn setup_environment() -> Result<Config, Box<dyn std::error::Error>> {
    if let Err(e) = dotenv::dotenv()
        && !e.not_found()
    {
        return Err(e.into());
    }

    let config = Config::from_env();
    init_logger_with_file(Some(config.log_level.as_str()), config.log_dir.as_deref());
    Ok(config)
}

pub fn print_banner() {
    println!(
        r#"
    ____                              __
   / __ )____ _____  ____ ___  _____ / /_
  / __  / __ `/ __ \/ __ `/ / / / _ \/ __/
 / /_/ / /_/ / / / / /_/ / /_/ /  __/ /_
/_____/\__,_/_/ /_/\__, /\__,_/\___/\__/
                     /_/
    "#
    );
}
