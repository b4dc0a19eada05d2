//! 统一错误处理
//!
//! 错误类型来自 [`shared::error`]，这里只补充保存类接口的响应体。
//!
//! # 使用示例
//!
//! ```ignore
//! // 返回错误
//! Err(AppError::table_not_found(id))
//!
//! // 整体替换类接口
//! Ok(saved())
//! ```

use axum::Json;
use serde::{Deserialize, Serialize};

pub use shared::error::{AppError, AppResult, ErrorBody, ErrorCategory, ErrorCode};

/// Response of the replace-collection POSTs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveResponse {
    pub success: bool,
    pub message: String,
}

/// `{ "success": true, "message": "Data saved successfully" }`
pub fn saved() -> Json<SaveResponse> {
    saved_with_message("Data saved successfully")
}

/// Save response with custom message
pub fn saved_with_message(message: impl Into<String>) -> Json<SaveResponse> {
    Json(SaveResponse {
        success: true,
        message: message.into(),
    })
}
