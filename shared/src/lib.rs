//! Shared types for the banquet planner
//!
//! Domain models, the error system, and the pure seating and planning
//! logic used by the server and the import tool.

pub mod error;
pub mod models;
pub mod planning;
pub mod seating;
pub mod util;

// Re-exports
pub use axum::Json;
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorBody, ErrorCode};
