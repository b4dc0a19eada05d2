//! Data models
//!
//! Shared between banquet-server and the frontend (via API).
//! Every record serializes camelCase, the shape the UI stores.

pub mod category_list;
pub mod committee;
pub mod program;
pub mod rundown;
pub mod seating_table;
pub mod serde_helpers;
pub mod task;

// Re-exports
pub use category_list::*;
pub use committee::*;
pub use program::*;
pub use rundown::*;
pub use seating_table::*;
pub use task::*;
