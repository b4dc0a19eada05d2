//! Repository Module
//!
//! One repository per data file. Repositories are cheap to construct
//! (they hold a cloned [`JsonStore`]) and are built per request.

pub mod categories;
pub mod committee;
pub mod program;
pub mod rundown;
pub mod tables;
pub mod tasks;

// Re-exports
pub use categories::CategoryRepository;
pub use committee::CommitteeRepository;
pub use program::ProgramRepository;
pub use rundown::RundownRepository;
pub use tables::TableRepository;
pub use tasks::TaskRepository;

pub use super::{JsonStore, StoreError, StoreResult};
