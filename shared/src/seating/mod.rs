//! Seating chart logic
//!
//! - [`allocator`]: guest count splitting for imported rows
//! - [`classifier`]: organization name -> display group
//! - [`stats`]: plan statistics and list helpers
//!
//! Everything here is pure; persistence lives in the server.

pub mod allocator;
pub mod classifier;
pub mod stats;

pub use allocator::{
    Allocation, AllocationWarning, DEFAULT_GUESTS, ImportBatch, ImportReport, ImportRequest,
    ImportRow, allocate, allocate_batch, allocate_checked, parse_import_rows,
};
pub use classifier::{
    CategoryClassifier, CategoryGroup, DEFAULT_AFFILIATES, DEFAULT_ASSOCIATIONS, GroupStyle,
    classify, default_category_lists, styles_for,
};
pub use stats::{
    GroupStats, SeatingStats, duplicate_table_numbers, filter_tables, next_table_number,
    sorted_by_number,
};
