//! Planning derivations over tasks and the committee

pub mod gantt;
pub mod tasks;
pub mod templates;

pub use gantt::{GanttBar, GanttLayout, ViewMode};
pub use tasks::{
    ProjectStatus, TaskFilter, TaskSummary, overdue_tasks, project_status, sort_tasks,
    upcoming_tasks,
};
pub use templates::{RoleTemplates, TaskTemplate, default_templates, generate_tasks};
