//! Task Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::serde_helpers::{optional_datetime, parse_flexible_datetime, string_or_empty};

/// Author recorded when a comment arrives without one
pub const DEFAULT_COMMENT_AUTHOR: &str = "Current User";

/// Task workflow status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    #[default]
    Todo,
    InProgress,
    Done,
}

impl TaskStatus {
    /// Status after clicking the status badge: todo -> in_progress -> done -> todo
    pub fn next(self) -> Self {
        match self {
            Self::Todo => Self::InProgress,
            Self::InProgress => Self::Done,
            Self::Done => Self::Todo,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "in_progress",
            Self::Done => "done",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    High,
    #[default]
    Medium,
    Low,
}

/// Comment on a task
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub text: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub author: String,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    pub fn new(text: impl Into<String>, author: Option<String>, now: DateTime<Utc>) -> Self {
        let author = author
            .map(|a| a.trim().to_string())
            .filter(|a| !a.is_empty())
            .unwrap_or_else(|| DEFAULT_COMMENT_AUTHOR.to_string());
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            text: text.into(),
            author,
            created_at: now,
        }
    }
}

/// Task entity
///
/// `assignees` supersedes the single `assignee` field, which older data
/// still carries. Read both through [`Task::effective_assignees`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub description: String,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default)]
    pub priority: TaskPriority,
    #[serde(default, with = "optional_datetime")]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default, with = "optional_datetime")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub assignees: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl Task {
    /// Overdue: has a due date strictly before `now` and is not done
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        self.status != TaskStatus::Done && self.due_date.is_some_and(|due| due < now)
    }

    /// `assignees`, or the legacy single `assignee` when the list is empty
    pub fn effective_assignees(&self) -> Vec<&str> {
        if !self.assignees.is_empty() {
            return self.assignees.iter().map(String::as_str).collect();
        }
        self.assignee
            .as_deref()
            .filter(|a| !a.is_empty())
            .into_iter()
            .collect()
    }

    pub fn add_comment(&mut self, comment: Comment) {
        self.comments.push(comment);
    }
}

/// Create task payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskCreate {
    pub title: String,
    pub description: Option<String>,
    pub priority: Option<TaskPriority>,
    /// ISO timestamp, `YYYY-MM-DD`, or empty
    pub due_date: Option<String>,
    pub start_date: Option<String>,
    pub assignees: Option<Vec<String>>,
    pub assignee: Option<String>,
}

impl TaskCreate {
    /// Build a new `todo` task. Start date defaults to `now`.
    pub fn into_task(self, now: DateTime<Utc>) -> Result<Task, String> {
        let due_date = match self.due_date.as_deref() {
            Some(raw) => parse_flexible_datetime(raw)?,
            None => None,
        };
        let start_date = match self.start_date.as_deref() {
            Some(raw) => parse_flexible_datetime(raw)?,
            None => None,
        }
        .or(Some(now));

        let assignees = match self.assignees {
            Some(list) => list,
            None => self.assignee.clone().into_iter().collect(),
        };

        Ok(Task {
            id: uuid::Uuid::new_v4().to_string(),
            title: self.title.trim().to_string(),
            description: self.description.unwrap_or_default(),
            status: TaskStatus::Todo,
            priority: self.priority.unwrap_or_default(),
            due_date,
            start_date,
            assignees,
            assignee: self.assignee,
            created_at: now,
            comments: Vec::new(),
        })
    }
}

/// Update task payload
///
/// Date fields take a string so that `""` can clear them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<TaskStatus>,
    pub priority: Option<TaskPriority>,
    pub due_date: Option<String>,
    pub start_date: Option<String>,
    pub assignees: Option<Vec<String>>,
    pub assignee: Option<String>,
}

impl TaskUpdate {
    pub fn apply_to(self, task: &mut Task) -> Result<(), String> {
        // Parse first so a bad date leaves the task untouched
        let due_date = self.due_date.as_deref().map(parse_flexible_datetime).transpose()?;
        let start_date = self.start_date.as_deref().map(parse_flexible_datetime).transpose()?;

        if let Some(title) = self.title {
            task.title = title.trim().to_string();
        }
        if let Some(description) = self.description {
            task.description = description;
        }
        if let Some(status) = self.status {
            task.status = status;
        }
        if let Some(priority) = self.priority {
            task.priority = priority;
        }
        if let Some(due) = due_date {
            task.due_date = due;
        }
        if let Some(start) = start_date {
            task.start_date = start;
        }
        if let Some(assignees) = self.assignees {
            task.assignees = assignees;
        }
        if let Some(assignee) = self.assignee {
            task.assignee = Some(assignee).filter(|a| !a.is_empty());
        }
        Ok(())
    }
}
