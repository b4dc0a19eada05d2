//! Task list derivations: project status, filtering, ordering

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{CommitteeGroup, Task, TaskPriority, TaskStatus};

/// Traffic light for the whole project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    Green,
    Red,
}

/// Red as soon as a single task is overdue
pub fn project_status(tasks: &[Task], now: DateTime<Utc>) -> ProjectStatus {
    if tasks.iter().any(|t| t.is_overdue(now)) {
        ProjectStatus::Red
    } else {
        ProjectStatus::Green
    }
}

/// Dashboard counters
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskSummary {
    pub status: ProjectStatus,
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    pub overdue: usize,
    /// Rounded percentage, 0 for an empty list
    pub completion_rate: u32,
}

impl TaskSummary {
    pub fn compute(tasks: &[Task], now: DateTime<Utc>) -> Self {
        let total = tasks.len();
        let completed = tasks.iter().filter(|t| t.status == TaskStatus::Done).count();
        let overdue = tasks.iter().filter(|t| t.is_overdue(now)).count();
        let completion_rate = if total == 0 {
            0
        } else {
            ((completed as f64 / total as f64) * 100.0).round() as u32
        };
        Self {
            status: if overdue > 0 {
                ProjectStatus::Red
            } else {
                ProjectStatus::Green
            },
            total,
            completed,
            pending: total - completed,
            overdue,
            completion_rate,
        }
    }
}

/// Overdue tasks, earliest due first
pub fn overdue_tasks(tasks: &[Task], now: DateTime<Utc>) -> Vec<&Task> {
    let mut list: Vec<&Task> = tasks.iter().filter(|t| t.is_overdue(now)).collect();
    list.sort_by_key(|t| t.due_date);
    list
}

/// Open tasks due at or after `now`, earliest first
pub fn upcoming_tasks(tasks: &[Task], now: DateTime<Utc>) -> Vec<&Task> {
    let mut list: Vec<&Task> = tasks
        .iter()
        .filter(|t| t.status != TaskStatus::Done && t.due_date.is_some_and(|d| d >= now))
        .collect();
    list.sort_by_key(|t| t.due_date);
    list
}

/// List filter; `None` fields match everything
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskFilter {
    /// Case-insensitive search over title and description
    #[serde(alias = "q")]
    pub query: Option<String>,
    pub status: Option<TaskStatus>,
    pub priority: Option<TaskPriority>,
    pub assignee: Option<String>,
    /// Committee role; keeps tasks with at least one assignee in the role
    pub role: Option<String>,
}

impl TaskFilter {
    pub fn matches(&self, task: &Task, committee: &[CommitteeGroup]) -> bool {
        if let Some(query) = self.query.as_deref().map(str::trim).filter(|q| !q.is_empty()) {
            let query = query.to_lowercase();
            if !task.title.to_lowercase().contains(&query)
                && !task.description.to_lowercase().contains(&query)
            {
                return false;
            }
        }
        if self.status.is_some_and(|s| s != task.status) {
            return false;
        }
        if self.priority.is_some_and(|p| p != task.priority) {
            return false;
        }

        let assignees = task.effective_assignees();
        if let Some(assignee) = &self.assignee
            && !assignees.contains(&assignee.as_str())
        {
            return false;
        }
        if let Some(role) = &self.role {
            let members: &[String] = committee
                .iter()
                .find(|g| &g.role == role)
                .map(|g| g.members.as_slice())
                .unwrap_or(&[]);
            return assignees.iter().any(|a| members.iter().any(|m| m == a));
        }
        true
    }

    pub fn apply<'a>(&self, tasks: &'a [Task], committee: &[CommitteeGroup]) -> Vec<&'a Task> {
        tasks.iter().filter(|t| self.matches(t, committee)).collect()
    }
}

/// Open tasks before done ones, newest first within each bucket
pub fn sort_tasks(tasks: &mut [&Task]) {
    tasks.sort_by(|a, b| {
        let a_done = a.status == TaskStatus::Done;
        let b_done = b.status == TaskStatus::Done;
        a_done
            .cmp(&b_done)
            .then_with(|| b.created_at.cmp(&a.created_at))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap()
    }

    fn task(id: &str, status: TaskStatus, due_in_days: Option<i64>) -> Task {
        Task {
            id: id.to_string(),
            title: format!("Task {}", id),
            description: String::new(),
            status,
            priority: TaskPriority::Medium,
            due_date: due_in_days.map(|d| now() + Duration::days(d)),
            start_date: None,
            assignees: vec![],
            assignee: None,
            created_at: now(),
            comments: vec![],
        }
    }

    fn committee() -> Vec<CommitteeGroup> {
        vec![
            CommitteeGroup {
                role: "秘书".to_string(),
                members: vec!["国汉".to_string(), "毓腾".to_string()],
            },
            CommitteeGroup {
                role: "财政".to_string(),
                members: vec!["秋萍".to_string()],
            },
        ]
    }

    #[test]
    fn test_project_status() {
        let ok = vec![task("a", TaskStatus::Todo, Some(3)), task("b", TaskStatus::Done, Some(-3))];
        assert_eq!(project_status(&ok, now()), ProjectStatus::Green);
        assert_eq!(project_status(&[], now()), ProjectStatus::Green);

        let late = vec![task("a", TaskStatus::InProgress, Some(-1))];
        assert_eq!(project_status(&late, now()), ProjectStatus::Red);
    }

    #[test]
    fn test_summary() {
        let tasks = vec![
            task("a", TaskStatus::Done, None),
            task("b", TaskStatus::Todo, Some(-2)),
            task("c", TaskStatus::Todo, Some(5)),
        ];
        let s = TaskSummary::compute(&tasks, now());
        assert_eq!(s.total, 3);
        assert_eq!(s.completed, 1);
        assert_eq!(s.pending, 2);
        assert_eq!(s.overdue, 1);
        assert_eq!(s.completion_rate, 33);
        assert_eq!(s.status, ProjectStatus::Red);

        assert_eq!(TaskSummary::compute(&[], now()).completion_rate, 0);
    }

    #[test]
    fn test_overdue_and_upcoming_lists() {
        let tasks = vec![
            task("late2", TaskStatus::Todo, Some(-1)),
            task("late1", TaskStatus::Todo, Some(-5)),
            task("soon", TaskStatus::Todo, Some(2)),
            task("later", TaskStatus::Todo, Some(9)),
            task("done", TaskStatus::Done, Some(1)),
        ];
        let ids = |list: Vec<&Task>| list.iter().map(|t| t.id.clone()).collect::<Vec<_>>();
        assert_eq!(ids(overdue_tasks(&tasks, now())), vec!["late1", "late2"]);
        assert_eq!(ids(upcoming_tasks(&tasks, now())), vec!["soon", "later"]);
    }

    #[test]
    fn test_filter_query_status_priority() {
        let mut a = task("a", TaskStatus::Todo, None);
        a.description = "Call the VENUE".to_string();
        let mut b = task("b", TaskStatus::Done, None);
        b.priority = TaskPriority::High;
        let tasks = vec![a, b];

        let f = TaskFilter {
            query: Some("venue".to_string()),
            ..Default::default()
        };
        assert_eq!(f.apply(&tasks, &[]).len(), 1);

        let f = TaskFilter {
            query: Some("task".to_string()),
            status: Some(TaskStatus::Done),
            ..Default::default()
        };
        let found = f.apply(&tasks, &[]);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "b");

        let f = TaskFilter {
            priority: Some(TaskPriority::Low),
            ..Default::default()
        };
        assert!(f.apply(&tasks, &[]).is_empty());

        assert_eq!(TaskFilter::default().apply(&tasks, &[]).len(), 2);
    }

    #[test]
    fn test_filter_assignee_and_role() {
        let mut a = task("a", TaskStatus::Todo, None);
        a.assignees = vec!["国汉".to_string()];
        let mut b = task("b", TaskStatus::Todo, None);
        b.assignee = Some("秋萍".to_string());
        let c = task("c", TaskStatus::Todo, None);
        let tasks = vec![a, b, c];
        let committee = committee();

        let f = TaskFilter {
            assignee: Some("秋萍".to_string()),
            ..Default::default()
        };
        let found = f.apply(&tasks, &committee);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "b");

        let f = TaskFilter {
            role: Some("秘书".to_string()),
            ..Default::default()
        };
        let found = f.apply(&tasks, &committee);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "a");

        let f = TaskFilter {
            role: Some("不存在".to_string()),
            ..Default::default()
        };
        assert!(f.apply(&tasks, &committee).is_empty());
    }

    #[test]
    fn test_sort_tasks() {
        let mut old_todo = task("old", TaskStatus::Todo, None);
        old_todo.created_at = now() - Duration::days(2);
        let new_done = task("done", TaskStatus::Done, None);
        let mut mid_progress = task("mid", TaskStatus::InProgress, None);
        mid_progress.created_at = now() - Duration::days(1);
        let new_todo = task("new", TaskStatus::Todo, None);

        let tasks = vec![old_todo, new_done, mid_progress, new_todo];
        let mut refs: Vec<&Task> = tasks.iter().collect();
        sort_tasks(&mut refs);
        let ids: Vec<_> = refs.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["new", "mid", "old", "done"]);
    }

    #[test]
    fn test_filter_from_query_string_shape() {
        let f: TaskFilter =
            serde_json::from_str(r#"{"q": "menu", "status": "in_progress", "priority": "high"}"#)
                .unwrap();
        assert_eq!(f.query.as_deref(), Some("menu"));
        assert_eq!(f.status, Some(TaskStatus::InProgress));
        assert_eq!(f.priority, Some(TaskPriority::High));
    }
}
