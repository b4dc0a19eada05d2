//! Task templates per committee role and task generation

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{CommitteeGroup, Task, TaskPriority, TaskStatus};

fn default_duration() -> i64 {
    1
}

/// A task every holder of a role needs to do, relative to the dinner date
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskTemplate {
    pub title: String,
    /// Days from the dinner to the due date; negative is before
    pub days_offset: i64,
    pub priority: TaskPriority,
    /// Working days before the due date
    #[serde(default = "default_duration")]
    pub duration: i64,
}

/// Templates of one role
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleTemplates {
    pub role: String,
    pub templates: Vec<TaskTemplate>,
}

const BUILTIN: &[(&str, &[(&str, i64, TaskPriority, i64)])] = {
    use TaskPriority::{High, Low, Medium};
    &[
        (
            "大会主席",
            &[
                ("主持第一次筹委会会议", -90, High, 1),
                ("审阅晚宴致辞稿", -14, High, 3),
                ("出席记者发布会", -30, Medium, 1),
            ],
        ),
        (
            "筹委会主席",
            &[
                ("确定晚宴主题与宗旨", -120, High, 7),
                ("监督各小组工作进度", -60, High, 30),
                ("最终场地视察", -7, Medium, 1),
            ],
        ),
        (
            "秘书",
            &[
                ("发出第一次会议通知", -95, Medium, 1),
                ("准备会议记录", -89, Medium, 2),
                ("整理嘉宾名单", -30, High, 14),
                ("发送正式邀请函", -45, High, 7),
            ],
        ),
        (
            "财政",
            &[
                ("制定初步预算案", -110, High, 5),
                ("跟进赞助款项", -45, High, 30),
                ("准备财务报告", 7, Medium, 3),
            ],
        ),
        (
            "票务组",
            &[
                ("设计票券样式", -90, Medium, 5),
                ("印制票券", -75, Medium, 15),
                ("分发票券给各理事", -60, High, 7),
                ("统计售票情况", -14, High, 14),
            ],
        ),
        (
            "场地/布置组",
            &[
                ("预订晚宴场地", -150, High, 3),
                ("设计舞台背景", -45, Medium, 10),
                ("安排场地布置", -1, High, 1),
            ],
        ),
        (
            "节目组",
            &[
                ("策划晚宴节目流程", -60, High, 14),
                ("联络表演嘉宾", -45, Medium, 10),
                ("安排彩排时间", -7, Medium, 1),
            ],
        ),
        (
            "特刊小组",
            &[
                ("收集特刊贺词", -60, Medium, 30),
                ("排版与校对", -30, Medium, 14),
                ("送印特刊", -21, High, 7),
            ],
        ),
        (
            "礼品",
            &[
                ("选购纪念品/伴手礼", -45, Medium, 7),
                ("包装礼品", -7, Low, 3),
            ],
        ),
        (
            "招待/接待",
            &[
                ("安排接待流程", -14, Medium, 3),
                ("确认出席贵宾名单", -3, High, 2),
            ],
        ),
        (
            "司仪",
            &[
                ("撰写司仪稿", -14, High, 5),
                ("与节目组协调流程", -7, Medium, 2),
            ],
        ),
    ]
};

/// Built-in templates for the usual banquet committee roles
pub fn default_templates() -> Vec<RoleTemplates> {
    BUILTIN
        .iter()
        .map(|(role, items)| RoleTemplates {
            role: role.to_string(),
            templates: items
                .iter()
                .map(|&(title, days_offset, priority, duration)| TaskTemplate {
                    title: title.to_string(),
                    days_offset,
                    priority,
                    duration,
                })
                .collect(),
        })
        .collect()
}

/// One `todo` task per template for every committee role that has templates.
///
/// Tasks go to the group's first member; groups without members are skipped.
/// Due is `dinner + daysOffset` days and start is `duration` days earlier.
pub fn generate_tasks(
    dinner: DateTime<Utc>,
    committee: &[CommitteeGroup],
    templates: &[RoleTemplates],
    now: DateTime<Utc>,
) -> Vec<Task> {
    let mut tasks = Vec::new();
    for group in committee {
        let Some(role_templates) = templates.iter().find(|t| t.role == group.role) else {
            continue;
        };
        let Some(assignee) = group.members.first() else {
            tracing::debug!(role = %group.role, "Skipping role without members");
            continue;
        };
        for template in &role_templates.templates {
            let due = dinner + Duration::days(template.days_offset);
            let duration = if template.duration > 0 { template.duration } else { 1 };
            tasks.push(Task {
                id: uuid::Uuid::new_v4().to_string(),
                title: template.title.clone(),
                description: format!("Auto-generated task for {}", group.role),
                status: TaskStatus::Todo,
                priority: template.priority,
                due_date: Some(due),
                start_date: Some(due - Duration::days(duration)),
                assignees: vec![assignee.clone()],
                assignee: Some(assignee.clone()),
                created_at: now,
                comments: Vec::new(),
            });
        }
    }
    tasks
}
