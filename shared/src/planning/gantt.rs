//! Gantt chart geometry
//!
//! Linear projection of task dates onto a pixel timeline. Month columns use
//! an average month length, so bars drift slightly against month ticks.

use chrono::{DateTime, Datelike, Days, Duration, Months, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Task, TaskStatus};

const MS_PER_DAY: f64 = 86_400_000.0;

/// Narrowest bar drawn for a valid range
pub const MIN_BAR_WIDTH: f64 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Day,
    Week,
    Month,
}

impl ViewMode {
    /// Column width in pixels
    pub fn unit_width(&self) -> f64 {
        match self {
            Self::Day => 50.0,
            Self::Week => 100.0,
            Self::Month => 120.0,
        }
    }

    /// Length of one column in days
    pub fn unit_days(&self) -> f64 {
        match self {
            Self::Day => 1.0,
            Self::Week => 7.0,
            Self::Month => 30.44,
        }
    }
}

/// `(left, width)` in pixels of a bar from `start` to `end`.
///
/// A bar that ends before it starts collapses to `(0, 0)`.
pub fn bar_geometry(
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    range_start: DateTime<Utc>,
    mode: ViewMode,
) -> (f64, f64) {
    if start > end {
        return (0.0, 0.0);
    }
    let unit_ms = mode.unit_days() * MS_PER_DAY;
    let offset_units = (start - range_start).num_milliseconds() as f64 / unit_ms;
    let duration_units = (end - start).num_milliseconds() as f64 / unit_ms;
    let w = mode.unit_width();
    ((offset_units * w).max(0.0), (duration_units * w).max(MIN_BAR_WIDTH))
}

fn start_of_day(dt: DateTime<Utc>) -> DateTime<Utc> {
    dt.date_naive().and_time(chrono::NaiveTime::MIN).and_utc()
}

/// Weeks start on Sunday
fn start_of_week(dt: DateTime<Utc>) -> DateTime<Utc> {
    let back = dt.weekday().num_days_from_sunday() as i64;
    start_of_day(dt) - Duration::days(back)
}

fn end_of_week(dt: DateTime<Utc>) -> DateTime<Utc> {
    start_of_week(dt) + Duration::days(7) - Duration::milliseconds(1)
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

fn start_of_month(dt: DateTime<Utc>) -> DateTime<Utc> {
    first_of_month(dt.date_naive())
        .and_time(chrono::NaiveTime::MIN)
        .and_utc()
}

fn end_of_month(dt: DateTime<Utc>) -> DateTime<Utc> {
    let start = start_of_month(dt);
    start
        .checked_add_months(Months::new(1))
        .unwrap_or(start)
        - Duration::milliseconds(1)
}

fn add_months(dt: DateTime<Utc>, months: i32) -> DateTime<Utc> {
    let shifted = if months >= 0 {
        dt.checked_add_months(Months::new(months as u32))
    } else {
        dt.checked_sub_months(Months::new(months.unsigned_abs()))
    };
    shifted.unwrap_or(dt)
}

/// Where a task's bar starts: its start date, else its creation time
fn task_start(task: &Task) -> DateTime<Utc> {
    task.start_date.unwrap_or(task.created_at)
}

/// Where a task's bar ends: its due date, else now
fn task_end(task: &Task, now: DateTime<Utc>) -> DateTime<Utc> {
    task.due_date.unwrap_or(now)
}

/// Padded timeline bounds for the given tasks
pub fn timeline_range(
    tasks: &[&Task],
    mode: ViewMode,
    now: DateTime<Utc>,
) -> (DateTime<Utc>, DateTime<Utc>) {
    let earliest = tasks.iter().map(|t| task_start(t)).min();
    let latest = tasks.iter().map(|t| task_end(t, now)).max();
    let (Some(earliest), Some(latest)) = (earliest, latest) else {
        return (now - Duration::days(14), now + Duration::days(45));
    };
    match mode {
        ViewMode::Day => (earliest - Duration::days(3), latest + Duration::days(7)),
        ViewMode::Week => (
            start_of_week(earliest) - Duration::weeks(1),
            end_of_week(latest) + Duration::weeks(2),
        ),
        ViewMode::Month => (
            add_months(start_of_month(earliest), -1),
            add_months(end_of_month(latest), 2),
        ),
    }
}

/// Column start dates covering `[start, end]`
pub fn columns(start: DateTime<Utc>, end: DateTime<Utc>, mode: ViewMode) -> Vec<NaiveDate> {
    let last = end.date_naive();
    let mut cursor = match mode {
        ViewMode::Day => start.date_naive(),
        ViewMode::Week => start_of_week(start).date_naive(),
        ViewMode::Month => first_of_month(start.date_naive()),
    };
    let mut out = Vec::new();
    while cursor <= last {
        out.push(cursor);
        let next = match mode {
            ViewMode::Day => cursor.checked_add_days(Days::new(1)),
            ViewMode::Week => cursor.checked_add_days(Days::new(7)),
            ViewMode::Month => cursor.checked_add_months(Months::new(1)),
        };
        match next {
            Some(n) => cursor = n,
            None => break,
        }
    }
    out
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GanttBar {
    pub task_id: String,
    pub title: String,
    pub status: TaskStatus,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub left: f64,
    pub width: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GanttLayout {
    pub mode: ViewMode,
    pub unit_width: f64,
    pub range_start: DateTime<Utc>,
    pub range_end: DateTime<Utc>,
    pub columns: Vec<NaiveDate>,
    pub total_width: f64,
    /// Position of the "today" marker
    pub today_left: f64,
    pub bars: Vec<GanttBar>,
}

/// Lay out every task with a start or due date, earliest start first
pub fn layout(tasks: &[Task], mode: ViewMode, now: DateTime<Utc>) -> GanttLayout {
    let mut dated: Vec<&Task> = tasks
        .iter()
        .filter(|t| t.due_date.is_some() || t.start_date.is_some())
        .collect();
    dated.sort_by_key(|t| task_start(t));

    let (range_start, range_end) = timeline_range(&dated, mode, now);
    let columns = columns(range_start, range_end, mode);

    let bars = dated
        .iter()
        .map(|task| {
            let start = task_start(task);
            let end = task_end(task, now);
            let (left, width) = bar_geometry(start, end, range_start, mode);
            GanttBar {
                task_id: task.id.clone(),
                title: task.title.clone(),
                status: task.status,
                start,
                end,
                left,
                width,
            }
        })
        .collect();

    let (today_left, _) = bar_geometry(now, now, range_start, mode);

    GanttLayout {
        mode,
        unit_width: mode.unit_width(),
        range_start,
        range_end,
        total_width: columns.len() as f64 * mode.unit_width(),
        columns,
        today_left,
        bars,
    }
}
