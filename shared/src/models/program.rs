//! Program Model (活动流程)

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// One timed item of a program day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramEvent {
    /// 24h `HH:MM`
    pub time: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub highlight: bool,
    #[serde(default)]
    pub subtitle_highlight: bool,
}

impl ProgramEvent {
    /// 12-hour rendering used on the printed program: `19:30` -> `7:30 PM`
    pub fn time_12h(&self) -> String {
        format_time_12h(&self.time)
    }
}

/// Format `HH:MM` as `h:MM AM/PM`. Empty input yields an empty string and
/// unparseable input is returned as-is.
pub fn format_time_12h(time: &str) -> String {
    let time = time.trim();
    if time.is_empty() {
        return String::new();
    }
    match NaiveTime::parse_from_str(time, "%H:%M") {
        Ok(t) => t.format("%-I:%M %p").to_string(),
        Err(_) => time.to_string(),
    }
}

/// A calendar day of the program
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramDay {
    /// `YYYY-MM-DD`
    pub date: String,
    #[serde(default)]
    pub events: Vec<ProgramEvent>,
}

impl ProgramDay {
    /// Check the date and every event time; returns the first problem found
    pub fn validate(&self) -> Result<(), String> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d")
            .map_err(|_| format!("invalid program date: {:?}", self.date))?;
        for event in &self.events {
            NaiveTime::parse_from_str(event.time.trim(), "%H:%M").map_err(|_| {
                format!("invalid event time {:?} on {}", event.time, self.date)
            })?;
            if event.title.trim().is_empty() {
                return Err(format!("event at {} on {} has no title", event.time, self.date));
            }
        }
        Ok(())
    }

    /// Events in chronological order (stable for equal times)
    pub fn sort_events(&mut self) {
        self.events.sort_by(|a, b| a.time.cmp(&b.time));
    }
}
