//! Rundown Model (活动执行清单)

use serde::{Deserialize, Serialize};

use super::serde_helpers::string_or_empty;

/// Placeholder values for a freshly added slot
pub const NEW_SLOT_TIME: &str = "00:00 - 00:00";
pub const NEW_SLOT_ACTIVITY: &str = "新活动";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RundownSlot {
    pub id: u32,
    /// Free-form range such as `10:00 - 14:00`
    #[serde(default, deserialize_with = "string_or_empty")]
    pub time: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub activity: String,
    #[serde(default)]
    pub responsible_people: Vec<String>,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub remark: String,
}

impl RundownSlot {
    /// Add a person unless already listed. Returns whether the list changed.
    pub fn add_person(&mut self, person: &str) -> bool {
        let person = person.trim();
        if person.is_empty() || self.responsible_people.iter().any(|p| p == person) {
            return false;
        }
        self.responsible_people.push(person.to_string());
        true
    }

    pub fn remove_person_at(&mut self, index: usize) -> Option<String> {
        (index < self.responsible_people.len()).then(|| self.responsible_people.remove(index))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RundownDay {
    /// Heading, e.g. `第一天 - 机场接送到欢迎宴`
    pub day: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub date: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub time_range: String,
    #[serde(default)]
    pub slots: Vec<RundownSlot>,
}

/// Next slot id: one past the highest id across every day
pub fn next_slot_id(days: &[RundownDay]) -> u32 {
    days.iter()
        .flat_map(|d| d.slots.iter().map(|s| s.id))
        .max()
        .unwrap_or(0)
        + 1
}

/// Append a placeholder slot to `days[day_index]`, returning its id.
///
/// `None` when the day does not exist.
pub fn add_slot(days: &mut [RundownDay], day_index: usize) -> Option<u32> {
    let id = next_slot_id(days);
    let day = days.get_mut(day_index)?;
    day.slots.push(RundownSlot {
        id,
        time: NEW_SLOT_TIME.to_string(),
        activity: NEW_SLOT_ACTIVITY.to_string(),
        responsible_people: Vec::new(),
        remark: String::new(),
    });
    Some(id)
}

/// Check that slot ids are unique across the whole rundown
pub fn validate_rundown(days: &[RundownDay]) -> Result<(), String> {
    let mut seen = std::collections::HashSet::new();
    for day in days {
        if day.day.trim().is_empty() {
            return Err("rundown day has no heading".to_string());
        }
        for slot in &day.slots {
            if !seen.insert(slot.id) {
                return Err(format!("duplicate rundown slot id {}", slot.id));
            }
        }
    }
    Ok(())
}
