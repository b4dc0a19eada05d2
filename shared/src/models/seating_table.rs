//! Seating Table Model

use serde::{Deserialize, Serialize};

use super::serde_helpers::string_or_empty;

/// Zone every imported or manually added table lands in
pub const DEFAULT_REGION: &str = "Main Hall";

/// Capacity suggested for a manually added table
pub const DEFAULT_TABLE_PAX: u32 = 10;

fn default_region() -> String {
    DEFAULT_REGION.to_string()
}

/// One organization's share of a mixed table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeatAllocation {
    #[serde(default, deserialize_with = "string_or_empty")]
    pub category: String,
    #[serde(default)]
    pub pax: u32,
}

/// Seating table entity (桌台)
///
/// `table_number` is unique within a plan. When `seats` holds more than one
/// allocation the table is "mixed" and its displayed pax and primary
/// category come from the seats, see [`SeatingTable::display_pax`] and
/// [`SeatingTable::primary_category`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeatingTable {
    #[serde(default)]
    pub id: i64,
    pub name: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub category: String,
    #[serde(default)]
    pub pax: u32,
    pub table_number: u32,
    #[serde(default = "default_region")]
    pub region: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub notes: String,
    #[serde(default)]
    pub seats: Vec<SeatAllocation>,
}

impl SeatingTable {
    pub fn is_mixed(&self) -> bool {
        self.seats.len() > 1
    }

    /// Guests shown for this table: the seats' sum for mixed tables
    pub fn display_pax(&self) -> u64 {
        if self.is_mixed() {
            self.seats.iter().map(|s| u64::from(s.pax)).sum()
        } else {
            u64::from(self.pax)
        }
    }

    /// Category of the largest seat allocation for mixed tables.
    ///
    /// Ties go to the earliest seat.
    pub fn primary_category(&self) -> &str {
        if !self.is_mixed() {
            return &self.category;
        }
        let mut best = &self.seats[0];
        for seat in &self.seats[1..] {
            if seat.pax > best.pax {
                best = seat;
            }
        }
        &best.category
    }

    /// Apply a +/- pax control. Never drops below zero.
    pub fn adjust_pax(&mut self, delta: i32) {
        let next = i64::from(self.pax) + i64::from(delta);
        self.pax = next.clamp(0, i64::from(u32::MAX)) as u32;
    }
}

/// Create seating table payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeatingTableCreate {
    pub name: String,
    pub category: Option<String>,
    pub pax: Option<u32>,
    /// Assigned as `max + 1` when absent
    pub table_number: Option<u32>,
    pub region: Option<String>,
    pub notes: Option<String>,
    pub seats: Option<Vec<SeatAllocation>>,
}

impl SeatingTableCreate {
    /// Build the entity; `id` and `table_number` are decided by the caller
    pub fn into_table(self, id: i64, table_number: u32) -> SeatingTable {
        SeatingTable {
            id,
            category: self.category.unwrap_or_default(),
            name: self.name.trim().to_string(),
            pax: self.pax.unwrap_or(DEFAULT_TABLE_PAX),
            table_number,
            region: self.region.unwrap_or_else(default_region),
            notes: self.notes.unwrap_or_default(),
            seats: self.seats.unwrap_or_default(),
        }
    }
}

/// Update seating table payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeatingTableUpdate {
    pub name: Option<String>,
    pub category: Option<String>,
    pub pax: Option<u32>,
    pub table_number: Option<u32>,
    pub region: Option<String>,
    pub notes: Option<String>,
    pub seats: Option<Vec<SeatAllocation>>,
}

impl SeatingTableUpdate {
    pub fn apply_to(self, table: &mut SeatingTable) {
        if let Some(name) = self.name {
            table.name = name.trim().to_string();
        }
        if let Some(category) = self.category {
            table.category = category;
        }
        if let Some(pax) = self.pax {
            table.pax = pax;
        }
        if let Some(table_number) = self.table_number {
            table.table_number = table_number;
        }
        if let Some(region) = self.region {
            table.region = region;
        }
        if let Some(notes) = self.notes {
            table.notes = notes;
        }
        if let Some(seats) = self.seats {
            table.seats = seats;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seat(category: &str, pax: u32) -> SeatAllocation {
        SeatAllocation {
            category: category.to_string(),
            pax,
        }
    }

    fn table(seats: Vec<SeatAllocation>) -> SeatingTable {
        SeatingTable {
            id: 1,
            name: "VIP 1".to_string(),
            category: "主桌".to_string(),
            pax: 10,
            table_number: 1,
            region: DEFAULT_REGION.to_string(),
            notes: String::new(),
            seats,
        }
    }

    #[test]
    fn test_simple_table_uses_own_fields() {
        let t = table(vec![seat("A", 3)]);
        assert!(!t.is_mixed());
        assert_eq!(t.display_pax(), 10);
        assert_eq!(t.primary_category(), "主桌");
    }

    #[test]
    fn test_mixed_table_derives_pax_and_category() {
        let t = table(vec![seat("A", 3), seat("B", 5), seat("C", 2)]);
        assert!(t.is_mixed());
        assert_eq!(t.display_pax(), 10);
        assert_eq!(t.primary_category(), "B");
    }

    #[test]
    fn test_mixed_table_tie_goes_to_first_seat() {
        let t = table(vec![seat("A", 4), seat("B", 4), seat("C", 2)]);
        assert_eq!(t.primary_category(), "A");
    }

    #[test]
    fn test_adjust_pax_clamps_at_zero() {
        let mut t = table(vec![]);
        t.adjust_pax(-3);
        assert_eq!(t.pax, 7);
        t.adjust_pax(-20);
        assert_eq!(t.pax, 0);
        t.adjust_pax(2);
        assert_eq!(t.pax, 2);
    }

    #[test]
    fn test_deserialize_ui_shape() {
        let json = r#"{
            "id": 1733212345678,
            "name": "檳城南陽堂葉氏宗祠",
            "category": "檳城南陽堂葉氏宗祠",
            "pax": 10,
            "tableNumber": 1,
            "region": "Main Hall",
            "notes": "",
            "seats": [],
            "guests": []
        }"#;
        let t: SeatingTable = serde_json::from_str(json).unwrap();
        assert_eq!(t.id, 1733212345678);
        assert_eq!(t.table_number, 1);
        assert!(t.seats.is_empty());

        let out = serde_json::to_value(&t).unwrap();
        assert_eq!(out["tableNumber"], 1);
    }

    #[test]
    fn test_deserialize_fills_defaults() {
        let t: SeatingTable =
            serde_json::from_str(r#"{"name": "X", "tableNumber": 4, "category": null}"#).unwrap();
        assert_eq!(t.region, DEFAULT_REGION);
        assert_eq!(t.category, "");
        assert_eq!(t.pax, 0);
    }

    #[test]
    fn test_create_and_update() {
        let create = SeatingTableCreate {
            name: "  VIP 2 ".to_string(),
            category: Some("Affiliate".to_string()),
            ..Default::default()
        };
        let mut t = create.into_table(99, 5);
        assert_eq!(t.name, "VIP 2");
        assert_eq!(t.pax, DEFAULT_TABLE_PAX);
        assert_eq!(t.table_number, 5);

        SeatingTableUpdate {
            pax: Some(8),
            notes: Some("near stage".to_string()),
            ..Default::default()
        }
        .apply_to(&mut t);
        assert_eq!(t.pax, 8);
        assert_eq!(t.notes, "near stage");
        assert_eq!(t.category, "Affiliate");
    }
}
