//! Seating plan statistics and list helpers

use std::collections::BTreeMap;

use serde::Serialize;

use super::classifier::{CategoryClassifier, CategoryGroup, GroupStyle, styles_for};
use crate::models::SeatingTable;

/// Tables and guests falling into one display group
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupStats {
    pub group: CategoryGroup,
    pub label: &'static str,
    pub tables: usize,
    /// Widened so any set of `u32` table counts sums without overflow
    pub pax: u64,
    pub style: GroupStyle,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeatingStats {
    pub total_tables: usize,
    pub total_pax: u64,
    /// Always three entries, in [`CategoryGroup::ALL`] order
    pub groups: Vec<GroupStats>,
    /// Table count per primary category
    pub by_category: BTreeMap<String, usize>,
}

impl SeatingStats {
    /// A mixed table counts once under its primary category's group, while
    /// its guests are credited seat by seat.
    pub fn compute(tables: &[SeatingTable], classifier: &CategoryClassifier) -> Self {
        let mut groups: Vec<GroupStats> = CategoryGroup::ALL
            .iter()
            .map(|&group| GroupStats {
                group,
                label: group.label(),
                tables: 0,
                pax: 0,
                style: styles_for(group),
            })
            .collect();
        let index = |g: CategoryGroup| CategoryGroup::ALL.iter().position(|x| *x == g).unwrap_or(2);

        let mut by_category = BTreeMap::new();
        let mut total_pax = 0u64;

        for table in tables {
            let primary = table.primary_category();
            *by_category.entry(primary.to_string()).or_insert(0) += 1;

            let group = classifier.classify(Some(primary));
            groups[index(group)].tables += 1;

            if table.is_mixed() {
                for seat in &table.seats {
                    let seat_group = classifier.classify(Some(seat.category.as_str()));
                    groups[index(seat_group)].pax += u64::from(seat.pax);
                }
            } else {
                groups[index(group)].pax += u64::from(table.pax);
            }
            total_pax += table.display_pax();
        }

        Self {
            total_tables: tables.len(),
            total_pax,
            groups,
            by_category,
        }
    }
}

/// Case-insensitive substring match on name or category
pub fn filter_tables<'a>(tables: &'a [SeatingTable], query: &str) -> Vec<&'a SeatingTable> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return tables.iter().collect();
    }
    tables
        .iter()
        .filter(|t| {
            t.name.to_lowercase().contains(&needle) || t.category.to_lowercase().contains(&needle)
        })
        .collect()
}

/// `max(tableNumber) + 1`, or 1 for an empty plan
pub fn next_table_number(tables: &[SeatingTable]) -> u32 {
    tables
        .iter()
        .map(|t| t.table_number)
        .max()
        .map_or(1, |n| n.saturating_add(1))
}

/// Tables ordered by table number, for printing
pub fn sorted_by_number(tables: &[SeatingTable]) -> Vec<&SeatingTable> {
    let mut sorted: Vec<_> = tables.iter().collect();
    sorted.sort_by_key(|t| t.table_number);
    sorted
}

/// Table numbers used more than once
pub fn duplicate_table_numbers(tables: &[SeatingTable]) -> Vec<u32> {
    let mut counts: BTreeMap<u32, usize> = BTreeMap::new();
    for t in tables {
        *counts.entry(t.table_number).or_default() += 1;
    }
    counts
        .into_iter()
        .filter(|(_, c)| *c > 1)
        .map(|(n, _)| n)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DEFAULT_REGION, SeatAllocation};

    fn table(number: u32, name: &str, pax: u32) -> SeatingTable {
        SeatingTable {
            id: number as i64,
            name: name.to_string(),
            category: name.to_string(),
            pax,
            table_number: number,
            region: DEFAULT_REGION.to_string(),
            notes: String::new(),
            seats: vec![],
        }
    }

    fn sample() -> Vec<SeatingTable> {
        let mut mixed = table(4, "混合桌", 0);
        mixed.seats = vec![
            SeatAllocation {
                category: "雪隆惠州会馆".to_string(),
                pax: 6,
            },
            SeatAllocation {
                category: "吉隆玻沈氏宗祠".to_string(),
                pax: 4,
            },
        ];
        vec![
            table(1, "檳城南陽堂葉氏宗祠", 10),
            table(2, "雪隆嘉应会馆", 8),
            table(3, "Guest of Honour", 5),
            mixed,
        ]
    }

    #[test]
    fn test_compute_stats() {
        let stats = SeatingStats::compute(&sample(), &CategoryClassifier::default());
        assert_eq!(stats.total_tables, 4);
        assert_eq!(stats.total_pax, 33);

        let affiliate = &stats.groups[0];
        assert_eq!(affiliate.group, CategoryGroup::Affiliate);
        assert_eq!(affiliate.tables, 1);
        assert_eq!(affiliate.pax, 14);

        let association = &stats.groups[1];
        // Mixed table's primary seat is the association
        assert_eq!(association.tables, 2);
        assert_eq!(association.pax, 14);

        let other = &stats.groups[2];
        assert_eq!(other.tables, 1);
        assert_eq!(other.pax, 5);

        assert_eq!(stats.by_category["雪隆惠州会馆"], 1);
        assert_eq!(stats.by_category.len(), 4);
    }

    #[test]
    fn test_compute_empty() {
        let stats = SeatingStats::compute(&[], &CategoryClassifier::default());
        assert_eq!(stats.total_tables, 0);
        assert_eq!(stats.total_pax, 0);
        assert_eq!(stats.groups.len(), 3);
    }

    #[test]
    fn test_totals_beyond_u32() {
        let mut mixed = table(3, "混合桌", 0);
        mixed.seats = vec![
            SeatAllocation {
                category: "Guest".to_string(),
                pax: u32::MAX,
            },
            SeatAllocation {
                category: "Guest".to_string(),
                pax: 2,
            },
        ];
        let tables = vec![table(1, "Guest", u32::MAX), table(2, "Guest", 1), mixed];
        let stats = SeatingStats::compute(&tables, &CategoryClassifier::default());

        let expected = 2 * u64::from(u32::MAX) + 3;
        assert_eq!(stats.total_pax, expected);
        assert_eq!(stats.groups[2].pax, expected);
        assert_eq!(tables[2].display_pax(), u64::from(u32::MAX) + 2);
    }

    #[test]
    fn test_filter_tables() {
        let tables = sample();
        assert_eq!(filter_tables(&tables, "").len(), 4);
        assert_eq!(filter_tables(&tables, "guest").len(), 1);
        assert_eq!(filter_tables(&tables, "会馆").len(), 1);
        assert!(filter_tables(&tables, "nothing").is_empty());
    }

    #[test]
    fn test_next_table_number() {
        assert_eq!(next_table_number(&[]), 1);
        let tables = vec![table(3, "a", 1), table(9, "b", 1), table(2, "c", 1)];
        assert_eq!(next_table_number(&tables), 10);
    }

    #[test]
    fn test_duplicates_and_sorting() {
        let tables = vec![table(3, "a", 1), table(1, "b", 1), table(3, "c", 1)];
        assert_eq!(duplicate_table_numbers(&tables), vec![3]);
        let numbers: Vec<_> = sorted_by_number(&tables).iter().map(|t| t.table_number).collect();
        assert_eq!(numbers, vec![1, 3, 3]);
    }
}
