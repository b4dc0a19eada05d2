//! Seating allocator
//!
//! Splits an organization's guest count across one or more numbered tables.
//! Every table gets `total / n` guests and the first `total % n` listed tables
//! get one more, so the produced pax always sums to the total.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::{DEFAULT_REGION, SeatingTable};

/// Guest count used when the imported value is missing, zero or garbage.
/// Negative counts fall back to this too.
pub const DEFAULT_GUESTS: u32 = 2;

/// Separator between table numbers in a table spec (`3/4/5/6`)
pub const TABLE_SPEC_SEPARATOR: char = '/';

/// Integer prefix parse: optional sign then digits, trailing junk ignored.
///
/// `"12abc"` -> 12, `" -3"` -> -3, `"abc"` -> None.
pub fn parse_int_prefix(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    // Overlong digit runs saturate instead of failing
    let value = digits[..end].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -value } else { value })
}

/// Something the allocator silently corrected
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum AllocationWarning {
    /// Guest count was missing, zero, negative or unparseable
    #[serde(rename_all = "camelCase")]
    GuestsDefaulted { name: String, raw: String },
    /// Guest count exceeded `u32::MAX` and was capped to it
    #[serde(rename_all = "camelCase")]
    GuestsClamped { name: String, raw: String },
    /// A table spec part was not a positive integer and was dropped
    #[serde(rename_all = "camelCase")]
    TableNumberDropped { name: String, part: String },
    /// Nothing usable in the table spec; the row produced no tables
    #[serde(rename_all = "camelCase")]
    NoTableNumbers { name: String, spec: String },
}

impl fmt::Display for AllocationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GuestsDefaulted { name, raw } => write!(
                f,
                "{}: guest count {:?} replaced by {}",
                name, raw, DEFAULT_GUESTS
            ),
            Self::GuestsClamped { name, raw } => write!(
                f,
                "{}: guest count {:?} capped at {}",
                name, raw, u32::MAX
            ),
            Self::TableNumberDropped { name, part } => {
                write!(f, "{}: ignored table number {:?}", name, part)
            }
            Self::NoTableNumbers { name, spec } => {
                write!(f, "{}: no usable table number in {:?}", name, spec)
            }
        }
    }
}

/// One imported line: organization, guest count, table spec
///
/// The guest-count fallback is applied at construction, so `total_guests`
/// is always at least 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportRow {
    name: String,
    total_guests: u32,
    table_spec: String,
    /// Set when the guest count had to be corrected
    guest_fix: Option<GuestFix>,
}

/// How the imported guest text was corrected, keeping the original text
#[derive(Debug, Clone, PartialEq, Eq)]
enum GuestFix {
    Defaulted(String),
    Clamped(String),
}

impl ImportRow {
    pub fn new(name: impl Into<String>, total_guests: i64, table_spec: impl Into<String>) -> Self {
        let (total_guests, guest_fix) =
            coerce_guests(Some(total_guests), &total_guests.to_string());
        Self {
            name: name.into().trim().to_string(),
            total_guests,
            table_spec: table_spec.into(),
            guest_fix,
        }
    }

    /// Build from raw text fields as found in an import file
    pub fn from_text(name: &str, guests: &str, table_spec: &str) -> Self {
        let (total_guests, guest_fix) = coerce_guests(parse_int_prefix(guests), guests);
        Self {
            name: name.trim().to_string(),
            total_guests,
            table_spec: table_spec.to_string(),
            guest_fix,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn total_guests(&self) -> u32 {
        self.total_guests
    }

    pub fn table_spec(&self) -> &str {
        &self.table_spec
    }

    pub fn guests_defaulted(&self) -> bool {
        matches!(self.guest_fix, Some(GuestFix::Defaulted(_)))
    }

    pub fn guests_clamped(&self) -> bool {
        matches!(self.guest_fix, Some(GuestFix::Clamped(_)))
    }
}

fn coerce_guests(parsed: Option<i64>, raw: &str) -> (u32, Option<GuestFix>) {
    match parsed {
        Some(n) if n > 0 => match u32::try_from(n) {
            Ok(n) => (n, None),
            Err(_) => (u32::MAX, Some(GuestFix::Clamped(raw.trim().to_string()))),
        },
        _ => (DEFAULT_GUESTS, Some(GuestFix::Defaulted(raw.to_string()))),
    }
}

/// Table numbers in spec order, plus the parts that had to be dropped
fn parse_table_spec(spec: &str) -> (Vec<u32>, Vec<String>) {
    let mut numbers = Vec::new();
    let mut dropped = Vec::new();
    for part in spec.split(TABLE_SPEC_SEPARATOR) {
        match parse_int_prefix(part.trim()) {
            Some(n) if n > 0 && n <= i64::from(u32::MAX) => numbers.push(n as u32),
            _ => dropped.push(part.trim().to_string()),
        }
    }
    (numbers, dropped)
}

/// Tables produced from one or more rows, with what was corrected on the way
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Allocation {
    pub tables: Vec<SeatingTable>,
    pub warnings: Vec<AllocationWarning>,
}

/// Allocate one row's guests over its tables
///
/// Records carry `id = 0`; the caller assigns ids.
pub fn allocate(row: &ImportRow) -> Vec<SeatingTable> {
    allocate_checked(row).tables
}

/// Same tables as [`allocate`], plus a warning for every fallback taken
pub fn allocate_checked(row: &ImportRow) -> Allocation {
    let mut warnings = Vec::new();
    match &row.guest_fix {
        Some(GuestFix::Defaulted(raw)) => warnings.push(AllocationWarning::GuestsDefaulted {
            name: row.name.clone(),
            raw: raw.clone(),
        }),
        Some(GuestFix::Clamped(raw)) => warnings.push(AllocationWarning::GuestsClamped {
            name: row.name.clone(),
            raw: raw.clone(),
        }),
        None => {}
    }

    let (numbers, dropped) = parse_table_spec(&row.table_spec);
    if numbers.is_empty() {
        warnings.push(AllocationWarning::NoTableNumbers {
            name: row.name.clone(),
            spec: row.table_spec.clone(),
        });
        return Allocation {
            tables: Vec::new(),
            warnings,
        };
    }
    warnings.extend(dropped.into_iter().map(|part| AllocationWarning::TableNumberDropped {
        name: row.name.clone(),
        part,
    }));

    let n = numbers.len() as u32;
    let base = row.total_guests / n;
    let remainder = row.total_guests % n;

    let tables = numbers
        .into_iter()
        .enumerate()
        .map(|(idx, table_number)| SeatingTable {
            id: 0,
            name: row.name.clone(),
            category: row.name.clone(),
            pax: base + u32::from((idx as u32) < remainder),
            table_number,
            region: DEFAULT_REGION.to_string(),
            notes: String::new(),
            seats: Vec::new(),
        })
        .collect();

    Allocation { tables, warnings }
}

/// Allocate every row in order
pub fn allocate_batch(rows: &[ImportRow]) -> Allocation {
    rows.iter().map(allocate_checked).fold(Allocation::default(), |mut acc, a| {
        acc.tables.extend(a.tables);
        acc.warnings.extend(a.warnings);
        acc
    })
}

/// Rows parsed from a tab-separated block
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportBatch {
    pub rows: Vec<ImportRow>,
    /// 1-based line numbers that did not have exactly three fields
    pub skipped_lines: Vec<usize>,
}

/// Parse `name<TAB>guests<TAB>tables` lines. Blank lines are ignored.
pub fn parse_import_rows(text: &str) -> ImportBatch {
    let mut batch = ImportBatch::default();
    for (idx, line) in text.lines().enumerate() {
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }
        let parts: Vec<&str> = line.split('\t').collect();
        match parts.as_slice() {
            [name, guests, spec] => batch.rows.push(ImportRow::from_text(name, guests, spec)),
            _ => batch.skipped_lines.push(idx + 1),
        }
    }
    batch
}

/// Body of an import request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportRequest {
    /// Tab-separated rows, one organization per line
    pub text: String,
    /// Swap the whole plan instead of appending to it
    #[serde(default)]
    pub replace: bool,
}

/// What an import did
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportReport {
    pub created: Vec<SeatingTable>,
    pub warnings: Vec<AllocationWarning>,
    pub skipped_lines: Vec<usize>,
}
