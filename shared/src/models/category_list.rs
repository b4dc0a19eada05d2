//! Curated Category Lists
//!
//! Persisted as `categories.json`: list name -> organization names.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Key of the affiliate clan association list
pub const AFFILIATE_LIST_KEY: &str = "属会 (Category A)";
/// Key of the other association list
pub const ASSOCIATION_LIST_KEY: &str = "其他社团 (Category B)";

/// Editable category lists
///
/// Only the two well-known keys influence classification; any other list
/// is kept as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryLists(pub BTreeMap<String, Vec<String>>);

impl CategoryLists {
    pub fn affiliates(&self) -> &[String] {
        self.0.get(AFFILIATE_LIST_KEY).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn associations(&self) -> &[String] {
        self.0.get(ASSOCIATION_LIST_KEY).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every name across all lists, for pickers
    pub fn all_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.0.values().flatten().map(String::as_str).collect();
        names.sort_unstable();
        names.dedup();
        names
    }

    /// Trim names, drop blanks and duplicates within each list
    pub fn normalize(&mut self) {
        for names in self.0.values_mut() {
            let mut seen = std::collections::HashSet::new();
            let cleaned: Vec<String> = names
                .iter()
                .map(|n| n.trim().to_string())
                .filter(|n| !n.is_empty() && seen.insert(n.clone()))
                .collect();
            *names = cleaned;
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.0.keys().any(|k| k.trim().is_empty()) {
            return Err("category list name must not be empty".to_string());
        }
        Ok(())
    }
}

impl From<BTreeMap<String, Vec<String>>> for CategoryLists {
    fn from(map: BTreeMap<String, Vec<String>>) -> Self {
        Self(map)
    }
}
