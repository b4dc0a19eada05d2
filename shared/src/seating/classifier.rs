//! Category classifier
//!
//! Maps a free-text organization name to one of three display groups:
//! exact membership in the curated lists first, then keyword matching.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::models::{AFFILIATE_LIST_KEY, ASSOCIATION_LIST_KEY, CategoryLists};

/// Clan and ancestral-hall keywords (simplified script only)
pub const AFFILIATE_KEYWORDS: &[&str] = &["属会", "宗祠", "宗亲"];

/// Guild and association keywords
pub const ASSOCIATION_KEYWORDS: &[&str] = &["会馆", "社团"];

/// Affiliated clan associations of the host
pub const DEFAULT_AFFILIATES: &[&str] = &[
    "檳城南陽堂葉氏宗祠",
    "霹靂太平南陽堂葉氏宗祠",
    "隆雪南陽葉氏公會",
    "雪蘭莪沙登、無拉港南陽葉氏宗親會",
    "森州南陽葉氏宗親聯宗會",
    "波德申葉氏聯宗會",
    "馬六甲吳興南陽堂沈葉尤宗祠",
    "柔佛州葉氏宗親會",
    "柔南南陽葉氏宗親會",
    "沙巴州西海岸葉氏宗親會",
    "沙巴州山打根葉氏宗親會",
    "沙巴州斗湖葉氏宗親會",
    "砂拉越美里葉氏",
    "砂拉越詩巫省南陽葉氏宗親會",
    "砂拉越泗里街省葉氏公會",
    "砂拉越南陽葉氏宗親會",
    "雪州蒲種葉氏公會",
    "馬來西亞南陽葉氏宗親總會",
    "雪蘭莪沈氏宗祠",
    "吉隆玻沈氏宗祠",
    "馬來西亞尤氏宗親總會",
];

/// Other associations invited as guests
pub const DEFAULT_ASSOCIATIONS: &[&str] = &[
    "雪隆惠州会馆",
    "雪隆嘉应会馆",
    "雪隆海南会馆",
    "雪隆福建会馆",
    "雪隆广西总会",
    "雪隆潮州八邑会馆",
];

/// Display group of a table or task category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryGroup {
    /// 属会宗亲会
    Affiliate,
    /// 其他社团
    Association,
    /// 其他
    Other,
}

impl CategoryGroup {
    pub const ALL: [CategoryGroup; 3] = [Self::Affiliate, Self::Association, Self::Other];

    /// Chinese label shown in headers and charts
    pub fn label(&self) -> &'static str {
        match self {
            Self::Affiliate => "属会宗亲会",
            Self::Association => "其他社团",
            Self::Other => "其他",
        }
    }
}

/// Tailwind classes and chart color for a group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupStyle {
    pub border: &'static str,
    pub text: &'static str,
    pub background: &'static str,
    pub header: &'static str,
    pub pie_color: &'static str,
}

pub const fn styles_for(group: CategoryGroup) -> GroupStyle {
    match group {
        CategoryGroup::Affiliate => GroupStyle {
            border: "border-cyan-400",
            text: "text-cyan-700",
            background: "bg-cyan-50",
            header: "text-cyan-800 border-cyan-200 bg-cyan-50",
            pie_color: "#06B6D4",
        },
        CategoryGroup::Association => GroupStyle {
            border: "border-emerald-400",
            text: "text-emerald-700",
            background: "bg-emerald-50",
            header: "text-emerald-800 border-emerald-200 bg-emerald-50",
            pie_color: "#10B981",
        },
        CategoryGroup::Other => GroupStyle {
            border: "border-gray-300",
            text: "text-gray-700",
            background: "bg-gray-50",
            header: "text-gray-700 border-gray-200 bg-gray-50",
            pie_color: "#9CA3AF",
        },
    }
}

fn classify_by_keyword(name: &str) -> CategoryGroup {
    if AFFILIATE_KEYWORDS.iter().any(|k| name.contains(k)) {
        CategoryGroup::Affiliate
    } else if ASSOCIATION_KEYWORDS.iter().any(|k| name.contains(k)) {
        CategoryGroup::Association
    } else {
        CategoryGroup::Other
    }
}

/// Classify against the built-in lists
pub fn classify(category: Option<&str>) -> CategoryGroup {
    let Some(name) = category.filter(|c| !c.is_empty()) else {
        return CategoryGroup::Other;
    };
    if DEFAULT_AFFILIATES.contains(&name) {
        CategoryGroup::Affiliate
    } else if DEFAULT_ASSOCIATIONS.contains(&name) {
        CategoryGroup::Association
    } else {
        classify_by_keyword(name)
    }
}

/// The built-in lists in their persisted shape
pub fn default_category_lists() -> CategoryLists {
    fn to_vec(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }
    let mut map = BTreeMap::new();
    map.insert(AFFILIATE_LIST_KEY.to_string(), to_vec(DEFAULT_AFFILIATES));
    map.insert(ASSOCIATION_LIST_KEY.to_string(), to_vec(DEFAULT_ASSOCIATIONS));
    CategoryLists(map)
}

/// Classifier over user-edited lists
#[derive(Debug, Clone)]
pub struct CategoryClassifier {
    affiliates: HashSet<String>,
    associations: HashSet<String>,
}

impl CategoryClassifier {
    pub fn from_lists(lists: &CategoryLists) -> Self {
        Self {
            affiliates: lists.affiliates().iter().cloned().collect(),
            associations: lists.associations().iter().cloned().collect(),
        }
    }

    pub fn classify(&self, category: Option<&str>) -> CategoryGroup {
        let Some(name) = category.filter(|c| !c.is_empty()) else {
            return CategoryGroup::Other;
        };
        if self.affiliates.contains(name) {
            CategoryGroup::Affiliate
        } else if self.associations.contains(name) {
            CategoryGroup::Association
        } else {
            classify_by_keyword(name)
        }
    }
}

impl Default for CategoryClassifier {
    fn default() -> Self {
        Self::from_lists(&default_category_lists())
    }
}
