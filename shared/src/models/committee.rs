//! Committee Model (筹委会)

use serde::{Deserialize, Deserializer, Serialize};

/// A committee role and the people holding it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitteeGroup {
    pub role: String,
    #[serde(default, deserialize_with = "member_names")]
    pub members: Vec<String>,
}

/// Members are plain names; `{ "name": ... }` objects are accepted too
fn member_names<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Member {
        Name(String),
        Object { name: String },
    }

    let raw = Vec::<Member>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .map(|m| match m {
            Member::Name(name) | Member::Object { name } => name,
        })
        .collect())
}

/// Every distinct member, in first-seen order
pub fn all_members(committee: &[CommitteeGroup]) -> Vec<&str> {
    let mut seen = std::collections::HashSet::new();
    committee
        .iter()
        .flat_map(|g| g.members.iter().map(String::as_str))
        .filter(|m| seen.insert(*m))
        .collect()
}

/// Roles a person holds
pub fn roles_of<'a>(committee: &'a [CommitteeGroup], member: &str) -> Vec<&'a str> {
    committee
        .iter()
        .filter(|g| g.members.iter().any(|m| m == member))
        .map(|g| g.role.as_str())
        .collect()
}

pub fn validate_committee(committee: &[CommitteeGroup]) -> Result<(), String> {
    for group in committee {
        if group.role.trim().is_empty() {
            return Err("committee group has no role".to_string());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<CommitteeGroup> {
        serde_json::from_str(
            r#"[
                { "role": "秘书", "members": ["国汉", "毓腾"] },
                { "role": "特刊小组", "members": ["志行", { "name": "国汉" }] },
                { "role": "摄影", "members": ["丽霞"] }
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn test_members_accept_objects() {
        let committee = sample();
        assert_eq!(committee[1].members, vec!["志行", "国汉"]);
        let out = serde_json::to_value(&committee[1]).unwrap();
        assert_eq!(out["members"][1], "国汉");
    }

    #[test]
    fn test_all_members_dedupes() {
        let committee = sample();
        assert_eq!(all_members(&committee), vec!["国汉", "毓腾", "志行", "丽霞"]);
    }

    #[test]
    fn test_roles_of() {
        let committee = sample();
        assert_eq!(roles_of(&committee, "国汉"), vec!["秘书", "特刊小组"]);
        assert!(roles_of(&committee, "nobody").is_empty());
    }

    #[test]
    fn test_validate() {
        assert!(validate_committee(&sample()).is_ok());
        let bad = vec![CommitteeGroup {
            role: " ".to_string(),
            members: vec![],
        }];
        assert!(validate_committee(&bad).is_err());
    }
}
