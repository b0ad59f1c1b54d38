use serde::{Deserialize, Serialize};
use std::fmt;

/// A project identifier from the catalog.
///
/// Catalogs written by hand use plain numbers (`"id": 1`), generated ones
/// tend to use slugs (`"id": "weather-app"`). Both are accepted as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProjectId {
    Number(i64),
    Text(String),
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectId::Number(id) => write!(f, "{}", id),
            ProjectId::Text(id) => write!(f, "{}", id),
        }
    }
}

impl From<i64> for ProjectId {
    fn from(id: i64) -> Self {
        Self::Number(id)
    }
}

impl From<String> for ProjectId {
    fn from(id: String) -> Self {
        Self::Text(id)
    }
}

impl From<&str> for ProjectId {
    fn from(id: &str) -> Self {
        Self::Text(id.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_id_accepts_numbers_and_strings() {
        let ids: Vec<ProjectId> = serde_json::from_str(r#"[1, "chat-app"]"#).unwrap();
        assert_eq!(ids, vec![ProjectId::Number(1), ProjectId::from("chat-app")]);
    }

    #[test]
    fn project_id_display() {
        assert_eq!(ProjectId::from(42_i64).to_string(), "42");
        assert_eq!(ProjectId::from("weather-app").to_string(), "weather-app");
    }

    #[test]
    fn number_and_text_ids_are_distinct() {
        assert_ne!(ProjectId::from(1_i64), ProjectId::from("1"));
    }
}
