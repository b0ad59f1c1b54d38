use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// Project category, as shown on the filter buttons.
///
/// `All` is the query wildcard. A record never carries it as its own
/// category; the catalog loader rejects records that try.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Display,
    EnumString,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Category {
    Frontend,
    Backend,
    Fullstack,
    Mobile,
    #[default]
    All,
}

impl Category {
    pub fn is_wildcard(&self) -> bool {
        matches!(self, Category::All)
    }

    /// Categories a record can actually belong to, in filter-button order.
    pub fn concrete() -> impl Iterator<Item = Category> {
        Category::iter().filter(|category| !category.is_wildcard())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn category_display() {
        assert_eq!(Category::Frontend.to_string(), "frontend");
        assert_eq!(Category::Fullstack.to_string(), "fullstack");
        assert_eq!(Category::All.to_string(), "all");
    }

    #[test]
    fn category_from_str_is_exact() {
        assert_eq!(Category::from_str("mobile").unwrap(), Category::Mobile);
        assert_eq!(Category::from_str("all").unwrap(), Category::All);
        assert!(Category::from_str("Mobile").is_err());
        assert!(Category::from_str("bogus").is_err());
        assert!(Category::from_str("").is_err());
    }

    #[test]
    fn concrete_excludes_wildcard() {
        let concrete: Vec<_> = Category::concrete().collect();
        assert_eq!(
            concrete,
            vec![
                Category::Frontend,
                Category::Backend,
                Category::Fullstack,
                Category::Mobile
            ]
        );
    }

    #[test]
    fn default_is_all() {
        assert_eq!(Category::default(), Category::All);
    }
}
