//! The read-only project record store.
//!
//! A [`Catalog`] is built once from static configuration and handed out by
//! shared reference afterwards. There is no way to add, remove or edit a
//! record after load.

use itertools::Itertools;
use std::collections::HashSet;
use std::path::Path;
use tracing::{info, warn};

use crate::{
    error::{CatalogError, MalformedReason},
    Category, ProjectId, ProjectRecord, RawProjectRecord,
};

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Vec<ProjectRecord>,
}

impl Catalog {
    /// Validate every record, in declaration order.
    ///
    /// Fails on the first malformed record; nothing is kept in that case.
    pub fn load(raw_records: Vec<RawProjectRecord>) -> Result<Self, CatalogError> {
        let mut seen_ids = HashSet::with_capacity(raw_records.len());
        let mut records = Vec::with_capacity(raw_records.len());

        for (position, raw) in raw_records.into_iter().enumerate() {
            let record = raw.validate(position)?;

            if !seen_ids.insert(record.id.clone()) {
                return Err(CatalogError::malformed(
                    position,
                    record.id.to_string(),
                    MalformedReason::DuplicateId,
                ));
            }

            if !record.is_searchable() {
                warn!(
                    id = %record.id,
                    position,
                    "Record has no usable title, description or technologies and will never match"
                );
            }

            records.push(record);
        }

        info!("Loaded catalog with {} projects", records.len());
        Ok(Self { records })
    }

    /// Load from a JSON array of records.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let raw_records: Vec<RawProjectRecord> = serde_json::from_str(json)?;
        Self::load(raw_records)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&json)
    }

    /// All records, in declaration order.
    pub fn records(&self) -> &[ProjectRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &ProjectId) -> Option<&ProjectRecord> {
        self.records.iter().find(|record| &record.id == id)
    }

    /// Distinct technology tags, in the order they first appear.
    pub fn technologies(&self) -> Vec<&str> {
        self.records
            .iter()
            .filter_map(|record| record.technologies.as_deref())
            .flatten()
            .map(String::as_str)
            .unique()
            .collect()
    }

    /// Number of records per concrete category, in filter-button order.
    /// Categories without records are included with a count of zero.
    pub fn category_counts(&self) -> Vec<(Category, usize)> {
        let counts = self.records.iter().counts_by(|record| record.category);
        Category::concrete()
            .map(|category| (category, counts.get(&category).copied().unwrap_or(0)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{matches, QueryState};
    use std::io::Write;

    const CATALOG: &str = r#"[
        {
            "id": 1,
            "title": "Weather Forecast App",
            "description": "Detailed weather forecasts using the OpenWeatherMap API.",
            "technologies": ["React", "JavaScript", "CSS3"],
            "category": "frontend",
            "completionDate": "2023-04-12"
        },
        {
            "id": 2,
            "title": "E-commerce Platform",
            "description": "Shopping cart and Stripe payments.",
            "technologies": ["React", "Node.js", "MongoDB"],
            "category": "fullstack",
            "featured": true,
            "status": "in-progress",
            "repoLink": "https://github.com/example/ecommerce-platform"
        },
        {
            "id": "chat-app",
            "title": "Chat Application",
            "description": "Real-time chat rooms.",
            "technologies": ["Node.js", "Socket.io"],
            "category": "fullstack",
            "completionDate": "2022-11-30",
            "status": "completed"
        }
    ]"#;

    #[test]
    fn load_keeps_declaration_order() {
        let catalog = Catalog::from_json(CATALOG).unwrap();
        let ids: Vec<String> = catalog.records().iter().map(|r| r.id.to_string()).collect();
        assert_eq!(ids, vec!["1", "2", "chat-app"]);
        assert_eq!(catalog.len(), 3);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn load_fails_without_partial_catalog() {
        let json = r#"[
            { "id": 1, "category": "frontend" },
            { "id": 2, "category": "desktop" }
        ]"#;
        let err = Catalog::from_json(json).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::MalformedRecord {
                position: 1,
                reason: MalformedReason::UnknownCategory(_),
                ..
            }
        ));
    }

    #[test]
    fn load_rejects_duplicate_ids() {
        let json = r#"[
            { "id": 7, "category": "frontend" },
            { "id": 7, "category": "backend" }
        ]"#;
        let err = Catalog::from_json(json).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::MalformedRecord {
                position: 1,
                reason: MalformedReason::DuplicateId,
                ..
            }
        ));
    }

    #[test]
    fn load_rejects_invalid_json() {
        let err = Catalog::from_json("{ not json").unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));

        let err = Catalog::from_json(r#"[{ "category": "frontend" }]"#).unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn load_reports_missing_category_against_its_record() {
        let json = r#"[{ "id": 1, "title": "x", "description": "d", "technologies": [] }]"#;
        let err = Catalog::from_json(json).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::MalformedRecord {
                position: 0,
                reason: MalformedReason::MissingCategory,
                ..
            }
        ));
        assert!(err.to_string().contains("id 1"));
    }

    #[test]
    fn mistyped_search_fields_do_not_fail_the_load() {
        let json = r#"[
            {
                "id": 1,
                "title": "Weather App",
                "description": "Forecasts",
                "technologies": ["React"],
                "category": "frontend"
            },
            { "id": 2, "title": "Shop", "description": "Cart", "technologies": "React", "category": "frontend" },
            { "id": 3, "title": 42, "description": "Chat", "technologies": ["React"], "category": "frontend" },
            { "id": 4, "title": "Tracker", "description": "Habits", "technologies": ["React", null], "category": "frontend" }
        ]"#;
        let catalog = Catalog::from_json(json).unwrap();
        assert_eq!(catalog.len(), 4);

        let react = QueryState::default().with_search_term("react");
        let matching: Vec<String> = catalog
            .records()
            .iter()
            .filter(|record| matches(record, &react))
            .map(|record| record.id.to_string())
            .collect();
        assert_eq!(matching, vec!["1"]);

        for record in &catalog.records()[1..] {
            assert!(!matches(record, &QueryState::default()));
        }
    }

    #[test]
    fn load_keeps_incomplete_records() {
        let catalog = Catalog::from_json(r#"[{ "id": 1, "category": "mobile" }]"#).unwrap();
        assert_eq!(catalog.len(), 1);
        assert!(!catalog.records()[0].is_searchable());
    }

    #[test]
    fn empty_catalog_is_valid() {
        let catalog = Catalog::from_json("[]").unwrap();
        assert!(catalog.is_empty());
        assert!(catalog.technologies().is_empty());
    }

    #[test]
    fn get_by_id() {
        let catalog = Catalog::from_json(CATALOG).unwrap();
        let chat = catalog.get(&ProjectId::from("chat-app")).unwrap();
        assert_eq!(chat.title.as_deref(), Some("Chat Application"));
        assert!(catalog.get(&ProjectId::Number(99)).is_none());
    }

    #[test]
    fn technologies_are_distinct_in_first_seen_order() {
        let catalog = Catalog::from_json(CATALOG).unwrap();
        assert_eq!(
            catalog.technologies(),
            vec!["React", "JavaScript", "CSS3", "Node.js", "MongoDB", "Socket.io"]
        );
    }

    #[test]
    fn category_counts_cover_every_concrete_category() {
        let catalog = Catalog::from_json(CATALOG).unwrap();
        assert_eq!(
            catalog.category_counts(),
            vec![
                (Category::Frontend, 1),
                (Category::Backend, 0),
                (Category::Fullstack, 2),
                (Category::Mobile, 0),
            ]
        );
    }

    #[test]
    fn from_path_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(CATALOG.as_bytes()).unwrap();
        let catalog = Catalog::from_path(file.path()).unwrap();
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn from_path_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Catalog::from_path(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, CatalogError::Read(_)));
    }
}
