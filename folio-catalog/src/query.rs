use crate::Category;

/// The `{category, searchTerm}` pair driving a filter pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryState {
    category: Category,
    search_term: String,
}

impl QueryState {
    pub fn new(category: Category, search_term: impl AsRef<str>) -> Self {
        Self {
            category,
            search_term: search_term.as_ref().trim().to_string(),
        }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// The search term, already trimmed.
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    pub fn with_search_term(mut self, search_term: impl AsRef<str>) -> Self {
        self.search_term = search_term.as_ref().trim().to_string();
        self
    }

    /// Lower-cased search term, or `None` when there is nothing to search for.
    pub fn needle(&self) -> Option<String> {
        if self.search_term.is_empty() {
            None
        } else {
            Some(self.search_term.to_lowercase())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_query_matches_everything() {
        let query = QueryState::default();
        assert_eq!(query.category(), Category::All);
        assert_eq!(query.search_term(), "");
        assert_eq!(query.needle(), None);
    }

    #[test]
    fn search_term_is_trimmed() {
        let query = QueryState::default().with_search_term("  React \t");
        assert_eq!(query.search_term(), "React");
        assert_eq!(query.needle(), Some("react".to_string()));
    }

    #[test]
    fn whitespace_only_term_is_empty() {
        let query = QueryState::new(Category::Mobile, "   ");
        assert_eq!(query.needle(), None);
        assert_eq!(query, QueryState::new(Category::Mobile, ""));
    }
}
