use std::str::FromStr;
use tracing::{debug, warn};

use crate::{
    error::QueryError,
    filter::matches,
    ordering::{order, OrderingPolicy},
    Catalog, Category, ProjectRecord, QueryState,
};

/// Owns the query for one view and produces its result set.
///
/// The catalog is ordered once on construction; every call to
/// [`QueryController::current_results`] is a linear filter pass over that
/// order, so results never get reordered by the query.
#[derive(Debug, Clone)]
pub struct QueryController<'a> {
    ordered: Vec<&'a ProjectRecord>,
    query: QueryState,
}

impl<'a> QueryController<'a> {
    pub fn new(catalog: &'a Catalog, policy: OrderingPolicy) -> Self {
        Self {
            ordered: order(catalog.records(), policy),
            query: QueryState::default(),
        }
    }

    pub fn query(&self) -> &QueryState {
        &self.query
    }

    /// Select a category by name, e.g. from a filter button.
    ///
    /// Unknown names are rejected and the current category is kept.
    pub fn set_category(&mut self, category: &str) -> Result<(), QueryError> {
        let Ok(parsed) = Category::from_str(category) else {
            warn!(category, "Rejected unknown category");
            return Err(QueryError::InvalidCategory(category.to_string()));
        };
        self.select(parsed);
        Ok(())
    }

    pub fn select(&mut self, category: Category) {
        debug!(%category, "Category selected");
        self.query = std::mem::take(&mut self.query).with_category(category);
    }

    /// Replace the search term. Surrounding whitespace is dropped.
    pub fn set_search_term(&mut self, term: impl AsRef<str>) {
        self.query = std::mem::take(&mut self.query).with_search_term(term);
        debug!(term = self.query.search_term(), "Search term updated");
    }

    pub fn reset(&mut self) {
        self.query = QueryState::default();
    }

    /// Records matching the current query, in catalog order.
    pub fn current_results(&self) -> Vec<&'a ProjectRecord> {
        let results: Vec<&'a ProjectRecord> = self
            .ordered
            .iter()
            .copied()
            .filter(|record| matches(record, &self.query))
            .collect();
        debug!(
            "{} of {} projects match {:?}",
            results.len(),
            self.ordered.len(),
            self.query
        );
        results
    }
}
