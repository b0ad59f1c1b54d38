//! Per-record predicates for the category buttons and the search box.

use crate::{ProjectRecord, QueryState};

/// Decide whether `record` belongs in the result set for `query`.
///
/// A record missing its title, description or technologies never matches,
/// whatever the query.
pub fn matches(record: &ProjectRecord, query: &QueryState) -> bool {
    let (Some(title), Some(description), Some(technologies)) = (
        record.title.as_deref(),
        record.description.as_deref(),
        record.technologies.as_deref(),
    ) else {
        return false;
    };

    if !matches_category(record, query) {
        return false;
    }

    let Some(needle) = query.needle() else {
        return true;
    };

    contains_ignore_case(title, &needle)
        || contains_ignore_case(description, &needle)
        || technologies
            .iter()
            .any(|technology| contains_ignore_case(technology, &needle))
}

fn matches_category(record: &ProjectRecord, query: &QueryState) -> bool {
    query.category().is_wildcard() || record.category == query.category()
}

// `needle` is expected to be lower-cased already.
fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}
