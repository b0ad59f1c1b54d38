use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use strum::{Display, EnumString};

use crate::ProjectRecord;

/// How the catalog is ordered before any filtering happens.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum OrderingPolicy {
    /// Featured first, then most recently completed, in-progress last.
    #[default]
    Featured,
    /// Declaration order, untouched.
    Catalog,
}

/// Order the whole catalog once. The sort is stable, so records with equal
/// keys keep their declaration order.
pub fn order(records: &[ProjectRecord], policy: OrderingPolicy) -> Vec<&ProjectRecord> {
    let mut ordered: Vec<&ProjectRecord> = records.iter().collect();
    match policy {
        OrderingPolicy::Featured => ordered.sort_by(|a, b| compare_featured(a, b)),
        OrderingPolicy::Catalog => {}
    }
    ordered
}

fn compare_featured(a: &ProjectRecord, b: &ProjectRecord) -> Ordering {
    b.featured
        .cmp(&a.featured)
        .then_with(|| match (a.completion_date, b.completion_date) {
            (Some(a), Some(b)) => b.cmp(&a),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        })
}
