//! Sample catalog for demo purposes, used when no catalog is configured.
//! Real deployments point `catalog_path` at their own projects file.
use folio_catalog::{Catalog, CatalogError};

const SAMPLE_CATALOG: &str = include_str!("../data/sample_catalog.json");

pub fn sample_catalog() -> Result<Catalog, CatalogError> {
    Catalog::from_json(SAMPLE_CATALOG)
}
