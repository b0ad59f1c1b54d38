use anyhow::{Context, Result};
use folio_catalog::{Catalog, OrderingPolicy, QueryController};
use std::io::Write;
use std::path::Path;
use tracing::info;

use crate::{
    config::FolioConfig,
    render::{self, OutputFormat},
    sample,
};

/// Pick the catalog source: `--sample`, then `--catalog`, then the
/// configured path, then the built-in sample.
pub fn load_catalog(
    sample: bool,
    catalog: Option<&Path>,
    config: &FolioConfig,
) -> Result<Catalog> {
    if sample {
        return sample::sample_catalog().context("Built-in sample catalog is invalid");
    }

    match catalog.or(config.catalog_path.as_deref()) {
        Some(path) => Catalog::from_path(path)
            .with_context(|| format!("Failed to load catalog at {}", path.display())),
        None => {
            info!("No catalog configured, using the built-in sample");
            sample::sample_catalog().context("Built-in sample catalog is invalid")
        }
    }
}

pub fn list(
    out: &mut impl Write,
    catalog: &Catalog,
    ordering: OrderingPolicy,
    category: &str,
    search: &str,
    format: OutputFormat,
) -> Result<()> {
    let mut controller = QueryController::new(catalog, ordering);
    controller.set_category(category)?;
    controller.set_search_term(search);
    render::render_results(out, &controller.current_results(), format)
}

pub fn validate(out: &mut impl Write, catalog: &Catalog) -> Result<()> {
    writeln!(out, "Catalog OK: {} projects", catalog.len())?;
    Ok(())
}

pub fn categories(out: &mut impl Write, catalog: &Catalog) -> Result<()> {
    render::render_category_counts(out, &catalog.category_counts())
}

pub fn technologies(out: &mut impl Write, catalog: &Catalog) -> Result<()> {
    render::render_technologies(out, &catalog.technologies())
}

/// Print the config path, writing a default file there first if none exists.
pub fn config_path(out: &mut impl Write, path: &Path) -> Result<()> {
    if !path.exists() {
        FolioConfig::default()
            .save_to(path)
            .with_context(|| format!("Failed to write default config at {}", path.display()))?;
    }
    writeln!(out, "{}", path.display())?;
    Ok(())
}
