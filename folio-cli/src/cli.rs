use clap::{Parser, Subcommand};
use folio_catalog::OrderingPolicy;
use std::path::PathBuf;

use crate::render::OutputFormat;

#[derive(Debug, Parser)]
#[command(name = "folio")]
#[command(about = "Browse and search the portfolio project catalog")]
pub struct Cli {
    /// JSON catalog to load instead of the configured one
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,
    /// Use the built-in sample catalog
    #[arg(long, global = true)]
    pub sample: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List projects matching a category and a search term
    List {
        /// frontend, backend, fullstack, mobile or all
        #[arg(short, long, default_value = "all")]
        category: String,
        /// Case-insensitive text matched against title, description and technologies
        #[arg(short, long, default_value = "")]
        search: String,
        /// featured or catalog; overrides the configured ordering
        #[arg(long)]
        ordering: Option<OrderingPolicy>,
        /// Overrides the configured output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },
    /// Check that the catalog loads
    Validate,
    /// Show how many projects each category holds
    Categories,
    /// Show every technology used across the catalog
    Technologies,
    /// Print config path and create default file if missing
    ConfigPath,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_list_with_filters() {
        let cli = Cli::parse_from([
            "folio", "list", "--category", "frontend", "-s", "react", "--ordering", "catalog",
            "--format", "json",
        ]);
        let Commands::List {
            category,
            search,
            ordering,
            format,
        } = cli.command
        else {
            panic!("expected list command");
        };
        assert_eq!(category, "frontend");
        assert_eq!(search, "react");
        assert_eq!(ordering, Some(OrderingPolicy::Catalog));
        assert_eq!(format, Some(OutputFormat::Json));
    }

    #[test]
    fn list_defaults() {
        let cli = Cli::parse_from(["folio", "list"]);
        let Commands::List {
            category,
            search,
            ordering,
            format,
        } = cli.command
        else {
            panic!("expected list command");
        };
        assert_eq!(category, "all");
        assert_eq!(search, "");
        assert_eq!(ordering, None);
        assert_eq!(format, None);
    }

    #[test]
    fn global_catalog_flag_after_subcommand() {
        let cli = Cli::parse_from(["folio", "validate", "--catalog", "projects.json"]);
        assert_eq!(cli.catalog, Some(PathBuf::from("projects.json")));
        assert!(!cli.sample);
    }

    #[test]
    fn unknown_ordering_is_rejected() {
        assert!(Cli::try_parse_from(["folio", "list", "--ordering", "random"]).is_err());
    }
}
