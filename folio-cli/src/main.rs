mod cli;
mod commands;
mod config;
mod render;
mod sample;

use anyhow::Result;
use clap::Parser;
use crate::cli::{Cli, Commands};
use crate::config::FolioConfig;
use folio_catalog::Catalog;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    dotenvy::from_filename(".env.folio").ok();

    // Logs go to stderr so `--format json` output stays pipeable.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "folio=info,folio_catalog=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let mut stdout = std::io::stdout().lock();

    // config-path must work even when the config or catalog is broken.
    let load = || -> Result<(FolioConfig, Catalog)> {
        let config = FolioConfig::load()?;
        let catalog = commands::load_catalog(cli.sample, cli.catalog.as_deref(), &config)?;
        Ok((config, catalog))
    };

    match cli.command {
        Commands::List {
            category,
            search,
            ordering,
            format,
        } => {
            let (config, catalog) = load()?;
            commands::list(
                &mut stdout,
                &catalog,
                ordering.unwrap_or(config.ordering),
                &category,
                &search,
                format.unwrap_or(config.format),
            )
        }
        Commands::Validate => commands::validate(&mut stdout, &load()?.1),
        Commands::Categories => commands::categories(&mut stdout, &load()?.1),
        Commands::Technologies => commands::technologies(&mut stdout, &load()?.1),
        Commands::ConfigPath => commands::config_path(&mut stdout, &FolioConfig::config_path()?),
    }
}
