use anyhow::Result;
use clap::ValueEnum;
use folio_catalog::{Category, ProjectRecord};
use serde::{Deserialize, Serialize};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

pub fn render_results(
    out: &mut impl Write,
    results: &[&ProjectRecord],
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, results)?;
            writeln!(out)?;
        }
        OutputFormat::Text if results.is_empty() => {
            writeln!(out, "No projects match.")?;
        }
        OutputFormat::Text => {
            for (i, record) in results.iter().enumerate() {
                if i > 0 {
                    writeln!(out)?;
                }
                render_card(out, record)?;
            }
        }
    }
    Ok(())
}

fn render_card(out: &mut impl Write, record: &ProjectRecord) -> Result<()> {
    let marker = if record.featured { " ★" } else { "" };
    writeln!(
        out,
        "{}{} [{}]",
        record.title.as_deref().unwrap_or_default(),
        marker,
        record.category
    )?;
    writeln!(out, "  {}", record.description.as_deref().unwrap_or_default())?;

    let technologies = record.technologies.as_deref().unwrap_or_default();
    if !technologies.is_empty() {
        writeln!(out, "  {}", technologies.join(", "))?;
    }

    match record.completion_date {
        Some(date) => writeln!(out, "  completed {}", date)?,
        None => writeln!(out, "  in progress")?,
    }
    if let Some(repo_link) = &record.repo_link {
        writeln!(out, "  repo: {}", repo_link)?;
    }
    if let Some(live_link) = &record.live_link {
        writeln!(out, "  live: {}", live_link)?;
    }
    Ok(())
}

pub fn render_category_counts(out: &mut impl Write, counts: &[(Category, usize)]) -> Result<()> {
    for (category, count) in counts {
        writeln!(out, "{:<10} {}", category.to_string(), count)?;
    }
    Ok(())
}

pub fn render_technologies(out: &mut impl Write, technologies: &[&str]) -> Result<()> {
    for technology in technologies {
        writeln!(out, "{}", technology)?;
    }
    Ok(())
}
