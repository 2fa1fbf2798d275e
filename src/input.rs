//! Report and source file loading.

use anyhow::{Context, Result};
use factlens::{Report, Source};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// Accepted layouts of a sources file.
#[derive(Deserialize)]
#[serde(untagged)]
enum SourcesFile {
    List(Vec<Source>),
    Wrapped { sources: Vec<Source> },
}

/// Load a report from a JSON file.
pub fn load_report(path: &Path) -> Result<Report> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read report file: {}", path.display()))?;
    let report = parse_report(&content)
        .with_context(|| format!("Failed to parse report file: {}", path.display()))?;

    debug!("Loaded {} claims from {}", report.claims.len(), path.display());
    Ok(report)
}

/// Load a source verification list from a JSON file.
pub fn load_sources(path: &Path) -> Result<Vec<Source>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read sources file: {}", path.display()))?;
    let sources = parse_sources(&content)
        .with_context(|| format!("Failed to parse sources file: {}", path.display()))?;

    debug!("Loaded {} sources from {}", sources.len(), path.display());
    Ok(sources)
}

fn parse_report(content: &str) -> Result<Report> {
    Ok(serde_json::from_str(content)?)
}

fn parse_sources(content: &str) -> Result<Vec<Source>> {
    Ok(match serde_json::from_str(content)? {
        SourcesFile::List(sources) => sources,
        SourcesFile::Wrapped { sources } => sources,
    })
}
