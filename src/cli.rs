//! Command-line interface argument parsing.
//!
//! This module handles all CLI argument parsing using clap,
//! including validation and default values.

use clap::Parser;
use factlens::{Category, FilterSelection, UrlPolicy};
use std::path::PathBuf;

/// FactLens - summarize fact-check reports
///
/// Reads a fact-check report produced by the analysis service and renders
/// verdict counts, cited domains, ranked sources and the claims matching
/// the selected categories.
///
/// Examples:
///   factlens --report report.json
///   factlens --report report.json --sources sources.json --filter false,misleading
///   factlens --report report.json --format json --output view.json
///   factlens --report report.json --on-malformed-url skip
///   factlens --init-config
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Args {
    /// Path to the report JSON file
    #[arg(short, long, value_name = "FILE", required_unless_present = "init_config")]
    pub report: Option<PathBuf>,

    /// Path to the source verification JSON file
    ///
    /// Either a list of sources or an object with a `sources` list.
    /// When omitted, the sources cited by the claims are ranked instead.
    #[arg(short, long, value_name = "FILE")]
    pub sources: Option<PathBuf>,

    /// Only show claims with these verdicts (comma-separated)
    ///
    /// Example: --filter false,misleading
    #[arg(short, long, value_name = "VERDICTS", value_delimiter = ',', ignore_case = true)]
    pub filter: Option<Vec<FilterCategory>>,

    /// Output format (markdown, json)
    #[arg(long, default_value = "markdown", value_name = "FORMAT", env = "FACTLENS_FORMAT")]
    pub format: OutputFormat,

    /// Output file path. Writes to stdout when not set
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Path to configuration file
    ///
    /// If not specified, looks for .factlens.toml in the current directory
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,

    /// Run in quiet mode (minimal output)
    #[arg(short, long)]
    pub quiet: bool,

    /// How to handle source URLs that cannot be parsed
    #[arg(long, value_name = "POLICY")]
    pub on_malformed_url: Option<MalformedUrlPolicy>,

    /// List every source instead of the leading few
    #[arg(long)]
    pub show_all_sources: bool,

    /// Number of sources listed before the rest are hidden
    #[arg(long, value_name = "COUNT")]
    pub max_visible: Option<usize>,

    /// Leave the source list out of the report
    #[arg(long)]
    pub no_sources: bool,

    /// Leave tonality and authenticity tables out of the report
    #[arg(long)]
    pub no_metrics: bool,

    /// Generate a default .factlens.toml configuration file
    #[arg(long)]
    pub init_config: bool,
}

/// Output format for the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Markdown format (default)
    #[default]
    Markdown,
    /// JSON format
    Json,
}

/// Verdict category accepted by --filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum FilterCategory {
    True,
    False,
    Misleading,
    Unverifiable,
}

impl From<FilterCategory> for Category {
    fn from(category: FilterCategory) -> Self {
        match category {
            FilterCategory::True => Category::True,
            FilterCategory::False => Category::False,
            FilterCategory::Misleading => Category::Misleading,
            FilterCategory::Unverifiable => Category::Unverifiable,
        }
    }
}

/// Value of --on-malformed-url.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum MalformedUrlPolicy {
    /// Stop with an error
    Abort,
    /// Leave the source out and list it in the report
    Skip,
}

impl From<MalformedUrlPolicy> for UrlPolicy {
    fn from(policy: MalformedUrlPolicy) -> Self {
        match policy {
            MalformedUrlPolicy::Abort => UrlPolicy::Abort,
            MalformedUrlPolicy::Skip => UrlPolicy::Skip,
        }
    }
}

impl Args {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate the parsed arguments.
    pub fn validate(&self) -> Result<(), String> {
        // Skip validation for --init-config
        if self.init_config {
            return Ok(());
        }

        match self.report {
            Some(ref path) if !path.is_file() => {
                return Err(format!("Report file does not exist: {}", path.display()));
            }
            None => return Err("A report file is required (--report)".to_string()),
            _ => {}
        }

        if let Some(ref path) = self.sources {
            if !path.is_file() {
                return Err(format!("Sources file does not exist: {}", path.display()));
            }
        }

        if self.max_visible == Some(0) {
            return Err("Max visible sources must be at least 1".to_string());
        }

        // Check for conflicting options
        if self.verbose && self.quiet {
            return Err("Cannot use both --verbose and --quiet".to_string());
        }

        Ok(())
    }

    /// Returns the log level based on verbosity settings.
    pub fn log_level(&self) -> tracing::Level {
        if self.quiet {
            tracing::Level::ERROR
        } else if self.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        }
    }

    /// The category selection given by --filter.
    pub fn selection(&self) -> FilterSelection {
        self.filter
            .iter()
            .flatten()
            .map(|c| Category::from(*c))
            .collect()
    }
}
