//! FactLens - fact-check report summarizer
//!
//! A CLI tool that reads a fact-check report and its source verification
//! list and renders verdict counts, cited domains, ranked sources and
//! filtered claims as Markdown or JSON.
//!
//! Exit codes:
//!   0 - Success
//!   1 - Runtime error (unreadable input, malformed source URL, etc.)

mod cli;
mod config;
mod input;

use anyhow::{Context, Result};
use cli::{Args, OutputFormat};
use config::Config;
use factlens::report::{
    cited_sources, generate_json_report, generate_markdown_report, RenderOptions, ReportView,
    ViewOptions, ViewSession,
};
use factlens::{display_percentage, Category};
use std::io::Write;
use tracing::{debug, error, info, warn};
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse_args();

    // Validate arguments
    if let Err(e) = args.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    // Handle --init-config early (no logging needed)
    if args.init_config {
        return handle_init_config();
    }

    // Initialize logging
    init_logging(&args);

    info!("FactLens v{}", env!("CARGO_PKG_VERSION"));
    debug!("Arguments: {:?}", args);

    if let Err(e) = run(args) {
        error!("Report failed: {:#}", e);
        eprintln!("\n❌ Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

/// Handle --init-config: generate a default .factlens.toml.
fn handle_init_config() -> Result<()> {
    let path = std::path::Path::new(config::CONFIG_FILE_NAME);

    if path.exists() {
        eprintln!("⚠️  .factlens.toml already exists. Remove it first or edit it manually.");
        std::process::exit(1);
    }

    let content = Config::default_toml();
    std::fs::write(path, &content).context("Failed to write .factlens.toml")?;

    println!("✅ Created .factlens.toml with default settings.");
    Ok(())
}

/// Initialize logging based on verbosity settings.
///
/// Logs go to stderr so a report written to stdout stays clean.
fn init_logging(args: &Args) {
    let level = args.log_level();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");
}

/// Load the inputs, build the view and write the rendered report.
fn run(args: Args) -> Result<()> {
    // Load configuration
    let mut config = load_config(&args)?;
    config.merge_with_args(&args);

    let report_path = args
        .report
        .as_deref()
        .context("A report file is required (--report)")?;
    let report = input::load_report(report_path)?;

    let sources = match args.sources {
        Some(ref path) => input::load_sources(path)?,
        None => {
            debug!("No sources file given, ranking the sources cited by claims");
            cited_sources(&report)
        }
    };

    let session = ViewSession {
        selection: args.selection(),
        show_all_sources: config.view.show_all_sources,
    };
    let options = ViewOptions::from(&config.view);

    let view = ReportView::build(&report, &sources, &session, &options)
        .context("Failed to aggregate report")?;

    if !view.skipped_urls.is_empty() {
        warn!("{} source URL(s) skipped", view.skipped_urls.len());
    }

    let render_options = RenderOptions::from(&config.report);
    let output = match args.format {
        OutputFormat::Json => generate_json_report(&view, &render_options)?,
        OutputFormat::Markdown => generate_markdown_report(&view, &render_options),
    };

    match config.general.output {
        Some(ref path) => {
            std::fs::write(path, &output)
                .with_context(|| format!("Failed to write report to {}", path.display()))?;
            info!("Report saved to: {}", path.display());
        }
        None => {
            std::io::stdout()
                .write_all(output.as_bytes())
                .context("Failed to write report to stdout")?;
        }
    }

    log_summary(&view);

    Ok(())
}

/// Log the verdict breakdown of a view.
fn log_summary(view: &ReportView) {
    let breakdown: Vec<String> = Category::ALL
        .iter()
        .map(|c| {
            let pct = view.percentages.get(c).copied().unwrap_or(0.0);
            format!(
                "{} {}: {} ({}%)",
                c.emoji(),
                c.label(),
                view.summary.get(*c),
                display_percentage(pct)
            )
        })
        .collect();

    info!("Claims: {} | {}", view.summary.total, breakdown.join(" | "));
    info!(
        "Shown: {} claims, {} domains, {} sources",
        view.claims.len(),
        view.domains.len(),
        view.sources.len()
    );
}

/// Load configuration from file or use defaults.
fn load_config(args: &Args) -> Result<Config> {
    // Try explicit config path
    if let Some(ref config_path) = args.config {
        info!("Loading config from: {}", config_path.display());
        return Config::load(config_path);
    }

    // Try default location
    match Config::load_default() {
        Ok(Some(config)) => {
            info!("Loaded default config from .factlens.toml");
            Ok(config)
        }
        Ok(None) => {
            debug!("No config file found, using defaults");
            Ok(Config::default())
        }
        Err(e) => {
            warn!("Failed to load config: {}", e);
            Ok(Config::default())
        }
    }
}
