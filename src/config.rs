//! Configuration file handling.
//!
//! This module handles loading and merging configuration from
//! `.factlens.toml` files.

use anyhow::{Context, Result};
use factlens::analysis::DEFAULT_MAX_VISIBLE;
use factlens::report::{RenderOptions, ViewOptions};
use factlens::UrlPolicy;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the configuration file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = ".factlens.toml";

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Report view settings.
    #[serde(default)]
    pub view: ViewConfig,

    /// Rendering settings.
    #[serde(default)]
    pub report: ReportConfig,
}

/// General application settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Output file path. Standard output when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,

    /// Enable verbose logging by default.
    #[serde(default)]
    pub verbose: bool,
}

/// Settings that shape the derived report view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewConfig {
    /// Sources listed before the rest are hidden.
    #[serde(default = "default_max_visible_sources")]
    pub max_visible_sources: usize,

    /// List every source regardless of `max_visible_sources`.
    #[serde(default)]
    pub show_all_sources: bool,

    /// Handling of unparsable source URLs: "abort" or "skip".
    #[serde(default)]
    pub url_policy: UrlPolicy,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            max_visible_sources: default_max_visible_sources(),
            show_all_sources: false,
            url_policy: UrlPolicy::Abort,
        }
    }
}

fn default_max_visible_sources() -> usize {
    DEFAULT_MAX_VISIBLE
}

/// Report rendering settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Include the ranked source list.
    #[serde(default = "default_true")]
    pub include_sources: bool,

    /// Include the report notes.
    #[serde(default = "default_true")]
    pub include_notes: bool,

    /// Include tonality and authenticity tables per source.
    #[serde(default = "default_true")]
    pub include_metrics: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            include_sources: true,
            include_notes: true,
            include_metrics: true,
        }
    }
}

fn default_true() -> bool {
    true
}

impl From<&ViewConfig> for ViewOptions {
    fn from(config: &ViewConfig) -> Self {
        Self {
            url_policy: config.url_policy,
            max_visible_sources: config.max_visible_sources,
        }
    }
}

impl From<&ReportConfig> for RenderOptions {
    fn from(config: &ReportConfig) -> Self {
        Self {
            include_sources: config.include_sources,
            include_notes: config.include_notes,
            include_metrics: config.include_metrics,
        }
    }
}

impl Config {
    /// Load configuration from a file path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Try to load configuration from the default location.
    ///
    /// Returns `Ok(None)` if the file doesn't exist, `Err` if it exists but can't be parsed.
    pub fn load_default() -> Result<Option<Self>> {
        Self::load_from_dir(Path::new("."))
    }

    /// Try to load `.factlens.toml` from a directory.
    pub fn load_from_dir(dir: &Path) -> Result<Option<Self>> {
        let config_path = dir.join(CONFIG_FILE_NAME);

        if config_path.exists() {
            Ok(Some(Self::load(&config_path)?))
        } else {
            Ok(None)
        }
    }

    /// Merge this configuration with CLI arguments.
    ///
    /// CLI arguments take precedence over config file settings.
    /// This method only overrides config when CLI provides explicit values.
    pub fn merge_with_args(&mut self, args: &crate::cli::Args) {
        if let Some(ref output) = args.output {
            self.general.output = Some(output.clone());
        }
        if args.verbose {
            self.general.verbose = true;
        }

        if let Some(max_visible) = args.max_visible {
            self.view.max_visible_sources = max_visible;
        }
        if args.show_all_sources {
            self.view.show_all_sources = true;
        }
        if let Some(policy) = args.on_malformed_url {
            self.view.url_policy = policy.into();
        }

        if args.no_sources {
            self.report.include_sources = false;
        }
        if args.no_metrics {
            self.report.include_metrics = false;
        }
    }

    /// Generate a default configuration file content.
    pub fn default_toml() -> String {
        let config = Config::default();
        toml::to_string_pretty(&config).unwrap_or_else(|_| String::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::tests::make_args;
    use crate::cli::MalformedUrlPolicy;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.view.max_visible_sources, 8);
        assert_eq!(config.view.url_policy, UrlPolicy::Abort);
        assert!(config.report.include_sources);
        assert!(config.general.output.is_none());
    }

    #[test]
    fn test_parse_config() {
        let toml_content = r#"
[general]
output = "report.md"
verbose = true

[view]
max_visible_sources = 3
url_policy = "skip"

[report]
include_metrics = false
"#;

        let config: Config = toml::from_str(toml_content).unwrap();
        assert_eq!(config.general.output, Some(PathBuf::from("report.md")));
        assert!(config.general.verbose);
        assert_eq!(config.view.max_visible_sources, 3);
        assert_eq!(config.view.url_policy, UrlPolicy::Skip);
        assert!(!config.view.show_all_sources);
        assert!(!config.report.include_metrics);
        assert!(config.report.include_notes);
    }

    #[test]
    fn test_default_toml_generation() {
        let toml_str = Config::default_toml();
        assert!(!toml_str.is_empty());
        assert!(toml_str.contains("[view]"));
        assert!(toml_str.contains("[report]"));

        let reparsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(reparsed.view.max_visible_sources, 8);
    }

    #[test]
    fn test_load_from_dir() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Config::load_from_dir(dir.path()).unwrap().is_none());

        std::fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "[view]\nshow_all_sources = true\n",
        )
        .unwrap();
        let config = Config::load_from_dir(dir.path()).unwrap().unwrap();
        assert!(config.view.show_all_sources);
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[view]\nurl_policy = \"ignore\"\n").unwrap();
        assert!(Config::load(&path).is_err());
    }

    #[test]
    fn test_merge_with_args() {
        let mut config = Config::default();
        let mut args = make_args();
        args.max_visible = Some(2);
        args.on_malformed_url = Some(MalformedUrlPolicy::Skip);
        args.no_metrics = true;

        config.merge_with_args(&args);
        assert_eq!(config.view.max_visible_sources, 2);
        assert_eq!(config.view.url_policy, UrlPolicy::Skip);
        assert!(!config.report.include_metrics);
        assert!(config.report.include_sources);

        let options = ViewOptions::from(&config.view);
        assert_eq!(options.max_visible_sources, 2);
    }
}
