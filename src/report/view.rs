//! Composed report view.
//!
//! A [`ReportView`] is everything a presentation layer needs for one report,
//! derived from the report, its source list and the caller's [`ViewSession`].

use crate::analysis::{
    aggregate_domains_with, categorize, display_host, filter_indexed, rank, to_percentages,
    toggle_filter, visible_sources, FilterSelection, UrlPolicy, DEFAULT_MAX_VISIBLE,
};
use crate::error::Result;
use crate::models::{Category, Claim, ClaimCountSummary, Report, Source};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

/// Viewer state for a single report. Reset for every report viewed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewSession {
    pub selection: FilterSelection,
    pub show_all_sources: bool,
}

impl ViewSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_selection(selection: FilterSelection) -> Self {
        Self {
            selection,
            show_all_sources: false,
        }
    }

    pub fn toggle_filter(&mut self, category: Category) {
        self.selection = toggle_filter(&self.selection, category);
    }

    pub fn toggle_show_all(&mut self) {
        self.show_all_sources = !self.show_all_sources;
    }
}

/// Settings that shape a view but are not part of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewOptions {
    pub url_policy: UrlPolicy,
    pub max_visible_sources: usize,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            url_policy: UrlPolicy::Abort,
            max_visible_sources: DEFAULT_MAX_VISIBLE,
        }
    }
}

/// A claim selected for display.
#[derive(Debug, Clone, Serialize)]
pub struct ClaimEntry {
    /// 1-based position of the claim in the report.
    pub position: usize,
    pub claim: Claim,
    /// Host of each cited source, parallel to `claim.sources`.
    pub hosts: Vec<String>,
}

/// Derived view of a report.
#[derive(Debug, Clone, Serialize)]
pub struct ReportView {
    pub generated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overall_category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub summary: ClaimCountSummary,
    pub percentages: BTreeMap<Category, f64>,
    pub selection: FilterSelection,
    pub domains: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub skipped_urls: Vec<String>,
    pub claims: Vec<ClaimEntry>,
    pub sources: Vec<Source>,
    /// Ranked sources left out by the visibility limit.
    pub hidden_sources: usize,
}

impl ReportView {
    /// Build the view. Fails only when a source URL is malformed and
    /// `options.url_policy` is [`UrlPolicy::Abort`].
    pub fn build(
        report: &Report,
        sources: &[Source],
        session: &ViewSession,
        options: &ViewOptions,
    ) -> Result<Self> {
        let summary = categorize(&report.claims);
        let percentages = to_percentages(&summary);
        let domains = aggregate_domains_with(&report.claims, options.url_policy)?;

        let claims: Vec<ClaimEntry> = filter_indexed(&report.claims, &session.selection)
            .into_iter()
            .map(|(index, claim)| ClaimEntry {
                position: index + 1,
                // skipped URLs are already listed in `skipped_urls`
                hosts: claim
                    .sources
                    .iter()
                    .map(|s| display_host(&s.url).unwrap_or_else(|_| s.url.clone()))
                    .collect(),
                claim: claim.clone(),
            })
            .collect();

        let ranked = rank(sources);
        let visible = visible_sources(
            &ranked,
            session.show_all_sources,
            options.max_visible_sources,
        );

        debug!(
            "View built: {} of {} claims shown, {} of {} sources visible",
            claims.len(),
            summary.total,
            visible.len(),
            ranked.len()
        );

        Ok(Self {
            generated_at: Utc::now(),
            overall_category: report.overall_category.clone(),
            notes: report.notes.clone(),
            summary,
            percentages,
            selection: session.selection.clone(),
            domains: domains.domains,
            skipped_urls: domains.skipped,
            claims,
            hidden_sources: ranked.len() - visible.len(),
            sources: visible.into_iter().cloned().collect(),
        })
    }
}

/// Sources cited by the report's claims, unique by URL, in first-seen order.
pub fn cited_sources(report: &Report) -> Vec<Source> {
    let mut sources: Vec<Source> = Vec::new();
    for source in report.claims.iter().flat_map(|c| &c.sources) {
        if !sources.iter().any(|s| s.url == source.url) {
            sources.push(source.clone());
        }
    }
    sources
}
