//! Markdown and JSON report generation.
//!
//! This module renders a [`ReportView`] into a Markdown document or a
//! JSON string.

use crate::analysis::display_percentage;
use crate::analysis::metrics::{
    authenticity_readings, step_tone, tier_stars, tonality_readings, MetricReading,
};
use crate::models::{Category, Claim, Source};
use crate::report::view::{ClaimEntry, ReportView};
use anyhow::Result;

/// Which optional sections to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub include_sources: bool,
    pub include_notes: bool,
    pub include_metrics: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            include_sources: true,
            include_notes: true,
            include_metrics: true,
        }
    }
}

/// Generate a complete Markdown report.
pub fn generate_markdown_report(view: &ReportView, options: &RenderOptions) -> String {
    let mut output = String::new();

    output.push_str("# FactLens Report\n\n");
    output.push_str(&generate_metadata_section(view));
    output.push_str(&generate_table_of_contents(view, options));
    output.push_str(&generate_breakdown_section(view));
    output.push_str(&generate_domains_section(view));

    if options.include_notes {
        output.push_str(&generate_notes_section(view.notes.as_deref()));
    }

    output.push_str(&generate_claims_section(&view.claims));

    if options.include_sources {
        output.push_str(&generate_sources_section(
            &view.sources,
            view.hidden_sources,
            options.include_metrics,
        ));
    }

    output.push_str(&generate_footer());

    output
}

/// Generate the metadata section.
fn generate_metadata_section(view: &ReportView) -> String {
    let mut section = String::new();

    section.push_str("## Metadata\n\n");
    section.push_str(&format!(
        "- **Generated:** {}\n",
        view.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    if let Some(ref overall) = view.overall_category {
        section.push_str(&format!("- **Overall Verdict:** {}\n", overall));
    }
    section.push_str(&format!("- **Claims:** {}\n", view.summary.total));

    if view.selection.is_empty() {
        section.push_str("- **Filter:** none\n");
    } else {
        let labels: Vec<&str> = view.selection.iter().map(|c| c.label()).collect();
        section.push_str(&format!(
            "- **Filter:** {} ({} shown)\n",
            labels.join(", "),
            view.claims.len()
        ));
    }
    section.push('\n');

    section
}

/// Generate the table of contents.
fn generate_table_of_contents(view: &ReportView, options: &RenderOptions) -> String {
    let mut toc = String::new();

    toc.push_str("## Table of Contents\n\n");
    toc.push_str("- [Metadata](#metadata)\n");
    toc.push_str("- [Verdict Breakdown](#verdict-breakdown)\n");
    toc.push_str("- [Cited Domains](#cited-domains)\n");

    if options.include_notes && view.notes.as_deref().is_some_and(|n| !n.is_empty()) {
        toc.push_str("- [Notes](#notes)\n");
    }

    toc.push_str("- [Claims](#claims)\n");

    if options.include_sources && !view.sources.is_empty() {
        toc.push_str("- [Sources](#sources)\n");
    }

    toc.push('\n');

    toc
}

/// Generate the verdict breakdown with counts and rounded percentages.
fn generate_breakdown_section(view: &ReportView) -> String {
    let mut section = String::new();

    section.push_str("## Verdict Breakdown\n\n");

    let headers: Vec<String> = Category::ALL
        .iter()
        .map(|c| format!("{} {}", c.emoji(), c.label()))
        .collect();
    section.push_str(&format!("| {} | **Total** |\n", headers.join(" | ")));
    section.push_str("|:---:|:---:|:---:|:---:|:---:|\n");

    let counts: Vec<String> = Category::ALL
        .iter()
        .map(|c| view.summary.get(*c).to_string())
        .collect();
    section.push_str(&format!(
        "| {} | **{}** |\n",
        counts.join(" | "),
        view.summary.total
    ));

    let percentages: Vec<String> = Category::ALL
        .iter()
        .map(|c| match view.percentages.get(c) {
            Some(value) => format!("{}%", display_percentage(*value)),
            None => "-".to_string(),
        })
        .collect();
    section.push_str(&format!("| {} | |\n\n", percentages.join(" | ")));

    if view.summary.unknown() > 0 {
        section.push_str(&format!(
            "*{} claim(s) carry an unrecognized verdict and are not shown in any category.*\n\n",
            view.summary.unknown()
        ));
    }

    section
}

/// Generate the cited domains section.
fn generate_domains_section(view: &ReportView) -> String {
    let mut section = String::new();

    section.push_str("## Cited Domains\n\n");

    if view.domains.is_empty() {
        section.push_str("No sources were cited.\n\n");
    } else {
        let chips: Vec<String> = view.domains.iter().map(|d| format!("`{}`", d)).collect();
        section.push_str(&chips.join(" · "));
        section.push_str("\n\n");
    }

    if !view.skipped_urls.is_empty() {
        section.push_str("Skipped malformed source URLs:\n\n");
        for url in &view.skipped_urls {
            section.push_str(&format!("- `{}`\n", url));
        }
        section.push('\n');
    }

    section
}

/// Generate the notes section.
fn generate_notes_section(notes: Option<&str>) -> String {
    match notes {
        Some(notes) if !notes.is_empty() => format!("## Notes\n\n{}\n\n", notes),
        _ => String::new(),
    }
}

/// Generate the claims section.
fn generate_claims_section(claims: &[ClaimEntry]) -> String {
    let mut section = String::new();

    section.push_str("## Claims\n\n");

    if claims.is_empty() {
        section.push_str("No claims match the selected filters.\n\n");
        return section;
    }

    for entry in claims {
        section.push_str(&generate_claim_block(entry));
    }

    section
}

fn verdict_badge(claim: &Claim) -> String {
    match claim.category() {
        Some(category) => format!("{} **{}**", category.emoji(), category.label()),
        None => format!(
            "{} **{}**",
            claim.fact_check_category.tone().emoji(),
            claim.fact_check_category
        ),
    }
}

/// Generate a single claim block.
fn generate_claim_block(entry: &ClaimEntry) -> String {
    let mut block = String::new();
    let claim = &entry.claim;

    block.push_str(&format!(
        "### Claim #{} {}\n\n",
        entry.position,
        verdict_badge(claim)
    ));
    block.push_str(&format!("{}\n\n", claim.claim));

    if let Some(ref flag) = claim.manipulation {
        if flag.manipulation_flag {
            block.push_str(&format!("> 🚩 **Manipulation:** {}\n\n", flag.summary));
        }
    }

    for (source, host) in claim.sources.iter().zip(&entry.hosts) {
        block.push_str(&format!("- [{}]({})\n", host, source.url));
        for excerpt in &source.relevant_evidence_excerpt {
            block.push_str(&format!("  > {}\n", excerpt));
        }
    }
    if !claim.sources.is_empty() {
        block.push('\n');
    }

    block.push_str("---\n\n");

    block
}

/// Generate the ranked sources section.
fn generate_sources_section(sources: &[Source], hidden: usize, include_metrics: bool) -> String {
    if sources.is_empty() {
        return String::new();
    }

    let mut section = String::new();

    section.push_str("## Sources\n\n");

    for source in sources {
        section.push_str(&generate_source_block(source, include_metrics));
    }

    if hidden > 0 {
        section.push_str(&format!("*{} more source(s) not shown.*\n\n", hidden));
    }

    section
}

fn source_title(source: &Source) -> &str {
    if source.domain_name.is_empty() {
        &source.url
    } else {
        &source.domain_name
    }
}

/// Generate a single source block.
fn generate_source_block(source: &Source, include_metrics: bool) -> String {
    let mut block = String::new();

    let role = if source.is_target() { " (Target)" } else { "" };
    block.push_str(&format!(
        "### {} {}{}\n\n",
        step_tone(source).emoji(),
        source_title(source),
        role
    ));

    block.push_str(&format!(
        "- **Tier:** {} {}\n",
        source.source_tier,
        "★".repeat(tier_stars(source.source_tier) as usize)
    ));
    if !source.content_type.is_empty() {
        block.push_str(&format!("- **Content Type:** {}\n", source.content_type));
    }
    block.push_str(&format!("- **URL:** <{}>\n", source.url));
    block.push_str(&format!(
        "- **Commercial Interests:** {}\n",
        if source.bias.commercial_interests { "Yes" } else { "No" }
    ));
    if !source.bias.institutional_affiliations.is_empty() {
        let affiliations: Vec<&str> = source
            .bias
            .institutional_affiliations
            .iter()
            .map(String::as_str)
            .collect();
        block.push_str(&format!(
            "- **Affiliations:** {}\n",
            affiliations.join(", ")
        ));
    }
    block.push('\n');

    if !source.bias_summary.is_empty() {
        block.push_str(&format!("{}\n\n", source.bias_summary));
    }

    if include_metrics {
        block.push_str(&generate_metric_table("Tonality", &tonality_readings(source)));
        block.push_str(&generate_metric_table(
            "Authenticity",
            &authenticity_readings(source),
        ));
    }

    block
}

fn generate_metric_table(title: &str, readings: &[MetricReading]) -> String {
    if readings.is_empty() {
        return String::new();
    }

    let mut table = String::new();

    table.push_str(&format!("| {} | Value | |\n", title));
    table.push_str("|:---|:---:|:---:|\n");
    for reading in readings {
        table.push_str(&format!(
            "| {} | {} | {} |\n",
            reading.name.replace('_', " "),
            reading.label,
            reading.tone.emoji()
        ));
    }
    table.push('\n');

    table
}

/// Generate the report footer.
fn generate_footer() -> String {
    let mut footer = String::new();

    footer.push_str("---\n\n");
    footer.push_str("*Report generated by FactLens*\n");

    footer
}

/// Generate a JSON report with the sections disabled in `options` removed.
pub fn generate_json_report(view: &ReportView, options: &RenderOptions) -> Result<String> {
    let mut view = view.clone();

    if !options.include_notes {
        view.notes = None;
    }
    if !options.include_sources {
        view.sources.clear();
        view.hidden_sources = 0;
    } else if !options.include_metrics {
        for source in &mut view.sources {
            source.tonality.clear();
            source.authenticity.clear();
        }
    }

    serde_json::to_string_pretty(&view).map_err(Into::into)
}
