//! End-to-end checks over the bundled fixtures.

use factlens::report::{cited_sources, generate_markdown_report, RenderOptions};
use factlens::{
    aggregate_domains, categorize, filter, rank, to_percentages, toggle_filter, Category, Claim,
    FilterSelection, Report, ReportView, Source, UrlPolicy, ViewOptions, ViewSession,
};
use pretty_assertions::assert_eq;
use serde::Deserialize;

const SAMPLE_REPORT: &str = include_str!("../fixtures/sample_report.json");
const SAMPLE_SOURCES: &str = include_str!("../fixtures/sample_sources.json");

#[derive(Deserialize)]
struct SourcesFile {
    sources: Vec<Source>,
}

fn sample_report() -> Report {
    serde_json::from_str(SAMPLE_REPORT).unwrap()
}

fn sample_sources() -> Vec<Source> {
    serde_json::from_str::<SourcesFile>(SAMPLE_SOURCES)
        .unwrap()
        .sources
}

#[test]
fn three_claim_scenario() {
    let claims = vec![
        Claim::new("one", "True").with_sources(vec![Source::new("https://a.org/1", 1)]),
        Claim::new("two", "False"),
        Claim::new("three", "True").with_sources(vec![Source::new("https://b.org/2", 2)]),
    ];

    let summary = categorize(&claims);
    assert_eq!(summary.true_count, 2);
    assert_eq!(summary.false_count, 1);
    assert_eq!(summary.misleading_count, 0);
    assert_eq!(summary.unverifiable_count, 0);
    assert_eq!(summary.total, 3);

    let percentages = to_percentages(&summary);
    let rounded: Vec<(Category, f64)> = percentages
        .iter()
        .map(|(c, v)| (*c, (v * 100.0).round() / 100.0))
        .collect();
    assert_eq!(
        rounded,
        vec![(Category::True, 66.67), (Category::False, 33.33)]
    );

    let selection = toggle_filter(&FilterSelection::new(), Category::False);
    let shown = filter(&claims, &selection);
    assert_eq!(shown, vec![&claims[1]]);
}

#[test]
fn www_and_bare_hosts_collapse_to_one_domain() {
    let claims = vec![
        Claim::new("a", "True").with_sources(vec![Source::new("https://www.example.com/a", 1)]),
        Claim::new("b", "True").with_sources(vec![Source::new("https://example.com/b", 1)]),
    ];
    assert_eq!(aggregate_domains(&claims).unwrap(), vec!["example"]);
}

#[test]
fn fixture_summary_and_domains() {
    let report = sample_report();

    let summary = categorize(&report.claims);
    assert_eq!(summary.total, 4);
    assert_eq!(summary.known(), 3);
    assert_eq!(summary.unknown(), 1);

    let sum: f64 = to_percentages(&summary).values().sum();
    assert!((sum - 75.0).abs() < 1e-9);

    assert_eq!(
        aggregate_domains(&report.claims).unwrap(),
        vec!["weather.gov", "reuters"]
    );
}

#[test]
fn fixture_sources_rank_target_first() {
    let sources = sample_sources();
    let ranked: Vec<Option<u64>> = rank(&sources).iter().map(|s| s.id).collect();
    assert_eq!(ranked, vec![Some(1), Some(3), Some(2)]);
}

#[test]
fn fixture_view_and_markdown() {
    let report = sample_report();
    let sources = sample_sources();
    let mut session = ViewSession::new();
    session.toggle_filter(Category::Misleading);

    let view = ReportView::build(&report, &sources, &session, &ViewOptions::default()).unwrap();
    assert_eq!(view.claims.len(), 1);
    assert_eq!(view.claims[0].position, 2);

    let markdown = generate_markdown_report(&view, &RenderOptions::default());
    assert!(markdown.contains("### Claim #2"));
    assert!(markdown.contains("Percentage increase overstated."));
    assert!(markdown.contains("citynews.example (Target)"));
    assert!(markdown.contains("1 claim(s) carry an unrecognized verdict"));
}

#[test]
fn cited_sources_fallback_skips_policy_errors() {
    let mut report = sample_report();
    report.claims[2]
        .sources
        .push(Source::new("http//broken", 1));

    let options = ViewOptions {
        url_policy: UrlPolicy::Skip,
        ..ViewOptions::default()
    };
    let sources = cited_sources(&report);
    let view = ReportView::build(&report, &sources, &ViewSession::new(), &options).unwrap();

    assert_eq!(view.skipped_urls, vec!["http//broken"]);
    assert_eq!(view.domains, vec!["weather.gov", "reuters"]);
}
