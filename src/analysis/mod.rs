//! Report analysis.
//!
//! Pure functions deriving counts, percentages, domains, source order and
//! filtered claim lists from a report.

pub mod aggregator;
pub mod domains;
pub mod filter;
pub mod metrics;
pub mod ranker;

pub use aggregator::{categorize, display_percentage, to_percentages};
pub use domains::{
    aggregate_domains, aggregate_domains_with, display_host, normalize_domain, DomainAggregate,
    UrlPolicy,
};
pub use filter::{filter, filter_indexed, toggle_filter, FilterSelection, FilterState};
pub use ranker::{rank, visible_sources, DEFAULT_MAX_VISIBLE};
