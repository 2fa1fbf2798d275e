//! FactLens - fact-check report aggregation
//!
//! Derives the figures behind a fact-check report view: verdict counts and
//! percentages, cited domains, ranked sources and category-filtered claims.
//!
//! Every function is pure. Viewer state lives in a caller-owned
//! [`ViewSession`] passed in explicitly.
//!
//! ```
//! use factlens::{categorize, filter, to_percentages, Category, Claim, FilterSelection};
//!
//! let claims = vec![
//!     Claim::new("a", "True"),
//!     Claim::new("b", "False"),
//!     Claim::new("c", "True"),
//! ];
//!
//! let summary = categorize(&claims);
//! assert_eq!(summary.total, 3);
//! assert_eq!(to_percentages(&summary).len(), 2);
//!
//! let selection = FilterSelection::new().toggled(Category::False);
//! assert_eq!(filter(&claims, &selection)[0].claim, "b");
//! ```

pub mod analysis;
pub mod error;
pub mod models;
pub mod report;

pub use analysis::{
    aggregate_domains, aggregate_domains_with, categorize, display_percentage, filter,
    filter_indexed, rank, to_percentages, toggle_filter, FilterSelection, FilterState, UrlPolicy,
};
pub use error::AggregationError;
pub use models::{Category, Claim, ClaimCountSummary, Report, Source, SourceKind, Verdict};
pub use report::{ReportView, ViewOptions, ViewSession};
