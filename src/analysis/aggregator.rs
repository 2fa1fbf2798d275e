//! Claim aggregation and statistics.
//!
//! Counts claims per verdict category and turns those counts into
//! percentages for display.

use crate::models::{Category, Claim, ClaimCountSummary};
use std::collections::BTreeMap;
use tracing::debug;

/// Count claims per verdict category.
///
/// Claims with an unknown verdict only contribute to `total`.
pub fn categorize(claims: &[Claim]) -> ClaimCountSummary {
    let mut summary = ClaimCountSummary {
        total: claims.len(),
        ..ClaimCountSummary::default()
    };

    for claim in claims {
        if let Some(category) = claim.category() {
            summary.increment(category);
        }
    }

    if summary.unknown() > 0 {
        debug!(
            "{} of {} claims carry an unrecognized verdict",
            summary.unknown(),
            summary.total
        );
    }

    summary
}

/// Percentage of claims in each category with at least one claim.
///
/// Returns an empty map when the summary has no claims. Values keep full
/// precision; use [`display_percentage`] to round for output.
pub fn to_percentages(summary: &ClaimCountSummary) -> BTreeMap<Category, f64> {
    if summary.total == 0 {
        return BTreeMap::new();
    }

    Category::ALL
        .into_iter()
        .filter_map(|category| {
            let count = summary.get(category);
            (count > 0).then(|| (category, 100.0 * count as f64 / summary.total as f64))
        })
        .collect()
}

/// Round a percentage half-up to a whole number.
pub fn display_percentage(value: f64) -> u32 {
    if value <= 0.0 {
        0
    } else {
        (value + 0.5).floor() as u32
    }
}
