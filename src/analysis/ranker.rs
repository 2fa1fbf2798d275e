//! Source ordering for presentation.

use crate::models::Source;

/// Default number of sources shown before the list is expanded.
pub const DEFAULT_MAX_VISIBLE: usize = 8;

/// Order sources for display: targets first, then by ascending tier.
///
/// Tiers below 1 rank after every valid tier of the same type. The sort is
/// stable, so sources with the same type and tier keep their relative order.
/// The input is left untouched.
pub fn rank(sources: &[Source]) -> Vec<&Source> {
    let mut ranked: Vec<&Source> = sources.iter().collect();
    ranked.sort_by_key(|s| (!s.is_target(), tier_key(s)));
    ranked
}

fn tier_key(source: &Source) -> i64 {
    if source.has_valid_tier() {
        source.source_tier
    } else {
        i64::MAX
    }
}

/// The leading `max_visible` sources unless `show_all` is set.
pub fn visible_sources<'a>(
    ranked: &[&'a Source],
    show_all: bool,
    max_visible: usize,
) -> Vec<&'a Source> {
    let limit = if show_all {
        ranked.len()
    } else {
        max_visible.min(ranked.len())
    };
    ranked[..limit].to_vec()
}
