//! Claim filtering by verdict category.

use crate::models::{Category, Claim};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Categories selected for display. Empty means no filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterSelection(BTreeSet<Category>);

/// Whether a selection narrows the claim list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterState {
    NoFilter,
    Filtered,
}

impl FilterSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, category: Category) -> bool {
        self.0.contains(&category)
    }

    pub fn iter(&self) -> impl Iterator<Item = Category> + '_ {
        self.0.iter().copied()
    }

    pub fn state(&self) -> FilterState {
        if self.0.is_empty() {
            FilterState::NoFilter
        } else {
            FilterState::Filtered
        }
    }

    /// Returns a new selection with `category` added, or removed if present.
    pub fn toggled(&self, category: Category) -> Self {
        let mut next = self.0.clone();
        if !next.remove(&category) {
            next.insert(category);
        }
        Self(next)
    }

    /// Whether a claim passes this selection.
    pub fn admits(&self, claim: &Claim) -> bool {
        self.0.is_empty() || claim.category().is_some_and(|c| self.0.contains(&c))
    }
}

impl FromIterator<Category> for FilterSelection {
    fn from_iter<I: IntoIterator<Item = Category>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Toggle `category` in `selection`, returning the new selection.
pub fn toggle_filter(selection: &FilterSelection, category: Category) -> FilterSelection {
    selection.toggled(category)
}

/// Claims admitted by `selection`, in report order.
pub fn filter<'a>(claims: &'a [Claim], selection: &FilterSelection) -> Vec<&'a Claim> {
    claims.iter().filter(|c| selection.admits(c)).collect()
}

/// Like [`filter`], paired with each claim's position in the report.
pub fn filter_indexed<'a>(
    claims: &'a [Claim],
    selection: &FilterSelection,
) -> Vec<(usize, &'a Claim)> {
    claims
        .iter()
        .enumerate()
        .filter(|(_, c)| selection.admits(c))
        .collect()
}
