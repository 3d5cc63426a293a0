//! Search over the flat employee view.
//!
//! Matching is a case-insensitive substring test against name or title.
//! Results keep the flat view's pre-order; there is no ranking.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

use crate::node::FlatEmployee;

/// Queries shorter than this return nothing.
pub const SEARCH_MIN_CHARS: usize = 2;
pub const SEARCH_LIMIT: usize = 10;

/// The manager picker starts matching at one character.
pub const CANDIDATE_MIN_CHARS: usize = 1;
pub const CANDIDATE_LIMIT: usize = 8;

fn matches(employee: &FlatEmployee, needle: &str) -> bool {
    employee.name.to_lowercase().contains(needle) || employee.title.to_lowercase().contains(needle)
}

/// Employees whose name or title contains `query`, at most [`SEARCH_LIMIT`].
#[must_use]
pub fn search<'a>(flat: &'a [FlatEmployee], query: &str) -> Vec<&'a FlatEmployee> {
    if query.chars().count() < SEARCH_MIN_CHARS {
        return Vec::new();
    }
    let needle = query.to_lowercase();
    flat.iter().filter(|e| matches(e, &needle)).take(SEARCH_LIMIT).collect()
}

/// Picker results for choosing a manager: at most [`CANDIDATE_LIMIT`],
/// skipping `exclude` and, when `exclude_root` is set, the top of the chart.
/// Exclusions apply before the limit.
#[must_use]
pub fn search_candidates<'a, S: AsRef<str>>(
    flat: &'a [FlatEmployee],
    query: &str,
    exclude: &[S],
    exclude_root: bool,
) -> Vec<&'a FlatEmployee> {
    if query.chars().count() < CANDIDATE_MIN_CHARS {
        return Vec::new();
    }
    let needle = query.to_lowercase();
    flat.iter()
        .filter(|e| !(exclude_root && e.is_root()))
        .filter(|e| !exclude.iter().any(|id| id.as_ref() == e.id))
        .filter(|e| matches(e, &needle))
        .take(CANDIDATE_LIMIT)
        .collect()
}
