//! Search predicate and aggregation of the three entry groups.
//!
//! Everything here is pure; the use cases in `gd-app` decide *when* to call
//! the catalog and which of these functions shapes the visible collection.

use std::collections::HashSet;

use super::entry::GifEntry;

/// Case-insensitive substring match against the title or any tag.
#[derive(Debug, Clone)]
pub struct QueryMatcher {
    needle: String,
}

impl QueryMatcher {
    pub fn new(query: &str) -> Self {
        Self {
            needle: query.to_lowercase(),
        }
    }

    pub fn matches(&self, entry: &GifEntry) -> bool {
        entry.title.to_lowercase().contains(&self.needle)
            || entry
                .tags()
                .iter()
                .any(|tag| tag.to_lowercase().contains(&self.needle))
    }
}

/// A query that is empty after trimming selects the default display.
pub fn is_blank_query(query: &str) -> bool {
    query.trim().is_empty()
}

/// `remote ++ caller ++ local`, order preserved inside each group.
///
/// Id collisions resolve to the first occurrence in that order; later
/// duplicates are dropped and logged.
pub fn aggregate(remote: &[GifEntry], caller: &[GifEntry], local: &[GifEntry]) -> Vec<GifEntry> {
    dedupe_by_id(remote.iter().chain(caller).chain(local))
}

/// Default display: every entry not explicitly marked invalid.
pub fn displayable(aggregated: &[GifEntry]) -> Vec<GifEntry> {
    aggregated
        .iter()
        .filter(|entry| entry.is_displayable())
        .cloned()
        .collect()
}

/// Pure client-side filter used when the remote search is unavailable.
pub fn local_fallback(aggregated: &[GifEntry], query: &str) -> Vec<GifEntry> {
    let matcher = QueryMatcher::new(query);
    aggregated
        .iter()
        .filter(|entry| matcher.matches(entry) && entry.is_displayable())
        .cloned()
        .collect()
}

/// Remote results followed by matching local and caller entries.
///
/// Local sources are never searched remotely, so their matches are always
/// appended. Validity is not filtered on this path.
pub fn merge_search_results(
    remote_results: &[GifEntry],
    local: &[GifEntry],
    caller: &[GifEntry],
    query: &str,
) -> Vec<GifEntry> {
    let matcher = QueryMatcher::new(query);
    let local_matches = local.iter().filter(|entry| matcher.matches(entry));
    let caller_matches = caller.iter().filter(|entry| matcher.matches(entry));

    dedupe_by_id(remote_results.iter().chain(local_matches).chain(caller_matches))
}

fn dedupe_by_id<'a>(entries: impl Iterator<Item = &'a GifEntry>) -> Vec<GifEntry> {
    let mut seen = HashSet::new();
    let mut merged = Vec::new();

    for entry in entries {
        if seen.insert(entry.id.clone()) {
            merged.push(entry.clone());
        } else {
            tracing::warn!(
                gif_id = %entry.id,
                provenance = %entry.provenance,
                "Dropping GIF entry with duplicate id"
            );
        }
    }

    merged
}
