//! Fuzzy search over tab and history collections
//!
//! Thin wrapper around the nucleo matcher. Callers pick which fields to
//! match with plain accessor functions, e.g.
//! `search(&tabs, &[|t: &Tab| t.title.as_str()], "docs")`.

use nucleo_matcher::{Config, Matcher, Utf32Str};

/// Fuzzy-filters `collection` by matching `query` against each key.
///
/// An empty query short-circuits to the whole collection in input order
/// without constructing a matcher. Otherwise each element is scored by its
/// best-matching key (case-insensitive), non-matches are dropped, and the
/// survivors come back sorted by descending score. Tied scores have no
/// guaranteed order.
pub fn search<'a, T>(collection: &'a [T], keys: &[fn(&T) -> &str], query: &str) -> Vec<&'a T> {
    if query.is_empty() {
        return collection.iter().collect();
    }

    let mut matcher = Matcher::new(Config::DEFAULT);
    let needle_lowercase = query.to_lowercase();
    let mut needle_buf = Vec::new();
    let needle = Utf32Str::new(&needle_lowercase, &mut needle_buf);

    // Reuse one haystack buffer across every key of every element
    let mut haystack_buf = Vec::new();

    let mut results: Vec<(&T, u16)> = Vec::new();
    for item in collection {
        let mut best: Option<u16> = None;
        for key in keys {
            let value_lowercase = key(item).to_lowercase();
            haystack_buf.clear();
            let haystack = Utf32Str::new(&value_lowercase, &mut haystack_buf);
            if let Some(score) = matcher.fuzzy_match(haystack, needle) {
                best = Some(best.map_or(score, |b| b.max(score)));
            }
        }
        if let Some(score) = best {
            results.push((item, score));
        }
    }

    results.sort_unstable_by(|a, b| b.1.cmp(&a.1));
    results.into_iter().map(|(item, _)| item).collect()
}
