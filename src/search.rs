//! Fuzzy Skill Search
//!
//! Substring matching over skill names, with a normalized fallback that
//! ignores separators: "writingplans" finds "writing-plans". Used by the
//! `search` command; bundle and workflow queries use plain substring
//! matching instead (see `resolve`).

/// Lowercase a string and drop every non-alphanumeric character.
pub fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Return every skill name matching `query`, deduplicated and sorted.
///
/// A name matches if the case-folded query is a substring of the
/// case-folded name, or if the normalized query is a substring of the
/// normalized name. The normalized rule is skipped when normalization
/// leaves the query empty.
pub fn fuzzy_search(names: &[String], query: &str) -> Vec<String> {
    let query_lower = query.to_lowercase();
    let query_norm = normalize(query);

    let mut matches: Vec<String> = names
        .iter()
        .filter(|name| {
            if name.to_lowercase().contains(&query_lower) {
                return true;
            }
            !query_norm.is_empty() && normalize(name).contains(&query_norm)
        })
        .cloned()
        .collect();

    matches.sort();
    matches.dedup();
    matches
}
