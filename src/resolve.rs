//! Query Resolver
//!
//! Resolves a user-supplied partial name against the group mapping's keys.
//! Matching is a case-folded substring check over the raw names; no
//! separator normalization is applied here (unlike skill search), since
//! bundle names carry deliberate decoration.

use crate::manifest::{Group, GroupMap};

/// Outcome of resolving a query against a group mapping.
#[derive(Debug)]
pub enum Resolution<'a> {
    /// No group name contains the query.
    None,
    /// Exactly one group matched.
    One(&'a Group),
    /// More than one group matched; the caller must refine the query.
    Many(Vec<&'a str>),
}

/// Resolve `query` to zero, one, or many groups.
pub fn resolve<'a>(map: &'a GroupMap, query: &str) -> Resolution<'a> {
    let query_lower = query.to_lowercase();

    let matches: Vec<&Group> = map
        .iter()
        .filter(|g| g.name.to_lowercase().contains(&query_lower))
        .collect();

    match matches.as_slice() {
        [] => Resolution::None,
        [only] => Resolution::One(*only),
        _ => Resolution::Many(matches.iter().map(|g| g.name.as_str()).collect()),
    }
}
