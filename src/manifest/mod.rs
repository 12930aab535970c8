//! Manifest Parsing
//!
//! Converts the two externally-authored manifest documents into a
//! [`GroupMap`]: the line-oriented bundle manifest (BUNDLES.md) and the
//! structured workflow manifest (WORKFLOWS.json). The mapping is rebuilt
//! from disk on every command, never cached.

pub mod bundles;
pub mod workflows;

/// A named group of skills, in manifest order. Duplicates are permitted.
#[derive(Debug, Clone)]
pub struct Group {
    pub name: String,
    pub skills: Vec<String>,
}

/// Ordered mapping from group name to skill list.
///
/// Insertion order is preserved for display; a duplicate name replaces the
/// earlier definition's skills in place (last definition wins). Groups with
/// no skills do not exist as far as callers are concerned.
#[derive(Debug, Clone, Default)]
pub struct GroupMap {
    groups: Vec<Group>,
}

impl GroupMap {
    /// Build a map from parsed groups, applying last-wins on duplicate
    /// names and dropping empty groups.
    pub fn from_groups(parsed: Vec<Group>) -> Self {
        let mut groups: Vec<Group> = Vec::new();

        for group in parsed {
            match groups.iter_mut().find(|g| g.name == group.name) {
                Some(existing) => existing.skills = group.skills,
                None => groups.push(group),
            }
        }

        groups.retain(|g| !g.skills.is_empty());
        Self { groups }
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Group> {
        self.groups.iter()
    }

    pub fn get(&self, name: &str) -> Option<&Group> {
        self.groups.iter().find(|g| g.name == name)
    }
}
