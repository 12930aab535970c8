//! Bundle Manifest Parser
//!
//! Lenient, line-oriented parser for BUNDLES.md. A `### ` heading opens a
//! bundle whose name is the rest of the line verbatim (emoji, quotes and
//! other decoration included). Lines of the form
//! `- [`skill-name`](../skills/skill-name/)` add one skill to the current
//! bundle. Anything else, including malformed skill links, is skipped
//! without aborting the parse.

use std::fs;
use std::path::Path;

use tracing::debug;

use super::{Group, GroupMap};

/// Marker that opens a new bundle section.
const HEADING_MARKER: &str = "### ";

/// Prefix of a skill reference line.
const SKILL_LINK_PREFIX: &str = "- [`";

/// Path segments that never name a skill.
const IGNORED_SEGMENTS: [&str; 2] = ["..", "skills"];

/// Parse the bundle manifest at `path` into a group mapping.
///
/// A missing file is not an error; it simply means no bundles exist.
pub fn parse_file(path: &Path) -> GroupMap {
    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(err) => {
            debug!(path = %path.display(), %err, "bundle manifest not readable");
            return GroupMap::default();
        }
    };

    parse(&content)
}

/// Parse bundle manifest text into a group mapping.
pub fn parse(content: &str) -> GroupMap {
    let mut groups: Vec<Group> = Vec::new();

    for line in content.lines() {
        let line = line.trim();

        if let Some(rest) = line.strip_prefix(HEADING_MARKER) {
            groups.push(Group {
                name: rest.trim().to_string(),
                skills: Vec::new(),
            });
            continue;
        }

        // Skill links before any heading have no bundle to belong to.
        let Some(current) = groups.last_mut() else {
            continue;
        };

        if line.starts_with(SKILL_LINK_PREFIX) {
            if let Some(skill) = extract_skill(line) {
                current.skills.push(skill);
            }
        }
    }

    GroupMap::from_groups(groups)
}

/// Pull the skill name out of a `- [`name`](../skills/name/)` line.
///
/// The name is the first path segment of the parenthesized link after
/// discarding empty segments, "..", and the literal "skills". Returns
/// `None` for malformed lines.
fn extract_skill(line: &str) -> Option<String> {
    let open = line.find('(')?;
    let close = line.find(')')?;
    if close <= open {
        return None;
    }

    let link = &line[open + 1..close];
    link.split('/')
        .find(|seg| !seg.is_empty() && !IGNORED_SEGMENTS.contains(seg))
        .map(str::to_string)
}
