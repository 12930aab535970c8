//! Skill Repository Accessor
//!
//! Read-only enumeration over the two skill stores: the global repository
//! (plain directories, one per skill) and the project skill directory
//! (symlinks created by the installer, plus the occasional hand-copied
//! directory). Entry kind is determined by filesystem introspection, never
//! by naming convention.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

/// Entries starting with this prefix are not part of the managed skill set.
pub const RESERVED_PREFIX: char = '.';

/// True for names the manager must never touch (".", ".gitkeep", ...).
pub fn is_reserved(name: &str) -> bool {
    name.starts_with(RESERVED_PREFIX)
}

/// What kind of entry sits in the project skill directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryKind {
    /// A symlink whose target resolves. Carries the raw link target.
    Symlink(PathBuf),
    /// A symlink whose target no longer exists.
    BrokenSymlink,
    /// An independent copy, not managed as a link.
    LocalDirectory,
}

/// A managed entry in the project skill directory.
#[derive(Debug, Clone)]
pub struct ProjectEntry {
    pub name: String,
    pub kind: EntryKind,
}

/// Sorted names of the skill directories directly under `root`, with
/// reserved-prefix entries excluded. A missing root yields an empty list.
pub fn skill_names(root: &Path) -> Vec<String> {
    let entries = match fs::read_dir(root) {
        Ok(e) => e,
        Err(err) => {
            debug!(root = %root.display(), %err, "skill repository not readable");
            return Vec::new();
        }
    };

    let mut names: Vec<String> = entries
        .flatten()
        .filter(|e| e.path().is_dir())
        .filter_map(|e| e.file_name().into_string().ok())
        .filter(|name| !is_reserved(name))
        .collect();

    names.sort();
    names
}

/// Sorted managed entries (symlinks and directories) in the project skill
/// directory, classified by introspection. Plain files and reserved-prefix
/// names are skipped. A missing directory yields an empty list.
pub fn project_entries(dir: &Path) -> Vec<ProjectEntry> {
    let mut found: Vec<ProjectEntry> = Vec::new();

    let entries = match fs::read_dir(dir) {
        Ok(e) => e,
        Err(_) => return found,
    };

    for entry in entries.flatten() {
        let name = match entry.file_name().into_string() {
            Ok(n) => n,
            Err(_) => continue,
        };
        if is_reserved(&name) {
            continue;
        }

        let path = entry.path();
        if let Some(kind) = classify(&path) {
            found.push(ProjectEntry { name, kind });
        }
    }

    found.sort_by(|a, b| a.name.cmp(&b.name));
    found
}

/// Every non-reserved entry name in `dir`, whatever its kind. This is the
/// removal set for `clear`; sorting keeps the reporting order stable.
pub fn entry_names(dir: &Path) -> Vec<String> {
    let entries = match fs::read_dir(dir) {
        Ok(e) => e,
        Err(_) => return Vec::new(),
    };

    let mut names: Vec<String> = entries
        .flatten()
        .filter_map(|e| e.file_name().into_string().ok())
        .filter(|name| !is_reserved(name))
        .collect();

    names.sort();
    names
}

/// Classify a project entry, or `None` for plain files.
fn classify(path: &Path) -> Option<EntryKind> {
    let meta = path.symlink_metadata().ok()?;

    if meta.file_type().is_symlink() {
        // read_link reads the link itself; a dangling target still reads.
        return match fs::read_link(path) {
            Ok(target) if path.exists() => Some(EntryKind::Symlink(target)),
            Ok(_) | Err(_) => Some(EntryKind::BrokenSymlink),
        };
    }

    if meta.is_dir() {
        return Some(EntryKind::LocalDirectory);
    }

    None
}
