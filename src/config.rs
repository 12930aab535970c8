//! Configuration
//!
//! All filesystem roots the manager operates on, resolved once at startup
//! and passed by reference into every component. Nothing below this layer
//! reads ambient global state, so tests can point the manager at arbitrary
//! temporary directories.

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Relative location of the skill directory inside a project root.
pub const PROJECT_SKILLS_SUBDIR: &str = ".agent/skills";

/// Filesystem locations used by every command.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Global skill repository; its immediate subdirectories are the
    /// installable skills.
    pub global_repo: PathBuf,
    /// Per-project directory that installed skills land in.
    pub project_skills_dir: PathBuf,
    /// Line-oriented bundle manifest (BUNDLES.md).
    pub bundles_file: PathBuf,
    /// Structured workflow manifest (WORKFLOWS.json).
    pub workflows_file: PathBuf,
}

impl Paths {
    /// Build an explicit path set for tests or non-default layouts.
    pub fn new(
        global_repo: PathBuf,
        project_skills_dir: PathBuf,
        bundles_file: PathBuf,
        workflows_file: PathBuf,
    ) -> Self {
        Self {
            global_repo,
            project_skills_dir,
            bundles_file,
            workflows_file,
        }
    }

    /// Resolve the default locations: the global repository and manifests
    /// under the user's home directory, the project skill directory under
    /// the current working directory.
    pub fn resolve() -> Result<Self> {
        let home = dirs::home_dir().context("Could not determine the home directory")?;
        let cwd = env::current_dir().context("Could not determine the current directory")?;

        let skills_root = home.join(".agent").join("skills");

        Ok(Self {
            global_repo: skills_root.join("skills"),
            project_skills_dir: cwd.join(PROJECT_SKILLS_SUBDIR),
            bundles_file: skills_root.join("docs").join("BUNDLES.md"),
            workflows_file: skills_root.join("docs").join("WORKFLOWS.json"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_keeps_explicit_paths() {
        let paths = Paths::new(
            PathBuf::from("/tmp/repo"),
            PathBuf::from("/tmp/project/.agent/skills"),
            PathBuf::from("/tmp/BUNDLES.md"),
            PathBuf::from("/tmp/WORKFLOWS.json"),
        );
        assert_eq!(paths.global_repo, PathBuf::from("/tmp/repo"));
        assert_eq!(paths.bundles_file, PathBuf::from("/tmp/BUNDLES.md"));
    }
}
