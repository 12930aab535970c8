//! Skill Installer
//!
//! Single-skill install and uninstall against the project skill directory.
//! Install creates a symlink back to the global repository; uninstall
//! removes links, files, or hand-copied directories uniformly. All
//! mutations stay inside the project skill directory subtree; the global
//! repository is read-only here, enforced by an explicit safety check on
//! the recursive-removal path.

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::config::Paths;
use crate::outcome::{InstallError, InstallOutcome};
use crate::repo;

/// Performs skill operations against one [`Paths`] configuration.
pub struct Installer<'a> {
    paths: &'a Paths,
}

impl<'a> Installer<'a> {
    pub fn new(paths: &'a Paths) -> Self {
        Self { paths }
    }

    /// Link a global skill into the project skill directory.
    ///
    /// Installing an already-present skill is a no-op, never an overwrite.
    pub fn install(&self, skill: &str) -> InstallOutcome {
        let source = self.paths.global_repo.join(skill);
        if !source.is_dir() {
            return InstallOutcome::NotFoundInSource;
        }

        let dest = self.paths.project_skills_dir.join(skill);
        if dest.symlink_metadata().is_ok() {
            // Present in any form, dangling links included.
            return InstallOutcome::AlreadyInstalled {
                target: fs::read_link(&dest).ok(),
            };
        }

        if let Err(err) = fs::create_dir_all(&self.paths.project_skills_dir) {
            return InstallOutcome::Failed(err.into());
        }

        match create_symlink(&source, &dest) {
            Ok(()) => {
                debug!(skill, dest = %dest.display(), "symlink created");
                InstallOutcome::Installed
            }
            Err(err) => {
                warn!(skill, %err, "symlink creation failed");
                InstallOutcome::Failed(err)
            }
        }
    }

    /// Remove a skill entry from the project skill directory.
    pub fn uninstall(&self, skill: &str) -> InstallOutcome {
        self.remove_entry(skill)
    }

    /// Remove every non-reserved entry, returning a per-entry outcome in
    /// name order. The caller handles confirmation; this only mutates.
    pub fn clear_entries(&self) -> Vec<(String, InstallOutcome)> {
        repo::entry_names(&self.paths.project_skills_dir)
            .into_iter()
            .map(|name| {
                let outcome = self.remove_entry(&name);
                (name, outcome)
            })
            .collect()
    }

    fn remove_entry(&self, name: &str) -> InstallOutcome {
        let target = self.paths.project_skills_dir.join(name);

        let meta = match target.symlink_metadata() {
            Ok(m) => m,
            Err(_) => return InstallOutcome::Failed(InstallError::NotInstalled),
        };

        let file_type = meta.file_type();

        // Links (resolvable or dangling) and plain files: remove just the
        // entry itself, never what it points at.
        if file_type.is_symlink() || file_type.is_file() {
            return match remove_link(&target) {
                Ok(()) => InstallOutcome::Uninstalled,
                Err(err) => InstallOutcome::Failed(err.into()),
            };
        }

        // Real directory: refuse to remove anything that resolves into the
        // global repository, then take the whole tree.
        if self.resolves_into_repo(&target) {
            return InstallOutcome::Failed(InstallError::SafetyViolation { path: target });
        }

        match fs::remove_dir_all(&target) {
            Ok(()) => InstallOutcome::Uninstalled,
            Err(err) => InstallOutcome::Failed(err.into()),
        }
    }

    /// True if `path` canonicalizes to the global repository root or to
    /// anything beneath it, following link chains.
    fn resolves_into_repo(&self, path: &Path) -> bool {
        let Ok(resolved) = path.canonicalize() else {
            return false;
        };
        match self.paths.global_repo.canonicalize() {
            Ok(repo_root) => resolved.starts_with(&repo_root),
            Err(_) => false,
        }
    }
}

#[cfg(unix)]
fn create_symlink(source: &Path, dest: &Path) -> Result<(), InstallError> {
    std::os::unix::fs::symlink(source, dest)?;
    Ok(())
}

/// Windows needs a directory symlink, which plain users may not be allowed
/// to create. Fall back to PowerShell's New-Item, which succeeds under
/// Developer Mode.
#[cfg(windows)]
fn create_symlink(source: &Path, dest: &Path) -> Result<(), InstallError> {
    if std::os::windows::fs::symlink_dir(source, dest).is_ok() {
        return Ok(());
    }

    let command = format!(
        "New-Item -Path '{}' -ItemType SymbolicLink -Value '{}'",
        dest.display(),
        source.display()
    );
    let output = std::process::Command::new("powershell")
        .args(["-Command", &command])
        .output()?;

    if output.status.success() {
        Ok(())
    } else {
        let stderr = String::from_utf8_lossy(&output.stderr);
        Err(InstallError::Platform(stderr.trim().to_string()))
    }
}

#[cfg(unix)]
fn remove_link(path: &Path) -> std::io::Result<()> {
    fs::remove_file(path)
}

#[cfg(windows)]
fn remove_link(path: &Path) -> std::io::Result<()> {
    // Directory symlinks are directories to the deletion APIs.
    fs::remove_file(path).or_else(|_| fs::remove_dir(path))
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::os::unix::fs::symlink;
    use tempfile::TempDir;

    fn fixture() -> (TempDir, Paths) {
        let tmp = TempDir::new().unwrap();

        let global = tmp.path().join("global").join("skills");
        for skill in ["skill-alpha", "skill-beta", "complex-skill-gamma"] {
            fs::create_dir_all(global.join(skill)).unwrap();
        }

        let paths = Paths::new(
            global,
            tmp.path().join("project").join(".agent").join("skills"),
            tmp.path().join("BUNDLES.md"),
            tmp.path().join("WORKFLOWS.json"),
        );
        (tmp, paths)
    }

    #[test]
    fn test_install_creates_symlink_to_source() {
        let (_tmp, paths) = fixture();
        let installer = Installer::new(&paths);

        assert!(matches!(
            installer.install("skill-alpha"),
            InstallOutcome::Installed
        ));

        let entry = paths.project_skills_dir.join("skill-alpha");
        assert!(entry.symlink_metadata().unwrap().file_type().is_symlink());
        assert_eq!(
            fs::read_link(&entry).unwrap(),
            paths.global_repo.join("skill-alpha")
        );
    }

    #[test]
    fn test_install_twice_is_idempotent() {
        let (_tmp, paths) = fixture();
        let installer = Installer::new(&paths);

        installer.install("skill-alpha");
        let entry = paths.project_skills_dir.join("skill-alpha");
        let first_target = fs::read_link(&entry).unwrap();

        match installer.install("skill-alpha") {
            InstallOutcome::AlreadyInstalled { target } => {
                assert_eq!(target.unwrap(), first_target);
            }
            other => panic!("expected AlreadyInstalled, got {:?}", other),
        }
        assert_eq!(fs::read_link(&entry).unwrap(), first_target);
    }

    #[test]
    fn test_install_unknown_skill() {
        let (_tmp, paths) = fixture();
        let installer = Installer::new(&paths);
        assert!(matches!(
            installer.install("fake-skill"),
            InstallOutcome::NotFoundInSource
        ));
    }

    #[test]
    fn test_install_then_uninstall_round_trip() {
        let (_tmp, paths) = fixture();
        let installer = Installer::new(&paths);

        installer.install("skill-beta");
        assert!(matches!(
            installer.uninstall("skill-beta"),
            InstallOutcome::Uninstalled
        ));

        let entry = paths.project_skills_dir.join("skill-beta");
        assert!(entry.symlink_metadata().is_err());
        // The global copy is untouched.
        assert!(paths.global_repo.join("skill-beta").is_dir());
    }

    #[test]
    fn test_uninstall_missing_skill() {
        let (_tmp, paths) = fixture();
        let installer = Installer::new(&paths);
        assert!(matches!(
            installer.uninstall("skill-alpha"),
            InstallOutcome::Failed(InstallError::NotInstalled)
        ));
    }

    #[test]
    fn test_uninstall_dangling_symlink() {
        let (tmp, paths) = fixture();
        let installer = Installer::new(&paths);

        fs::create_dir_all(&paths.project_skills_dir).unwrap();
        let entry = paths.project_skills_dir.join("gone");
        symlink(tmp.path().join("does-not-exist"), &entry).unwrap();

        assert!(matches!(
            installer.uninstall("gone"),
            InstallOutcome::Uninstalled
        ));
        assert!(entry.symlink_metadata().is_err());
    }

    #[test]
    fn test_uninstall_local_directory_copy() {
        let (_tmp, paths) = fixture();
        let installer = Installer::new(&paths);

        let copied = paths.project_skills_dir.join("copied-skill");
        fs::create_dir_all(copied.join("nested")).unwrap();
        fs::write(copied.join("nested").join("file.md"), "content").unwrap();

        assert!(matches!(
            installer.uninstall("copied-skill"),
            InstallOutcome::Uninstalled
        ));
        assert!(!copied.exists());
    }

    #[test]
    fn test_uninstall_refuses_global_repo() {
        let (tmp, paths) = fixture();

        // A project skill directory that happens to contain the global
        // repository as one of its entries.
        let hostile = Paths::new(
            paths.global_repo.clone(),
            tmp.path().join("global"),
            paths.bundles_file.clone(),
            paths.workflows_file.clone(),
        );
        let installer = Installer::new(&hostile);

        match installer.uninstall("skills") {
            InstallOutcome::Failed(InstallError::SafetyViolation { .. }) => {}
            other => panic!("expected SafetyViolation, got {:?}", other),
        }
        assert!(paths.global_repo.join("skill-alpha").is_dir());
    }

    #[test]
    fn test_clear_entries_removes_everything_managed() {
        let (_tmp, paths) = fixture();
        let installer = Installer::new(&paths);

        installer.install("skill-alpha");
        installer.install("skill-beta");
        fs::create_dir_all(paths.project_skills_dir.join(".metadata")).unwrap();

        let outcomes = installer.clear_entries();
        assert_eq!(outcomes.len(), 2);
        assert!(outcomes
            .iter()
            .all(|(_, o)| matches!(o, InstallOutcome::Uninstalled)));

        assert!(paths
            .project_skills_dir
            .join("skill-alpha")
            .symlink_metadata()
            .is_err());
        // Reserved entries survive a clear.
        assert!(paths.project_skills_dir.join(".metadata").is_dir());
    }
}
