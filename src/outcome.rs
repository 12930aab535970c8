//! Install Outcomes
//!
//! Per-skill results for install, uninstall, and clear operations. Group
//! operations collect these instead of propagating errors, so one bad
//! skill never aborts the rest of a bundle.

use std::path::PathBuf;

use thiserror::Error;

/// A failure while mutating the project skill directory.
#[derive(Debug, Error)]
pub enum InstallError {
    /// Uninstall target does not exist, not even as a dangling symlink.
    #[error("not installed")]
    NotInstalled,

    /// The entry is, or resolves inside, the global repository root.
    /// Removing it would destroy the canonical skill copies.
    #[error("Safety Stop: '{}' resolves inside the global repository. Aborting.", .path.display())]
    SafetyViolation { path: PathBuf },

    /// Symlink creation failed on every mechanism the platform offers.
    #[error("symlink creation failed: {0}")]
    Platform(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result of a single skill operation.
#[derive(Debug)]
pub enum InstallOutcome {
    /// A new link was created in the project skill directory.
    Installed,
    /// The entry was removed from the project skill directory.
    Uninstalled,
    /// An entry of that name already exists; nothing was changed. Carries
    /// the existing symlink target when the entry is a link.
    AlreadyInstalled { target: Option<PathBuf> },
    /// No directory of that name exists under the global repository.
    NotFoundInSource,
    Failed(InstallError),
}

impl InstallOutcome {
    /// True for `Failed` and `NotFoundInSource`.
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            InstallOutcome::Failed(_) | InstallOutcome::NotFoundInSource
        )
    }
}
