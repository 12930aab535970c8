//! Group Operator
//!
//! Drives the installer across every skill named by a resolved bundle or
//! workflow. Skills are processed strictly in manifest order, one at a
//! time; a failed or missing skill never stops the rest of the group.
//! There is no rollback -- a partially-applied group stays applied.

use tracing::info;

use crate::install::Installer;
use crate::manifest::GroupMap;
use crate::outcome::InstallOutcome;
use crate::resolve::{self, Resolution};

/// Which installer operation to apply across the group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupAction {
    Install,
    Uninstall,
}

/// Result of a group operation.
#[derive(Debug)]
pub enum GroupResult {
    /// The query matched no group; nothing was attempted.
    NoMatch,
    /// The query matched several groups; nothing was attempted.
    Ambiguous(Vec<String>),
    Applied(GroupReport),
}

/// Per-skill outcomes for one applied group.
#[derive(Debug)]
pub struct GroupReport {
    /// The resolved group name.
    pub group: String,
    /// One outcome per skill, in manifest order.
    pub outcomes: Vec<(String, InstallOutcome)>,
    /// Number of skills attempted. This counts attempts, not successes,
    /// matching the manager's historical reporting.
    pub processed: usize,
}

/// Resolve `query` against `map` and apply `action` to every skill in the
/// resolved group. On zero or multiple matches no skill is touched.
pub fn apply_to_group(
    map: &GroupMap,
    query: &str,
    action: GroupAction,
    installer: &Installer,
) -> GroupResult {
    let group = match resolve::resolve(map, query) {
        Resolution::None => return GroupResult::NoMatch,
        Resolution::Many(names) => {
            return GroupResult::Ambiguous(names.into_iter().map(str::to_string).collect());
        }
        Resolution::One(group) => group,
    };

    info!(group = %group.name, ?action, skills = group.skills.len(), "applying group");

    let mut outcomes = Vec::with_capacity(group.skills.len());
    for skill in &group.skills {
        let outcome = match action {
            GroupAction::Install => installer.install(skill),
            GroupAction::Uninstall => installer.uninstall(skill),
        };
        outcomes.push((skill.clone(), outcome));
    }

    let processed = outcomes.len();
    GroupResult::Applied(GroupReport {
        group: group.name.clone(),
        outcomes,
        processed,
    })
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::config::Paths;
    use crate::manifest::Group;
    use std::fs;
    use tempfile::TempDir;

    fn fixture() -> (TempDir, Paths, GroupMap) {
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

        let map = GroupMap::from_groups(vec![
            Group {
                name: "🚀 The \"Starter\" Pack".to_string(),
                skills: vec!["skill-alpha".to_string(), "skill-beta".to_string()],
            },
            Group {
                name: "🔧 The \"Complex\" Pack".to_string(),
                skills: vec!["complex-skill-gamma".to_string()],
            },
        ]);

        (tmp, paths, map)
    }

    #[test]
    fn test_install_resolved_group_only() {
        let (_tmp, paths, map) = fixture();
        let installer = Installer::new(&paths);

        let result = apply_to_group(&map, "Starter", GroupAction::Install, &installer);
        let report = match result {
            GroupResult::Applied(r) => r,
            other => panic!("expected Applied, got {:?}", other),
        };

        assert_eq!(report.processed, 2);
        assert!(paths.project_skills_dir.join("skill-alpha").exists());
        assert!(paths.project_skills_dir.join("skill-beta").exists());
        // Skills from other groups stay absent.
        assert!(!paths.project_skills_dir.join("complex-skill-gamma").exists());
    }

    #[test]
    fn test_missing_skill_does_not_abort_group() {
        let (_tmp, paths, _) = fixture();
        let installer = Installer::new(&paths);

        let map = GroupMap::from_groups(vec![Group {
            name: "Mixed".to_string(),
            skills: vec![
                "skill-alpha".to_string(),
                "no-such-skill".to_string(),
                "skill-beta".to_string(),
            ],
        }]);

        let result = apply_to_group(&map, "Mixed", GroupAction::Install, &installer);
        let report = match result {
            GroupResult::Applied(r) => r,
            other => panic!("expected Applied, got {:?}", other),
        };

        // Attempts, not successes.
        assert_eq!(report.processed, 3);
        assert!(matches!(
            report.outcomes[1].1,
            InstallOutcome::NotFoundInSource
        ));
        // The skill after the failure was still installed.
        assert!(matches!(report.outcomes[2].1, InstallOutcome::Installed));
        assert!(paths.project_skills_dir.join("skill-beta").exists());
    }

    #[test]
    fn test_ambiguous_query_touches_nothing() {
        let (_tmp, paths, map) = fixture();
        let installer = Installer::new(&paths);

        let result = apply_to_group(&map, "Pack", GroupAction::Install, &installer);
        match result {
            GroupResult::Ambiguous(names) => assert_eq!(names.len(), 2),
            other => panic!("expected Ambiguous, got {:?}", other),
        }
        assert!(!paths.project_skills_dir.exists());
    }

    #[test]
    fn test_no_match_touches_nothing() {
        let (_tmp, paths, map) = fixture();
        let installer = Installer::new(&paths);

        assert!(matches!(
            apply_to_group(&map, "zzz", GroupAction::Install, &installer),
            GroupResult::NoMatch
        ));
        assert!(!paths.project_skills_dir.exists());
    }

    #[test]
    fn test_group_uninstall() {
        let (_tmp, paths, map) = fixture();
        let installer = Installer::new(&paths);

        apply_to_group(&map, "Starter", GroupAction::Install, &installer);
        let result = apply_to_group(&map, "Starter", GroupAction::Uninstall, &installer);

        let report = match result {
            GroupResult::Applied(r) => r,
            other => panic!("expected Applied, got {:?}", other),
        };
        assert_eq!(report.processed, 2);
        assert!(!paths.project_skills_dir.join("skill-alpha").exists());
        assert!(!paths.project_skills_dir.join("skill-beta").exists());
    }
}
