//! skillctl CLI
//!
//! The entry point: argument parsing, command dispatch, and user-facing
//! reporting. Expected failures are reported and turn into a nonzero exit
//! code; they never panic past dispatch.

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use dialoguer::Confirm;

use skillctl::config::Paths;
use skillctl::install::Installer;
use skillctl::manifest::{bundles, workflows, GroupMap};
use skillctl::ops::{self, GroupAction, GroupResult};
use skillctl::outcome::{InstallError, InstallOutcome};
use skillctl::output;
use skillctl::repo::{self, EntryKind};
use skillctl::search;

/// Local package manager for reusable skill directories.
#[derive(Parser)]
#[command(name = "skillctl", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List project skills (or available global skills with --global)
    List {
        /// List available global skills
        #[arg(short = 'g', long = "global")]
        global: bool,
    },
    /// Search for global skills
    Search {
        /// Search term
        query: String,
    },
    /// Install a skill to the current project
    Install {
        /// Name of the skill to install
        skill_name: String,
    },
    /// Remove a skill from the current project
    Uninstall {
        /// Name of the skill to remove
        skill_name: String,
    },
    /// Remove all skills from the current project
    Clear {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
    /// Manage skill bundles
    Bundle {
        #[command(subcommand)]
        action: GroupCommand,
    },
    /// Manage skill workflows
    Workflow {
        #[command(subcommand)]
        action: GroupCommand,
    },
}

#[derive(Subcommand)]
enum GroupCommand {
    /// List available groups
    List,
    /// Install every skill in the matching group
    Install {
        /// Name (or part of name) of the group
        query: String,
    },
    /// Uninstall every skill in the matching group
    Uninstall {
        /// Name (or part of name) of the group
        query: String,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let result = Paths::resolve().and_then(|paths| run(&cli.command, &paths));
    if let Err(err) = result {
        output::error(err);
        std::process::exit(1);
    }
}

fn run(command: &Commands, paths: &Paths) -> Result<()> {
    match command {
        Commands::List { global: true } => list_global(paths),
        Commands::List { global: false } => list_project(paths),
        Commands::Search { query } => search_skills(paths, query),
        Commands::Install { skill_name } => {
            let outcome = Installer::new(paths).install(skill_name);
            report_outcome(skill_name, &outcome, GroupAction::Install);
        }
        Commands::Uninstall { skill_name } => {
            let outcome = Installer::new(paths).uninstall(skill_name);
            report_outcome(skill_name, &outcome, GroupAction::Uninstall);
        }
        Commands::Clear { force } => clear_skills(paths, *force)?,
        Commands::Bundle { action } => {
            let map = bundles::parse_file(&paths.bundles_file);
            group_command(paths, &map, "bundle", &paths.bundles_file, action)?;
        }
        Commands::Workflow { action } => {
            let map = workflows::parse_file(&paths.workflows_file)?;
            group_command(paths, &map, "workflow", &paths.workflows_file, action)?;
        }
    }
    Ok(())
}

// ---- Skill Commands ---------------------------------------------------------

fn list_global(paths: &Paths) {
    output::info(format!(
        "Listing Global Skills from: {}",
        paths.global_repo.display()
    ));

    let skills = repo::skill_names(&paths.global_repo);
    if skills.is_empty() {
        output::warning("No global skills found.");
        return;
    }

    for skill in &skills {
        println!("  \u{2022} {}", skill);
    }
    println!("\nTotal: {} global skills", skills.len());
}

fn list_project(paths: &Paths) {
    output::info(format!(
        "Listing Project Skills in: {}",
        paths.project_skills_dir.display()
    ));

    if !paths.project_skills_dir.exists() {
        output::warning("Project .agent/skills directory does not exist.");
        return;
    }

    let entries = repo::project_entries(&paths.project_skills_dir);
    for entry in &entries {
        match &entry.kind {
            EntryKind::Symlink(target) => println!(
                "  \u{2022} {} {} (Symlink)",
                entry.name,
                format!("-> {}", target.display()).dimmed()
            ),
            EntryKind::BrokenSymlink => {
                println!("  \u{2022} {} (Invalid Symlink)", entry.name);
            }
            EntryKind::LocalDirectory => {
                println!("  \u{2022} {} (Local Directory)", entry.name);
            }
        }
    }

    println!("\nTotal: {} installed skills", entries.len());
}

fn search_skills(paths: &Paths, query: &str) {
    output::info(format!("Searching for '{}' in Global Skills...", query));

    if !paths.global_repo.exists() {
        output::error("Global skills repository not found.");
        return;
    }

    let all_skills = repo::skill_names(&paths.global_repo);
    let matches = search::fuzzy_search(&all_skills, query);

    if matches.is_empty() {
        output::warning("No matching skills found.");
        return;
    }

    for m in &matches {
        println!("  \u{2022} {}", m);
    }
    println!("\nFound {} matches.", matches.len());
}

// ---- Clear ------------------------------------------------------------------

fn clear_skills(paths: &Paths, force: bool) -> Result<()> {
    if !paths.project_skills_dir.exists() {
        output::warning("Project skills directory not found.");
        return Ok(());
    }

    let names = repo::entry_names(&paths.project_skills_dir);
    if names.is_empty() {
        output::info("No skills installed in this project.");
        return Ok(());
    }

    if !force {
        output::warning(format!(
            "This will remove {} skills from the current project.",
            names.len()
        ));
        let confirmed = Confirm::new()
            .with_prompt("Are you sure you want to proceed?")
            .default(false)
            .interact()?;
        if !confirmed {
            output::info("Operation cancelled.");
            return Ok(());
        }
    }

    output::info(format!("Removing {} skills...", names.len()));

    let mut cleared = 0;
    for (name, outcome) in Installer::new(paths).clear_entries() {
        match outcome {
            InstallOutcome::Uninstalled => {
                println!("  Removed {}", name);
                cleared += 1;
            }
            InstallOutcome::Failed(err) => {
                output::error(format!("Failed to remove {}: {}", name, err));
            }
            // remove_entry only returns the two arms above.
            _ => {}
        }
    }

    // Unlike group operations, clear counts successes.
    output::success(format!("Cleared {} skills.", cleared));
    Ok(())
}

// ---- Bundle / Workflow Commands ---------------------------------------------

fn group_command(
    paths: &Paths,
    map: &GroupMap,
    label: &str,
    manifest_path: &std::path::Path,
    action: &GroupCommand,
) -> Result<()> {
    match action {
        GroupCommand::List => list_groups(map, label, manifest_path),
        GroupCommand::Install { query } => {
            apply_group(paths, map, label, query, GroupAction::Install);
        }
        GroupCommand::Uninstall { query } => {
            apply_group(paths, map, label, query, GroupAction::Uninstall);
        }
    }
    Ok(())
}

fn list_groups(map: &GroupMap, label: &str, manifest_path: &std::path::Path) {
    output::info(format!(
        "Listing {}s from: {}",
        capitalize(label),
        manifest_path.display()
    ));

    if map.is_empty() {
        output::warning(format!(
            "No {}s found or the manifest file is missing.",
            label
        ));
        return;
    }

    for group in map.iter() {
        println!("\n\u{1f4e6} {}", group.name.bold());
        let preview: Vec<&str> = group.skills.iter().take(5).map(String::as_str).collect();
        let ellipsis = if group.skills.len() > 5 { "..." } else { "" };
        println!(
            "   Contains {} skills: {}{}",
            group.skills.len(),
            preview.join(", "),
            ellipsis
        );
    }

    println!("\nTotal: {} {}s available.", map.len(), label);
}

fn apply_group(paths: &Paths, map: &GroupMap, label: &str, query: &str, action: GroupAction) {
    let installer = Installer::new(paths);

    match ops::apply_to_group(map, query, action, &installer) {
        GroupResult::NoMatch => {
            output::error(format!("No {} found matching '{}'", label, query));
        }
        GroupResult::Ambiguous(names) => {
            output::warning(format!("Multiple {}s match '{}':", label, query));
            for name in names {
                println!("  \u{2022} {}", name);
            }
            println!("Please be more specific.");
        }
        GroupResult::Applied(report) => {
            let verb = match action {
                GroupAction::Install => "Installing",
                GroupAction::Uninstall => "Uninstalling",
            };
            output::info(format!(
                "{} {}: {} ({} skills)",
                verb,
                label,
                report.group.bold(),
                report.outcomes.len()
            ));

            for (skill, outcome) in &report.outcomes {
                println!("  {} {}...", verb, skill);
                report_outcome(skill, outcome, action);
            }

            let noun = match action {
                GroupAction::Install => "installation",
                GroupAction::Uninstall => "uninstallation",
            };
            output::success(format!(
                "{} {} complete. Processed {} skills.",
                capitalize(label),
                noun,
                report.processed
            ));
        }
    }
}

// ---- Outcome Reporting ------------------------------------------------------

/// Render a per-skill outcome the way the single-skill commands do.
fn report_outcome(skill: &str, outcome: &InstallOutcome, action: GroupAction) {
    match outcome {
        InstallOutcome::Installed => output::success(format!("Installed {}", skill)),
        InstallOutcome::Uninstalled => output::success(format!("Uninstalled {}", skill)),
        InstallOutcome::AlreadyInstalled { target } => {
            output::warning(format!(
                "Skill '{}' is already installed in this project.",
                skill
            ));
            if let Some(target) = target {
                println!("    (It's a symlink to: {})", target.display());
            }
        }
        InstallOutcome::NotFoundInSource => {
            output::error(format!("Skill '{}' not found in global repo.", skill));
        }
        InstallOutcome::Failed(InstallError::NotInstalled) => {
            output::error(format!(
                "Skill '{}' is not installed in this project.",
                skill
            ));
        }
        InstallOutcome::Failed(err) => {
            let verb = match action {
                GroupAction::Install => "Installation",
                GroupAction::Uninstall => "Uninstallation",
            };
            output::error(format!("{} failed: {}", verb, err));
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
