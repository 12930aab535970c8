//! Workflow Manifest Parser
//!
//! Strict parser for WORKFLOWS.json. Each workflow's skill list is the
//! concatenation of every step's recommended skills, in step order;
//! cross-step duplicates are kept (the installer's idempotence absorbs
//! them). Unlike the bundle parser, a document that fails to parse is a
//! hard error rather than a skipped record.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

use super::{Group, GroupMap};

#[derive(Debug, Deserialize)]
struct WorkflowsDoc {
    #[serde(default)]
    workflows: Vec<Workflow>,
}

#[derive(Debug, Deserialize)]
struct Workflow {
    id: String,
    #[allow(dead_code)]
    name: Option<String>,
    #[allow(dead_code)]
    description: Option<String>,
    #[serde(default)]
    steps: Vec<Step>,
}

#[derive(Debug, Deserialize)]
struct Step {
    #[allow(dead_code)]
    title: Option<String>,
    #[serde(default, rename = "recommendedSkills")]
    recommended_skills: Vec<String>,
}

/// Parse the workflow manifest at `path`, keyed on workflow id.
///
/// A missing file yields an empty mapping; an unparsable document is an
/// error surfaced to the caller.
pub fn parse_file(path: &Path) -> Result<GroupMap> {
    if !path.exists() {
        debug!(path = %path.display(), "workflow manifest absent");
        return Ok(GroupMap::default());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    parse(&content).with_context(|| format!("Failed to parse {}", path.display()))
}

/// Parse workflow manifest text, keyed on workflow id.
pub fn parse(content: &str) -> Result<GroupMap> {
    let doc: WorkflowsDoc = serde_json::from_str(content)?;

    let groups = doc
        .workflows
        .into_iter()
        .map(|wf| Group {
            name: wf.id,
            skills: wf
                .steps
                .into_iter()
                .flat_map(|step| step.recommended_skills)
                .collect(),
        })
        .collect();

    Ok(GroupMap::from_groups(groups))
}
