//! skillctl -- Local Skill Package Manager
//!
//! Installs reusable "skill" directories from a user-global repository
//! into a per-project directory, normally as symlinks, and bulk-applies
//! named groups of skills ("bundles" and "workflows") defined in
//! declarative manifest files.

pub mod config;
pub mod install;
pub mod manifest;
pub mod ops;
pub mod outcome;
pub mod output;
pub mod repo;
pub mod resolve;
pub mod search;
