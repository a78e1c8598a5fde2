//! Project-state preconditions
//!
//! Each check returns `Ok(())` or an error naming the failed precondition.
//! The caller decides whether a failure aborts the run. Checks only read the
//! filesystem; the project marker is never created or modified here.

pub mod project;
pub mod toolchain;

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::core::{Config, Result};
use crate::infrastructure::shell::CommandExecutor;

pub use toolchain::{ensure_tool_installed, parse_major_version};

/// A single named check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precondition {
    InProject,
    NotInProject,
    EmptyDirectory,
    ProjectIsCrud,
    RequiredToolInstalled,
}

impl fmt::Display for Precondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::InProject => "in-project",
            Self::NotInProject => "not-in-project",
            Self::EmptyDirectory => "empty-directory",
            Self::ProjectIsCrud => "project-is-crud",
            Self::RequiredToolInstalled => "required-tool-installed",
        };
        f.write_str(name)
    }
}

/// Precondition checks rooted at a target directory
#[derive(Debug, Clone)]
pub struct ProjectGate {
    root: PathBuf,
    config: Config,
}

impl ProjectGate {
    pub fn new<P: Into<PathBuf>>(root: P, config: Config) -> Self {
        Self {
            root: root.into(),
            config,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Location of the project marker file
    pub fn marker_path(&self) -> PathBuf {
        self.root.join(&self.config.project_marker)
    }

    /// Location of the project descriptor
    pub fn descriptor_path(&self) -> PathBuf {
        self.root.join(&self.config.project_descriptor)
    }

    /// Run one check
    pub async fn check(
        &self,
        precondition: Precondition,
        executor: &dyn CommandExecutor,
    ) -> Result<()> {
        debug!(root = %self.root.display(), %precondition, "Checking precondition");
        match precondition {
            Precondition::InProject => self.ensure_in_project(),
            Precondition::NotInProject => self.ensure_not_in_project(),
            Precondition::EmptyDirectory => self.ensure_empty_directory(),
            Precondition::ProjectIsCrud => self.ensure_project_is_crud(),
            Precondition::RequiredToolInstalled => {
                self.ensure_required_tool_installed(executor).await
            }
        }
    }

    /// Run checks in order, stopping at the first failure
    pub async fn check_all(
        &self,
        preconditions: &[Precondition],
        executor: &dyn CommandExecutor,
    ) -> Result<()> {
        for precondition in preconditions {
            self.check(*precondition, executor).await?;
        }
        Ok(())
    }
}
