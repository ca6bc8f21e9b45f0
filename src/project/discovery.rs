use std::fs;
use std::path::{Path, PathBuf};

use crate::base::constants::DEFAULT_SOLUTION_PATH;

use super::error::ProjectError;
use super::solution::Project;

/// Directory holding one sub-directory per project.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SolutionRoot {
    path: PathBuf,
}

impl SolutionRoot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Open every project under this root, most recently modified first.
    pub fn discover(&self) -> Result<Vec<Project>, ProjectError> {
        discover_projects(&self.path)
    }
}

impl Default for SolutionRoot {
    /// The Sysmac Studio installation default.
    fn default() -> Self {
        Self::new(DEFAULT_SOLUTION_PATH)
    }
}

/// Open every project directory under `root`.
///
/// Projects are sorted by last modification, most recent first; ties are
/// broken by uuid. Plain files and non UTF-8 names are ignored.
pub fn discover_projects(root: impl AsRef<Path>) -> Result<Vec<Project>, ProjectError> {
    let root = root.as_ref();
    if !root.is_dir() {
        return Err(ProjectError::SolutionRootNotFound(root.to_path_buf()));
    }

    let entries = fs::read_dir(root).map_err(|e| ProjectError::io(root, e))?;
    let mut projects = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| ProjectError::io(root, e))?;
        if !entry.path().is_dir() {
            continue;
        }
        let Some(uuid) = entry.file_name().to_str().map(str::to_string) else {
            tracing::debug!("Skipping {}", entry.path().display());
            continue;
        };
        projects.push(Project::open(root, &uuid)?);
    }

    projects.sort_by(|a, b| {
        b.info()
            .last_modified
            .cmp(&a.info().last_modified)
            .then_with(|| a.uuid().cmp(b.uuid()))
    });
    tracing::debug!("Found {} projects in {}", projects.len(), root.display());
    Ok(projects)
}
