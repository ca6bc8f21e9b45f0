//! Error types for project loading.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::hir::ResolveError;
use crate::parser::ParseError;

/// Errors raised while reading a project or resolving its symbols.
#[derive(Debug, Error)]
pub enum ProjectError {
    /// The solution root does not exist or is not a directory.
    #[error("Solution directory not found: {}", .0.display())]
    SolutionRootNotFound(PathBuf),

    /// IO error on a project file.
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A project file could not be parsed.
    #[error("{}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    /// The entity index lacks a required entity.
    #[error("{}: missing {entity} entity", path.display())]
    MissingEntity { path: PathBuf, entity: &'static str },

    /// Symbol resolution aborted.
    #[error("Project `{project}`: {source}")]
    Resolve {
        project: String,
        #[source]
        source: ResolveError,
    },
}

impl ProjectError {
    /// Create an IO error for `path`.
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create a parse error for `path`.
    pub fn parse(path: impl AsRef<Path>, source: ParseError) -> Self {
        Self::Parse {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create a missing entity error for `path`.
    pub fn missing_entity(path: impl AsRef<Path>, entity: &'static str) -> Self {
        Self::MissingEntity {
            path: path.as_ref().to_path_buf(),
            entity,
        }
    }
}
