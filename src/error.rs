//! Error types for modreplace.
//!
//! All operations return `Result<T>` which aliases `Result<T, ReplaceError>`.

use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors from the replace pipeline.
#[derive(Debug, Error)]
pub enum ReplaceError {
    /// Manifest could not be opened or read.
    #[error("Failed to read {}: {source}", .path.display())]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Temp file creation, write, or the final rename failed.
    #[error("Failed to write {}: {source}", .path.display())]
    ManifestWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file could not be opened or read.
    #[error("Failed to read config {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not a valid rule list.
    #[error("Failed to parse config {}: {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// One or more local replacement targets are missing or unreadable.
    ///
    /// Every offending path is reported, one per line.
    #[error("replace module error(s) or missing:\n{}", join_problems(.0))]
    MissingLocalPaths(Vec<PathProblem>),
}

/// A single failed local-path check.
#[derive(Debug)]
pub enum PathProblem {
    /// Path does not exist, or exists but is not a directory.
    Missing(PathBuf),
    /// Path could not be inspected.
    Inaccessible {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl PathProblem {
    pub fn path(&self) -> &Path {
        match self {
            PathProblem::Missing(path) => path,
            PathProblem::Inaccessible { path, .. } => path,
        }
    }
}

impl fmt::Display for PathProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathProblem::Missing(path) => write!(f, "{}", path.display()),
            PathProblem::Inaccessible { path, source } => {
                write!(f, "{}: {}", path.display(), source)
            }
        }
    }
}

fn join_problems(problems: &[PathProblem]) -> String {
    problems
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Result type alias for modreplace operations.
pub type Result<T> = std::result::Result<T, ReplaceError>;
