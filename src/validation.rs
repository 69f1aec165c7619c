//! Checks that matched rules point at local directories.

use crate::config::Rule;
use crate::error::{PathProblem, ReplaceError, Result};
use std::fs;
use std::io;
use std::path::Path;

/// Checks a single replacement target.
///
/// Returns `Ok(true)` for an existing directory, `Ok(false)` when the path is
/// absent or is not a directory, and `Err` when it cannot be inspected.
pub fn dir_exists(path: &Path) -> io::Result<bool> {
    match fs::metadata(path) {
        Ok(metadata) => Ok(metadata.is_dir()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e),
    }
}

/// Verifies every matched rule's `replace` path is an existing directory.
///
/// Relative paths resolve against the current directory. All failures are
/// collected before returning, one entry per offending rule.
pub fn validate_local_paths(matches: &[Rule]) -> Result<()> {
    let mut problems = Vec::new();

    for rule in matches {
        let path = Path::new(&rule.replace);
        match dir_exists(path) {
            Ok(true) => log::debug!("Found local module: {}", path.display()),
            Ok(false) => problems.push(PathProblem::Missing(path.to_path_buf())),
            Err(source) => problems.push(PathProblem::Inaccessible {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    if problems.is_empty() {
        Ok(())
    } else {
        for problem in &problems {
            log::debug!("Local path check failed: {}", problem);
        }
        Err(ReplaceError::MissingLocalPaths(problems))
    }
}
