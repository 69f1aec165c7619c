use super::manifest::for_each_line;
use crate::config::Rule;
use crate::error::{ReplaceError, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Collects every rule whose `find` occurs in a line of `reader`.
///
/// Lines are the outer loop and rules the inner one, so results are grouped
/// by line. A rule found on several lines appears once per line. Lines that
/// are not valid UTF-8 are matched lossily.
pub fn find_matches<R: BufRead>(reader: R, rules: &[Rule]) -> io::Result<Vec<Rule>> {
    let mut found = Vec::new();
    let mut line_no = 0;

    for_each_line(reader, |line| {
        line_no += 1;
        let line = String::from_utf8_lossy(line);
        for rule in rules {
            if line.contains(rule.find.as_str()) {
                log::debug!("Line {}: matched '{}'", line_no, rule.find);
                found.push(rule.clone());
            }
        }
    })?;

    Ok(found)
}

/// Scans the manifest at `path` for rule matches.
pub fn scan_manifest(path: &Path, rules: &[Rule]) -> Result<Vec<Rule>> {
    let read_err = |source: io::Error| ReplaceError::ManifestRead {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(read_err)?;
    let found = find_matches(BufReader::new(file), rules).map_err(read_err)?;

    log::debug!("{} match(es) in {}", found.len(), path.display());
    Ok(found)
}
