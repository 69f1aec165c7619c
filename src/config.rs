//! Rule set loading.
//!
//! The rule file is a YAML sequence of `find`/`replace` records:
//!
//! ```yaml
//! - find: github.com/acme/widgets
//!   replace: ../widgets
//! - find: github.com/acme/gears
//!   replace: /src/gears
//! ```

use crate::error::{ReplaceError, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// A find/replace pair.
///
/// `find` is matched as a plain substring against manifest lines; `replace`
/// is the local directory the dependency is redirected to.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Rule {
    pub find: String,
    pub replace: String,
}

impl Rule {
    pub fn new(find: impl Into<String>, replace: impl Into<String>) -> Self {
        Self {
            find: find.into(),
            replace: replace.into(),
        }
    }
}

/// Loads the ordered rule list from `path`.
pub fn load_rules(path: &Path) -> Result<Vec<Rule>> {
    log::debug!("Loading rules from: {}", path.display());

    let content = fs::read_to_string(path).map_err(|source| ReplaceError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;

    parse_rules(&content, path)
}

/// Parses a rule list from a string. `path` is only used for error reporting.
pub fn parse_rules(content: &str, path: &Path) -> Result<Vec<Rule>> {
    // A document holding nothing but whitespace or comments has no rules.
    if content
        .lines()
        .all(|line| line.trim().is_empty() || line.trim_start().starts_with('#'))
    {
        return Ok(Vec::new());
    }

    let rules: Option<Vec<Rule>> =
        serde_yaml::from_str(content).map_err(|source| ReplaceError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
    let rules = rules.unwrap_or_default();

    for rule in rules.iter().filter(|r| r.find.is_empty()) {
        log::warn!(
            "Rule with empty 'find' matches every line (replace: {})",
            rule.replace
        );
    }

    log::debug!("Loaded {} rule(s)", rules.len());
    Ok(rules)
}
