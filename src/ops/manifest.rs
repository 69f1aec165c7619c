use crate::config::Rule;
use crate::error::{ReplaceError, Result};
use crate::fs::FileSwap;
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

/// Lines starting with this literal are treated as replace directives.
pub const DIRECTIVE_PREFIX: &str = "replace";

pub fn is_directive(line: &[u8]) -> bool {
    line.starts_with(DIRECTIVE_PREFIX.as_bytes())
}

/// Calls `f` with each line of `reader`, terminator removed.
///
/// A line ends at `\n`, and one `\r` right before it is dropped too. Bytes
/// pass through untouched, so the manifest does not have to be UTF-8.
pub(crate) fn for_each_line<R: BufRead>(mut reader: R, mut f: impl FnMut(&[u8])) -> io::Result<()> {
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(());
        }

        let mut line = buf.as_slice();
        if let Some(rest) = line.strip_suffix(b"\n") {
            line = rest;
        }
        if let Some(rest) = line.strip_suffix(b"\r") {
            line = rest;
        }
        f(line);
    }
}

/// Renders the directive line for `rule`, without a trailing newline.
pub fn format_directive(rule: &Rule) -> String {
    format!("{} {} => {}", DIRECTIVE_PREFIX, rule.find, rule.replace)
}

/// Renders one newline-terminated directive per rule, in order.
pub fn render_directives(rules: &[Rule]) -> String {
    rules
        .iter()
        .map(|rule| format_directive(rule) + "\n")
        .collect()
}

/// Manifest content with directives removed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StripOutcome {
    /// Kept lines, each terminated with `\n`.
    pub content: Vec<u8>,
    /// Removed directive lines, without terminators, in file order. Invalid
    /// UTF-8 is replaced for display.
    pub removed: Vec<String>,
}

/// Splits `reader` into kept lines and directive lines.
///
/// Every kept line is re-terminated with `\n`; a `\r\n` terminator becomes
/// `\n` and a final unterminated line gains one.
pub fn strip_content<R: BufRead>(reader: R) -> io::Result<StripOutcome> {
    let mut outcome = StripOutcome::default();

    for_each_line(reader, |line| {
        if is_directive(line) {
            outcome.removed.push(String::from_utf8_lossy(line).into_owned());
        } else {
            outcome.content.extend_from_slice(line);
            outcome.content.push(b'\n');
        }
    })?;

    Ok(outcome)
}

/// Removes every directive line from the manifest at `path`.
///
/// The file is always rewritten, even when nothing was removed, so the line
/// terminator normalization of [`strip_content`] applies on every run.
pub fn strip_directives(path: &Path) -> Result<StripOutcome> {
    log::debug!("Stripping directives from: {}", path.display());

    let read_err = |source: io::Error| ReplaceError::ManifestRead {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(read_err)?;
    let outcome = strip_content(BufReader::new(file)).map_err(read_err)?;

    let mut swap = FileSwap::begin(path)?;
    let write_err = |source: io::Error| ReplaceError::ManifestWrite {
        path: path.to_path_buf(),
        source,
    };
    swap.write_all(&outcome.content).map_err(write_err)?;
    swap.commit()?;

    log::info!("Removed {} directive(s) from {}", outcome.removed.len(), path.display());
    Ok(outcome)
}

/// Appends one directive per rule to the end of the manifest at `path`.
///
/// The existing bytes are copied unchanged ahead of the new lines.
pub fn append_directives(path: &Path, rules: &[Rule]) -> Result<()> {
    log::debug!("Appending {} directive(s) to: {}", rules.len(), path.display());

    let original = fs::read(path).map_err(|source| ReplaceError::ManifestRead {
        path: path.to_path_buf(),
        source,
    })?;

    let mut swap = FileSwap::begin(path)?;
    let write_err = |source: io::Error| ReplaceError::ManifestWrite {
        path: path.to_path_buf(),
        source,
    };
    swap.write_all(&original).map_err(write_err)?;
    swap.write_all(render_directives(rules).as_bytes()).map_err(write_err)?;
    swap.commit()?;

    for rule in rules {
        log::info!("Added: {}", format_directive(rule));
    }
    Ok(())
}
