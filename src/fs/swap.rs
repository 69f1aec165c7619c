//! Temp-file-then-rename replacement of a single file.
//!
//! ## Guarantees
//!
//! - The target is untouched until [`FileSwap::commit`] renames the temp file
//!   over it, so readers see either the old or the new content, never a mix.
//! - The temp file lives in the target's directory, keeping the rename on one
//!   filesystem.
//! - If the swap is dropped without committing (early `?` return, panic), the
//!   temp file is removed and the target is left as it was.
//!
//! ## Example
//!
//! ```no_run
//! # use modreplace::fs::FileSwap;
//! # use std::io::Write;
//! # use std::path::Path;
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut swap = FileSwap::begin(Path::new("go.mod"))?;
//! swap.write_all(b"module example.com/app\n")?;
//! swap.commit()?;
//! # Ok(())
//! # }
//! ```

use crate::error::{ReplaceError, Result};

use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Staged replacement of `target`.
///
/// Must be explicitly committed. If dropped without committing, the staged
/// content is discarded.
#[must_use = "FileSwap must be committed or the staged content is discarded"]
pub struct FileSwap {
    target: PathBuf,
    temp: Option<BufWriter<NamedTempFile>>,
}

impl FileSwap {
    /// Creates an empty temp file next to `target`.
    pub fn begin(target: &Path) -> Result<Self> {
        let dir = match target.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let prefix = format!(
            ".{}.",
            target
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "manifest".to_string())
        );

        let temp = tempfile::Builder::new()
            .prefix(&prefix)
            .suffix(".tmp")
            .tempfile_in(dir)
            .map_err(|source| ReplaceError::ManifestWrite {
                path: target.to_path_buf(),
                source,
            })?;

        log::debug!("Staging {} in {}", target.display(), temp.path().display());

        Ok(Self {
            target: target.to_path_buf(),
            temp: Some(BufWriter::new(temp)),
        })
    }

    /// Flushes the staged content and renames it over the target.
    ///
    /// The target's permissions are carried over to the new file.
    pub fn commit(mut self) -> Result<()> {
        let target = self.target.clone();
        let write_err = |source: io::Error| ReplaceError::ManifestWrite {
            path: target.clone(),
            source,
        };

        let writer = self
            .temp
            .take()
            .ok_or_else(|| write_err(io::Error::other("swap already finished")))?;
        let temp = writer.into_inner().map_err(|e| write_err(e.into_error()))?;

        if let Ok(metadata) = fs::metadata(&self.target) {
            fs::set_permissions(temp.path(), metadata.permissions()).map_err(write_err)?;
        }

        temp.persist(&self.target).map_err(|e| write_err(e.error))?;

        log::debug!("Replaced: {}", self.target.display());
        Ok(())
    }

    fn writer(&mut self) -> io::Result<&mut BufWriter<NamedTempFile>> {
        self.temp.as_mut().ok_or_else(|| io::Error::other("swap already finished"))
    }
}

impl Write for FileSwap {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.writer()?.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer()?.flush()
    }
}

impl Drop for FileSwap {
    fn drop(&mut self) {
        if self.temp.is_some() {
            log::warn!("Discarding staged rewrite of {}", self.target.display());
        }
    }
}
