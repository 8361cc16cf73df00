//! File I/O helpers
//!
//! Whole-file reads and write-then-rename replacement of an existing file.

use crate::core::error::{CompnetError, Result};
use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Read a text file fully into memory
pub fn read_text<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|e| CompnetError::io(path, e))
}

/// Replace the contents of `path` atomically
///
/// The new contents go to a temporary file in the same directory, which is
/// then renamed over `path`. On failure the original file is left as it
/// was and the temporary file is removed. A symlink is followed, so the
/// file it points at is replaced and the link itself stays in place.
pub fn write_atomic<P: AsRef<Path>>(path: P, contents: &str) -> Result<()> {
    let requested = path.as_ref();
    let target = match fs::canonicalize(requested) {
        Ok(resolved) => resolved,
        Err(e) if e.kind() == ErrorKind::NotFound => requested.to_path_buf(),
        Err(e) => return Err(CompnetError::io(requested, e)),
    };
    let path = target.as_path();
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| CompnetError::io(dir, e))?;
    tmp.write_all(contents.as_bytes())
        .map_err(|e| CompnetError::io(tmp.path(), e))?;
    tmp.as_file()
        .sync_all()
        .map_err(|e| CompnetError::io(tmp.path(), e))?;

    // Keep the original file's permissions on the replacement
    if let Ok(metadata) = fs::metadata(path) {
        if let Err(e) = fs::set_permissions(tmp.path(), metadata.permissions()) {
            log::warn!(
                "Could not copy permissions of {} to its replacement: {}",
                path.display(),
                e
            );
        }
    }

    tmp.persist(path).map_err(|e| CompnetError::io(path, e.error))?;

    // Best-effort: make the rename durable
    if let Ok(d) = File::open(dir) {
        let _ = d.sync_all();
    }
    log::debug!("Wrote {} bytes to {}", contents.len(), path.display());
    Ok(())
}
