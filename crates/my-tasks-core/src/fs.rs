//! Filesystem helpers shared by the tasks and the runner.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{TaskError, TaskResult};

/// Path of `name` in the directory containing `path`.
///
/// A bare file name has an empty parent, which resolves against the
/// current directory.
pub fn sibling_path(path: &Path, name: &str) -> PathBuf {
    path.parent().unwrap_or_else(|| Path::new("")).join(name)
}

/// Writes `content` to `path` via a temp file in the same directory and a rename.
///
/// Readers never observe a partially written file, and a failed write
/// leaves any existing file untouched.
pub fn write_atomic(path: &Path, content: &[u8]) -> TaskResult<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut tmp = tempfile::Builder::new()
        .prefix(".tmp-")
        .tempfile_in(dir)
        .map_err(|e| TaskError::io(path, e))?;

    tmp.write_all(content).map_err(|e| TaskError::io(path, e))?;
    tmp.as_file().sync_all().map_err(|e| TaskError::io(path, e))?;

    tmp.persist(path).map_err(|e| TaskError::io(path, e.error))?;
    Ok(())
}
