use std::fs::File;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::GraphResult;

/// Writes into a temporary file beside `path` and renames it into place once
/// `write` succeeds, so a failed run never leaves a partial file behind.
pub fn write_atomically<F>(path: &Path, write: F) -> GraphResult<()>
where
    F: FnOnce(&mut File) -> GraphResult<()>,
{
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir)?;
    write(file.as_file_mut())?;
    file.persist(path).map_err(|e| e.error)?;
    Ok(())
}
