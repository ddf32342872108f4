//! Path normalisation.
//!
//! Paths end up inside manifest values (`file:<path>/<package>`), so they are
//! made absolute, cleaned of `.`/`..` and written with forward slashes on
//! every platform.

use crate::error::Result;
use std::path::{Component, Path, PathBuf};

/// Makes `path` absolute and lexically resolves `.` and `..` components.
///
/// Symlinks are not followed and the path does not need to exist.
pub fn normalize(path: &Path) -> Result<PathBuf> {
    let absolute = std::path::absolute(path)?;

    let mut cleaned = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                cleaned.pop();
            }
            other => cleaned.push(other.as_os_str()),
        }
    }

    Ok(cleaned)
}

/// Renders `path` with `/` separators.
pub fn to_forward_slashes(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}
