//! Manifest location.
//!
//! The project argument is either a project root containing a `Packages`
//! folder, or a direct path to a `.json` manifest file.

use crate::error::{PatchError, Result};
use crate::paths;
use std::path::{Path, PathBuf};

/// Folder under a project root that holds the package manifest.
pub const PACKAGES_DIR: &str = "Packages";

/// Manifest file name inside [`PACKAGES_DIR`].
pub const MANIFEST_FILE: &str = "manifest.json";

/// How the manifest was located.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestSource {
    /// Found as `Packages/manifest.json` under a project root.
    Project,
    /// Supplied directly as a `.json` file.
    File,
}

/// A resolved manifest path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestLocation {
    pub path: PathBuf,
    pub source: ManifestSource,
}

impl ManifestLocation {
    /// Forward-slash rendering of the manifest path.
    pub fn display(&self) -> String {
        paths::to_forward_slashes(&self.path)
    }
}

/// Resolves the manifest for a project root or a direct manifest file path.
///
/// # Errors
///
/// - `ManifestNotFound`: `project` is a directory without `Packages/manifest.json`,
///   or is neither a directory nor an existing `.json` file
/// - `Io`: the current directory cannot be determined for a relative path
pub fn resolve_manifest_path(project: &Path) -> Result<ManifestLocation> {
    let project = paths::normalize(project)?;

    if project.is_dir() {
        let packages = project.join(PACKAGES_DIR);
        if !packages.is_dir() {
            log::debug!("No {} folder in {}", PACKAGES_DIR, project.display());
            return Err(PatchError::ManifestNotFound(project));
        }

        let path = packages.join(MANIFEST_FILE);
        if !path.is_file() {
            return Err(PatchError::ManifestNotFound(path));
        }

        return Ok(ManifestLocation {
            path,
            source: ManifestSource::Project,
        });
    }

    if project.is_file() && paths::to_forward_slashes(&project).ends_with(".json") {
        return Ok(ManifestLocation {
            path: project,
            source: ManifestSource::File,
        });
    }

    Err(PatchError::ManifestNotFound(project))
}
