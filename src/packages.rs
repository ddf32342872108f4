//! The packages redirected to a local graphics repository checkout.

use std::path::Path;

/// Packages patched on every run, in processing order.
///
/// Each name is also the name of its folder at the root of the graphics repo.
pub const TARGET_PACKAGES: &[&str] = &[
    "com.unity.render-pipelines.universal",
    "com.unity.shadergraph",
    "com.unity.render-pipelines.core",
];

/// A package and the repository checkout it should resolve from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackageTarget<'a> {
    pub name: &'a str,
    /// Forward-slash, absolute path of the graphics repo root.
    pub repo_path: &'a str,
}

impl<'a> PackageTarget<'a> {
    pub fn new(name: &'a str, repo_path: &'a str) -> Self {
        Self { name, repo_path }
    }

    /// Manifest value pointing at the package folder, `file:<repo>/<name>`.
    pub fn local_path_value(&self) -> String {
        format!("file:{}/{}", self.repo_path, self.name)
    }

    /// Returns true if the package folder exists inside the repo.
    pub fn has_package_dir(&self) -> bool {
        Path::new(self.repo_path).join(self.name).is_dir()
    }
}

/// Builds the targets for every entry of [`TARGET_PACKAGES`].
pub fn targets(repo_path: &str) -> Vec<PackageTarget<'_>> {
    TARGET_PACKAGES
        .iter()
        .map(|name| PackageTarget::new(name, repo_path))
        .collect()
}
