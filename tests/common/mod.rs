//! Shared fixtures for add-urp integration tests.

use assert_cmd::cargo::cargo_bin_cmd;
use std::fs;
use std::ffi::OsStr;
use std::path::PathBuf;
use tempfile::TempDir;

pub const UNIVERSAL: &str = "com.unity.render-pipelines.universal";
pub const SHADERGRAPH: &str = "com.unity.shadergraph";
pub const CORE: &str = "com.unity.render-pipelines.core";

#[allow(unused)]
pub const DEFAULT_MANIFEST: &str = r#"{
  "dependencies": {
    "com.unity.collab-proxy": "2.0.5",
    "com.unity.ide.rider": "3.0.24",
    "com.unity.render-pipelines.universal": "14.0.8",
    "com.unity.shadergraph": "14.0.8",
    "com.unity.render-pipelines.core": "14.0.8",
    "com.unity.ugui": "1.0.0"
  }
}
"#;

/// A project with `Packages/manifest.json` next to a graphics repo checkout.
pub struct Fixture {
    pub temp: TempDir,
    pub project: PathBuf,
    pub repo: PathBuf,
}

#[allow(unused)]
impl Fixture {
    pub fn manifest_path(&self) -> PathBuf {
        self.project.join("Packages/manifest.json")
    }

    pub fn manifest(&self) -> String {
        fs::read_to_string(self.manifest_path()).unwrap()
    }

    /// Forward-slash absolute repo path as it appears in manifest values.
    pub fn repo_display(&self) -> String {
        self.repo.to_string_lossy().replace('\\', "/")
    }

    pub fn local_value(&self, package: &str) -> String {
        format!("file:{}/{}", self.repo_display(), package)
    }
}

/// Creates a project whose manifest holds `manifest`, and a repo with a
/// folder for each target package.
pub fn create_fixture(manifest: &str) -> Fixture {
    let temp = TempDir::new().unwrap();

    let project = temp.path().join("MyProject");
    fs::create_dir_all(project.join("Packages")).unwrap();
    fs::write(project.join("Packages/manifest.json"), manifest).unwrap();

    let repo = temp.path().join("Graphics");
    for package in [UNIVERSAL, SHADERGRAPH, CORE] {
        fs::create_dir_all(repo.join(package)).unwrap();
    }

    Fixture {
        temp,
        project,
        repo,
    }
}

/// Runs the binary with the given arguments.
pub fn run_patch<P: AsRef<OsStr>>(args: &[P], extra_args: &[&str]) -> assert_cmd::assert::Assert {
    let mut cmd = cargo_bin_cmd!("add-urp");
    cmd.args(extra_args).args(args).env("NO_COLOR", "1");

    cmd.assert()
}
