use crate::error::{PatchError, Result};
use crate::fs::Transaction;
use crate::manifest::{ManifestSource, resolve_manifest_path};
use crate::ops::patch_manifest;
use crate::packages;
use crate::paths;
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct PatchArgs {
    /// Project root containing a `Packages` folder, or a manifest `.json` file
    #[arg(value_name = "PROJECT_OR_MANIFEST")]
    pub project: PathBuf,

    /// Root of the graphics repository holding one folder per package
    #[arg(value_name = "GRAPHICS_REPO")]
    pub graphics_repo: PathBuf,

    /// Show what would change without writing the manifest
    #[arg(long, short = 'n')]
    pub dry_run: bool,
}

pub fn execute(args: PatchArgs) -> Result<()> {
    // Validate the repo before any manifest I/O
    let repo_dir = paths::normalize(&args.graphics_repo)?;
    if !repo_dir.is_dir() {
        return Err(PatchError::GraphicsRepoNotFound(repo_dir));
    }
    let repo_path = paths::to_forward_slashes(&repo_dir);

    let manifest = resolve_manifest_path(&args.project)?;
    if manifest.source == ManifestSource::File {
        println!("Manifest at path {} will be patched", manifest.display());
    }

    log::debug!("Manifest: {}", manifest.display());
    log::debug!("Graphics repo: {}", repo_path);

    let targets = packages::targets(&repo_path);
    for target in targets.iter().filter(|t| !t.has_package_dir()) {
        log::warn!("{} has no folder in {}", target.name, repo_path);
        println!(
            "{} {} not found in {}",
            "Warning:".yellow().bold(),
            target.name,
            repo_path
        );
    }

    let mut buffer = fs::read_to_string(&manifest.path).map_err(|e| {
        PatchError::Io(std::io::Error::new(
            e.kind(),
            format!("Failed to read {}: {}", manifest.display(), e),
        ))
    })?;

    // Any failure here returns before the transaction exists, so nothing is written
    patch_manifest(&mut buffer, &targets, |outcome| {
        println!("{}", outcome.message());
    })?;

    println!("{}", buffer);

    let mut txn = Transaction::new(args.dry_run);
    txn.update_file(manifest.path.clone(), buffer)?;

    txn.commit()?;

    let base = std::env::current_dir().unwrap_or_else(|_| repo_dir.clone());
    txn.print_summary(&base);

    if !args.dry_run {
        println!(
            "{} {}",
            "✓ Manifest now points at".green().bold(),
            repo_path.green()
        );
    }

    Ok(())
}
