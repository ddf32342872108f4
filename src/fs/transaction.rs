//! Staged manifest write.
//!
//! Patched content is only staged while the manifest is being edited. Nothing
//! touches the disk until `commit()`, so a failure anywhere in the patch
//! sequence leaves the file as it was.
//!
//! ## Phases
//!
//! 1. **Stage**: Record the new content via `update_file()`
//! 2. **Validate**: Check the target still exists and is writable
//! 3. **Write**: Replace the file content (skipped in dry-run mode)
//!
//! ## Example
//!
//! ```no_run
//! # use add_urp::fs::Transaction;
//! # use std::path::PathBuf;
//! # fn example() -> add_urp::error::Result<()> {
//! let mut txn = Transaction::new(false);
//!
//! txn.update_file(PathBuf::from("Packages/manifest.json"), "{}".into())?;
//!
//! txn.commit()?;
//! # Ok(())
//! # }
//! ```

use crate::error::{PatchError, Result};

use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
struct PendingWrite {
    path: PathBuf,
    content: String,
}

/// A single staged file write.
///
/// Must be explicitly committed. If dropped without committing, logs a warning;
/// the file is left untouched.
///
/// ## Dry-Run Mode
///
/// When `dry_run = true`, the staged write is validated but not executed.
#[must_use = "Transaction must be committed"]
pub struct Transaction {
    pending: Option<PendingWrite>,
    unchanged: Option<PathBuf>,
    dry_run: bool,
    committed: bool,
}

impl Transaction {
    /// Creates a new transaction.
    pub fn new(dry_run: bool) -> Self {
        Self {
            pending: None,
            unchanged: None,
            dry_run,
            committed: false,
        }
    }

    /// Stages new content for `path`, replacing anything staged before.
    ///
    /// Reads current content and compares to `new_content`. If identical,
    /// nothing is staged.
    pub fn update_file(&mut self, path: PathBuf, new_content: String) -> Result<()> {
        if self.committed {
            return Err(PatchError::Other(anyhow::anyhow!(
                "Cannot modify transaction after commit"
            )));
        }

        log::debug!("Staging update for: {}", path.display());

        let current = fs::read_to_string(&path).map_err(|e| {
            log::error!("Failed to read {}: {}", path.display(), e);
            PatchError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to read {}: {}", path.display(), e),
            ))
        })?;

        if current == new_content {
            log::debug!("Content unchanged, skipping: {}", path.display());
            self.pending = None;
            self.unchanged = Some(path);
            return Ok(());
        }

        if self.dry_run {
            log::info!("Would update: {}", path.display());
        }

        self.unchanged = None;
        self.pending = Some(PendingWrite {
            path,
            content: new_content,
        });

        Ok(())
    }

    /// Checks the staged target still exists and is not read-only.
    fn validate(write: &PendingWrite) -> Result<()> {
        let metadata = fs::metadata(&write.path).map_err(|e| {
            PatchError::Io(std::io::Error::new(
                e.kind(),
                format!("File no longer exists: {}", write.path.display()),
            ))
        })?;

        if metadata.permissions().readonly() {
            return Err(PatchError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                format!("File is read-only: {}", write.path.display()),
            )));
        }

        Ok(())
    }

    /// Validates and writes the staged content.
    pub fn commit(&mut self) -> Result<()> {
        if self.committed {
            return Err(PatchError::Other(anyhow::anyhow!(
                "Transaction already committed"
            )));
        }

        if let Some(write) = &self.pending {
            Self::validate(write)?;

            if !self.dry_run {
                fs::write(&write.path, &write.content).map_err(|e| {
                    PatchError::Io(std::io::Error::new(
                        e.kind(),
                        format!("Failed to write {}: {}", write.path.display(), e),
                    ))
                })?;
                log::info!("Updated: {}", write.path.display());
            }
        }

        self.committed = true;
        Ok(())
    }

    /// Prints a short summary to stdout.
    ///
    /// Paths are shown relative to `base` with forward slashes.
    pub fn print_summary(&self, base: &Path) {
        let display_path = |path: &Path| -> String {
            let relative = pathdiff::diff_paths(path, base).unwrap_or_else(|| path.to_path_buf());
            relative.to_string_lossy().replace('\\', "/")
        };

        let Some(write) = &self.pending else {
            println!("\n{}", "No changes needed".yellow());
            if let Some(path) = &self.unchanged {
                println!("   • {}", display_path(path).dimmed());
            }
            return;
        };

        if self.dry_run {
            println!("\n{}", "DRY RUN - No changes will be made".yellow().bold());
            println!("   • {}", display_path(&write.path).dimmed());
            println!(
                "\n{} will be modified. Run without {} to apply.",
                display_path(&write.path).cyan().bold(),
                "--dry-run".cyan()
            );
        } else {
            println!("\n{}", "Changes applied:".green().bold());
            println!("   {} {}", "✓".green(), display_path(&write.path).dimmed());
        }
    }
}

impl Drop for Transaction {
    fn drop(&mut self) {
        if !self.committed && self.pending.is_some() && !self.dry_run {
            log::warn!("Transaction dropped without commit");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn manifest_with(content: &str) -> (TempDir, PathBuf) {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("manifest.json");
        fs::write(&file, content).unwrap();
        (temp, file)
    }

    fn make_read_only(path: &Path) {
        let mut perms = fs::metadata(path).unwrap().permissions();
        perms.set_readonly(true);
        fs::set_permissions(path, perms).unwrap();
    }

    #[test]
    fn test_commit_writes_content() {
        let (_temp, file) = manifest_with("old");

        let mut txn = Transaction::new(false);
        txn.update_file(file.clone(), "new".into()).unwrap();
        txn.commit().unwrap();

        assert_eq!(fs::read_to_string(&file).unwrap(), "new");
    }

    #[test]
    fn test_nothing_written_before_commit() {
        let (_temp, file) = manifest_with("old");

        {
            let mut txn = Transaction::new(false);
            txn.update_file(file.clone(), "new".into()).unwrap();
        }

        assert_eq!(fs::read_to_string(&file).unwrap(), "old");
    }

    #[test]
    fn test_dry_run_does_not_write() {
        let (_temp, file) = manifest_with("old");

        let mut txn = Transaction::new(true);
        txn.update_file(file.clone(), "new".into()).unwrap();
        txn.commit().unwrap();

        assert_eq!(fs::read_to_string(&file).unwrap(), "old");
    }

    #[test]
    fn test_unchanged_content_skipped() {
        let (_temp, file) = manifest_with("same");

        let mut txn = Transaction::new(false);
        txn.update_file(file.clone(), "same".into()).unwrap();

        assert!(txn.pending.is_none());
        assert_eq!(txn.unchanged.as_deref(), Some(file.as_path()));
        txn.commit().unwrap();
    }

    #[test]
    fn test_later_stage_replaces_earlier() {
        let (_temp, file) = manifest_with("old");

        let mut txn = Transaction::new(false);
        txn.update_file(file.clone(), "first".into()).unwrap();
        txn.update_file(file.clone(), "second".into()).unwrap();
        txn.commit().unwrap();

        assert_eq!(fs::read_to_string(&file).unwrap(), "second");
    }

    #[test]
    fn test_read_only_file_rejected() {
        let (_temp, file) = manifest_with("old");
        make_read_only(&file);

        let mut txn = Transaction::new(false);
        txn.update_file(file.clone(), "new".into()).unwrap();

        match txn.commit() {
            Err(PatchError::Io(e)) => assert_eq!(e.kind(), std::io::ErrorKind::PermissionDenied),
            other => panic!("expected PermissionDenied, got {:?}", other),
        }
        assert_eq!(fs::read_to_string(&file).unwrap(), "old");
    }

    #[test]
    fn test_dry_run_still_validates() {
        let (_temp, file) = manifest_with("old");
        make_read_only(&file);

        let mut txn = Transaction::new(true);
        txn.update_file(file, "new".into()).unwrap();

        assert!(matches!(txn.commit(), Err(PatchError::Io(_))));
    }

    #[test]
    fn test_missing_file_fails_to_stage() {
        let temp = TempDir::new().unwrap();
        let mut txn = Transaction::new(false);

        let result = txn.update_file(temp.path().join("missing.json"), "x".into());
        assert!(matches!(result, Err(PatchError::Io(_))));
    }

    #[test]
    fn test_cannot_stage_after_commit() {
        let (_temp, file) = manifest_with("old");

        let mut txn = Transaction::new(false);
        txn.commit().unwrap();

        assert!(txn.update_file(file, "new".into()).is_err());
        assert!(txn.commit().is_err());
    }
}
