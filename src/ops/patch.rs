//! Dependency entry edits on the raw manifest text.
//!
//! The manifest is never parsed: entries are located by literal markers and
//! spliced in place, so key order, whitespace and anything else in the file
//! stay byte-for-byte as they were.
//!
//! ## Replace
//!
//! ```text
//! "com.unity.shadergraph": "12.0.0"
//!                           ^^^^^^ replaced with file:<repo>/com.unity.shadergraph
//! ```
//!
//! ## Insert
//!
//! ```text
//! "dependencies": {
//!     "com.unity.shadergraph": "file:<repo>/com.unity.shadergraph",   <- new line
//!   "com.unity.ugui": "1.0.0"
//! ```

use crate::error::{PatchError, Result};
use crate::packages::PackageTarget;
use crate::text::find;

/// Literal that opens the dependency object.
pub const DEPENDENCIES_OPENER: &str = "\"dependencies\": {";

const ENTRY_INDENT: &str = "    ";

/// What [`patch_package`] did to the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchAction {
    /// An existing entry had its value rewritten.
    Replaced,
    /// A new entry was added to the dependency object.
    Inserted,
}

/// Result of patching one package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchOutcome {
    pub package: String,
    pub action: PatchAction,
}

impl PatchOutcome {
    /// Confirmation line shown to the user.
    pub fn message(&self) -> String {
        match self.action {
            PatchAction::Replaced => format!("Package {} patched into manifest!", self.package),
            PatchAction::Inserted => format!("Package {} added into manifest!", self.package),
        }
    }
}

/// Returns true if the package name occurs anywhere in the manifest.
pub fn contains_package(buffer: &str, package: &str) -> bool {
    find(buffer, package, 0, false).is_some()
}

/// Points `target` at its local folder, rewriting the existing entry or
/// adding a new one.
pub fn patch_package(buffer: &mut String, target: &PackageTarget<'_>) -> Result<PatchAction> {
    if contains_package(buffer, target.name) {
        replace_package(buffer, target)?;
        Ok(PatchAction::Replaced)
    } else {
        insert_package(buffer, target)?;
        Ok(PatchAction::Inserted)
    }
}

/// Replaces the value of the first entry for `target` with its local path.
///
/// The value is the text between the first two `"` after the first `:`
/// following the package name. Nothing outside the quotes changes.
///
/// # Errors
///
/// `ManifestMalformed` if the name, the colon or either quote is missing.
pub fn replace_package(buffer: &mut String, target: &PackageTarget<'_>) -> Result<()> {
    let name_at = find(buffer, target.name, 0, false)
        .ok_or_else(|| malformed(format!("package \"{}\" not found", target.name)))?;

    let colon_at = find(buffer, ":", name_at, false)
        .ok_or_else(|| malformed(format!("missing ':' after \"{}\"", target.name)))?;

    let value_start = find(buffer, "\"", colon_at, false)
        .ok_or_else(|| malformed(format!("missing opening quote for \"{}\"", target.name)))?
        + 1;

    let value_end = find(buffer, "\"", value_start, false)
        .ok_or_else(|| malformed(format!("missing closing quote for \"{}\"", target.name)))?;

    log::debug!(
        "Replacing value of {} at {}..{}: {:?}",
        target.name,
        value_start,
        value_end,
        &buffer[value_start..value_end]
    );

    buffer.replace_range(value_start..value_end, &target.local_path_value());
    Ok(())
}

/// Adds an entry for `target` as the first line of the dependency object.
///
/// The new line is `    "<name>": "file:<repo>/<name>",`, placed right after
/// the line holding `"dependencies": {`.
///
/// # Errors
///
/// `ManifestMalformed` if the opener or the newline after it is missing.
pub fn insert_package(buffer: &mut String, target: &PackageTarget<'_>) -> Result<()> {
    let opener_at = find(buffer, DEPENDENCIES_OPENER, 0, false)
        .ok_or_else(|| malformed(format!("missing {}", DEPENDENCIES_OPENER)))?;

    let newline_at = find(buffer, "\n", opener_at, false)
        .ok_or_else(|| malformed(format!("no line break after {}", DEPENDENCIES_OPENER)))?;

    let entry = format!(
        "\n{}\"{}\": \"{}\",",
        ENTRY_INDENT,
        target.name,
        target.local_path_value()
    );

    log::debug!("Inserting {} at {}", target.name, newline_at);

    buffer.insert_str(newline_at, &entry);
    Ok(())
}

/// Patches every target in order against the same buffer.
///
/// Each target re-scans the buffer from the start, so earlier edits never
/// leave stale offsets behind. `report` sees each outcome as soon as it
/// happens. Stops at the first failure; the buffer may then hold a partial
/// result and must not be persisted.
pub fn patch_manifest(
    buffer: &mut String,
    targets: &[PackageTarget<'_>],
    mut report: impl FnMut(&PatchOutcome),
) -> Result<Vec<PatchOutcome>> {
    let mut outcomes = Vec::with_capacity(targets.len());

    for target in targets {
        let action = patch_package(buffer, target)?;
        let outcome = PatchOutcome {
            package: target.name.to_string(),
            action,
        };
        report(&outcome);
        outcomes.push(outcome);
    }

    Ok(outcomes)
}

fn malformed(detail: String) -> PatchError {
    PatchError::ManifestMalformed(detail)
}
