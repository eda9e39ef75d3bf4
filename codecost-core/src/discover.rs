use std::path::{Path, PathBuf};

use tracing::warn;
use walkdir::WalkDir;

use crate::error::Result;
use crate::script::ScriptKind;

/// Recursively collect candidate scripts under `root`, filtered to the
/// recognized extensions, in sorted order so reports are deterministic.
///
/// Unreadable subtrees are logged and skipped; a missing root is an
/// error.
pub fn discover_scripts(root: &Path) -> Result<Vec<PathBuf>> {
    // Surface a missing/unreadable root eagerly instead of returning an
    // empty report.
    std::fs::metadata(root)?;

    let mut found = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!(%err, "skipping unreadable directory entry");
                continue;
            }
        };
        if entry.file_type().is_file() && ScriptKind::from_path(entry.path()).is_some() {
            found.push(entry.into_path());
        }
    }

    found.sort();
    Ok(found)
}
