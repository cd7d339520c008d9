//! Filesystem scanning for the configured repository folder.
//!
//! One scan lists the immediate subdirectories of the root. Files are
//! excluded, hidden directories (leading `.`) are excluded unless requested,
//! and an entry that cannot be stat-ed is skipped instead of failing the
//! whole scan. Ordering is left to the ranker.

use crate::core::config::config_file_path;
use crate::core::error::{QuickspaceError, Result};
use std::path::Path;

/// List the names of root's immediate subdirectories.
///
/// Fails when the root is blank (configuration), missing (not found), or
/// unlistable (read). Individual unreadable entries are dropped silently.
pub fn list_directories(root: &Path, show_hidden: bool) -> Result<Vec<String>> {
    if root.as_os_str().is_empty() {
        return Err(QuickspaceError::root_not_configured(config_file_path()?));
    }

    if !root.exists() {
        return Err(QuickspaceError::root_not_found(root));
    }

    let entries = std::fs::read_dir(root).map_err(|e| QuickspaceError::scan_failed(root, e))?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                log::debug!("Skipping unreadable entry under {}: {e}", root.display());
                continue;
            }
        };

        // metadata() follows symlinks, so a link to a directory counts and a
        // broken link is just another unreadable entry
        let metadata = match std::fs::metadata(entry.path()) {
            Ok(metadata) => metadata,
            Err(e) => {
                log::debug!("Skipping {}: {e}", entry.path().display());
                continue;
            }
        };
        if !metadata.is_dir() {
            continue;
        }

        let name = entry.file_name().to_string_lossy().to_string();
        if name.starts_with('.') && !show_hidden {
            continue;
        }

        names.push(name);
    }

    Ok(names)
}
