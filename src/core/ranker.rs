//! Listing order for workspace directories
//!
//! Directories with a checked-out branch are shown before plain
//! directories, and each group is ordered alphabetically without
//! regard to case. The sort is stable, so entries that compare equal
//! keep their scan order.

use crate::core::state::DirectoryEntry;

/// Sorts probed entries into display order: branch-carrying
/// repositories first, then case-insensitive alphabetical within each
/// group.
pub fn rank_entries(mut entries: Vec<DirectoryEntry>) -> Vec<DirectoryEntry> {
    entries.sort_by_key(|entry| (!entry.has_branch(), entry.name.to_lowercase()));
    entries
}
