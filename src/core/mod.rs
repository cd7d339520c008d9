//! Core functionality for the quickspace tool.
//!
//! This module provides the building blocks for workspace scanning,
//! branch probing, favorites persistence, and editor launching.

pub mod config;
pub mod dirs;
pub mod error;
pub mod favorites;
pub mod git;
pub mod launcher;
pub mod output;
pub mod ranker;
pub mod scanner;
pub mod state;
pub mod storage;

// === Error handling ===
// Core error type and result alias used throughout the application
pub use error::{QuickspaceError, Result};

// === Configuration ===
// Persisted user settings: workspace root, hidden filter, editor
pub use config::Settings;

// === State types ===
// Probed directory entries, saved favorites, and the selection set
pub use state::{DirectoryEntry, Favorite, SelectionSet};

// === Workspace scanning ===
// Child-directory listing under the configured root
pub use scanner::list_directories;

// === Branch probing ===
// Concurrent per-directory git branch detection
pub use git::{current_branch, is_git_repository, probe_directories};

// === Listing order ===
// Repositories first, then case-insensitive alphabetical
pub use ranker::rank_entries;

// === Favorites persistence ===
// Key-value storage seam and the favorites collection on top of it
pub use favorites::FavoritesStore;
pub use storage::{FileStore, KeyValueStore};

// === Editor launching ===
// Opening directory sets in the configured editor
pub use launcher::{launch, launch_favorite, launch_selection};

// === Output formatting ===
// Unified output formatting for consistent CLI presentation
pub use output::{
    directory_count_label, format_branch_tag, print_error, print_error_with_structured_usage,
    print_info, print_section_header, print_success,
};
