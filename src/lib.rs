//! Quickspace - a CLI for jumping into project directories with your editor.
//!
//! This library provides the core functionality for quickspace: scanning a
//! workspace root for project directories, probing each one for its git
//! branch, ranking the results, persisting favorite directory combinations,
//! and launching an external editor on the chosen paths.
//!
//! # Public API
//! The main public interface is re-exported from the [`core`] module, which
//! provides:
//! - Workspace scanning and branch probing
//! - Listing order (repositories first, then alphabetical)
//! - Favorites persistence on a key-value storage seam
//! - Editor launching with one argument per path
//! - Error handling and result types

pub mod commands;
pub mod core;

// Re-export the core public API for external users
pub use core::{
    current_branch,
    // Branch probing
    is_git_repository,
    // Editor launching
    launch,
    launch_favorite,
    launch_selection,
    // Workspace scanning
    list_directories,
    probe_directories,
    // Listing order
    rank_entries,

    DirectoryEntry,
    Favorite,
    // Favorites persistence
    FavoritesStore,
    FileStore,
    KeyValueStore,
    // State management
    SelectionSet,
    // Configuration
    Settings,

    // Error handling
    QuickspaceError,
    Result,
};
