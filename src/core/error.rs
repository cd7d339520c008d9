//! Domain-specific error types and error handling utilities.
//!
//! This module defines [`QuickspaceError`] which covers every failure mode of
//! quickspace operations. It uses `thiserror` for ergonomic error definitions
//! and includes specialized error constructors for common failure scenarios.
//!
//! # Public API
//! - [`QuickspaceError`]: Main error enum covering all failure modes
//! - [`Result<T>`]: Type alias for `std::result::Result<T, QuickspaceError>`
//!
//! # Error Categories
//! - **Configuration**: Repository root unset, the fix lives in the settings file
//! - **Scanning**: Root missing or unreadable (per-entry failures are skipped, not raised)
//! - **Favorites**: Unknown id, empty selection, invalid or empty name
//! - **Launching**: Editor failed to spawn or exited non-zero

use std::path::PathBuf;
use thiserror::Error;

/// Domain-specific error types for quickspace
#[derive(Error, Debug)]
pub enum QuickspaceError {
    // Configuration errors
    #[error("Repository directory is not configured")]
    RootNotConfigured { config_path: PathBuf },

    // Scan errors
    #[error("Directory does not exist: {path}")]
    RootNotFound { path: PathBuf },

    #[error("Failed to read directory '{path}': {source}")]
    ScanFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    // Favorites errors
    #[error("Favorite not found: {id}")]
    FavoriteNotFound { id: String },

    #[error("Please select at least one directory")]
    EmptySelection,

    #[error("Not a directory name: {name}")]
    InvalidName { name: String },

    #[error("Favorite name cannot be empty")]
    EmptyName,

    // Launch errors
    #[error("Failed to open in {editor}: {message}")]
    LaunchFailed { editor: String, message: String },

    // IO and serialization errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results using QuickspaceError
pub type Result<T> = std::result::Result<T, QuickspaceError>;

impl QuickspaceError {
    /// Create a root-not-configured error pointing at the config file to fix
    pub fn root_not_configured(config_path: impl Into<PathBuf>) -> Self {
        Self::RootNotConfigured {
            config_path: config_path.into(),
        }
    }

    /// Create a root-not-found error
    pub fn root_not_found(path: impl Into<PathBuf>) -> Self {
        Self::RootNotFound { path: path.into() }
    }

    /// Create a scan-failed error
    pub fn scan_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ScanFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a favorite-not-found error
    pub fn favorite_not_found(id: impl Into<String>) -> Self {
        Self::FavoriteNotFound { id: id.into() }
    }

    /// Create an invalid-name error
    pub fn invalid_name(name: impl Into<String>) -> Self {
        Self::InvalidName { name: name.into() }
    }

    /// Create a launch-failed error with the underlying message
    pub fn launch_failed(editor: impl Into<String>, message: impl Into<String>) -> Self {
        Self::LaunchFailed {
            editor: editor.into(),
            message: message.into(),
        }
    }
}
