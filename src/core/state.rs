//! Core data model shared between the scan pipeline and the favorites store.
//!
//! # Public API
//! - [`DirectoryEntry`]: One scanned subdirectory with its optional git branch
//! - [`Favorite`]: A named, persisted group of directory names
//! - [`SelectionSet`]: The directories chosen within one session
//!
//! # Lifecycle
//! - **DirectoryEntry**: built fresh on every scan, never mutated, replaced
//!   wholesale by the next scan
//! - **Favorite**: created from a selection, renamed in place, removed by id;
//!   the whole collection is persisted after every mutation
//! - **SelectionSet**: starts empty, toggled per user action, cleared after a
//!   successful launch, never persisted

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectoryEntry {
    pub name: String,
    /// Present iff the directory is a git repository and a branch resolved.
    pub git_branch: Option<String>,
}

impl DirectoryEntry {
    pub fn new(name: impl Into<String>, git_branch: Option<String>) -> Self {
        Self {
            name: name.into(),
            git_branch,
        }
    }

    pub fn has_branch(&self) -> bool {
        self.git_branch.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Favorite {
    /// Unique creation-time token. Never reused, never recomputed.
    pub id: String,
    /// User-visible label, renamable to any non-empty trimmed string.
    pub name: String,
    /// Directory names captured at creation time, in launch order.
    pub directories: Vec<String>,
}

/// Directory names chosen in the current session. Ordered for deterministic
/// launch and favorite-name output; membership drives toggle semantics.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionSet {
    names: BTreeSet<String>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a selection from explicit names (duplicates collapse).
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Flip membership of one directory name.
    pub fn toggle(&mut self, name: &str) {
        if !self.names.remove(name) {
            self.names.insert(name.to_string());
        }
    }

    /// Add a directory name without toggle semantics.
    pub fn select(&mut self, name: &str) {
        self.names.insert(name.to_string());
    }

    pub fn clear(&mut self) {
        self.names.clear();
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Names in ascending order (BTreeSet iteration order).
    pub fn sorted_names(&self) -> Vec<String> {
        self.names.iter().cloned().collect()
    }
}
