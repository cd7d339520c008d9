//! Common assertion helpers for test output validation
//!
//! Provides predicates for validating quickspace command output and
//! error messages.

#![allow(dead_code)]

use predicates::prelude::*;

/// Creates a predicate that checks for the unconfigured-root error
pub fn root_not_configured() -> impl Predicate<str> {
    predicates::str::contains("Repository directory is not configured")
}

/// Creates a predicate that checks for the missing-directory error
pub fn directory_not_found() -> impl Predicate<str> {
    predicates::str::contains("Directory does not exist")
}

/// Creates a predicate that checks for the unknown-favorite error
pub fn favorite_not_found() -> impl Predicate<str> {
    predicates::str::contains("Favorite not found")
}

/// Creates a predicate that checks for the empty-selection error
pub fn empty_selection() -> impl Predicate<str> {
    predicates::str::contains("Please select at least one directory")
}

/// Creates a predicate that checks for a section header like
/// `Directories:` or `Favorites:`
pub fn has_section(header: &str) -> impl Predicate<str> {
    predicates::str::contains(format!("{}:", header))
}

/// Creates a predicate that checks for a numbered listing entry
pub fn has_numbered_entry(index: usize) -> impl Predicate<str> {
    predicates::str::contains(format!("[{}]", index))
}

/// Creates a predicate that checks for a branch tag next to a
/// directory name
pub fn has_branch_tag(branch: &str) -> impl Predicate<str> {
    predicates::str::contains(format!("[{}]", branch))
}

/// Creates a predicate that checks for the favorite-saved confirmation
pub fn saved_favorite(name: &str) -> impl Predicate<str> {
    predicates::str::contains(format!("Saved favorite '{}'", name))
}
