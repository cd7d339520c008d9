//! Persisted favorite directory combinations
//!
//! A favorite is a named set of workspace directories that can be
//! reopened together later. The collection lives under a single
//! storage key as a JSON array and is rewritten in full on every
//! mutation. An unreadable payload is discarded rather than reported,
//! so a damaged state file never locks the user out.

use std::sync::{Mutex, MutexGuard};

use chrono::Utc;

use crate::core::error::{QuickspaceError, Result};
use crate::core::state::{Favorite, SelectionSet};
use crate::core::storage::{FileStore, KeyValueStore};

/// Storage key holding the favorites collection.
const FAVORITES_KEY: &str = "favorites";

/// Favorites collection on top of a [`KeyValueStore`].
///
/// Every operation reloads, mutates, and rewrites the whole
/// collection under an internal lock, so concurrent callers within a
/// process never interleave a read-modify-write.
pub struct FavoritesStore<S: KeyValueStore> {
    store: S,
    guard: Mutex<()>,
}

impl FavoritesStore<FileStore> {
    /// Opens the favorites store backed by the application data
    /// directory.
    pub fn open_default() -> Result<Self> {
        Ok(FavoritesStore::new(FileStore::open_default()?))
    }
}

impl<S: KeyValueStore> FavoritesStore<S> {
    pub fn new(store: S) -> Self {
        FavoritesStore {
            store,
            guard: Mutex::new(()),
        }
    }

    /// Returns all favorites in stored order. A missing or unreadable
    /// payload yields an empty collection.
    pub fn load(&self) -> Result<Vec<Favorite>> {
        let _guard = self.lock();
        self.load_unlocked()
    }

    /// Saves the current selection as a new favorite and returns it.
    ///
    /// The favorite is named after its directories, sorted and joined
    /// with ", ". New favorites always append to the end of the
    /// collection.
    pub fn create(&self, selection: &SelectionSet) -> Result<Favorite> {
        if selection.is_empty() {
            return Err(QuickspaceError::EmptySelection);
        }

        let _guard = self.lock();
        let mut favorites = self.load_unlocked()?;

        let directories = selection.sorted_names();
        let favorite = Favorite {
            id: next_id(&favorites),
            name: directories.join(", "),
            directories,
        };

        favorites.push(favorite.clone());
        self.persist_unlocked(&favorites)?;

        log::debug!("Saved favorite '{}'", favorite.name);
        Ok(favorite)
    }

    /// Renames the favorite with the given id, keeping its position.
    /// The new name is trimmed; an all-whitespace name is rejected.
    pub fn rename(&self, id: &str, new_name: &str) -> Result<Favorite> {
        let name = new_name.trim();
        if name.is_empty() {
            return Err(QuickspaceError::EmptyName);
        }

        let _guard = self.lock();
        let mut favorites = self.load_unlocked()?;

        let favorite = favorites
            .iter_mut()
            .find(|f| f.id == id)
            .ok_or_else(|| QuickspaceError::favorite_not_found(id))?;
        favorite.name = name.to_string();
        let renamed = favorite.clone();

        self.persist_unlocked(&favorites)?;
        Ok(renamed)
    }

    /// Removes the favorite with the given id and returns it.
    pub fn remove(&self, id: &str) -> Result<Favorite> {
        let _guard = self.lock();
        let mut favorites = self.load_unlocked()?;

        let position = favorites
            .iter()
            .position(|f| f.id == id)
            .ok_or_else(|| QuickspaceError::favorite_not_found(id))?;
        let removed = favorites.remove(position);

        self.persist_unlocked(&favorites)?;

        log::debug!("Removed favorite '{}'", removed.name);
        Ok(removed)
    }

    fn load_unlocked(&self) -> Result<Vec<Favorite>> {
        let payload = match self.store.read(FAVORITES_KEY)? {
            Some(payload) => payload,
            None => return Ok(Vec::new()),
        };

        match serde_json::from_str(&payload) {
            Ok(favorites) => Ok(favorites),
            Err(e) => {
                log::warn!("Discarding unreadable favorites state: {}", e);
                Ok(Vec::new())
            }
        }
    }

    fn persist_unlocked(&self, favorites: &[Favorite]) -> Result<()> {
        let payload = serde_json::to_string_pretty(favorites)?;
        self.store.write(FAVORITES_KEY, &payload)
    }

    fn lock(&self) -> MutexGuard<'_, ()> {
        // every operation reloads state from disk, so a poisoned
        // guard holds nothing worth discarding
        self.guard.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/// Picks a millisecond-timestamp id, bumping past any id already in
/// use so two favorites created in the same instant stay distinct.
fn next_id(existing: &[Favorite]) -> String {
    let mut candidate = Utc::now().timestamp_millis();
    while existing.iter().any(|f| f.id == candidate.to_string()) {
        candidate += 1;
    }
    candidate.to_string()
}
