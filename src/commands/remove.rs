use crate::core::{error::Result, favorites::FavoritesStore, print_success};

use super::favorites::favorite_at;

pub fn execute_remove(index: usize) -> Result<()> {
    let store = FavoritesStore::open_default()?;
    let favorites = store.load()?;

    let id = favorite_at(&favorites, index)?.id.clone();
    let removed = store.remove(&id)?;

    print_success(&format!("Removed favorite '{}'", removed.name));
    Ok(())
}
