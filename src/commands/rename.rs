use crate::core::{error::Result, favorites::FavoritesStore, print_success};

use super::favorites::favorite_at;

pub fn execute_rename(index: usize, name_parts: Vec<String>) -> Result<()> {
    let store = FavoritesStore::open_default()?;
    let favorites = store.load()?;

    let id = favorite_at(&favorites, index)?.id.clone();
    let renamed = store.rename(&id, &name_parts.join(" "))?;

    print_success(&format!("Renamed favorite to '{}'", renamed.name));
    Ok(())
}
