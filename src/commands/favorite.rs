use crate::core::{
    config::Settings,
    error::{QuickspaceError, Result},
    favorites::FavoritesStore,
    print_success,
    state::SelectionSet,
};

use super::open::ensure_directories_exist;

pub fn execute_favorite(names: Vec<String>) -> Result<()> {
    let settings = Settings::load_or_create()?;
    let root = settings.repository_root()?;

    let selection = SelectionSet::from_names(names);
    if selection.is_empty() {
        return Err(QuickspaceError::EmptySelection);
    }
    ensure_directories_exist(&root, &selection)?;

    let store = FavoritesStore::open_default()?;
    let favorite = store.create(&selection)?;

    print_success(&format!("Saved favorite '{}'", favorite.name));
    Ok(())
}
