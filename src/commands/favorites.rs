use crate::core::{
    config::Settings,
    error::{QuickspaceError, Result},
    favorites::FavoritesStore,
    launcher::launch_favorite,
    print_info, print_section_header, print_success,
    state::Favorite,
};
use colored::*;

pub fn execute_favorites(index: Option<usize>) -> Result<()> {
    let store = FavoritesStore::open_default()?;
    let favorites = store.load()?;

    if let Some(index) = index {
        open_favorite_by_index(&favorites, index)
    } else {
        list_favorites(&favorites)
    }
}

fn list_favorites(favorites: &[Favorite]) -> Result<()> {
    if favorites.is_empty() {
        print_info("No favorites saved yet. Use 'quickspace favorite <directories>' to create one.");
        return Ok(());
    }

    print_section_header("Favorites");
    for (position, favorite) in favorites.iter().enumerate() {
        println!(
            "{}{}{} {} {}",
            "[".bright_black(),
            (position + 1).to_string().white(),
            "]".bright_black(),
            favorite.name.blue(),
            format!("({})", favorite.directories.join(", ")).bright_black()
        );
    }
    println!();

    Ok(())
}

fn open_favorite_by_index(favorites: &[Favorite], index: usize) -> Result<()> {
    let settings = Settings::load_or_create()?;
    let root = settings.repository_root()?;

    let favorite = favorite_at(favorites, index)?;
    launch_favorite(&settings.editor, &root, favorite)?;

    print_success(&format!("Opened '{}' in {}", favorite.name, settings.editor));
    Ok(())
}

/// Resolves a 1-based listing position into a favorite.
pub(crate) fn favorite_at(favorites: &[Favorite], index: usize) -> Result<&Favorite> {
    index
        .checked_sub(1)
        .and_then(|position| favorites.get(position))
        .ok_or_else(|| QuickspaceError::favorite_not_found(index.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn favorite(id: &str, name: &str) -> Favorite {
        Favorite {
            id: id.to_string(),
            name: name.to_string(),
            directories: vec!["a".to_string()],
        }
    }

    #[test]
    fn test_favorite_at_is_one_based() {
        let favorites = vec![favorite("10", "first"), favorite("20", "second")];

        assert_eq!(favorite_at(&favorites, 1).unwrap().name, "first");
        assert_eq!(favorite_at(&favorites, 2).unwrap().name, "second");
    }

    #[test]
    fn test_favorite_at_rejects_zero_and_out_of_range() {
        let favorites = vec![favorite("10", "only")];

        assert!(matches!(
            favorite_at(&favorites, 0),
            Err(QuickspaceError::FavoriteNotFound { .. })
        ));
        assert!(matches!(
            favorite_at(&favorites, 2),
            Err(QuickspaceError::FavoriteNotFound { .. })
        ));
    }
}
