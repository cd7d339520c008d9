use crate::core::{
    config::Settings,
    directory_count_label,
    error::Result,
    favorites::FavoritesStore,
    format_branch_tag,
    git::probe_directories,
    print_info, print_section_header,
    ranker::rank_entries,
    scanner::list_directories,
};
use colored::*;

pub fn execute_list() -> Result<()> {
    let settings = Settings::load_or_create()?;
    let root = settings.repository_root()?;

    let names = list_directories(&root, settings.show_hidden_directories)?;
    let entries = rank_entries(probe_directories(&root, &names));

    let favorites = FavoritesStore::open_default()?.load()?;
    if !favorites.is_empty() {
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
    }

    if entries.is_empty() {
        print_info(&format!("No directories found in {}", root.display()));
        return Ok(());
    }

    print_section_header("Directories");
    for entry in &entries {
        println!(
            "{}{}",
            entry.name.white(),
            format_branch_tag(entry.git_branch.as_deref())
        );
    }

    let repositories = entries.iter().filter(|e| e.has_branch()).count();
    println!(
        "\n{}",
        format!(
            "{}, {} on a branch",
            directory_count_label(entries.len()),
            repositories
        )
        .bright_black()
    );
    println!();

    Ok(())
}
