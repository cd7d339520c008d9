use crate::core::{
    config::Settings,
    directory_count_label,
    error::{QuickspaceError, Result},
    launcher::launch_selection,
    print_success,
    state::SelectionSet,
};
use std::path::{Component, Path};

pub fn execute_open(names: Vec<String>) -> Result<()> {
    let settings = Settings::load_or_create()?;
    let root = settings.repository_root()?;

    let mut selection = SelectionSet::from_names(names);
    if selection.is_empty() {
        return Err(QuickspaceError::EmptySelection);
    }
    ensure_directories_exist(&root, &selection)?;

    let opened = launch_selection(&settings.editor, &root, &mut selection)?;
    print_success(&format!(
        "Opened {} in {}",
        directory_count_label(opened),
        settings.editor
    ));

    Ok(())
}

/// Every selected name must resolve to an existing directory under the
/// root before anything is handed to the editor.
///
/// A name has to be a single normal path component. Anything else
/// (`..`, an absolute path, a `web/src` style subpath) would escape the
/// root when joined.
pub(crate) fn ensure_directories_exist(root: &Path, selection: &SelectionSet) -> Result<()> {
    for name in selection.sorted_names() {
        if !is_plain_directory_name(&name) {
            return Err(QuickspaceError::invalid_name(name));
        }
        let path = root.join(&name);
        if !path.is_dir() {
            return Err(QuickspaceError::root_not_found(path));
        }
    }
    Ok(())
}

fn is_plain_directory_name(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(components.next(), Some(Component::Normal(_))) && components.next().is_none()
}
