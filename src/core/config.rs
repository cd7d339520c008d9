use crate::core::dirs::get_config_directory;
use crate::core::error::{QuickspaceError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// User settings persisted as config.json in the config directory.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Settings {
    /// Folder whose immediate subdirectories are listed. May start with `~`.
    pub repository_directory: String,
    /// Include directories whose name starts with a dot.
    pub show_hidden_directories: bool,
    /// Editor binary invoked with the selected paths.
    pub editor: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            repository_directory: String::new(),
            show_hidden_directories: false,
            editor: "cursor".to_string(),
        }
    }
}

impl Settings {
    pub fn load_or_create() -> Result<Self> {
        let config_dir = get_config_directory()?;
        Self::load_or_create_in(&config_dir)
    }

    /// Same as [`Settings::load_or_create`] against an explicit directory.
    /// Tests use this to avoid mutating process-global environment state.
    pub fn load_or_create_in(config_dir: &Path) -> Result<Self> {
        let config_file = config_dir.join("config.json");

        if config_file.exists() {
            let content = std::fs::read_to_string(&config_file)?;
            Ok(serde_json::from_str(&content)?)
        } else {
            let settings = Self::default();
            settings.save_in(config_dir)?;
            Ok(settings)
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_dir = get_config_directory()?;
        self.save_in(&config_dir)
    }

    pub fn save_in(&self, config_dir: &Path) -> Result<()> {
        std::fs::create_dir_all(config_dir)?;

        let config_file = config_dir.join("config.json");
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_file, content)?;

        Ok(())
    }

    /// The configured root as an absolute path, with a leading `~` expanded.
    /// An unset or blank setting is a user-correctable configuration error.
    pub fn repository_root(&self) -> Result<PathBuf> {
        let configured = self.repository_directory.trim();
        if configured.is_empty() {
            return Err(QuickspaceError::root_not_configured(config_file_path()?));
        }
        Ok(expand_home(configured))
    }
}

/// Full path of config.json, for error reporting and the config command.
pub fn config_file_path() -> Result<PathBuf> {
    Ok(get_config_directory()?.join("config.json"))
}

fn expand_home(path: &str) -> PathBuf {
    if path == "~" {
        return dirs::home_dir().unwrap_or_default();
    }
    if let Some(rest) = path.strip_prefix("~/") {
        return dirs::home_dir().unwrap_or_default().join(rest);
    }
    PathBuf::from(path)
}
