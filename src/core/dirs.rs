use crate::core::error::QuickspaceError;
use std::path::PathBuf;

/// Directory holding config.json. `QUICKSPACE_CONFIG_DIR` overrides the
/// platform default so tests and scripts can isolate their state.
pub fn get_config_directory() -> Result<PathBuf, QuickspaceError> {
    if let Ok(dir) = std::env::var("QUICKSPACE_CONFIG_DIR") {
        return Ok(PathBuf::from(dir));
    }

    let base = match std::env::consts::OS {
        "linux" | "freebsd" | "netbsd" | "openbsd" => std::env::var("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| dirs::home_dir().unwrap_or_default().join(".config")),
        "macos" => dirs::home_dir()
            .unwrap_or_default()
            .join("Library/Application Support"),
        "windows" => dirs::config_dir().unwrap_or_default(),
        _ => dirs::config_dir().unwrap_or_default(),
    };

    Ok(base.join("quickspace"))
}

/// Directory holding persisted user data (the favorites file). Separate from
/// the config directory because favorites are user data, not settings.
pub fn get_data_directory() -> Result<PathBuf, QuickspaceError> {
    if let Ok(dir) = std::env::var("QUICKSPACE_DATA_DIR") {
        return Ok(PathBuf::from(dir));
    }

    let base = match std::env::consts::OS {
        "linux" | "freebsd" | "netbsd" | "openbsd" => std::env::var("XDG_DATA_HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| dirs::home_dir().unwrap_or_default().join(".local/share")),
        "macos" => dirs::home_dir()
            .unwrap_or_default()
            .join("Library/Application Support"),
        "windows" => dirs::data_dir().unwrap_or_default(),
        _ => dirs::data_dir().unwrap_or_default(),
    };

    Ok(base.join("quickspace"))
}
