// Linkstack platform paths
//
// Linux:   $XDG_CONFIG_HOME/linkstack, $XDG_DATA_HOME/linkstack (XDG defaults otherwise)
// macOS:   ~/Library/Application Support/Linkstack for both
// Windows: %APPDATA%\Linkstack for both

use std::env;
use std::path::PathBuf;

fn home_dir() -> PathBuf {
    env::var("HOME")
        .or_else(|_| env::var("USERPROFILE"))
        .map(PathBuf::from)
        .unwrap_or_else(|_| env::temp_dir())
}

/// Returns the directory holding `settings.json`.
pub fn get_config_dir() -> PathBuf {
    if cfg!(target_os = "macos") {
        home_dir().join("Library").join("Application Support").join("Linkstack")
    } else if cfg!(target_os = "windows") {
        env::var("APPDATA")
            .map(PathBuf::from)
            .unwrap_or_else(|_| home_dir().join("AppData").join("Roaming"))
            .join("Linkstack")
    } else {
        env::var("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| home_dir().join(".config"))
            .join("linkstack")
    }
}

/// Returns the directory holding the bookmark database.
pub fn get_data_dir() -> PathBuf {
    if cfg!(target_os = "linux") {
        env::var("XDG_DATA_HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| home_dir().join(".local").join("share"))
            .join("linkstack")
    } else {
        get_config_dir()
    }
}
