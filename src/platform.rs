// Platform-specific paths for the bookmark client.
//
// Linux:   $XDG_CONFIG_HOME/bookmark-manager or ~/.config/bookmark-manager
// macOS:   ~/Library/Application Support/BookmarkManager
// Windows: %APPDATA%/BookmarkManager

use std::env;
use std::path::PathBuf;

fn home_dir() -> PathBuf {
    PathBuf::from(env::var("HOME").unwrap_or_else(|_| String::from("/tmp")))
}

/// Returns the platform-specific configuration directory.
pub fn get_config_dir() -> PathBuf {
    #[cfg(target_os = "macos")]
    {
        home_dir()
            .join("Library")
            .join("Application Support")
            .join("BookmarkManager")
    }
    #[cfg(target_os = "windows")]
    {
        match env::var("APPDATA") {
            Ok(appdata) => PathBuf::from(appdata).join("BookmarkManager"),
            Err(_) => home_dir().join("AppData").join("Roaming").join("BookmarkManager"),
        }
    }
    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    {
        match env::var("XDG_CONFIG_HOME") {
            Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg).join("bookmark-manager"),
            _ => home_dir().join(".config").join("bookmark-manager"),
        }
    }
}
