//! File System Utilities
//!
//! Configuration directory management and file operations.

use crate::error::{Error, Result};
use directories::ProjectDirs;
use home::home_dir;
use std::fs;
use std::path::{Path, PathBuf};

/// Get or create the application's configuration directory
///
/// Platform-specific locations:
/// - **Linux**: `~/.config/tch-gui/` or `$XDG_CONFIG_HOME/tch-gui/`
/// - **macOS**: `~/Library/Application Support/com.cyenx.tch-gui/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\cyenx\tch-gui\config\`
pub fn get_or_create_config_dir() -> Result<PathBuf> {
    let Some(project_dirs) = ProjectDirs::from("com", "cyenx", "tch-gui") else {
        return Err(Error::Invalid {
            message: "Could not determine project directories".to_string(),
        });
    };

    let config_dir = project_dirs.config_dir();

    if !config_dir.exists() {
        fs::create_dir_all(config_dir)?;
    }

    // Handle migration from old dotfile location if needed
    if let Some(home) = home_dir() {
        let old_config_path = home.join(".tch-gui");
        if old_config_path.exists() {
            let _ = copy_dir_files(&old_config_path, config_dir);
            let _ = fs::remove_dir_all(&old_config_path);
        }
    }

    Ok(config_dir.to_path_buf())
}

/// Copy files (not directories) from source to destination
fn copy_dir_files(src: &PathBuf, dst: &Path) -> Result<()> {
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let file_type = entry.file_type()?;

        // Skip subdirectories
        if file_type.is_dir() {
            continue;
        }

        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());
        fs::copy(&src_path, &dst_path)?;
    }
    Ok(())
}

/// Get the data directory for storing larger files (e.g. log files)
///
/// Platform-specific locations:
/// - **Linux**: `~/.local/share/tch-gui/`
/// - **macOS**: `~/Library/Application Support/com.cyenx.tch-gui/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\cyenx\tch-gui\data\`
pub fn get_or_create_data_dir() -> Result<PathBuf> {
    let Some(project_dirs) = ProjectDirs::from("com", "cyenx", "tch-gui") else {
        return Err(Error::Invalid {
            message: "Could not determine project directories".to_string(),
        });
    };

    let data_dir = project_dirs.data_dir();

    if !data_dir.exists() {
        fs::create_dir_all(data_dir)?;
    }

    Ok(data_dir.to_path_buf())
}

/// Check if running in development mode
pub fn is_development() -> bool {
    cfg!(debug_assertions)
}
