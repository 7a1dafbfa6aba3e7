// src/utils/io.rs
use std::path::PathBuf;

/// Get the application config directory, creating it on first use.
pub fn get_app_config_dir() -> Option<PathBuf> {
    let proj_dirs = match directories::ProjectDirs::from("com", "passforge", "passforge") {
        Some(dirs) => dirs,
        None => {
            log::error!("Could not determine config directory");
            return None;
        }
    };

    let config_dir = proj_dirs.config_dir();
    if !config_dir.exists() {
        if let Err(e) = std::fs::create_dir_all(config_dir) {
            log::error!("Failed to create config directory: {}", e);
            return None;
        }
    }

    Some(config_dir.to_path_buf())
}
