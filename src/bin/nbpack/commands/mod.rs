//! Command implementations.

pub mod classify;
pub mod clusters;
pub mod libraries;
pub mod modules;
pub mod tree_input;
pub mod version;

use std::path::Path;

use nbpack::util::config::{project_config_path, Config};

/// Load configuration from the given file, or `nbpack.toml` in the
/// current directory.
pub fn load_config(path: Option<&Path>) -> Config {
    match path {
        Some(path) => Config::load_or_default(path),
        None => {
            let cwd = std::env::current_dir().unwrap_or_else(|_| Path::new(".").to_path_buf());
            Config::load_or_default(&project_config_path(&cwd))
        }
    }
}
