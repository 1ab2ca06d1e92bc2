//! CLI command implementations.

pub mod files;
pub mod resolve;

use appenv::EnvLoader;
use std::path::Path;

/// Build the loader shared by every command.
pub fn build_loader(dir: &Path, app_env: Option<&str>) -> EnvLoader {
    let loader = EnvLoader::new(dir);
    match app_env {
        Some(name) => loader.with_app_env(name),
        None => loader,
    }
}
