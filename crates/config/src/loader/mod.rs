//! Layered loader for `.env` files and process environment variables.
//!
//! Responsibilities:
//! - Provide the `EnvLoader` builder and the four convenience entry points.
//! - Abstract file access behind `FileTree` so loads can run against memory.
//! - Resolve the active environment from `APP_ENV`.
//!
//! Does NOT handle:
//! - Writing configuration back to disk.
//! - Watching files for changes.
//!
//! Invariants / Assumptions:
//! - Process environment values always win over both files.
//! - `.env` values win over `<app_env>.env` values.
//! - The loader never keeps a reference to the record after returning.

mod builder;
mod env;
mod fs;

#[cfg(test)]
mod tests;

use std::path::Path;

pub use builder::EnvLoader;
pub use env::{env_var_or_none, resolve_app_env};
pub use fs::{FileTree, MemoryFileTree, OsFileTree};

use crate::binder::EnvRecord;
use crate::error::AppEnvError;

/// Load `record` from `dir` on the host filesystem, selecting the environment with `APP_ENV`.
pub fn load<R: EnvRecord + ?Sized>(record: &mut R, dir: impl AsRef<Path>) -> Result<(), AppEnvError> {
    EnvLoader::new(dir.as_ref()).load(record)
}

/// Load `record` from `dir` inside `tree`, selecting the environment with `APP_ENV`.
pub fn load_fs<R, T>(record: &mut R, tree: &T, dir: impl AsRef<Path>) -> Result<(), AppEnvError>
where
    R: EnvRecord + ?Sized,
    T: FileTree + ?Sized,
{
    EnvLoader::new(dir.as_ref()).with_file_tree(tree).load(record)
}

/// Load `record` from `dir` on the host filesystem for an explicit environment.
pub fn load_on_app_env<R: EnvRecord + ?Sized>(
    record: &mut R,
    dir: impl AsRef<Path>,
    app_env: &str,
) -> Result<(), AppEnvError> {
    EnvLoader::new(dir.as_ref()).with_app_env(app_env).load(record)
}

/// Load `record` from `dir` inside `tree` for an explicit environment.
pub fn load_fs_on_app_env<R, T>(
    record: &mut R,
    tree: &T,
    dir: impl AsRef<Path>,
    app_env: &str,
) -> Result<(), AppEnvError>
where
    R: EnvRecord + ?Sized,
    T: FileTree + ?Sized,
{
    EnvLoader::new(dir.as_ref())
        .with_file_tree(tree)
        .with_app_env(app_env)
        .load(record)
}
