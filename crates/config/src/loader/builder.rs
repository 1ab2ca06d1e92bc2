//! Layered loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `EnvLoader` holding the base directory, file tree,
//!   and environment selector settings.
//! - Apply the three layers to a record in fixed order.
//!
//! Does NOT handle:
//! - Dotenv syntax (delegated to `dotenvy` through `DotenvSource`).
//! - Coercion (see `binder`).
//!
//! Invariants / Assumptions:
//! - Order is `<app_env>.env`, then `.env`, then process environment; later layers
//!   overwrite earlier ones key by key.
//! - `<app_env>.env` is mandatory; any failure to open or parse it aborts the load
//!   before the other layers run.
//! - `.env` is optional; only a not-found open error is tolerated.
//! - File handles are dropped before each layer is bound.

use std::path::{Path, PathBuf};

use super::env::resolve_app_env;
use super::fs::{FileTree, OsFileTree};
use crate::binder::{EnvRecord, bind};
use crate::constants::{APP_ENV_VAR, DEFAULT_APP_ENV, ENV_FILE_EXTENSION, SHARED_ENV_FILE};
use crate::error::AppEnvError;
use crate::source::{DotenvSource, ProcessEnv};

/// Loader that layers `<app_env>.env`, `.env` and the process environment.
#[derive(Debug, Clone)]
pub struct EnvLoader<T = OsFileTree> {
    dir: PathBuf,
    tree: T,
    app_env: Option<String>,
    app_env_var: String,
    default_app_env: String,
}

impl EnvLoader<OsFileTree> {
    /// Create a loader reading from `dir` on the host filesystem.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            tree: OsFileTree,
            app_env: None,
            app_env_var: APP_ENV_VAR.to_string(),
            default_app_env: DEFAULT_APP_ENV.to_string(),
        }
    }
}

impl<T: FileTree> EnvLoader<T> {
    /// Read files from `tree` instead of the host filesystem.
    pub fn with_file_tree<U: FileTree>(self, tree: U) -> EnvLoader<U> {
        EnvLoader {
            dir: self.dir,
            tree,
            app_env: self.app_env,
            app_env_var: self.app_env_var,
            default_app_env: self.default_app_env,
        }
    }

    /// Use `name` as the environment, bypassing the selector variable.
    pub fn with_app_env(mut self, name: impl Into<String>) -> Self {
        self.app_env = Some(name.into());
        self
    }

    /// Read the environment name from `var` instead of `APP_ENV`.
    pub fn with_app_env_var(mut self, var: impl Into<String>) -> Self {
        self.app_env_var = var.into();
        self
    }

    /// Environment used when the selector variable is unset.
    pub fn with_default_app_env(mut self, name: impl Into<String>) -> Self {
        self.default_app_env = name.into();
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn file_tree(&self) -> &T {
        &self.tree
    }

    /// The environment this loader targets.
    pub fn resolve_app_env(&self) -> String {
        match &self.app_env {
            Some(name) => name.clone(),
            None => resolve_app_env(&self.app_env_var, &self.default_app_env),
        }
    }

    /// Path of the mandatory environment file for `app_env`.
    pub fn env_file_path(&self, app_env: &str) -> PathBuf {
        self.dir.join(format!("{app_env}{ENV_FILE_EXTENSION}"))
    }

    /// Path of the optional shared file.
    pub fn shared_file_path(&self) -> PathBuf {
        self.dir.join(SHARED_ENV_FILE)
    }

    /// Apply all three layers to `record`.
    ///
    /// # Errors
    ///
    /// Returns the first failure encountered:
    /// - `AppEnvError::FileOpen` if `<app_env>.env` cannot be opened, or `.env`
    ///   exists but cannot be opened.
    /// - `AppEnvError::DotenvParse` / `DotenvIo` if either file is malformed or unreadable.
    /// - `AppEnvError::Coercion` if a value does not fit its field.
    pub fn load<R: EnvRecord + ?Sized>(&self, record: &mut R) -> Result<(), AppEnvError> {
        let app_env = self.resolve_app_env();

        let env_path = self.env_file_path(&app_env);
        let source = self.read_source(&env_path)?;
        bind(record, &source)?;
        tracing::debug!(path = %env_path.display(), keys = source.len(), "Applied environment file");

        let shared_path = self.shared_file_path();
        match self.read_source(&shared_path) {
            Ok(source) => {
                bind(record, &source)?;
                tracing::debug!(path = %shared_path.display(), keys = source.len(), "Applied shared file");
            }
            Err(e) if e.is_not_found() => {
                tracing::debug!(path = %shared_path.display(), "Shared file not found, skipping");
            }
            Err(e) => return Err(e),
        }

        bind(record, &ProcessEnv)?;
        tracing::debug!(app_env = %app_env, "Applied process environment");
        Ok(())
    }

    fn read_source(&self, path: &Path) -> Result<DotenvSource, AppEnvError> {
        let reader = self.tree.open(path).map_err(|source| AppEnvError::FileOpen {
            path: path.to_path_buf(),
            source,
        })?;
        DotenvSource::parse(reader, path)
    }
}
