//! Centralized constants for layered configuration loading.

/// Process environment variable selecting the active environment.
pub const APP_ENV_VAR: &str = "APP_ENV";

/// Environment used when `APP_ENV` is unset or empty.
pub const DEFAULT_APP_ENV: &str = "production";

/// Extension appended to the environment name to build the mandatory file name.
pub const ENV_FILE_EXTENSION: &str = ".env";

/// Optional shared file applied after the environment file.
pub const SHARED_ENV_FILE: &str = ".env";
