//! Environment selector resolution.
//!
//! Responsibilities:
//! - Read the variable naming the active environment (`APP_ENV` by default).
//! - Fall back to the configured default when it is unset or empty.
//!
//! Invariants:
//! - Only an unset or empty variable selects the default.
//! - Values are used verbatim; surrounding whitespace is part of the name.

/// Read an environment variable, returning None if it is unset, empty, or not UTF-8.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|s| !s.is_empty())
}

/// Resolve the active environment name from `var`, or `default` when unset.
pub fn resolve_app_env(var: &str, default: &str) -> String {
    match env_var_or_none(var) {
        Some(name) => name,
        None => {
            tracing::debug!(var, default, "Environment selector unset, using default");
            default.to_string()
        }
    }
}
