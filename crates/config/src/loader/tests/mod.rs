//! Tests for the layered loader.
//!
//! Responsibilities:
//! - Test layer precedence and per-key overriding.
//! - Test missing, malformed, and unreadable files in each layer.
//! - Test environment selector resolution.
//!
//! Invariants:
//! - Tests touching process environment variables are `#[serial]` and hold `env_lock()`.
//! - Keys are prefixed with `APPENV_LT_` so parallel tests never share variables.

use std::sync::Mutex;


/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

crate::env_record! {
    #[derive(Debug, Default, Clone, PartialEq)]
    pub struct Layered {
        #[env = "APPENV_LT_A"]
        pub a: String,
        #[env = "APPENV_LT_B"]
        pub b: String,
        #[env = "APPENV_LT_PORT"]
        pub port: i64,
        #[env = "APPENV_LT_DEBUG"]
        pub debug: bool,
    }
}

/// Every variable `Layered` reads plus `APP_ENV`, unset unless overridden.
pub fn vars(overrides: &[(&'static str, &'static str)]) -> Vec<(&'static str, Option<&'static str>)> {
    ["APP_ENV", "APPENV_LT_A", "APPENV_LT_B", "APPENV_LT_PORT", "APPENV_LT_DEBUG"]
        .into_iter()
        .map(|key| {
            let value = overrides.iter().find(|(k, _)| *k == key).map(|(_, v)| *v);
            (key, value)
        })
        .collect()
}
