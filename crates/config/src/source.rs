//! Key-value sources consulted by the field binder.
//!
//! Responsibilities:
//! - Define the `KeyValueSource` lookup trait.
//! - Provide the parsed-file source (`DotenvSource`) built from `dotenvy` output.
//! - Provide the process-environment source (`ProcessEnv`).
//! - Implement the trait for plain maps so tests can feed values directly.
//!
//! Does NOT handle:
//! - Opening files (see `loader::fs`).
//! - Type coercion (see `binder`).
//!
//! Invariants:
//! - A key that is present with an empty value is still present.
//! - Within one dotenv file, the last assignment of a key wins.

use std::collections::{BTreeMap, HashMap};
use std::io::Read;
use std::path::Path;

use crate::error::AppEnvError;

/// A key to value lookup. Returns `None` when the key is absent.
pub trait KeyValueSource {
    fn lookup(&self, key: &str) -> Option<String>;
}

impl<T: KeyValueSource + ?Sized> KeyValueSource for &T {
    fn lookup(&self, key: &str) -> Option<String> {
        (**self).lookup(key)
    }
}

impl KeyValueSource for HashMap<String, String> {
    fn lookup(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl KeyValueSource for BTreeMap<String, String> {
    fn lookup(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

/// Key-value pairs parsed from a single dotenv file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DotenvSource {
    values: HashMap<String, String>,
}

impl DotenvSource {
    /// Parse dotenv content from `reader`.
    ///
    /// `path` is only used to annotate errors.
    pub fn parse<R: Read>(reader: R, path: &Path) -> Result<Self, AppEnvError> {
        let mut values = HashMap::new();
        for item in dotenvy::from_read_iter(reader) {
            let (key, value) = item.map_err(|e| AppEnvError::from_dotenv(path, e))?;
            values.insert(key, value);
        }
        Ok(Self { values })
    }

    /// Number of distinct keys in the file.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl KeyValueSource for DotenvSource {
    fn lookup(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}

impl FromIterator<(String, String)> for DotenvSource {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

/// The variables of the running process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl KeyValueSource for ProcessEnv {
    fn lookup(&self, key: &str) -> Option<String> {
        let value = std::env::var_os(key)?;
        match value.into_string() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(key, "Ignoring environment variable with non UTF-8 value");
                None
            }
        }
    }
}
