//! Records whose keys are only known at runtime.

use crate::binder::{EnvRecord, FieldDescriptor, FieldSlot, FieldVisitor};
use crate::error::AppEnvError;

/// A record of string fields, one per requested key.
///
/// Used where the set of keys comes from user input, such as the CLI.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeySet {
    entries: Vec<Entry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry {
    key: String,
    value: String,
    resolved: bool,
}

impl KeySet {
    /// Build a set resolving `keys` in the given order. Duplicates are dropped.
    pub fn new<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut entries: Vec<Entry> = Vec::new();
        for key in keys {
            let key = key.into();
            if entries.iter().any(|e| e.key == key) {
                continue;
            }
            entries.push(Entry {
                key,
                value: String::new(),
                resolved: false,
            });
        }
        Self { entries }
    }

    /// Value of `key`, if any layer provided it.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.key == key && e.resolved)
            .map(|e| e.value.as_str())
    }

    pub fn is_resolved(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Requested keys in order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.key.as_str())
    }

    /// Resolved `(key, value)` pairs in request order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .filter(|e| e.resolved)
            .map(|e| (e.key.as_str(), e.value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl EnvRecord for KeySet {
    fn visit_fields(&mut self, visit: &mut FieldVisitor<'_>) -> Result<(), AppEnvError> {
        for entry in &mut self.entries {
            let field = FieldDescriptor {
                key: &entry.key,
                name: &entry.key,
                settable: true,
            };
            if visit(&field, FieldSlot::Str(&mut entry.value))? {
                entry.resolved = true;
            }
        }
        Ok(())
    }
}
