//! Field binding: assigning source values to the tagged fields of a record.
//!
//! Responsibilities:
//! - Describe record fields (`FieldDescriptor`, `FieldSlot`, `EnvRecord`).
//! - Coerce raw strings into the closed set of supported kinds.
//! - Walk a record once against a single `KeyValueSource`.
//!
//! Does NOT handle:
//! - Layer ordering or file access (see `loader`).
//!
//! Invariants:
//! - Fields are visited in declaration order; the first coercion failure stops the pass.
//! - Assignments made before a failure are kept.
//! - Non-settable fields are skipped even when their key is present.
//! - An unsupported slot kind is a contract violation and panics.

use std::fmt;

use crate::error::AppEnvError;
use crate::source::KeyValueSource;

/// Kinds a field value can be coerced into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    String,
    Integer,
    Boolean,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldKind::String => "string",
            FieldKind::Integer => "integer",
            FieldKind::Boolean => "boolean",
        };
        f.write_str(name)
    }
}

/// Static description of one tagged field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor<'a> {
    /// Lookup key queried in every source.
    pub key: &'a str,
    /// Rust field name, used for diagnostics.
    pub name: &'a str,
    /// Whether the binder may assign this field.
    pub settable: bool,
}

/// Mutable access to a field together with its declared kind.
#[derive(Debug)]
pub enum FieldSlot<'a> {
    Str(&'a mut String),
    Int(&'a mut i64),
    Bool(&'a mut bool),
    /// A field whose type has no coercion. Binding into it panics.
    Unsupported { type_name: &'static str },
}

impl FieldSlot<'_> {
    /// Declared kind, or `None` for unsupported slots.
    pub fn kind(&self) -> Option<FieldKind> {
        match self {
            FieldSlot::Str(_) => Some(FieldKind::String),
            FieldSlot::Int(_) => Some(FieldKind::Integer),
            FieldSlot::Bool(_) => Some(FieldKind::Boolean),
            FieldSlot::Unsupported { .. } => None,
        }
    }
}

/// Field types usable inside `env_record!`.
///
/// Types outside this set fail to compile when tagged.
pub trait EnvField {
    fn slot(&mut self) -> FieldSlot<'_>;
}

impl EnvField for String {
    fn slot(&mut self) -> FieldSlot<'_> {
        FieldSlot::Str(self)
    }
}

impl EnvField for i64 {
    fn slot(&mut self) -> FieldSlot<'_> {
        FieldSlot::Int(self)
    }
}

impl EnvField for bool {
    fn slot(&mut self) -> FieldSlot<'_> {
        FieldSlot::Bool(self)
    }
}

/// Callback invoked once per tagged field. Returns whether the field was assigned.
pub type FieldVisitor<'v> =
    dyn FnMut(&FieldDescriptor<'_>, FieldSlot<'_>) -> Result<bool, AppEnvError> + 'v;

/// A destination record whose tagged fields can be visited.
///
/// Usually generated with [`env_record!`](crate::env_record); implement it by
/// hand for records that need a custom field table.
pub trait EnvRecord {
    /// Call `visit` for each tagged field in declaration order, stopping at the
    /// first error.
    fn visit_fields(&mut self, visit: &mut FieldVisitor<'_>) -> Result<(), AppEnvError>;
}

/// Parse a boolean: `"1"` or `"true"` (any case) is true, everything else false.
pub fn parse_bool(raw: &str) -> bool {
    raw == "1" || raw.eq_ignore_ascii_case("true")
}

/// Parse a base-10 signed integer.
pub fn parse_int(raw: &str) -> Option<i64> {
    raw.parse::<i64>().ok()
}

/// Bind every tagged, settable field of `record` that `source` has a value for.
pub fn bind<R, S>(record: &mut R, source: &S) -> Result<(), AppEnvError>
where
    R: EnvRecord + ?Sized,
    S: KeyValueSource + ?Sized,
{
    record.visit_fields(&mut |field, slot| {
        let Some(raw) = source.lookup(field.key) else {
            return Ok(false);
        };
        if !field.settable {
            tracing::trace!(key = field.key, field = field.name, "Skipping private field");
            return Ok(false);
        }
        assign(field, slot, raw)?;
        Ok(true)
    })
}

fn assign(field: &FieldDescriptor<'_>, slot: FieldSlot<'_>, raw: String) -> Result<(), AppEnvError> {
    match slot {
        FieldSlot::Str(target) => *target = raw,
        FieldSlot::Int(target) => {
            *target = parse_int(&raw).ok_or_else(|| AppEnvError::Coercion {
                key: field.key.to_string(),
                value: raw,
                kind: FieldKind::Integer,
            })?;
        }
        FieldSlot::Bool(target) => *target = parse_bool(&raw),
        FieldSlot::Unsupported { type_name } => {
            panic!(
                "set field {}: unsupported type: {}",
                field.name, type_name
            );
        }
    }
    tracing::trace!(key = field.key, field = field.name, "Assigned field");
    Ok(())
}
