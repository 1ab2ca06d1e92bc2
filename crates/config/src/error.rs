//! Error types for layered configuration loading.
//!
//! Responsibilities:
//! - Define error variants for every recoverable loading failure.
//! - Convert `dotenvy` errors into path-annotated variants.
//! - Classify the "file does not exist" case so the optional shared file can be skipped.
//!
//! Does NOT handle:
//! - Unsupported field kinds. Those are contract violations and panic in the binder.
//!
//! Invariants:
//! - Dotenv parse errors NEVER include raw `.env` line contents to prevent secret leakage.
//! - Only the first failure of a load is reported; errors are never aggregated.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::binder::FieldKind;

/// Errors that can occur while loading or binding configuration.
#[derive(Error, Debug)]
pub enum AppEnvError {
    /// The file could not be opened (missing, permission denied, ...).
    #[error("Failed to open {path}: {source}")]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file has invalid dotenv syntax.
    ///
    /// SAFETY: This error only includes the byte index of the parse failure,
    /// NOT the offending line content, to prevent leaking secrets.
    #[error("Failed to parse {path} at position {error_index}")]
    DotenvParse { path: PathBuf, error_index: usize },

    /// The file was opened but reading it failed.
    #[error("Failed to read {path}: {source}")]
    DotenvIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A `$VAR` substitution inside the file could not be resolved.
    #[error("Failed to substitute a variable in {path}")]
    Substitution { path: PathBuf },

    /// Unknown dotenv error (future variants from dotenvy crate).
    ///
    /// SAFETY: This error does not include any raw dotenv content.
    #[error("Failed to load {path}")]
    DotenvUnknown { path: PathBuf },

    /// A raw value could not be converted to the field's declared kind.
    #[error("cannot coerce {value:?} to {kind} for {key}")]
    Coercion {
        key: String,
        value: String,
        kind: FieldKind,
    },
}

impl AppEnvError {
    /// Returns true if the file could not be opened because it does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            AppEnvError::FileOpen { source, .. } if source.kind() == ErrorKind::NotFound
        )
    }

    /// Returns the path of the file involved, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            AppEnvError::FileOpen { path, .. }
            | AppEnvError::DotenvParse { path, .. }
            | AppEnvError::DotenvIo { path, .. }
            | AppEnvError::Substitution { path }
            | AppEnvError::DotenvUnknown { path } => Some(path),
            AppEnvError::Coercion { .. } => None,
        }
    }

    pub(crate) fn from_dotenv(path: &Path, error: dotenvy::Error) -> Self {
        let path = path.to_path_buf();
        match error {
            dotenvy::Error::LineParse(_, error_index) => {
                AppEnvError::DotenvParse { path, error_index }
            }
            dotenvy::Error::Io(source) => AppEnvError::DotenvIo { path, source },
            dotenvy::Error::EnvVar(_) => AppEnvError::Substitution { path },
            #[allow(unreachable_patterns)]
            _ => AppEnvError::DotenvUnknown { path },
        }
    }
}
