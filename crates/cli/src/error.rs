//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map `AppEnvError` variants to appropriate exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).

use appenv::AppEnvError;

/// Structured exit codes for appenv.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    #[allow(dead_code)]
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// A required file is missing (usually `<env>.env`).
    MissingFile = 2,

    /// A file is malformed or unreadable.
    InvalidFile = 3,

    /// A value could not be coerced to its field kind.
    InvalidValue = 4,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&AppEnvError> for ExitCode {
    fn from(err: &AppEnvError) -> Self {
        match err {
            e if e.is_not_found() => ExitCode::MissingFile,
            AppEnvError::FileOpen { .. }
            | AppEnvError::DotenvParse { .. }
            | AppEnvError::DotenvIo { .. }
            | AppEnvError::Substitution { .. }
            | AppEnvError::DotenvUnknown { .. } => ExitCode::InvalidFile,
            AppEnvError::Coercion { .. } => ExitCode::InvalidValue,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Returns ExitCode::GeneralError if no `AppEnvError` is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        self.chain()
            .find_map(|cause| cause.downcast_ref::<AppEnvError>())
            .map(ExitCode::from)
            .unwrap_or(ExitCode::GeneralError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;
    use std::io::ErrorKind;
    use std::path::PathBuf;

    #[test]
    fn test_exit_code_as_i32() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::GeneralError.as_i32(), 1);
        assert_eq!(ExitCode::MissingFile.as_i32(), 2);
        assert_eq!(ExitCode::InvalidValue.as_i32(), 4);
    }

    #[test]
    fn test_from_app_env_error() {
        let missing = AppEnvError::FileOpen {
            path: PathBuf::from("production.env"),
            source: std::io::Error::from(ErrorKind::NotFound),
        };
        assert_eq!(ExitCode::from(&missing), ExitCode::MissingFile);

        let parse = AppEnvError::DotenvParse {
            path: PathBuf::from(".env"),
            error_index: 0,
        };
        assert_eq!(ExitCode::from(&parse), ExitCode::InvalidFile);
    }

    #[test]
    fn test_exit_code_through_context_chain() {
        let result: Result<(), AppEnvError> = Err(AppEnvError::DotenvUnknown {
            path: PathBuf::from(".env"),
        });
        let err = result.context("Failed to load configuration").unwrap_err();
        assert_eq!(err.exit_code(), ExitCode::InvalidFile);

        let other = anyhow::anyhow!("something else");
        assert_eq!(other.exit_code(), ExitCode::GeneralError);
    }
}
