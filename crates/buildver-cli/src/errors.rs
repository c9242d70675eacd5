//! CLI error types for structured error handling.
//!
//! This module provides typed errors that map to specific exit codes,
//! enabling consistent error handling across the CLI.

use std::fmt;

use buildver_core::BuildverError;

use crate::constants::exit_codes;

/// CLI-specific errors with associated exit codes.
#[derive(Debug)]
pub enum CliError {
    /// Resource not found (VERSION file, project directory)
    NotFound { message: String, hint: String },

    /// Invalid user input
    InvalidInput(String),

    /// The packaging build failed; `details` is the captured error output
    BuildFailed { message: String, details: String },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NotFound { message, hint } => write!(f, "{}\n{}", message, hint),
            CliError::InvalidInput(message) => write!(f, "{}", message),
            CliError::BuildFailed { message, details } => {
                if details.is_empty() {
                    write!(f, "{}", message)
                } else {
                    write!(f, "{}\n{}", message, details)
                }
            }
        }
    }
}

impl std::error::Error for CliError {}

impl CliError {
    /// Create a NotFound error with message and hint.
    pub fn not_found(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::NotFound {
            message: message.into(),
            hint: hint.into(),
        }
    }

    /// Create an InvalidInput error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        CliError::InvalidInput(message.into())
    }

    /// Create a BuildFailed error carrying the builder's error output.
    pub fn build_failed(message: impl Into<String>, details: impl Into<String>) -> Self {
        CliError::BuildFailed {
            message: message.into(),
            details: details.into(),
        }
    }

    /// Error for a project without a VERSION file.
    pub fn missing_version_file() -> Self {
        CliError::not_found(
            "Missing VERSION file.",
            "Hint: Run `buildver set 0.0.1` to create one.",
        )
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::NotFound { .. } => exit_codes::NOT_FOUND,
            CliError::InvalidInput(_) => exit_codes::INVALID_INPUT,
            CliError::BuildFailed { .. } => exit_codes::BUILD_FAILED,
        }
    }
}

/// Map a core error to the message a user should see.
///
/// Errors without a dedicated CLI form are passed through unchanged.
pub fn from_core(err: BuildverError) -> anyhow::Error {
    match err {
        BuildverError::MissingVersionFile { .. } => CliError::missing_version_file().into(),
        BuildverError::MissingProjectDir { path } => CliError::not_found(
            format!("Project directory not found: {}", path.display()),
            "Hint: Pass an existing directory with --project or BUILDVER_PROJECT.",
        )
        .into(),
        BuildverError::InvalidVersion(_) => CliError::invalid_input("Invalid version.").into(),
        BuildverError::InvalidVersionFormat { .. } => CliError::invalid_input(
            "Failed to set the version. Please check the VERSION file.",
        )
        .into(),
        other => anyhow::Error::new(other),
    }
}

/// Exit code for any error reaching `main`.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<CliError>()
        .map(CliError::exit_code)
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_missing_version_maps_to_not_found() {
        let err = from_core(BuildverError::MissingVersionFile {
            path: PathBuf::from("VERSION"),
        });
        assert_eq!(exit_code_for(&err), exit_codes::NOT_FOUND);
        assert!(err.to_string().starts_with("Missing VERSION file."));
    }

    #[test]
    fn test_invalid_format_maps_to_invalid_input() {
        let err = from_core(BuildverError::InvalidVersionFormat {
            version: "a.b".to_string(),
            component: "b".to_string(),
        });
        assert_eq!(exit_code_for(&err), exit_codes::INVALID_INPUT);
    }

    #[test]
    fn test_build_failed_display_includes_details() {
        let err = CliError::build_failed("Failed to build a distribution package", "no setup.py");
        assert_eq!(
            err.to_string(),
            "Failed to build a distribution package\nno setup.py"
        );
        assert_eq!(err.exit_code(), exit_codes::BUILD_FAILED);
    }

    #[test]
    fn test_other_errors_exit_one() {
        let err = anyhow::anyhow!("boom");
        assert_eq!(exit_code_for(&err), 1);
    }
}
