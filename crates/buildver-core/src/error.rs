//! Error types for buildver core operations.
//!
//! Errors are descriptive at the core level; the CLI layer maps these
//! to user-friendly messages and exit codes.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for buildver operations.
pub type Result<T> = std::result::Result<T, BuildverError>;

/// Core error type for buildver operations.
#[derive(Debug, Error)]
pub enum BuildverError {
    /// The project has no VERSION file
    #[error("Missing VERSION file at {}", path.display())]
    MissingVersionFile { path: PathBuf },

    /// A version component that must be incremented is not a number
    #[error("Invalid version format: component \"{component}\" of \"{version}\" is not a number")]
    InvalidVersionFormat { version: String, component: String },

    /// The project directory does not exist
    #[error("Project directory not found: {}", path.display())]
    MissingProjectDir { path: PathBuf },

    /// A version value rejected before it reaches the VERSION file
    #[error("Invalid version: {0}")]
    InvalidVersion(String),

    /// A build report line cannot be parsed
    #[error("Malformed build report line: \"{line}\"")]
    MalformedBuildReport { line: String },

    /// Another process holds the build report lock
    #[error("Build report is locked by another process ({})", path.display())]
    LedgerLocked { path: PathBuf },

    /// The build command could not be started
    #[error("Failed to run build command \"{command}\": {source}")]
    BuilderSpawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Filesystem error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
