//! The packaging build that `buildver build` wraps.
//!
//! The `Builder` trait keeps the build step swappable; the version and
//! report logic only ever sees a pass/fail [`BuildOutcome`].

use std::path::Path;
use std::process::Command;

use crate::error::{BuildverError, Result};

/// Command used when no build command is configured.
pub const DEFAULT_BUILD_COMMAND: &str = "python -m setup --quiet sdist bdist_wheel";

/// Result of one build attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOutcome {
    pub success: bool,
    /// Captured error output of the build, possibly empty
    pub error_text: String,
}

impl BuildOutcome {
    pub fn succeeded() -> Self {
        Self {
            success: true,
            error_text: String::new(),
        }
    }

    pub fn failed(error_text: impl Into<String>) -> Self {
        Self {
            success: false,
            error_text: error_text.into(),
        }
    }
}

/// Produces a distributable package for a project.
pub trait Builder {
    /// Build the project rooted at `project_dir`.
    ///
    /// A build that runs and fails is `Ok` with `success == false`; `Err` is
    /// reserved for failing to run the build at all.
    fn run_build(&self, project_dir: &Path) -> Result<BuildOutcome>;
}

/// Runs an external command in the project directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandBuilder {
    program: String,
    args: Vec<String>,
}

impl CommandBuilder {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Split a command line on whitespace. No shell quoting is applied.
    ///
    /// # Errors
    ///
    /// Returns `BuildverError::BuilderSpawn` for an empty command line.
    pub fn from_command_line(command_line: &str) -> Result<Self> {
        let mut parts = command_line.split_whitespace().map(str::to_string);
        let program = parts.next().ok_or_else(|| BuildverError::BuilderSpawn {
            command: command_line.to_string(),
            source: std::io::Error::new(std::io::ErrorKind::InvalidInput, "empty build command"),
        })?;
        Ok(Self::new(program, parts.collect()))
    }

    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for CommandBuilder {
    fn default() -> Self {
        Self::from_command_line(DEFAULT_BUILD_COMMAND)
            .unwrap_or_else(|_| Self::new("python", Vec::new()))
    }
}

impl Builder for CommandBuilder {
    fn run_build(&self, project_dir: &Path) -> Result<BuildOutcome> {
        tracing::info!(command = %self.command_line(), dir = %project_dir.display(), "running build");
        let output = Command::new(&self.program)
            .args(&self.args)
            .current_dir(project_dir)
            .output()
            .map_err(|source| BuildverError::BuilderSpawn {
                command: self.command_line(),
                source,
            })?;
        tracing::debug!(status = %output.status, "build finished");

        let error_text = String::from_utf8_lossy(&output.stderr).trim_end().to_string();
        if output.status.success() {
            Ok(BuildOutcome {
                success: true,
                error_text,
            })
        } else {
            Ok(BuildOutcome::failed(error_text))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_command() {
        let builder = CommandBuilder::default();
        assert_eq!(builder.command_line(), DEFAULT_BUILD_COMMAND);
    }

    #[test]
    fn test_from_command_line_splits_whitespace() {
        let builder = CommandBuilder::from_command_line("  cargo   package --quiet ").unwrap();
        assert_eq!(builder.command_line(), "cargo package --quiet");
    }

    #[test]
    fn test_empty_command_line_is_rejected() {
        assert!(CommandBuilder::from_command_line("   ").is_err());
    }

    #[test]
    fn test_missing_program_is_spawn_error() {
        let dir = tempdir().unwrap();
        let builder = CommandBuilder::new("buildver-no-such-program", Vec::new());
        assert!(matches!(
            builder.run_build(dir.path()),
            Err(BuildverError::BuilderSpawn { .. })
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_command_outcomes() {
        let dir = tempdir().unwrap();
        let ok = CommandBuilder::new("true", Vec::new());
        assert!(ok.run_build(dir.path()).unwrap().success);

        let failing = CommandBuilder::new(
            "sh",
            vec!["-c".to_string(), "echo broken >&2; exit 1".to_string()],
        );
        let outcome = failing.run_build(dir.path()).unwrap();
        assert!(!outcome.success);
        assert_eq!(outcome.error_text, "broken");
    }
}
