//! Project-level operations built from the version model, the build report
//! and a [`Builder`]: what `check`, `set` and `build` do, minus the printing.
//!
//! A full `build then <modifier>` is [`build_project`] followed, on success,
//! by [`set_version`]. Callers that need the version before the build starts
//! use [`prepare_build`] and [`build_version`] instead of [`build_project`].

use std::path::Path;

use serde::Serialize;

use crate::builder::Builder;
use crate::error::{BuildverError, Result};
use crate::layout::project_name;
use crate::report::{latest_build, record_build, BuildRecord};
use crate::version::{apply_modifier, read_version, write_version, Modifier};

/// Version assumed for a project whose VERSION file is missing or blank.
pub const INITIAL_VERSION: &str = "0.0.0";

/// Version used when `set` is given an empty value.
pub const FIRST_RELEASE_VERSION: &str = "0.0.1";

/// Snapshot of a project for `check`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectStatus {
    pub name: String,
    pub version: String,
    pub latest_build: Option<BuildRecord>,
}

/// Outcome of setting a new version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionUpdate {
    pub from: String,
    pub to: String,
    pub changed: bool,
}

/// Outcome of `build`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildReport {
    /// The build failed; nothing was recorded.
    Failed { version: String, error_text: String },
    /// The build succeeded and was recorded in the build report.
    Succeeded(BuildRecord),
}

/// Read the project's version and latest build.
///
/// A blank VERSION file is initialized to [`INITIAL_VERSION`].
///
/// # Errors
///
/// Returns `BuildverError::MissingVersionFile` if the project has no
/// VERSION file.
pub fn check_project(project_dir: &Path) -> Result<ProjectStatus> {
    let version = current_or_initialize(project_dir)?;
    Ok(ProjectStatus {
        name: project_name(project_dir),
        version,
        latest_build: latest_build(project_dir)?,
    })
}

/// Apply `modifier` to the current version and persist the result.
///
/// A missing VERSION file or a blank version counts as [`INITIAL_VERSION`];
/// the file is created when the version changes. An empty literal sets
/// [`FIRST_RELEASE_VERSION`]. Nothing is written when the version is unchanged.
///
/// # Errors
///
/// - `BuildverError::InvalidVersion` if a literal contains a space
/// - `BuildverError::InvalidVersionFormat` if the component to bump is not numeric
/// - `BuildverError::MissingProjectDir` if `project_dir` does not exist
pub fn set_version(project_dir: &Path, modifier: &Modifier) -> Result<VersionUpdate> {
    if let Modifier::Literal(value) = modifier {
        if value.contains(' ') {
            return Err(BuildverError::InvalidVersion(value.clone()));
        }
    }

    let current = match read_version(project_dir) {
        Ok(Some(version)) => version,
        Ok(None) | Err(BuildverError::MissingVersionFile { .. }) => INITIAL_VERSION.to_string(),
        Err(err) => return Err(err),
    };

    let next = match modifier {
        Modifier::Literal(value) if value.is_empty() => FIRST_RELEASE_VERSION.to_string(),
        _ => apply_modifier(&current, modifier)?,
    };

    if next == current {
        return Ok(VersionUpdate {
            from: current,
            to: next,
            changed: false,
        });
    }

    if !write_version(&next, project_dir)? {
        return Err(BuildverError::MissingProjectDir {
            path: project_dir.to_path_buf(),
        });
    }
    tracing::info!(from = %current, to = %next, "version updated");
    Ok(VersionUpdate {
        from: current,
        to: next,
        changed: true,
    })
}

/// Build the project and record the build on success.
///
/// Same as [`prepare_build`] followed by [`build_version`].
///
/// # Errors
///
/// Returns `BuildverError::MissingVersionFile` before building if the project
/// has no VERSION file.
pub fn build_project(builder: &dyn Builder, project_dir: &Path) -> Result<BuildReport> {
    let version = prepare_build(project_dir)?;
    build_version(builder, project_dir, version)
}

/// Version the next build will carry.
///
/// A blank VERSION file is initialized to [`INITIAL_VERSION`].
///
/// # Errors
///
/// Returns `BuildverError::MissingVersionFile` if the project has no VERSION
/// file.
pub fn prepare_build(project_dir: &Path) -> Result<String> {
    current_or_initialize(project_dir)
}

/// Run `builder` and record `version` in the build report on success.
///
/// On a failed build nothing is recorded. Moving to the next version is a
/// separate [`set_version`] call so callers can report the build first.
pub fn build_version(
    builder: &dyn Builder,
    project_dir: &Path,
    version: String,
) -> Result<BuildReport> {
    let outcome = builder.run_build(project_dir)?;
    if !outcome.success {
        tracing::warn!(version = %version, "build failed");
        return Ok(BuildReport::Failed {
            version,
            error_text: outcome.error_text,
        });
    }

    record_build(&version, project_dir).map(BuildReport::Succeeded)
}

fn current_or_initialize(project_dir: &Path) -> Result<String> {
    match read_version(project_dir)? {
        Some(version) => Ok(version),
        None => {
            write_version(INITIAL_VERSION, project_dir)?;
            Ok(INITIAL_VERSION.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_check_initializes_blank_version() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("VERSION"), "\n").unwrap();

        let status = check_project(dir.path()).unwrap();
        assert_eq!(status.version, "0.0.0");
        assert_eq!(status.latest_build, None);
        assert_eq!(fs::read_to_string(dir.path().join("VERSION")).unwrap(), "0.0.0");
    }

    #[test]
    fn test_check_missing_version_file() {
        let dir = tempdir().unwrap();
        assert!(matches!(
            check_project(dir.path()),
            Err(BuildverError::MissingVersionFile { .. })
        ));
    }

    #[test]
    fn test_set_without_version_file_starts_from_zero() {
        let dir = tempdir().unwrap();
        let update = set_version(dir.path(), &Modifier::IncrementMinor).unwrap();
        assert_eq!(update.from, "0.0.0");
        assert_eq!(update.to, "0.1.0");
        assert!(update.changed);
        assert_eq!(fs::read_to_string(dir.path().join("VERSION")).unwrap(), "0.1.0");
    }

    #[test]
    fn test_set_unchanged_does_not_write() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("VERSION"), "1.0.0\n").unwrap();

        let update = set_version(dir.path(), &Modifier::Keep).unwrap();
        assert!(!update.changed);
        assert_eq!(fs::read_to_string(dir.path().join("VERSION")).unwrap(), "1.0.0\n");
    }

    #[test]
    fn test_set_rejects_spaces() {
        let dir = tempdir().unwrap();
        let err = set_version(dir.path(), &Modifier::parse("1.0 beta")).unwrap_err();
        assert!(matches!(err, BuildverError::InvalidVersion(_)));
    }

    #[test]
    fn test_set_empty_literal_is_first_release() {
        let dir = tempdir().unwrap();
        let update = set_version(dir.path(), &Modifier::parse("")).unwrap();
        assert_eq!(update.to, "0.0.1");
    }

    #[test]
    fn test_set_missing_project_dir() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("gone");
        assert!(matches!(
            set_version(&missing, &Modifier::parse("1.0.0")),
            Err(BuildverError::MissingProjectDir { .. })
        ));
    }
}
