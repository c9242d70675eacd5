//! Locations of buildver's files inside a project directory.

use std::path::{Path, PathBuf};

/// Name of the single-line version file at the project root.
pub const VERSION_FILE: &str = "VERSION";

/// Name of the build report inside [`state_dir`].
pub const BUILD_REPORT_FILE: &str = "build_report";

/// Name of the lock file guarding the build report.
pub const BUILD_REPORT_LOCK_FILE: &str = "build_report.lock";

/// Name of the optional per-project configuration file.
pub const CONFIG_FILE: &str = "config.toml";

pub fn version_file(project_dir: &Path) -> PathBuf {
    project_dir.join(VERSION_FILE)
}

/// Directory holding buildver's per-project state: `.pyrustic/buildver`.
pub fn state_dir(project_dir: &Path) -> PathBuf {
    project_dir.join(".pyrustic").join("buildver")
}

pub fn build_report_file(project_dir: &Path) -> PathBuf {
    state_dir(project_dir).join(BUILD_REPORT_FILE)
}

pub fn build_report_lock_file(project_dir: &Path) -> PathBuf {
    state_dir(project_dir).join(BUILD_REPORT_LOCK_FILE)
}

pub fn config_file(project_dir: &Path) -> PathBuf {
    state_dir(project_dir).join(CONFIG_FILE)
}

/// Display name of a project: the last component of its directory.
pub fn project_name(project_dir: &Path) -> String {
    project_dir
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| project_dir.display().to_string())
}
