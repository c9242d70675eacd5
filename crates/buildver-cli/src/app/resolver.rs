//! Path resolution for the project directory and config file.

use std::path::{Path, PathBuf};

use buildver_core::layout;

use crate::cli::Cli;

/// Resolve the project directory from CLI args, falling back to the
/// current working directory.
///
/// This is the only place the working directory is consulted; every core
/// call receives the resolved path.
pub fn resolve_project_dir(cli: &Cli) -> anyhow::Result<PathBuf> {
    let cwd = std::env::current_dir()
        .map_err(|e| anyhow::anyhow!("Cannot determine current directory: {}", e))?;
    let path = match &cli.project {
        Some(path) if path.is_absolute() => path.clone(),
        Some(path) => cwd.join(path),
        None => cwd,
    };
    // Canonicalize when possible so `.` and `..` still yield a project name.
    Ok(path.canonicalize().unwrap_or(path))
}

/// Resolve the config file path, checking BUILDVER_CONFIG env var first.
pub fn resolve_config_path(project_dir: &Path) -> PathBuf {
    if let Ok(value) = std::env::var("BUILDVER_CONFIG") {
        if !value.trim().is_empty() {
            return PathBuf::from(value);
        }
    }
    layout::config_file(project_dir)
}
