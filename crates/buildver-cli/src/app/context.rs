//! Application context for the buildver CLI.
//!
//! Bundles the parsed arguments with the resolved project directory and a
//! lazily-loaded config.

use std::path::{Path, PathBuf};

use once_cell::unsync::OnceCell;

use crate::cli::Cli;
use crate::config::{load_config, BuildverConfig};
use crate::ui::UiContext;

use super::resolver::{resolve_config_path, resolve_project_dir};

/// Application context passed to every command handler.
pub struct AppContext<'a> {
    cli: &'a Cli,
    project_dir: PathBuf,
    config: OnceCell<BuildverConfig>,
}

impl<'a> AppContext<'a> {
    /// Create a new application context, resolving the project directory.
    pub fn new(cli: &'a Cli) -> anyhow::Result<Self> {
        let project_dir = resolve_project_dir(cli)?;
        tracing::debug!(project = %project_dir.display(), "resolved project directory");
        Ok(Self {
            cli,
            project_dir,
            config: OnceCell::new(),
        })
    }

    /// Check if quiet mode is enabled.
    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    /// Get the project configuration, loading it lazily if needed.
    pub fn config(&self) -> anyhow::Result<&BuildverConfig> {
        self.config
            .get_or_try_init(|| load_config(&resolve_config_path(&self.project_dir)))
    }

    /// UI context for a command, honoring `--json` and `--no-color`.
    pub fn ui_context(&self, json: bool) -> UiContext {
        UiContext::from_env(json, self.cli.no_color)
    }
}
