use std::path::Path;

use buildver_core::{CommandBuilder, Modifier};
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct BuildverConfig {
    #[serde(default)]
    pub build: BuildSection,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct BuildSection {
    /// Packaging command, split on whitespace
    pub command: Option<String>,
    /// Version modifier applied after a build without `then`
    pub next: Option<Modifier>,
}

impl BuildverConfig {
    /// The builder to run for `build`.
    pub fn builder(&self) -> anyhow::Result<CommandBuilder> {
        match self.build.command.as_deref() {
            Some(command) => CommandBuilder::from_command_line(command)
                .map_err(|e| anyhow::anyhow!("Invalid build command in config: {}", e)),
            None => Ok(CommandBuilder::default()),
        }
    }

    /// Modifier for `build` without a `then` clause.
    pub fn next_modifier(&self) -> Modifier {
        self.build.next.clone().unwrap_or_default()
    }
}

pub fn read_config(path: &Path) -> anyhow::Result<BuildverConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

/// Read the config at `path`, or defaults when there is no file.
pub fn load_config(path: &Path) -> anyhow::Result<BuildverConfig> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(BuildverConfig::default());
    }
    read_config(path)
}
