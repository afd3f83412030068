//! User configuration.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::countdown::CountdownMode;
use crate::error::{DropCalError, DropCalResult};

static DEFAULT_FOOTER: &str = "Sneaker Drops";

fn default_footer() -> String {
    DEFAULT_FOOTER.to_string()
}

/// Configuration at ~/.config/dropcal/config.toml
///
/// Every key is optional. `DROPCAL_*` environment variables override the file.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct DropCalConfig {
    #[serde(default)]
    pub countdown: CountdownMode,

    #[serde(default = "default_footer")]
    pub footer: String,
}

impl Default for DropCalConfig {
    fn default() -> Self {
        DropCalConfig {
            countdown: CountdownMode::default(),
            footer: default_footer(),
        }
    }
}

impl DropCalConfig {
    pub fn config_path() -> DropCalResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| DropCalError::Config("Could not determine config directory".into()))?
            .join("dropcal");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from the default location plus the environment.
    /// A missing file means defaults.
    pub fn load() -> DropCalResult<Self> {
        let path = Self::config_path()?;
        Self::from_sources(&path, Some(Environment::with_prefix("DROPCAL")))
    }

    /// Load from `path` only.
    pub fn load_from(path: &Path) -> DropCalResult<Self> {
        Self::from_sources(path, None)
    }

    fn from_sources(path: &Path, env: Option<Environment>) -> DropCalResult<Self> {
        tracing::debug!(path = %path.display(), exists = path.exists(), "loading config");

        let mut builder = Config::builder().add_source(File::from(path).required(false));
        if let Some(env) = env {
            builder = builder.add_source(env);
        }

        builder
            .build()
            .map_err(|e| DropCalError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| DropCalError::Config(e.to_string()))
    }

    pub fn to_toml(&self) -> DropCalResult<String> {
        toml::to_string_pretty(self).map_err(|e| DropCalError::Config(e.to_string()))
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> DropCalResult<()> {
        let contents = format!(
            "\
# dropcal configuration

# How countdowns are measured: \"calendar-day\" or \"timestamp\"
# countdown = \"calendar-day\"

# Label shown after the year in the footer:
# footer = \"{}\"
",
            DEFAULT_FOOTER
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, contents)?;

        Ok(())
    }
}
