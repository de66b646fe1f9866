use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::content::{DEFAULT_TAB, TAB_IDS};
use crate::error::{ConfigError, Result};
use crate::tree::DEFAULT_EXPAND_DEPTH;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub view: ViewConfig,
    pub tree: TreeConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Tab shown when the page opens: application, kafka, pact, config
    pub default_tab: String,
    /// Use ASCII icons instead of unicode symbols
    pub ascii_icons: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TreeConfig {
    /// Folders shallower than this depth start expanded (root = 0)
    pub expand_depth: usize,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            default_tab: DEFAULT_TAB.to_string(),
            ascii_icons: false,
        }
    }
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            expand_depth: DEFAULT_EXPAND_DEPTH,
        }
    }
}

impl Config {
    /// Load configuration from `path`, or from the default location.
    ///
    /// An explicit path must exist. The default location is optional and
    /// falls back to built-in defaults when the file is missing.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (path, required) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => match Self::default_path() {
                Some(p) => (p, false),
                None => return Ok(Self::default()),
            },
        };

        if !required && !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&path).map_err(|source| ConfigError::ReadError {
            path: path.clone(),
            source,
        })?;

        let config: Config =
            toml::from_str(&contents).map_err(|source| ConfigError::ParseError {
                path: path.clone(),
                source,
            })?;

        config.validate()?;
        Ok(config)
    }

    /// `$XDG_CONFIG_HOME/pact-showcase/config.toml` or platform equivalent.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("pact-showcase").join("config.toml"))
    }

    pub fn validate(&self) -> Result<()> {
        if !TAB_IDS.contains(&self.view.default_tab.as_str()) {
            return Err(ConfigError::Invalid(format!(
                "view.default_tab '{}' is not one of {}",
                self.view.default_tab,
                TAB_IDS.join(", ")
            ))
            .into());
        }
        Ok(())
    }
}
