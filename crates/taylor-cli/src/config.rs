//! Configuration loading and management.

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

/// Report layout configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Number of character cells in each bar.
    pub bar_width: usize,
    /// Maximum number of characters kept from each tag column.
    pub tag_width: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bar_width: 10,
            tag_width: 60,
        }
    }
}

impl Config {
    /// Loads configuration from the default location, optionally layering
    /// a specific file on top.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let default_file = dirs_config_path().map(|dir| dir.join("config.toml"));
        Self::from_sources(default_file.as_deref(), config_path)
    }

    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    fn from_sources(
        default_file: Option<&Path>,
        config_path: Option<&Path>,
    ) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(path) = default_file {
            figment = figment.merge(Toml::file(path));
        }

        // Load from specified config file
        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // Load from environment variables (TAYLOR_*)
        figment = figment.merge(Env::prefixed("TAYLOR_"));

        let config: Self = figment.extract()?;
        if config.bar_width == 0 {
            return Err(figment::Error::from(
                "bar_width must be at least 1".to_string(),
            ));
        }
        Ok(config)
    }
}

/// Returns the platform-specific config directory for timew-taylor.
///
/// On Linux: `~/.config/timew-taylor`
fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("timew-taylor"))
}
