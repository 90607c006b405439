//! Engine configuration.
//!
//! Configuration is optional; every field has a default. When loaded from
//! disk, the file is resolved in this order:
//! 1. Explicit path (if provided)
//! 2. `~/.lightprompt/config.toml` (user)
//! 3. `/etc/lightprompt/config.toml` (system)
//!
//! If none exists the defaults apply. The lighting maps path can also be
//! overridden with the `LIGHTPROMPT_MAPS` environment variable.
//!
//! ```toml
//! [maps]
//! path = "/opt/lighting/lighting_maps.json"
//!
//! [cache]
//! max_entries = 50
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::cache::{CacheConfig, DEFAULT_MAX_ENTRIES};
use crate::maps::MapSource;
use crate::{LightPromptError, Result};

/// Environment variable naming a lighting maps file.
pub const MAPS_PATH_ENV: &str = "LIGHTPROMPT_MAPS";

/// Top-level engine configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub maps: MapsConfig,
    #[serde(default)]
    pub cache: CacheSection,
}

/// Where the lighting maps come from.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MapsConfig {
    /// Lighting maps JSON file. The embedded maps are used when unset.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl MapsConfig {
    /// Resolve to a [`MapSource`]: configured path, else the embedded maps.
    pub fn source(&self) -> MapSource {
        match &self.path {
            Some(path) => MapSource::Path(path.clone()),
            None => MapSource::Embedded,
        }
    }
}

/// Result cache sizing.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CacheSection {
    /// Maximum cached prompts (default: 50).
    #[serde(default = "default_max_entries")]
    pub max_entries: usize,
}

impl Default for CacheSection {
    fn default() -> Self {
        Self {
            max_entries: default_max_entries(),
        }
    }
}

fn default_max_entries() -> usize {
    DEFAULT_MAX_ENTRIES
}

impl From<&CacheSection> for CacheConfig {
    fn from(section: &CacheSection) -> Self {
        CacheConfig::new().max_entries(section.max_entries)
    }
}

impl EngineConfig {
    /// Parse configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load configuration from the standard locations, then apply the
    /// environment override.
    ///
    /// An explicit path that does not exist is an error; missing standard
    /// files are not.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        let mut config = match Self::resolve_config_path(explicit_path)? {
            Some(path) => Self::load_from_file(&path)?,
            None => Self::default(),
        };
        config.apply_env();
        Ok(config)
    }

    fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            LightPromptError::Configuration(format!("Failed to read config file {path:?}: {e}"))
        })?;
        toml::from_str(&content).map_err(|e| {
            LightPromptError::Configuration(format!("Failed to parse config file {path:?}: {e}"))
        })
    }

    fn resolve_config_path(explicit: Option<&Path>) -> Result<Option<PathBuf>> {
        if let Some(path) = explicit {
            if path.exists() {
                return Ok(Some(path.to_path_buf()));
            }
            return Err(LightPromptError::Configuration(format!(
                "Config file not found: {path:?}"
            )));
        }

        // User config
        if let Some(home) = dirs::home_dir() {
            let user_config = home.join(".lightprompt").join("config.toml");
            if user_config.exists() {
                return Ok(Some(user_config));
            }
        }

        // System config
        let system_config = PathBuf::from("/etc/lightprompt/config.toml");
        if system_config.exists() {
            return Ok(Some(system_config));
        }

        Ok(None)
    }

    fn apply_env(&mut self) {
        self.apply_maps_override(std::env::var_os(MAPS_PATH_ENV).map(PathBuf::from));
    }

    fn apply_maps_override(&mut self, path: Option<PathBuf>) {
        if let Some(path) = path.filter(|p| !p.as_os_str().is_empty()) {
            self.maps.path = Some(path);
        }
    }
}
