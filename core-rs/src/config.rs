//! Registry configuration
//!
//! Selects where addon lists come from. By default the lists packaged with
//! the crate are used; setting `data_dir` points the registry at a directory
//! of `addons-<series>-<edition>.txt` files instead.
//!
//! ```yaml
//! data_dir: /opt/odoo-addons-data
//! ```

use crate::errors::{AddonsError, Result};
use crate::registry::CoreAddonRegistry;
use crate::source::{DirectorySource, EmbeddedSource};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable overriding the data directory
pub const DATA_DIR_ENV: &str = "ODOO_ADDONS_DATA_DIR";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RegistryConfig {
    /// Directory holding addon list files. `None` uses the embedded lists.
    pub data_dir: Option<PathBuf>,
}

impl RegistryConfig {
    /// Config from the process environment
    pub fn from_env() -> Self {
        RegistryConfig {
            data_dir: env::var_os(DATA_DIR_ENV)
                .filter(|v| !v.is_empty())
                .map(PathBuf::from),
        }
    }

    /// Parse a YAML config. An empty or null document gives the default.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(RegistryConfig::default());
        }
        let config: Option<RegistryConfig> = serde_yaml::from_str(yaml)?;
        Ok(config.unwrap_or_default())
    }

    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            AddonsError::Config(format!("Failed to read config {}: {}", path.display(), e))
        })?;
        Self::from_yaml_str(&content)
    }

    /// Overlay `other` on top of `self`; set fields in `other` win
    pub fn merge(self, other: RegistryConfig) -> Self {
        RegistryConfig {
            data_dir: other.data_dir.or(self.data_dir),
        }
    }

    pub fn build_registry(&self) -> CoreAddonRegistry {
        match &self.data_dir {
            Some(dir) => CoreAddonRegistry::new(DirectorySource::new(dir)),
            None => CoreAddonRegistry::new(EmbeddedSource),
        }
    }
}
