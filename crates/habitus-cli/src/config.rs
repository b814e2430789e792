//! CLI configuration

use crate::error::{CliError, CliResult};
use habitus_catalog::HabitCatalog;
use habitus_templates::GeneratorConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// CLI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CliConfig {
    /// External catalog document; the built-in catalog when unset
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,

    /// Where generated templates are written
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Generate batches in parallel
    #[serde(default = "default_true")]
    pub parallel: bool,

    /// Template generation settings
    #[serde(default)]
    pub generator: GeneratorConfig,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            output_dir: default_output_dir(),
            parallel: true,
            generator: GeneratorConfig::default(),
        }
    }
}

impl CliConfig {
    /// Load configuration from file
    pub fn load(path: Option<&str>) -> CliResult<Self> {
        let config_path = match path {
            Some(p) => PathBuf::from(p),
            None => Self::default_config_path()?,
        };

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path)?;
            let config: CliConfig = toml::from_str(&contents)?;
            config.generator.validate()?;
            Ok(config)
        } else {
            Ok(CliConfig::default())
        }
    }

    /// Get the default configuration file path
    fn default_config_path() -> CliResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| CliError::Config("Cannot find config directory".into()))?;
        Ok(config_dir.join("habitus").join("config.toml"))
    }

    /// The external catalog, if one is configured
    pub fn external_catalog(&self) -> CliResult<Option<HabitCatalog>> {
        self.catalog_path
            .as_deref()
            .map(|path: &Path| HabitCatalog::from_path(path).map_err(CliError::from))
            .transpose()
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("templates")
}

fn default_true() -> bool {
    true
}
