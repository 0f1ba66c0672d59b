//! Configuration File Loading
//!
//! Handles loading and saving playground configuration files from standard
//! locations, with TOML and JSON support and fallback to defaults. Catalog
//! files (externally supplied example sets) load through the same paths.

use super::PlaygroundConfig;
use crate::catalog::ExampleCatalog;
use crate::error::{Error, Result};
use crate::models::Example;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Base name of the configuration file (extension selects the format)
const CONFIG_FILE_STEM: &str = "config";

/// Directory name under the user config directory
const CONFIG_DIR_NAME: &str = "banglacode-playground";

/// Configuration file loader
pub struct ConfigLoader {
    /// Search paths for configuration files
    search_paths: Vec<PathBuf>,
    /// Supported configuration file formats
    supported_formats: Vec<ConfigFormat>,
    /// Current configuration file path (if loaded)
    current_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigFormat {
    /// TOML format
    Toml,
    /// JSON format
    Json,
}

impl ConfigFormat {
    fn extension(&self) -> &'static str {
        match self {
            ConfigFormat::Toml => "toml",
            ConfigFormat::Json => "json",
        }
    }

    fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Some(ConfigFormat::Toml),
            Some("json") => Some(ConfigFormat::Json),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// Whether to fall back to the default config if none exists
    pub create_default: bool,
    /// Whether to validate configuration after loading
    pub validate: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            create_default: true,
            validate: true,
        }
    }
}

impl ConfigLoader {
    /// Create a new configuration loader
    pub fn new() -> Self {
        Self {
            search_paths: Self::get_search_paths(),
            supported_formats: vec![ConfigFormat::Toml, ConfigFormat::Json],
            current_path: None,
        }
    }

    /// Load configuration with default options
    pub fn load() -> Result<PlaygroundConfig> {
        Self::load_with_options(LoadOptions::default())
    }

    /// Load configuration with custom options
    pub fn load_with_options(options: LoadOptions) -> Result<PlaygroundConfig> {
        let mut loader = Self::new();

        // Try to find and load an existing configuration
        if let Some((path, config)) = loader.find_and_load_config()? {
            info!("Configuration loaded from {}", path.display());
            loader.current_path = Some(path);

            if options.validate {
                Self::validate_config(&config)?;
            }
            return Ok(config);
        }

        // No configuration found, fall back to defaults if requested
        if options.create_default {
            debug!("no configuration file found, using defaults");
            let config = PlaygroundConfig::default();
            if options.validate {
                Self::validate_config(&config)?;
            }
            Ok(config)
        } else {
            Err(Error::ConfigNotFound)
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_path(path: &Path) -> Result<PlaygroundConfig> {
        let format = ConfigFormat::from_path(path).ok_or_else(|| Error::ConfigLoadFailed {
            path: path.to_path_buf(),
            reason: "Unsupported file extension (expected .toml or .json)".to_string(),
        })?;

        let content = fs::read_to_string(path).map_err(|e| Error::ConfigLoadFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        Self::parse(&content, format)
    }

    /// Save configuration to a specific file
    pub fn save_to_path(config: &PlaygroundConfig, path: &Path) -> Result<()> {
        let format = ConfigFormat::from_path(path).unwrap_or(ConfigFormat::Toml);
        let content = match format {
            ConfigFormat::Toml => {
                toml::to_string_pretty(config).map_err(|e| Error::ConfigSaveFailed {
                    path: path.to_path_buf(),
                    reason: e.to_string(),
                })?
            }
            ConfigFormat::Json => serde_json::to_string_pretty(config)?,
        };

        fs::write(path, content).map_err(|e| Error::ConfigSaveFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Ok(())
    }

    /// Path of the configuration file currently in use, if any
    pub fn current_path(&self) -> Option<&Path> {
        self.current_path.as_deref()
    }

    /// Parse configuration content in the given format
    fn parse(content: &str, format: ConfigFormat) -> Result<PlaygroundConfig> {
        match format {
            ConfigFormat::Toml => {
                toml::from_str(content).map_err(|e| Error::ConfigParseFailed {
                    format: "TOML".to_string(),
                    reason: e.to_string(),
                })
            }
            ConfigFormat::Json => {
                serde_json::from_str(content).map_err(|e| Error::ConfigParseFailed {
                    format: "JSON".to_string(),
                    reason: e.to_string(),
                })
            }
        }
    }

    /// Search the standard locations for a configuration file
    fn find_and_load_config(&self) -> Result<Option<(PathBuf, PlaygroundConfig)>> {
        for dir in &self.search_paths {
            for format in &self.supported_formats {
                let candidate = dir.join(format!("{}.{}", CONFIG_FILE_STEM, format.extension()));
                if candidate.exists() {
                    let config = Self::load_from_path(&candidate)?;
                    return Ok(Some((candidate, config)));
                }
            }
        }
        Ok(None)
    }

    /// Validate a loaded configuration
    fn validate_config(config: &PlaygroundConfig) -> Result<()> {
        config
            .validate()
            .map_err(|e| Error::ConfigValidationFailed {
                field: e.field().to_string(),
                reason: e.to_string(),
            })
    }

    /// Standard configuration search paths
    fn get_search_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join(CONFIG_DIR_NAME));
        }

        // XDG config home fallback (for platforms that might set it)
        if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
            paths.push(PathBuf::from(xdg).join(CONFIG_DIR_NAME));
        }

        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join(CONFIG_DIR_NAME));
        }

        paths.dedup();
        paths
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// On-disk catalog file: an ordered list of `[[examples]]` entries
#[derive(Debug, Serialize, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    examples: Vec<CatalogEntry>,
}

/// One catalog entry as authored in a catalog file
#[derive(Debug, Serialize, Deserialize)]
struct CatalogEntry {
    name: String,
    source: String,
    output: Vec<String>,
}

/// Load an example catalog from a TOML or JSON file, preserving the
/// authored entry order.
///
/// Entries with an empty output sequence are rejected: catalog-defined
/// examples must always have at least one output line.
pub fn load_catalog_from_path(path: &Path) -> Result<ExampleCatalog> {
    let format = ConfigFormat::from_path(path).ok_or_else(|| Error::ConfigLoadFailed {
        path: path.to_path_buf(),
        reason: "Unsupported file extension (expected .toml or .json)".to_string(),
    })?;

    let content = fs::read_to_string(path).map_err(|e| Error::ConfigLoadFailed {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let file: CatalogFile = match format {
        ConfigFormat::Toml => toml::from_str(&content).map_err(|e| Error::ConfigParseFailed {
            format: "TOML".to_string(),
            reason: e.to_string(),
        })?,
        ConfigFormat::Json => {
            serde_json::from_str(&content).map_err(|e| Error::ConfigParseFailed {
                format: "JSON".to_string(),
                reason: e.to_string(),
            })?
        }
    };

    if file.examples.is_empty() {
        return Err(Error::EmptyCatalog {
            path: path.to_path_buf(),
        });
    }

    let mut entries = Vec::with_capacity(file.examples.len());
    for entry in file.examples {
        if entry.output.is_empty() {
            return Err(Error::ConfigValidationFailed {
                field: format!("examples.{}", entry.name),
                reason: "output must contain at least one line".to_string(),
            });
        }
        entries.push(Example::new(entry.name, entry.source, entry.output));
    }

    info!("Catalog loaded from {} ({} examples)", path.display(), entries.len());
    Ok(ExampleCatalog::from_entries(entries))
}
