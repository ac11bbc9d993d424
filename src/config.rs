//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/rtfnodes/rtfnodes.toml`
//! 3. Local config: file passed with `--config`
//! 4. Environment variables: `RTFNODES_*` prefix, `__` between sections

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("environment: {0}")]
    Env(#[from] ConfigError),

    #[error("invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// How collections are printed by the CLI.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DisplayConfig {
    /// Colorize output (NO_COLOR still wins)
    pub color: bool,
    /// Print keyword/control parameters
    pub show_parameters: bool,
    /// Root label of the tree view
    pub tree_label: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            color: true,
            show_parameters: true,
            tree_label: "nodes".into(),
        }
    }
}

/// Raw display config for intermediate parsing (`None` means "not specified").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawDisplayConfig {
    pub color: Option<bool>,
    pub show_parameters: Option<bool>,
    pub tree_label: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub initial_capacity: Option<usize>,
    pub display: RawDisplayConfig,
}

/// Upper bound for `initial_capacity`; it is a preallocation hint, not a limit
/// on collection size.
pub const MAX_INITIAL_CAPACITY: usize = 1 << 16;

/// Unified configuration for rtfnodes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Slots reserved up front when the CLI builds a collection
    pub initial_capacity: usize,
    pub display: DisplayConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            initial_capacity: 16,
            display: DisplayConfig::default(),
        }
    }
}

/// Get the XDG config directory for rtfnodes.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "rtfnodes").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("rtfnodes.toml"))
}

/// Unset keys are skipped; values that fail to convert are errors.
fn env_value<T>(key: &str, result: Result<T, ConfigError>) -> Result<Option<T>, SettingsError> {
    match result {
        Ok(val) => Ok(Some(val)),
        Err(ConfigError::NotFound(_)) => Ok(None),
        Err(e) => Err(SettingsError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        }),
    }
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, SettingsError> {
    let content = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&content).map_err(|source| SettingsError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

impl Settings {
    /// Overlay wins where it specifies a value.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            initial_capacity: overlay.initial_capacity.unwrap_or(self.initial_capacity),
            display: DisplayConfig {
                color: overlay.display.color.unwrap_or(self.display.color),
                show_parameters: overlay
                    .display
                    .show_parameters
                    .unwrap_or(self.display.show_parameters),
                tree_label: overlay
                    .display
                    .tree_label
                    .clone()
                    .unwrap_or_else(|| self.display.tree_label.clone()),
            },
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `local` - Optional config file given on the command line; must exist
    pub fn load(local: Option<&Path>) -> Result<Self, SettingsError> {
        let global = global_config_path().filter(|p| p.exists());
        Self::load_layers(
            global.as_deref(),
            local,
            Environment::with_prefix("RTFNODES")
                .prefix_separator("_")
                .separator("__"),
        )
    }

    #[instrument(level = "debug", skip(env))]
    pub(crate) fn load_layers(
        global: Option<&Path>,
        local: Option<&Path>,
        env: Environment,
    ) -> Result<Self, SettingsError> {
        // 1. Start with defaults
        let mut current = Self::default();

        // 2. Global config
        if let Some(path) = global {
            current = current.merge_with(&load_raw_settings(path)?);
            debug!("applied global config {}", path.display());
        }

        // 3. Local config
        if let Some(path) = local {
            current = current.merge_with(&load_raw_settings(path)?);
            debug!("applied local config {}", path.display());
        }

        // 4. Environment overrides
        let current = Self::apply_env_overrides(current, env)?;
        current.validate()?;
        Ok(current)
    }

    fn validate(&self) -> Result<(), SettingsError> {
        if self.initial_capacity > MAX_INITIAL_CAPACITY {
            return Err(SettingsError::InvalidValue {
                key: "initial_capacity".into(),
                message: format!("{} exceeds maximum {}", self.initial_capacity, MAX_INITIAL_CAPACITY),
            });
        }
        Ok(())
    }

    /// Apply RTFNODES_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self, env: Environment) -> Result<Self, SettingsError> {
        let config = Config::builder().add_source(env).build()?;

        if let Some(val) = env_value("initial_capacity", config.get_int("initial_capacity"))? {
            settings.initial_capacity =
                usize::try_from(val).map_err(|e| SettingsError::InvalidValue {
                    key: "initial_capacity".into(),
                    message: e.to_string(),
                })?;
        }
        if let Some(val) = env_value("display.color", config.get_bool("display.color"))? {
            settings.display.color = val;
        }
        if let Some(val) = env_value("display.show_parameters", config.get_bool("display.show_parameters"))? {
            settings.display.show_parameters = val;
        }
        if let Some(val) = env_value("display.tree_label", config.get_string("display.tree_label"))? {
            settings.display.tree_label = val;
        }

        Ok(settings)
    }

    /// Render as TOML (for `config show`).
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
