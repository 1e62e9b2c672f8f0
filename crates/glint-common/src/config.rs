//! ---
//! glint_section: "01-core-functionality"
//! glint_subsection: "module"
//! glint_type: "source"
//! glint_scope: "code"
//! glint_description: "TOML configuration for the renderers and the CLI."
//! glint_version: "v0.0.0-prealpha"
//! glint_owner: "tbd"
//! ---
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use glint_model::{ConsoleOptions, FormatOptions};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::logging::LogFormat;

fn default_adapter() -> AdapterKind {
    AdapterKind::Fancy
}

fn default_color() -> bool {
    true
}

fn default_log_format() -> LogFormat {
    LogFormat::Pretty
}

/// Primary configuration object for the Glint tooling.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub format: FormatConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// An [`AppConfig`] together with the file it came from.
#[derive(Debug, Clone)]
pub struct LoadedAppConfig {
    pub config: AppConfig,
    /// `None` when no file was found and defaults are in effect.
    pub source: Option<PathBuf>,
}

impl AppConfig {
    pub const ENV_CONFIG_PATH: &'static str = "GLINT_CONFIG";

    /// Load configuration, respecting the `GLINT_CONFIG` override.
    pub fn load<P: AsRef<Path>>(candidates: &[P]) -> Result<Self> {
        Ok(Self::load_with_source(candidates)?.config)
    }

    /// Load configuration together with the effective source path.
    ///
    /// Missing candidates are skipped; when none exists the defaults apply.
    /// A path named by `GLINT_CONFIG` must exist.
    pub fn load_with_source<P: AsRef<Path>>(candidates: &[P]) -> Result<LoadedAppConfig> {
        if let Ok(env_path) = std::env::var(Self::ENV_CONFIG_PATH) {
            if !env_path.trim().is_empty() {
                let path = PathBuf::from(env_path);
                let config = Self::from_path(&path)?;
                return Ok(LoadedAppConfig {
                    config,
                    source: Some(path),
                });
            }
        }

        for candidate in candidates {
            let path = candidate.as_ref();
            if path.exists() {
                let config = Self::from_path(path)?;
                return Ok(LoadedAppConfig {
                    config,
                    source: Some(path.to_path_buf()),
                });
            }
        }

        debug!("no configuration file found, using defaults");
        Ok(LoadedAppConfig {
            config: Self::default(),
            source: None,
        })
    }

    /// Read and validate a single TOML file.
    pub fn from_path(path: &Path) -> Result<Self> {
        debug!(config_path = %path.display(), "loading configuration");
        let contents = fs::read_to_string(path)
            .with_context(|| format!("unable to read config file {}", path.display()))?;
        let config = toml::from_str::<AppConfig>(&contents)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values serde accepts but the tooling cannot use.
    pub fn validate(&self) -> Result<()> {
        self.logging.validate()
    }
}

/// Which adapter renders entries.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum AdapterKind {
    /// Plain text lines, ISO timestamps, bracketed namespaces.
    Basic,
    /// Color-decorated lines with local clock timestamps.
    Fancy,
    /// Header plus raw arguments handed to a console function.
    Console,
}

impl std::str::FromStr for AdapterKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "basic" => Ok(AdapterKind::Basic),
            "fancy" => Ok(AdapterKind::Fancy),
            "console" => Ok(AdapterKind::Console),
            other => Err(format!("unknown adapter: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FormatConfig {
    #[serde(default = "default_adapter")]
    pub adapter: AdapterKind,
    #[serde(default = "default_color")]
    pub color: bool,
    #[serde(default)]
    pub options: FormatOptions,
    #[serde(default)]
    pub console: ConsoleOptions,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            adapter: default_adapter(),
            color: default_color(),
            options: FormatOptions::default(),
            console: ConsoleOptions::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoggingConfig {
    #[serde(default)]
    pub directory: Option<PathBuf>,
    #[serde(default = "default_log_format")]
    pub format: LogFormat,
    #[serde(default)]
    pub file_prefix: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            directory: None,
            format: default_log_format(),
            file_prefix: None,
        }
    }
}

impl LoggingConfig {
    pub fn validate(&self) -> Result<()> {
        if let Some(prefix) = &self.file_prefix {
            if prefix.trim().is_empty() {
                return Err(anyhow!("logging file_prefix cannot be empty"));
            }
        }
        Ok(())
    }
}
