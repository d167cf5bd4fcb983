use anyhow::{Context, Result};
use clap::ValueEnum;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::cli::CliArgs;

/// Environment variable naming the runtime mode
pub const MODE_ENV_VAR: &str = "YEARPROG_ENV";

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Config {
    pub version: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<RuntimeMode>,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct UiConfig {
    pub show_breakdown: bool,
    pub show_totals: bool,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
pub struct LogConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

/// Whether developer controls are available
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Default, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RuntimeMode {
    #[default]
    Development,
    Production,
}

impl RuntimeMode {
    /// Only the exact value `production` selects production mode
    pub fn from_env_value(value: &str) -> Self {
        if value == "production" {
            RuntimeMode::Production
        } else {
            RuntimeMode::Development
        }
    }

    pub fn debug_controls(self) -> bool {
        self == RuntimeMode::Development
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: 1,
            mode: None,
            ui: UiConfig::default(),
            log: LogConfig::default(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_breakdown: true,
            show_totals: true,
        }
    }
}

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("", "", "yearprog").context("Failed to determine project directories")
}

pub fn get_default_config_path() -> Result<PathBuf> {
    Ok(project_dirs()?.config_dir().join("yearprog.toml"))
}

pub fn get_default_log_path() -> Result<PathBuf> {
    Ok(project_dirs()?.data_local_dir().join("yearprog.log"))
}

/// First match wins: CLI flag, environment, config file, development
pub fn resolve_mode(
    cli: Option<RuntimeMode>,
    env: Option<&str>,
    file: Option<RuntimeMode>,
) -> RuntimeMode {
    cli.or_else(|| env.map(RuntimeMode::from_env_value))
        .or(file)
        .unwrap_or_default()
}

impl Config {
    pub fn load(config_path: Option<PathBuf>) -> Result<Self> {
        let path = match config_path {
            Some(p) => p,
            None => get_default_config_path()?,
        };

        if !path.exists() {
            let default_config = Config::default();
            // Create directory if it doesn't exist
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).context("Failed to create config directory")?;
            }
            default_config.save(&path)?;
            return Ok(default_config);
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    pub fn save<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let contents =
            toml::to_string_pretty(self).context("Failed to serialize config to TOML")?;

        fs::write(&path, contents).with_context(|| {
            format!("Failed to write config file: {}", path.as_ref().display())
        })?;

        Ok(())
    }
}

/// Everything the app needs, resolved once at startup
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub mode: RuntimeMode,
    pub ui: UiConfig,
    pub log_file: PathBuf,
}

impl Settings {
    pub fn resolve(cli_args: CliArgs, env_mode: Option<&str>) -> Result<Self> {
        let config = Config::load(cli_args.config)?;
        let mode = resolve_mode(cli_args.mode, env_mode, config.mode);

        let log_file = match config.log.file {
            Some(file) => file,
            None => get_default_log_path()?,
        };

        Ok(Self {
            mode,
            ui: config.ui,
            log_file,
        })
    }

    pub fn debug_controls(&self) -> bool {
        self.mode.debug_controls()
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            mode: RuntimeMode::default(),
            ui: UiConfig::default(),
            log_file: PathBuf::from("yearprog.log"),
        }
    }
}
