//! Layered configuration loading for the Da Liu Ren engine using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`LIUREN_*` prefix, `__` as separator)
//! 2. Project-level `.liuren/config.toml`
//! 3. User-level `~/.config/liuren/config.toml`
//! 4. Built-in defaults
//!
//! `LIUREN_ENGINE__DAY_START_HOUR=5` maps to `engine.day_start_hour`.
//!
//! ```no_run
//! use liuren_config::LiurenConfig;
//!
//! let config = LiurenConfig::load().expect("config");
//! let options = config.chart_options().expect("valid options");
//! ```

mod engine;
mod error;
mod report;

pub use engine::EngineConfig;
pub use error::ConfigError;
pub use report::ReportConfig;

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use liuren_base::DaylightWindow;
use liuren_chart::ChartOptions;
use serde::{Deserialize, Serialize};

/// Project-local config file, relative to the working directory.
pub const PROJECT_CONFIG_PATH: &str = ".liuren/config.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct LiurenConfig {
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

impl LiurenConfig {
    /// Load configuration from defaults, TOML files and the environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load with an explicit TOML file merged above the project file.
    pub fn load_with_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::InvalidValue {
                field: "config".into(),
                reason: format!("file not found: {}", path.display()),
            });
        }
        let figment = Self::figment_from(
            Self::global_config_path(),
            PathBuf::from(PROJECT_CONFIG_PATH),
        )
        .merge(Toml::file(path))
        .merge(Env::prefixed("LIUREN_").split("__"));
        figment.extract().map_err(ConfigError::from)
    }

    /// Build the default provider chain.
    pub fn figment() -> Figment {
        Self::figment_from(
            Self::global_config_path(),
            PathBuf::from(PROJECT_CONFIG_PATH),
        )
        .merge(Env::prefixed("LIUREN_").split("__"))
    }

    /// Defaults, then `global` and `project` TOML files when they exist.
    pub fn figment_from(global: Option<PathBuf>, project: PathBuf) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = global {
            if global_path.exists() {
                tracing::debug!(path = %global_path.display(), "merging user config");
                figment = figment.merge(Toml::file(global_path));
            }
        }

        if project.exists() {
            tracing::debug!(path = %project.display(), "merging project config");
            figment = figment.merge(Toml::file(project));
        }

        figment
    }

    /// Path to the user-global config file.
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("liuren").join("config.toml"))
    }

    /// Validate the engine section into chart options.
    pub fn chart_options(&self) -> Result<ChartOptions, ConfigError> {
        let e = &self.engine;
        let options = ChartOptions {
            daylight: DaylightWindow {
                start_hour: e.day_start_hour,
                end_hour: e.day_end_hour,
            },
            direction: e.direction,
            include_analysis: e.include_analysis,
            include_interpretation: e.include_interpretation,
        };
        options
            .validate()
            .map_err(|error| ConfigError::InvalidValue {
                field: "engine".into(),
                reason: error.to_string(),
            })?;
        Ok(options)
    }
}
