//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section.

pub mod app;
pub mod logging;
pub mod roster;
pub mod scheduler;
pub mod worker;


use serde::{Deserialize, Serialize};

use self::app::ServerConfig;
use self::logging::LoggingConfig;
use self::roster::{AgentConfig, default_roster};
use self::scheduler::SchedulerConfig;
use self::worker::WorkerConfig;

use crate::error::AppError;

/// Root application configuration.
///
/// This struct is the top-level deserialization target for the merged
/// TOML configuration files (default.toml + environment overlay).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Admission and assignment policy.
    #[serde(default)]
    pub scheduler: SchedulerConfig,
    /// Background tick driver settings.
    #[serde(default)]
    pub worker: WorkerConfig,
    /// Agent roster.
    #[serde(default = "default_roster")]
    pub roster: Vec<AgentConfig>,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            scheduler: SchedulerConfig::default(),
            worker: WorkerConfig::default(),
            roster: default_roster(),
            logging: LoggingConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from TOML files.
    ///
    /// Merges the default configuration with an environment-specific overlay
    /// and environment variables prefixed with `CHATDESK_`.
    pub fn load(env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("CHATDESK")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        let app: Self = config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))?;

        app.validate()?;
        Ok(app)
    }

    /// Check cross-field constraints that serde cannot express.
    ///
    /// Roster entries are validated when the roster is built.
    pub fn validate(&self) -> Result<(), AppError> {
        self.scheduler.validate()?;

        if self.worker.assign_interval_ms == 0 || self.worker.monitor_interval_ms == 0 {
            return Err(AppError::configuration(
                "worker intervals must be positive",
            ));
        }

        Ok(())
    }
}
