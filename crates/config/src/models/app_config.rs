use config::{Config as ConfigBuilder, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::{logging::LogConfig, server::ServerConfig};
use crate::validation::ConfigValidator;
use crate::{ConfigError, ConfigResult};

/// Prefix for `CRON_ECHO_SERVER__PORT` style overrides.
pub const ENV_PREFIX: &str = "CRON_ECHO";

/// Plain `PORT` variable honoured by most hosting platforms.
pub const PORT_ENV_VAR: &str = "PORT";

const DEFAULT_PATHS: [&str; 2] = ["config/cron-echo.toml", "cron-echo.toml"];

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LogConfig,
}

impl AppConfig {
    /// Load configuration from defaults, an optional TOML file and the process environment.
    pub fn load(config_path: Option<&str>) -> ConfigResult<Self> {
        let env: config::Map<String, String> = std::env::vars().collect();
        Self::load_with_env(config_path, &env)
    }

    /// Same as [`AppConfig::load`] with an explicit environment snapshot.
    ///
    /// Precedence, lowest first: defaults, TOML file, `CRON_ECHO_*` variables, `PORT`.
    pub fn load_with_env(
        config_path: Option<&str>,
        env: &config::Map<String, String>,
    ) -> ConfigResult<Self> {
        let defaults = AppConfig::default();
        let mut builder = ConfigBuilder::builder()
            .set_default("server.host", defaults.server.host.as_str())?
            .set_default("server.port", i64::from(defaults.server.port))?
            .set_default("server.cors_enabled", defaults.server.cors_enabled)?
            .set_default(
                "server.shutdown_timeout_seconds",
                defaults.server.shutdown_timeout_seconds as i64,
            )?
            .set_default("logging.level", defaults.logging.level.to_string())?
            .set_default("logging.format", defaults.logging.format.to_string())?;

        match config_path {
            Some(path) => {
                if !Path::new(path).exists() {
                    return Err(ConfigError::File(format!("config file not found: {path}")));
                }
                builder = builder.add_source(File::new(path, FileFormat::Toml));
            }
            None => {
                if let Some(path) = DEFAULT_PATHS.iter().find(|p| Path::new(p).exists()) {
                    builder = builder.add_source(File::new(path, FileFormat::Toml));
                }
            }
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
                .source(Some(env.clone())),
        );

        if let Some(port) = env.get(PORT_ENV_VAR) {
            let port: u16 = port.trim().parse().map_err(|_| {
                ConfigError::Environment(format!("{PORT_ENV_VAR} must be a port number, got '{port}'"))
            })?;
            builder = builder.set_override("server.port", i64::from(port))?;
        }

        let config: AppConfig = builder.build()?.try_deserialize()?;
        config.validate()?;

        Ok(config)
    }
}

impl ConfigValidator for AppConfig {
    fn validate(&self) -> ConfigResult<()> {
        self.server.validate()
    }
}
