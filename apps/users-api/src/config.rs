use axum_helpers::ErrorStatusMode;
use core_config::{AppInfo, ConfigError, FromEnv, app_info, env_parse_or, server::ServerConfig};

// Import database configs from the database library
use database::postgres::PostgresConfig;

// Re-export Environment for use in other modules
pub use core_config::Environment;

/// Application-specific configuration
/// Composes shared config components from the `config` library
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub database: PostgresConfig,
    pub server: ServerConfig,
    pub environment: Environment,
    /// Apply pending migrations before serving (`RUN_MIGRATIONS`, default true)
    pub run_migrations: bool,
    /// `ERROR_STATUS_MODE`: `typed` (default) or `legacy`
    pub error_status_mode: ErrorStatusMode,
}

impl FromEnv for Config {
    fn from_env() -> Result<Self, ConfigError> {
        let environment = Environment::from_env();
        let database = PostgresConfig::from_env()?; // Required - will fail if not set
        let server = ServerConfig::from_env()?; // Uses defaults: HOST=0.0.0.0, PORT=8080
        let run_migrations = env_parse_or("RUN_MIGRATIONS", true)?;
        let error_status_mode = env_parse_or("ERROR_STATUS_MODE", ErrorStatusMode::default())?;

        Ok(Self {
            app: app_info!(),
            database,
            server,
            environment,
            run_migrations,
            error_status_mode,
        })
    }
}
