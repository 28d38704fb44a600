use core_config::{AppInfo, FromEnv, app_info, env_parse, server::ServerConfig};
use database::postgres::PostgresConfig;
use std::time::Duration;

pub use core_config::Environment;

const DEFAULT_SHUTDOWN_TIMEOUT_SECS: &str = "30";

/// Application configuration, built once at startup and passed down explicitly
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub database: PostgresConfig,
    pub server: ServerConfig,
    pub environment: Environment,
    /// Budget for closing connections after the server stops accepting requests
    pub shutdown_timeout: Duration,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let database = PostgresConfig::from_env()?;
        let server = ServerConfig::from_env()?;
        let shutdown_timeout =
            Duration::from_secs(env_parse("SHUTDOWN_TIMEOUT_SECS", DEFAULT_SHUTDOWN_TIMEOUT_SECS)?);

        Ok(Self {
            app: app_info!().with_env_overrides(),
            database,
            server,
            environment,
            shutdown_timeout,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_environment() {
        temp_env::with_vars_unset(
            [
                "APP_ENV",
                "APP_NAME",
                "DATABASE_URL",
                "PORT",
                "SHUTDOWN_TIMEOUT_SECS",
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.app.name, "users_api");
                assert_eq!(config.server.port, 8000);
                assert_eq!(config.shutdown_timeout, Duration::from_secs(30));
                assert!(config.environment.is_development());
            },
        );
    }

    #[test]
    fn overrides_from_environment() {
        temp_env::with_vars(
            [
                ("APP_NAME", Some("people")),
                ("SHUTDOWN_TIMEOUT_SECS", Some("5")),
                ("DATABASE_URL", Some("postgres://u:p@db:5432/people")),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.app.name, "people");
                assert_eq!(config.shutdown_timeout, Duration::from_secs(5));
                assert_eq!(config.database.url(), "postgres://u:p@db:5432/people");
            },
        );
    }

    #[test]
    fn invalid_shutdown_timeout_is_an_error() {
        temp_env::with_var("SHUTDOWN_TIMEOUT_SECS", Some("soon"), || {
            assert!(Config::from_env().is_err());
        });
    }
}
