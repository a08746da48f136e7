use core_config::{AppInfo, FromEnv, app_info, server::ServerConfig};

// Import MongoDB config from the database library
use database::mongodb::MongoConfig;

// Re-export Environment for use in other modules
pub use core_config::Environment;

/// Application-specific configuration
/// Composes shared config components from the `config` library
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    /// `None` when `DATABASE_URL` is not set; the API then runs without a database.
    pub database: Option<MongoConfig>,
    pub server: ServerConfig,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let database = MongoConfig::from_env_optional()?;
        let server = ServerConfig::from_env()?;

        Ok(Self {
            app: app_info!(),
            database,
            server,
            environment,
        })
    }

    pub fn database_url_set(&self) -> bool {
        self.database.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_without_database_url() {
        temp_env::with_vars(
            [
                ("DATABASE_URL", None::<&str>),
                ("PORT", None),
                ("APP_ENV", Some("production")),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert!(config.database.is_none());
                assert!(!config.database_url_set());
                assert_eq!(config.server.port, 8000);
                assert!(config.environment.is_production());
                assert_eq!(config.app.name, "events_api");
            },
        );
    }

    #[test]
    fn test_config_with_database_url() {
        temp_env::with_vars(
            [
                ("DATABASE_URL", Some("mongodb://localhost:27017/planner")),
                ("DATABASE_NAME", Some("events")),
                ("PORT", Some("9000")),
            ],
            || {
                let config = Config::from_env().unwrap();
                let database = config.database.as_ref().unwrap();
                assert_eq!(database.url(), "mongodb://localhost:27017/planner");
                assert_eq!(database.database.as_deref(), Some("events"));
                assert_eq!(config.server.port, 9000);
            },
        );
    }

    #[test]
    fn test_invalid_port_is_an_error() {
        temp_env::with_var("PORT", Some("eighty"), || {
            assert!(Config::from_env().is_err());
        });
    }
}
