#[cfg(feature = "config")]
use core_config::{ConfigError, FromEnv, env_optional, env_parse_or_default, env_required};

/// Database used when neither `DATABASE_NAME` nor the connection string names one.
pub const DEFAULT_DATABASE: &str = "event_planner";

/// MongoDB database configuration
///
/// Can be constructed manually or loaded from environment variables (with `config` feature).
///
/// # Example
///
/// ```ignore
/// use database::mongodb::MongoConfig;
///
/// let config = MongoConfig::new("mongodb://localhost:27017").with_database("events");
///
/// // From environment variables (requires `config` feature)
/// let config = MongoConfig::from_env_optional()?;
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MongoConfig {
    /// Connection string.
    /// Format: mongodb://[username:password@]host[:port][/database][?options]
    pub url: String,

    /// Explicit database name. When `None`, the database from the connection string
    /// is used, then [`DEFAULT_DATABASE`].
    pub database: Option<String>,

    /// Optional application name for server logs
    pub app_name: Option<String>,

    pub max_pool_size: u32,
    pub min_pool_size: u32,
    pub connect_timeout_secs: u64,
    pub server_selection_timeout_secs: u64,
}

impl MongoConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            database: None,
            app_name: None,
            max_pool_size: 100,
            min_pool_size: 0,
            connect_timeout_secs: 10,
            server_selection_timeout_secs: 30,
        }
    }

    pub fn with_database(mut self, database: impl Into<String>) -> Self {
        self.database = Some(database.into());
        self
    }

    /// Set the application name for server logs
    pub fn with_app_name(mut self, app_name: impl Into<String>) -> Self {
        self.app_name = Some(app_name.into());
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Connection string with any `user:password@` credentials replaced by `***`.
    pub fn redacted_url(&self) -> String {
        let Some(scheme_end) = self.url.find("://") else {
            return self.url.clone();
        };
        let rest = &self.url[scheme_end + 3..];
        let authority_end = rest.find('/').unwrap_or(rest.len());
        match rest[..authority_end].rfind('@') {
            Some(at) => format!("{}***{}", &self.url[..scheme_end + 3], &rest[at..]),
            None => self.url.clone(),
        }
    }
}

/// Load MongoConfig from environment variables
///
/// - `DATABASE_URL` (required) - connection string
/// - `DATABASE_NAME` (optional) - database name
/// - `MONGODB_APP_NAME` (optional) - application name for server logs
/// - `MONGODB_MAX_POOL_SIZE` (optional, default: 100)
/// - `MONGODB_MIN_POOL_SIZE` (optional, default: 0)
/// - `MONGODB_CONNECT_TIMEOUT_SECS` (optional, default: 10)
/// - `MONGODB_SERVER_SELECTION_TIMEOUT_SECS` (optional, default: 30)
#[cfg(feature = "config")]
impl FromEnv for MongoConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let url = env_required("DATABASE_URL")?;
        if url.trim().is_empty() {
            return Err(ConfigError::MissingEnvVar("DATABASE_URL".to_string()));
        }

        let defaults = Self::new(url.trim());

        Ok(Self {
            database: env_optional("DATABASE_NAME"),
            app_name: env_optional("MONGODB_APP_NAME"),
            max_pool_size: env_parse_or_default("MONGODB_MAX_POOL_SIZE", defaults.max_pool_size)?,
            min_pool_size: env_parse_or_default("MONGODB_MIN_POOL_SIZE", defaults.min_pool_size)?,
            connect_timeout_secs: env_parse_or_default(
                "MONGODB_CONNECT_TIMEOUT_SECS",
                defaults.connect_timeout_secs,
            )?,
            server_selection_timeout_secs: env_parse_or_default(
                "MONGODB_SERVER_SELECTION_TIMEOUT_SECS",
                defaults.server_selection_timeout_secs,
            )?,
            ..defaults
        })
    }
}

#[cfg(feature = "config")]
impl MongoConfig {
    /// Like [`FromEnv::from_env`], but a missing `DATABASE_URL` yields `Ok(None)`.
    ///
    /// Malformed optional settings are still reported as errors.
    pub fn from_env_optional() -> Result<Option<Self>, ConfigError> {
        match Self::from_env() {
            Ok(config) => Ok(Some(config)),
            Err(ConfigError::MissingEnvVar(key)) if key == "DATABASE_URL" => Ok(None),
            Err(e) => Err(e),
        }
    }
}
