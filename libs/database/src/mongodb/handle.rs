use mongodb::{Client, Database};
use tracing::{info, warn};

use super::{DEFAULT_DATABASE, MongoConfig, connect_from_config};
use crate::store::{StoreError, StoreResult};

/// Process-wide database handle.
///
/// Established once at startup and shared by every request. When no connection
/// string is configured, or it cannot be parsed, the handle is `Unavailable` and
/// every store operation fails with [`StoreError::Unavailable`] instead of
/// aborting the process.
#[derive(Clone, Debug)]
pub enum MongoHandle {
    Connected { client: Client, database: Database },
    Unavailable { reason: String },
}

impl MongoHandle {
    /// Build the handle from an optional config, never failing.
    pub async fn establish(config: Option<&MongoConfig>) -> Self {
        let Some(config) = config else {
            warn!("DATABASE_URL not set, running without a database");
            return Self::unavailable("DATABASE_URL not set");
        };

        match connect_from_config(config).await {
            Ok(client) => {
                let name = config
                    .database
                    .clone()
                    .or_else(|| client.default_database().map(|db| db.name().to_string()))
                    .unwrap_or_else(|| DEFAULT_DATABASE.to_string());
                info!(database = %name, "MongoDB handle ready");
                Self::connected(client, &name)
            }
            Err(e) => {
                warn!(error = %e, "MongoDB unavailable, continuing without a database");
                Self::unavailable(e.to_string())
            }
        }
    }

    pub fn connected(client: Client, database: &str) -> Self {
        let database = client.database(database);
        Self::Connected { client, database }
    }

    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable {
            reason: reason.into(),
        }
    }

    pub fn is_connected(&self) -> bool {
        matches!(self, Self::Connected { .. })
    }

    /// The selected database, or [`StoreError::Unavailable`].
    pub fn database(&self) -> StoreResult<&Database> {
        match self {
            Self::Connected { database, .. } => Ok(database),
            Self::Unavailable { reason } => Err(StoreError::Unavailable(reason.clone())),
        }
    }

    pub fn database_name(&self) -> Option<&str> {
        match self {
            Self::Connected { database, .. } => Some(database.name()),
            Self::Unavailable { .. } => None,
        }
    }

    pub fn client(&self) -> Option<&Client> {
        match self {
            Self::Connected { client, .. } => Some(client),
            Self::Unavailable { .. } => None,
        }
    }
}
