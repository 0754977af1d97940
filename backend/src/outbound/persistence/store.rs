//! Shared MongoDB client handle.
//!
//! One [`MongoStore`] is opened at startup, shared by every repository and
//! closed on shutdown. Connecting pings the database so an unreachable store
//! fails the process before the listener binds.

use mongodb::bson::doc;
use mongodb::options::ClientOptions;
use mongodb::{Client, Database};
use tracing::info;

/// Errors raised while opening the store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The connection string was rejected or the server did not answer.
    #[error("failed to connect to document store: {message}")]
    Connect { message: String },
}

impl StoreError {
    /// Create a connect error with the given message.
    pub fn connect(message: impl Into<String>) -> Self {
        Self::Connect {
            message: message.into(),
        }
    }
}

/// Connection settings for the document store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MongoConfig {
    uri: String,
    database: String,
}

impl MongoConfig {
    /// Create a configuration for `database` on the server at `uri`.
    pub fn new(uri: impl Into<String>, database: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            database: database.into(),
        }
    }

    /// Get the connection string.
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// Get the database name.
    pub fn database(&self) -> &str {
        &self.database
    }
}

/// Process-wide MongoDB client bound to one database.
///
/// Cloning is cheap; clones share the driver's connection pool.
#[derive(Clone, Debug)]
pub struct MongoStore {
    client: Client,
    database: Database,
}

impl MongoStore {
    /// Open the client and verify the server answers a `ping`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Connect`] if the URI is invalid or the ping
    /// fails.
    pub async fn connect(config: &MongoConfig) -> Result<Self, StoreError> {
        let options = ClientOptions::parse(config.uri())
            .await
            .map_err(|err| StoreError::connect(err.to_string()))?;
        let client =
            Client::with_options(options).map_err(|err| StoreError::connect(err.to_string()))?;
        let database = client.database(config.database());

        database
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|err| StoreError::connect(err.to_string()))?;

        info!(database = config.database(), "connected to document store");
        Ok(Self { client, database })
    }

    /// Database holding the application's collections.
    pub fn database(&self) -> &Database {
        &self.database
    }

    /// Close the client, waiting for in-flight operations to finish.
    pub async fn shutdown(self) {
        self.client.shutdown().await;
        info!("document store connection closed");
    }
}
