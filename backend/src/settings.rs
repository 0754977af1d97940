//! Process settings loaded via OrthoConfig.
//!
//! Every field can be set through a `KNOWLEDGE_`-prefixed environment
//! variable (for example `KNOWLEDGE_MONGO_URI`), a CLI flag or a config file.
//! Unset values fall back to the defaults exposed by the accessors.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;
use url::Url;

use crate::outbound::persistence::MongoConfig;

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);
const DEFAULT_PORT: u16 = 8085;
const DEFAULT_MONGO_URI: &str = "mongodb://127.0.0.1:27017/";
const DEFAULT_MONGO_DATABASE: &str = "knowledge-backend";
const DEFAULT_ENVIRONMENT: &str = "production";
const DEVELOPMENT: &str = "development";

/// Rejected configuration values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    /// `http_proxy` is set but is not an absolute URL.
    #[error("http_proxy is not a valid URL: {0}")]
    InvalidProxy(String),
}

/// Settings for the knowledge backend process.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "KNOWLEDGE")]
pub struct AppSettings {
    /// Interface to bind the HTTP listener to.
    pub host: Option<IpAddr>,
    /// TCP port for the HTTP listener.
    pub port: Option<u16>,
    /// MongoDB connection string.
    pub mongo_uri: Option<String>,
    /// Database holding the `knowledgeGroups` collection.
    pub mongo_database: Option<String>,
    /// Outbound proxy advertised by the deployment. Validated and logged.
    pub http_proxy: Option<String>,
    /// Deployment environment; `development` switches to human-readable logs.
    pub environment: Option<String>,
    /// `tracing` filter directive such as `info` or `knowledge_backend=debug`.
    pub log_filter: Option<String>,
}

impl AppSettings {
    /// Socket address the HTTP server binds to.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(
            self.host.unwrap_or(DEFAULT_HOST),
            self.port.unwrap_or(DEFAULT_PORT),
        )
    }

    /// Connection settings for the document store.
    pub fn mongo(&self) -> MongoConfig {
        MongoConfig::new(
            self.mongo_uri.as_deref().unwrap_or(DEFAULT_MONGO_URI),
            self.mongo_database
                .as_deref()
                .unwrap_or(DEFAULT_MONGO_DATABASE),
        )
    }

    /// Configured environment name.
    pub fn environment(&self) -> &str {
        self.environment.as_deref().unwrap_or(DEFAULT_ENVIRONMENT)
    }

    /// Whether logs should be rendered for humans rather than collectors.
    pub fn is_development(&self) -> bool {
        self.environment().eq_ignore_ascii_case(DEVELOPMENT)
    }

    /// Explicit log filter, if configured.
    pub fn log_filter(&self) -> Option<&str> {
        self.log_filter.as_deref().filter(|value| !value.trim().is_empty())
    }

    /// Parse the configured proxy. Blank values count as unset.
    ///
    /// # Errors
    /// Returns [`SettingsError::InvalidProxy`] when the value is not a URL.
    pub fn http_proxy(&self) -> Result<Option<Url>, SettingsError> {
        match self.http_proxy.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(raw) => Url::parse(raw)
                .map(Some)
                .map_err(|_| SettingsError::InvalidProxy(raw.to_owned())),
        }
    }
}
