//! Server settings loaded via OrthoConfig, and the resolved server config.

use std::net::SocketAddr;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use studio_backend::outbound::persistence::{DbPool, PoolConfig};

/// Settings read from `STUDIO_*` environment variables, CLI flags, and
/// configuration files.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "STUDIO")]
pub struct ServerSettings {
    /// PostgreSQL URL. Without one the server answers from an empty
    /// in-process catalogue.
    pub database_url: Option<String>,
    /// Socket address to listen on.
    #[ortho_config(default = "0.0.0.0:8080".to_owned())]
    pub bind_address: String,
    /// Maximum pooled database connections.
    pub pool_max_size: Option<u32>,
    /// Idle pooled connections kept open.
    pub pool_min_idle: Option<u32>,
    /// Seconds to wait for a pooled connection.
    pub pool_connection_timeout_secs: Option<u64>,
}

impl ServerSettings {
    /// Parse the configured bind address (`0.0.0.0:8080` unless overridden).
    ///
    /// # Errors
    ///
    /// Returns an error when the configured value is not a socket address.
    pub fn bind_addr(&self) -> std::io::Result<SocketAddr> {
        let raw = self.bind_address.as_str();
        raw.parse().map_err(|err| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("invalid bind address {raw:?}: {err}"),
            )
        })
    }

    /// Pool configuration, when a database URL is set.
    #[must_use]
    pub fn pool_config(&self) -> Option<PoolConfig> {
        let url = self.database_url.as_deref()?;
        let mut config = PoolConfig::new(url);
        if let Some(max_size) = self.pool_max_size {
            config = config.with_max_size(max_size);
        }
        if let Some(min_idle) = self.pool_min_idle {
            config = config.with_min_idle(Some(min_idle));
        }
        if let Some(secs) = self.pool_connection_timeout_secs {
            config = config.with_connection_timeout(Duration::from_secs(secs));
        }
        Some(config)
    }
}

/// Resolved configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: Option<DbPool>,
}

impl ServerConfig {
    /// Construct a configuration bound to `bind_addr` without a database.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            db_pool: None,
        }
    }

    /// Serve the catalogue from PostgreSQL through `pool`.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }
}
