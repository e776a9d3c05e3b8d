//! Server settings.

use std::{net::SocketAddr, path::PathBuf};

use serde::Deserialize;

use crate::ServerError;

/// Where to listen and what to serve.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ServerConfig {
    /// Listen address.
    #[serde(default = "default_site_addr")]
    pub site_addr: String,

    /// Directory holding the built site.
    #[serde(default = "default_site_root")]
    pub site_root: PathBuf,
}

fn default_site_addr() -> String {
    "127.0.0.1:3000".to_string()
}

fn default_site_root() -> PathBuf {
    PathBuf::from("target/site")
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            site_addr: default_site_addr(),
            site_root: default_site_root(),
        }
    }
}

impl ServerConfig {
    /// Load from an optional `Server.toml`, then `LEPTOS_*` (as exported by
    /// cargo-leptos), then `SQWISH_DOCS__*` environment overrides.
    pub fn load() -> Result<Self, ServerError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name("Server").required(false))
            .add_source(config::Environment::with_prefix("LEPTOS"))
            .add_source(config::Environment::with_prefix("SQWISH_DOCS").separator("__"))
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// The parsed listen address.
    pub fn socket_addr(&self) -> Result<SocketAddr, ServerError> {
        self.site_addr
            .parse()
            .map_err(|source| ServerError::Addr {
                addr: self.site_addr.clone(),
                source,
            })
    }
}
