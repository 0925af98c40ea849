//! Server configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BIND_ADDR: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT {value:?}: expected an integer in 1..=65535")]
    InvalidPort { value: String },
    #[error("invalid BIND_ADDR {value:?}: expected an IP address")]
    InvalidBindAddr { value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub port: u16,
    pub bind_addr: IpAddr,
    /// Directory served for any path no route claims (`/images/...`).
    pub public_dir: PathBuf,
}

impl SiteConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `BIND_ADDR`: default `0.0.0.0`
    /// - `PUBLIC_DIR`: default `<crate>/public`
    ///
    /// Blank values count as unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`SiteConfig::from_env`] with an injectable variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let port = match read("PORT") {
            None => DEFAULT_PORT,
            Some(raw) => match raw.parse::<u16>() {
                Ok(port) if port != 0 => port,
                _ => return Err(ConfigError::InvalidPort { value: raw }),
            },
        };

        let bind_addr = match read("BIND_ADDR") {
            None => DEFAULT_BIND_ADDR,
            Some(raw) => raw.parse::<IpAddr>().map_err(|_| ConfigError::InvalidBindAddr { value: raw })?,
        };

        let public_dir = read("PUBLIC_DIR").map_or_else(default_public_dir, PathBuf::from);

        Ok(Self { port, bind_addr, public_dir })
    }

    #[must_use]
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}

fn default_public_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("public")
}
