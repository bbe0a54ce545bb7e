//! Host configuration parsed from environment variables.

use std::net::{Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT: '{0}'")]
    InvalidPort(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub port: u16,
    /// Directory holding the static portfolio sections.
    pub site_dir: PathBuf,
}

impl SiteConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `SITE_DIR`: default `site/` next to this crate's manifest
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPort`] when `PORT` is set but is not a
    /// valid port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = std::env::var("PORT").ok();
        let site_dir = std::env::var("SITE_DIR").ok();
        Self::from_values(port.as_deref(), site_dir.as_deref())
    }

    /// Build config from raw values; `None` or blank selects the default.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPort`] for unparsable ports.
    pub fn from_values(port: Option<&str>, site_dir: Option<&str>) -> Result<Self, ConfigError> {
        let port = match port.map(str::trim).filter(|raw| !raw.is_empty()) {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw.to_owned()))?,
            None => DEFAULT_PORT,
        };
        let site_dir = site_dir
            .map(str::trim)
            .filter(|raw| !raw.is_empty())
            .map_or_else(default_site_dir, PathBuf::from);

        Ok(Self { port, site_dir })
    }

    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}

fn default_site_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("site")
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
