// Configuration module
// The port and serving root are fixed for the process lifetime: no config
// file, CLI flags, or environment variables are consulted.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

/// The fixed listening port.
pub const DEFAULT_PORT: u16 = 8080;

/// Immutable server configuration, built once in `main` and passed down.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// TCP port to listen on (all interfaces).
    pub port: u16,
    /// Directory tree exposed for serving; every request path resolves
    /// inside it. Canonical (symlinks resolved) so containment checks
    /// against it are reliable.
    pub root: PathBuf,
}

impl ServerConfig {
    /// Build the configuration from the working directory at startup.
    pub fn from_cwd() -> std::io::Result<Self> {
        let root = std::env::current_dir()?.canonicalize()?;
        Ok(Self {
            port: DEFAULT_PORT,
            root,
        })
    }

    /// Address to bind: all interfaces on the configured port.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), self.port)
    }
}
