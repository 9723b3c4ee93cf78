//! HTTP listener configuration parsing from environment variables.

use anyhow::{Context, Result};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Server environment configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ServerEnvConfig {
    pub bind_address: IpAddr,
    pub port: u16,
}

impl Default for ServerEnvConfig {
    fn default() -> Self {
        Self {
            bind_address: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 8000,
        }
    }
}

impl ServerEnvConfig {
    pub fn from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let bind_address = match lookup("PRICING_BIND_ADDRESS") {
            Some(raw) => raw
                .trim()
                .parse::<IpAddr>()
                .with_context(|| format!("Invalid PRICING_BIND_ADDRESS: {}", raw))?,
            None => defaults.bind_address,
        };
        let port = match lookup("PRICING_PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("Invalid PRICING_PORT: {}", raw))?,
            None => defaults.port,
        };

        Ok(Self { bind_address, port })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_address, self.port)
    }
}
