//! Process configuration.
//!
//! Every option can be given as a flag or through the environment, so the
//! server can be configured entirely with environment variables (or a `.env`
//! file loaded at startup).

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use zeroize::Zeroizing;

use crate::core::constants;
use crate::error::{ConfigError, Result};

/// drone-plain - Serve CI secrets from a plain JSON file.
#[derive(Parser)]
#[command(
    name = "drone-plain",
    about = "Serve CI secrets from a plain JSON file",
    version
)]
pub struct Config {
    /// Address to listen on
    #[arg(long, env = "SERVER_ADDRESS", default_value = constants::DEFAULT_ADDRESS)]
    pub address: String,

    /// Shared secret used to verify request signatures
    #[arg(long, env = "SECRET_KEY", hide_env_values = true)]
    pub secret: Zeroizing<String>,

    /// Path to the JSON secret store
    #[arg(long, env = "SOURCE")]
    pub source: PathBuf,

    /// Enable debug logging
    #[arg(long, env = "DEBUG")]
    pub debug: bool,
}

impl Config {
    /// Validate the configuration and return the listen address.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::EmptySecret` if the shared secret is blank,
    /// or `ConfigError::InvalidAddress` if the address is not `host:port`.
    pub fn validate(&self) -> Result<SocketAddr> {
        if self.secret.trim().is_empty() {
            return Err(ConfigError::EmptySecret.into());
        }

        let address = normalize_address(&self.address);
        address.parse().map_err(|e: std::net::AddrParseError| {
            ConfigError::InvalidAddress {
                address: self.address.clone(),
                reason: e.to_string(),
            }
            .into()
        })
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("address", &self.address)
            .field("secret", &"[REDACTED]")
            .field("source", &self.source)
            .field("debug", &self.debug)
            .finish()
    }
}

/// Accept the `:3000` shorthand for all interfaces.
fn normalize_address(address: &str) -> String {
    match address.strip_prefix(':') {
        Some(port) => format!("0.0.0.0:{}", port),
        None => address.to_string(),
    }
}
