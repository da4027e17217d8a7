//! # Wallet Configuration
//!
//! Relay endpoints and handshake limits for the wallet connection manager.
//! Validated before the manager is built so a bad config fails fast.
//!
//! ## Sources
//!
//! - [`WalletConfig::default()`]: public endpoints for Ethereum, Polygon and BNB Chain
//! - [`WalletConfig::from_env()`]: native builds, reads `.env` and the process environment
//! - [`WalletConfig::from_values()`]: the WASM front-end, fed from `option_env!`
//!
//! | Variable | Format | Default |
//! |---|---|---|
//! | `GUARDIAN_RELAY_RPC` | `chain=url,chain=url` | see [`DEFAULT_RELAY_RPC`] |
//! | `GUARDIAN_PAIRING_TIMEOUT_SECS` | integer seconds | `120` |
//!
//! ```rust
//! use lib_core::config::WalletConfig;
//!
//! let config = WalletConfig::from_values(Some("1=https://rpc.example.org"), Some("30")).unwrap();
//! assert_eq!(config.pairing_timeout.as_secs(), 30);
//! assert!(config.validate().is_ok());
//! ```

use std::collections::BTreeMap;
use std::env;
use std::time::Duration;

use crate::error::{Result, WalletError};

/// Chain id the relay must always be able to reach.
pub const DEFAULT_CHAIN_ID: u64 = 1;

/// Default relay endpoints, keyed by chain id.
pub const DEFAULT_RELAY_RPC: &[(u64, &str)] = &[
    (1, "https://cloudflare-eth.com"),
    (137, "https://polygon-rpc.com"),
    (56, "https://bsc-dataseed.binance.org"),
];

pub const DEFAULT_PAIRING_TIMEOUT_SECS: u64 = 120;
const MAX_PAIRING_TIMEOUT_SECS: u64 = 600;

pub const ENV_RELAY_RPC: &str = "GUARDIAN_RELAY_RPC";
pub const ENV_PAIRING_TIMEOUT: &str = "GUARDIAN_PAIRING_TIMEOUT_SECS";

/// Wallet manager configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WalletConfig {
    /// RPC endpoint per chain id handed to the relay session.
    pub relay_rpc: BTreeMap<u64, String>,

    /// Upper bound on relay pairing.
    pub pairing_timeout: Duration,
}

impl Default for WalletConfig {
    fn default() -> Self {
        Self {
            relay_rpc: DEFAULT_RELAY_RPC
                .iter()
                .map(|(chain, url)| (*chain, url.to_string()))
                .collect(),
            pairing_timeout: Duration::from_secs(DEFAULT_PAIRING_TIMEOUT_SECS),
        }
    }
}

impl WalletConfig {
    /// Load configuration from `.env` and environment variables.
    pub fn from_env() -> Result<Self> {
        // A missing .env file is fine, the variables may come from the shell
        let _ = dotenvy::dotenv();

        let relay = env::var(ENV_RELAY_RPC).ok();
        let timeout = env::var(ENV_PAIRING_TIMEOUT).ok();
        Self::from_values(relay.as_deref(), timeout.as_deref())
    }

    /// Build configuration from optional raw values, defaulting what is absent.
    pub fn from_values(relay_rpc: Option<&str>, pairing_timeout_secs: Option<&str>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(raw) = relay_rpc.filter(|s| !s.trim().is_empty()) {
            config.relay_rpc = parse_relay_rpc(raw)?;
        }

        if let Some(raw) = pairing_timeout_secs.filter(|s| !s.trim().is_empty()) {
            let secs: u64 = raw.trim().parse().map_err(|e| {
                WalletError::Config(format!("{} must be a valid number: {}", ENV_PAIRING_TIMEOUT, e))
            })?;
            config.pairing_timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if !self.relay_rpc.contains_key(&DEFAULT_CHAIN_ID) {
            return Err(WalletError::Config(format!(
                "Relay endpoints must include chain {}",
                DEFAULT_CHAIN_ID
            )));
        }

        for (chain, url) in &self.relay_rpc {
            if !(url.starts_with("https://") || url.starts_with("http://")) {
                return Err(WalletError::Config(format!(
                    "Relay endpoint for chain {} must be an http(s) url, got '{}'",
                    chain, url
                )));
            }
        }

        let secs = self.pairing_timeout.as_secs();
        if secs < 1 || secs > MAX_PAIRING_TIMEOUT_SECS {
            return Err(WalletError::Config(format!(
                "Pairing timeout must be between 1 and {} seconds",
                MAX_PAIRING_TIMEOUT_SECS
            )));
        }

        Ok(())
    }
}

fn parse_relay_rpc(raw: &str) -> Result<BTreeMap<u64, String>> {
    let mut endpoints = BTreeMap::new();

    for entry in raw.split(',').map(str::trim).filter(|e| !e.is_empty()) {
        let (chain, url) = entry.split_once('=').ok_or_else(|| {
            WalletError::Config(format!("{} entry '{}' must look like chain=url", ENV_RELAY_RPC, entry))
        })?;
        let chain: u64 = chain.trim().parse().map_err(|_| {
            WalletError::Config(format!("{} has a non-numeric chain id '{}'", ENV_RELAY_RPC, chain))
        })?;
        endpoints.insert(chain, url.trim().to_string());
    }

    Ok(endpoints)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = WalletConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.relay_rpc.len(), 3);
        assert_eq!(config.pairing_timeout, Duration::from_secs(120));
    }

    #[test]
    fn test_parse_relay_list() {
        let config = WalletConfig::from_values(
            Some("1=https://eth.example.org, 10=https://op.example.org"),
            None,
        )
        .unwrap();
        assert_eq!(config.relay_rpc.get(&10).map(String::as_str), Some("https://op.example.org"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_mainnet_fails_validation() {
        let config = WalletConfig::from_values(Some("137=https://polygon-rpc.com"), None).unwrap();
        assert!(matches!(config.validate(), Err(WalletError::Config(_))));
    }

    #[test]
    fn test_bad_values() {
        assert!(WalletConfig::from_values(Some("mainnet=https://x"), None).is_err());
        assert!(WalletConfig::from_values(Some("1 https://x"), None).is_err());
        assert!(WalletConfig::from_values(None, Some("soon")).is_err());

        let zero = WalletConfig::from_values(None, Some("0")).unwrap();
        assert!(zero.validate().is_err());

        let ftp = WalletConfig::from_values(Some("1=ftp://x"), None).unwrap();
        assert!(ftp.validate().is_err());
    }
}
