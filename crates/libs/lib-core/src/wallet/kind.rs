use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which connector backend produced the current connection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConnectorKind {
    /// Browser extension exposing an EIP-1193 provider
    #[serde(alias = "metamask")]
    InjectedProvider,
    /// Relay session paired with a remote wallet
    #[serde(alias = "walletconnect")]
    RelaySession,
}

impl ConnectorKind {
    /// Tag written to durable storage
    pub fn as_str(&self) -> &'static str {
        match self {
            ConnectorKind::InjectedProvider => "InjectedProvider",
            ConnectorKind::RelaySession => "RelaySession",
        }
    }

    /// Label for buttons and notifications
    pub fn label(&self) -> &'static str {
        match self {
            ConnectorKind::InjectedProvider => "Browser Wallet",
            ConnectorKind::RelaySession => "WalletConnect",
        }
    }
}

impl fmt::Display for ConnectorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownConnectorKind(pub String);

impl fmt::Display for UnknownConnectorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown connector kind '{}'", self.0)
    }
}

impl std::error::Error for UnknownConnectorKind {}

impl FromStr for ConnectorKind {
    type Err = UnknownConnectorKind;

    /// Accepts the current tags and the `metamask` / `walletconnect` tags
    /// written by earlier builds.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "InjectedProvider" | "metamask" => Ok(ConnectorKind::InjectedProvider),
            "RelaySession" | "walletconnect" => Ok(ConnectorKind::RelaySession),
            other => Err(UnknownConnectorKind(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_current_and_legacy_tags() {
        assert_eq!("InjectedProvider".parse(), Ok(ConnectorKind::InjectedProvider));
        assert_eq!("RelaySession".parse(), Ok(ConnectorKind::RelaySession));
        assert_eq!("metamask".parse(), Ok(ConnectorKind::InjectedProvider));
        assert_eq!("walletconnect".parse(), Ok(ConnectorKind::RelaySession));
        assert!("ledger".parse::<ConnectorKind>().is_err());
    }

    #[test]
    fn test_display_matches_storage_tag() {
        for kind in [ConnectorKind::InjectedProvider, ConnectorKind::RelaySession] {
            assert_eq!(kind.to_string().parse(), Ok(kind));
        }
    }

    #[test]
    fn test_serde_alias() {
        let kind: ConnectorKind = serde_json::from_str("\"walletconnect\"").unwrap();
        assert_eq!(kind, ConnectorKind::RelaySession);
        assert_eq!(serde_json::to_string(&kind).unwrap(), "\"RelaySession\"");
    }
}
