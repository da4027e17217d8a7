//! Connection state as seen by the rest of the application.

use serde::{Deserialize, Serialize};

use crate::wallet::backend::ProviderHandle;
use crate::wallet::kind::ConnectorKind;
use crate::wallet::subscription::Subscription;

/// Coarse connection phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConnectionPhase {
    Disconnected,
    Connecting,
    Connected,
}

/// Read-only view of the manager's connection state.
///
/// `account`, `chain_id` and `connector_kind` are either all present or all
/// absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionSnapshot {
    pub account: Option<String>,
    pub chain_id: Option<u64>,
    pub connector_kind: Option<ConnectorKind>,
    pub is_connecting: bool,
}

impl ConnectionSnapshot {
    pub fn is_connected(&self) -> bool {
        self.account.is_some()
    }

    /// A handshake in flight wins over an existing connection.
    pub fn phase(&self) -> ConnectionPhase {
        if self.is_connecting {
            ConnectionPhase::Connecting
        } else if self.is_connected() {
            ConnectionPhase::Connected
        } else {
            ConnectionPhase::Disconnected
        }
    }

    pub fn account(&self) -> Option<&str> {
        self.account.as_deref()
    }

    /// `0x1234...abcd`, or an empty string when disconnected
    pub fn display_address(&self) -> String {
        self.account
            .as_deref()
            .map(shared::utils::shorten_address)
            .unwrap_or_default()
    }
}

/// The live connection. Holding account, chain, kind and handle in one value
/// keeps them present or absent together.
pub(crate) struct ActiveConnection {
    pub(crate) account: String,
    pub(crate) chain_id: u64,
    pub(crate) kind: ConnectorKind,
    pub(crate) handle: ProviderHandle,
    pub(crate) subscription: Subscription,
    /// Tags events coming from this connection's subscription
    pub(crate) generation: u64,
}

impl ActiveConnection {
    /// Detach listeners, then end the backend session if it has one.
    pub(crate) fn teardown(self) {
        self.subscription.unsubscribe();
        self.handle.close();
    }
}

#[derive(Default)]
pub(crate) struct ConnectionState {
    pub(crate) connection: Option<ActiveConnection>,
    pub(crate) is_connecting: bool,
    /// `disconnect()` arrived while a handshake was in flight
    pub(crate) disconnect_requested: bool,
    pub(crate) last_generation: u64,
}

impl ConnectionState {
    pub(crate) fn snapshot(&self) -> ConnectionSnapshot {
        match &self.connection {
            Some(connection) => ConnectionSnapshot {
                account: Some(connection.account.clone()),
                chain_id: Some(connection.chain_id),
                connector_kind: Some(connection.kind),
                is_connecting: self.is_connecting,
            },
            None => ConnectionSnapshot {
                is_connecting: self.is_connecting,
                ..ConnectionSnapshot::default()
            },
        }
    }

    pub(crate) fn next_generation(&mut self) -> u64 {
        self.last_generation += 1;
        self.last_generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disconnected_snapshot() {
        let snapshot = ConnectionSnapshot::default();
        assert!(!snapshot.is_connected());
        assert_eq!(snapshot.phase(), ConnectionPhase::Disconnected);
        assert_eq!(snapshot.display_address(), "");
    }

    #[test]
    fn test_connected_snapshot() {
        let snapshot = ConnectionSnapshot {
            account: Some("0x71C7656EC7ab88b098defB751B7401B5f6d8976F".to_string()),
            chain_id: Some(1),
            connector_kind: Some(ConnectorKind::InjectedProvider),
            is_connecting: false,
        };
        assert_eq!(snapshot.phase(), ConnectionPhase::Connected);
        assert_eq!(snapshot.display_address(), "0x71C7...976F");
    }

    #[test]
    fn test_connecting_wins() {
        let snapshot = ConnectionSnapshot {
            is_connecting: true,
            ..ConnectionSnapshot::default()
        };
        assert_eq!(snapshot.phase(), ConnectionPhase::Connecting);
    }
}
