//! # Durable Connection Storage
//!
//! The manager remembers the last connection under two keys so it can
//! reconnect on the next start:
//!
//! | Key | Value |
//! |---|---|
//! | [`KEY_ACCOUNT`] | address string |
//! | [`KEY_CONNECTOR_KIND`] | [`ConnectorKind`] tag |
//!
//! Both are written together on a successful connect and removed together on
//! disconnect. In the browser the store is `localStorage`.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::Result;
use crate::wallet::kind::ConnectorKind;

pub const KEY_ACCOUNT: &str = "connected-account";
pub const KEY_CONNECTOR_KIND: &str = "wallet-kind";

/// Synchronous local key-value store
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str);
}

/// In-memory store for native use and tests
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-filled with a persisted connection
    pub fn with_connection(account: &str, kind: ConnectorKind) -> Self {
        let store = Self::new();
        {
            let mut values = store.values.borrow_mut();
            values.insert(KEY_ACCOUNT.to_string(), account.to_string());
            values.insert(KEY_CONNECTOR_KIND.to_string(), kind.as_str().to_string());
        }
        store
    }

    pub fn len(&self) -> usize {
        self.values.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.values.borrow_mut().remove(key);
    }
}

/// Connection remembered from a previous session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedConnection {
    pub account: String,
    pub kind: ConnectorKind,
}

/// Read the remembered connection. Both keys must be present and the kind tag
/// must parse.
pub fn load_connection(store: &dyn KeyValueStore) -> Option<PersistedConnection> {
    let account = store.get(KEY_ACCOUNT).filter(|a| !a.is_empty())?;
    let raw_kind = store.get(KEY_CONNECTOR_KIND)?;

    match raw_kind.parse::<ConnectorKind>() {
        Ok(kind) => Some(PersistedConnection { account, kind }),
        Err(e) => {
            tracing::warn!(error = %e, "ignoring persisted wallet connection");
            None
        }
    }
}

/// Remember a connection.
pub fn save_connection(store: &dyn KeyValueStore, account: &str, kind: ConnectorKind) -> Result<()> {
    store.set(KEY_ACCOUNT, account)?;
    store.set(KEY_CONNECTOR_KIND, kind.as_str())
}

/// Forget the remembered connection.
pub fn clear_connection(store: &dyn KeyValueStore) {
    store.remove(KEY_ACCOUNT);
    store.remove(KEY_CONNECTOR_KIND);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_load_clear() {
        let store = MemoryStore::new();
        assert_eq!(load_connection(&store), None);

        save_connection(&store, "0xabc", ConnectorKind::RelaySession).unwrap();
        assert_eq!(store.get(KEY_CONNECTOR_KIND).as_deref(), Some("RelaySession"));
        assert_eq!(
            load_connection(&store),
            Some(PersistedConnection {
                account: "0xabc".to_string(),
                kind: ConnectorKind::RelaySession,
            })
        );

        clear_connection(&store);
        assert!(store.is_empty());
    }

    #[test]
    fn test_needs_both_keys() {
        let store = MemoryStore::new();
        store.set(KEY_ACCOUNT, "0xabc").unwrap();
        assert_eq!(load_connection(&store), None);

        let store = MemoryStore::new();
        store.set(KEY_CONNECTOR_KIND, "InjectedProvider").unwrap();
        assert_eq!(load_connection(&store), None);
    }

    #[test]
    fn test_legacy_and_unknown_kinds() {
        let store = MemoryStore::new();
        store.set(KEY_ACCOUNT, "0xabc").unwrap();
        store.set(KEY_CONNECTOR_KIND, "metamask").unwrap();
        assert_eq!(load_connection(&store).map(|c| c.kind), Some(ConnectorKind::InjectedProvider));

        store.set(KEY_CONNECTOR_KIND, "coinbase").unwrap();
        assert_eq!(load_connection(&store), None);
    }
}
