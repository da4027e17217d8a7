//! # Connector Backends
//!
//! Contracts the wallet manager expects from the two connector libraries and
//! from the hosting environment. The browser front-end implements them over
//! `wasm-bindgen`; tests implement them with programmable doubles.
//!
//! All futures are `?Send`: the manager lives on a single cooperative thread.
//!
//! ## Events
//!
//! Both backends push the same three events, normalized to [`WalletEvent`]
//! before they reach the manager. Adapters convert the injected provider's hex
//! chain ids with [`crate::wallet::chain::parse_chain_id`].

use std::rc::Rc;

use async_trait::async_trait;

use crate::config::WalletConfig;
use crate::error::Result;
use crate::wallet::subscription::Subscription;

/// Event pushed by the active backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalletEvent {
    /// Account list changed; empty means the wallet revoked access
    AccountsChanged(Vec<String>),
    /// Active network switched
    ChainChanged(u64),
    /// Backend dropped the connection
    Disconnected,
}

/// Callback receiving backend events
pub type EventCallback = Rc<dyn Fn(WalletEvent)>;

/// Network reported by a relay session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Network {
    pub chain_id: u64,
}

/// Browser-resident signing agent (EIP-1193 provider).
#[async_trait(?Send)]
pub trait InjectedProvider {
    /// `eth_requestAccounts`; prompts the user on first use
    async fn request_accounts(&self) -> Result<Vec<String>>;

    /// `eth_chainId`, as the provider reports it (hex string)
    async fn chain_id(&self) -> Result<String>;

    fn subscribe(&self, callback: EventCallback) -> Subscription;
}

/// Factory for relay sessions.
pub trait RelayConnector {
    /// Construct a session against the configured endpoints. Pairing has not
    /// started yet when this returns.
    fn open(&self, config: &WalletConfig) -> Result<Rc<dyn RelaySession>>;
}

/// Relay-based session requiring remote approval.
#[async_trait(?Send)]
pub trait RelaySession {
    /// Run the pairing flow (session code, remote approval)
    async fn enable(&self) -> Result<()>;

    async fn list_accounts(&self) -> Result<Vec<String>>;

    async fn network(&self) -> Result<Network>;

    /// Terminate the session. Must not fail on an already closed session.
    fn disconnect(&self);

    fn subscribe(&self, callback: EventCallback) -> Subscription;
}

/// Full reload of the hosting session.
pub trait EnvironmentReload {
    fn reload(&self);
}

/// Opaque handle to the backend behind the active connection.
#[derive(Clone)]
pub(crate) enum ProviderHandle {
    Injected(Rc<dyn InjectedProvider>),
    Relay(Rc<dyn RelaySession>),
}

impl ProviderHandle {
    pub(crate) fn subscribe(&self, callback: EventCallback) -> Subscription {
        match self {
            ProviderHandle::Injected(provider) => provider.subscribe(callback),
            ProviderHandle::Relay(session) => session.subscribe(callback),
        }
    }

    /// Close whatever needs closing. Injected providers have no session to end.
    pub(crate) fn close(&self) {
        if let ProviderHandle::Relay(session) = self {
            session.disconnect();
        }
    }
}
