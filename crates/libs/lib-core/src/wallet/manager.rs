//! # Wallet Connection Manager
//!
//! Owns the connection state, runs handshakes against the two connector
//! backends, persists the chosen account and routes backend events.
//!
//! ```text
//! Disconnected --connect()--> Connecting --success--> Connected
//! Connecting --failure--> Disconnected
//! Connected --accounts empty | backend disconnect | disconnect()--> Disconnected
//! Connected --account changed--> Connected (new account)
//! Connected --chain changed--> Connected (new chain) + environment reload
//! ```
//!
//! Failures never reach the caller: they are logged, turned into a
//! notification, and the state settles.
//!
//! No `RefCell` borrow is held across an `.await` or while calling out to a
//! backend, observer or sink, so backends may deliver events synchronously.

use std::cell::RefCell;
use std::rc::Rc;

use futures::future::{self, Either};
use tracing::{debug, info, warn};

use crate::config::WalletConfig;
use crate::error::{Result, WalletError};
use crate::notify::{Notification, NotificationSink};
use crate::timer::Sleeper;
use crate::wallet::backend::{
    EnvironmentReload, EventCallback, InjectedProvider, ProviderHandle, RelayConnector, RelaySession,
    WalletEvent,
};
use crate::wallet::chain::parse_chain_id;
use crate::wallet::kind::ConnectorKind;
use crate::wallet::state::{ActiveConnection, ConnectionSnapshot, ConnectionState};
use crate::wallet::storage::{self, KeyValueStore};
use crate::wallet::subscription::{Listeners, Subscription};

/// Collaborators the manager is built from.
pub struct WalletEnvironment {
    /// Resolved once at start; `None` when the host has no injected provider
    pub injected: Option<Rc<dyn InjectedProvider>>,
    pub relay: Rc<dyn RelayConnector>,
    pub store: Rc<dyn KeyValueStore>,
    pub notifier: Rc<dyn NotificationSink>,
    pub reloader: Rc<dyn EnvironmentReload>,
    pub sleeper: Rc<dyn Sleeper>,
}

struct Inner {
    config: WalletConfig,
    env: WalletEnvironment,
    state: RefCell<ConnectionState>,
    observers: Listeners<ConnectionSnapshot>,
}

/// Handshake result, not yet installed.
struct Established {
    kind: ConnectorKind,
    account: String,
    chain_id: u64,
    handle: ProviderHandle,
}

/// Cheap-to-clone handle to the wallet connection manager.
#[derive(Clone)]
pub struct WalletManager {
    inner: Rc<Inner>,
}

impl WalletManager {
    /// Build a manager in the `Disconnected` state. The config is validated
    /// here so a bad deployment fails before any handshake.
    pub fn new(config: WalletConfig, env: WalletEnvironment) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            inner: Rc::new(Inner {
                config,
                env,
                state: RefCell::new(ConnectionState::default()),
                observers: Listeners::new(),
            }),
        })
    }

    pub fn config(&self) -> &WalletConfig {
        &self.inner.config
    }

    /// Whether an injected provider was found at construction time.
    pub fn has_injected_provider(&self) -> bool {
        self.inner.env.injected.is_some()
    }

    pub fn snapshot(&self) -> ConnectionSnapshot {
        self.inner.state.borrow().snapshot()
    }

    pub fn is_connecting(&self) -> bool {
        self.inner.state.borrow().is_connecting
    }

    pub fn is_connected(&self) -> bool {
        self.inner.state.borrow().connection.is_some()
    }

    pub fn account(&self) -> Option<String> {
        self.inner
            .state
            .borrow()
            .connection
            .as_ref()
            .map(|c| c.account.clone())
    }

    /// Register a callback that receives a fresh snapshot after every change.
    pub fn observe(&self, callback: impl Fn(&ConnectionSnapshot) + 'static) -> Subscription {
        self.inner.observers.add(callback)
    }

    /// Reconnect with the connection remembered from the previous session.
    ///
    /// Returns whether an attempt was made. A failed attempt leaves the
    /// remembered keys in place; only [`WalletManager::disconnect`] clears them.
    pub async fn restore(&self) -> bool {
        let Some(persisted) = storage::load_connection(self.inner.env.store.as_ref()) else {
            debug!("no persisted wallet connection");
            return false;
        };

        info!(kind = %persisted.kind, account = %persisted.account, "restoring wallet connection");
        self.connect(persisted.kind).await;
        true
    }

    /// Connect through the given backend.
    ///
    /// Ignored while another handshake is in flight.
    pub async fn connect(&self, kind: ConnectorKind) {
        {
            let mut state = self.inner.state.borrow_mut();
            if state.is_connecting {
                warn!(kind = %kind, "connect ignored: a handshake is already in flight");
                return;
            }
            state.is_connecting = true;
            state.disconnect_requested = false;
        }
        self.publish();

        info!(kind = %kind, "starting wallet handshake");
        let outcome = match kind {
            ConnectorKind::InjectedProvider => self.handshake_injected().await,
            ConnectorKind::RelaySession => self.handshake_relay().await,
        };

        match outcome {
            Ok(established) => self.install(established),
            Err(err) => {
                warn!(kind = %kind, error = %err, "wallet handshake failed");
                self.inner
                    .env
                    .notifier
                    .notify(Notification::destructive(err.title(), err.user_message()));
            }
        }

        let deferred_disconnect = {
            let mut state = self.inner.state.borrow_mut();
            state.is_connecting = false;
            std::mem::take(&mut state.disconnect_requested)
        };
        self.publish();

        if deferred_disconnect && self.is_connected() {
            info!("applying disconnect requested during handshake");
            self.disconnect();
        }
    }

    /// Tear down the connection and forget it.
    ///
    /// Safe to call at any time. Only a call that actually ends a connection
    /// emits the "disconnected" notification.
    pub fn disconnect(&self) {
        let previous = {
            let mut state = self.inner.state.borrow_mut();
            if state.is_connecting {
                state.disconnect_requested = true;
            }
            state.connection.take()
        };

        let was_connected = previous.is_some();
        if let Some(connection) = previous {
            info!(kind = %connection.kind, account = %connection.account, "disconnecting wallet");
            connection.teardown();
        }

        storage::clear_connection(self.inner.env.store.as_ref());

        if was_connected {
            self.inner.env.notifier.notify(Notification::info(
                "Wallet Disconnected",
                "Your wallet has been disconnected",
            ));
            self.publish();
        }
    }

    async fn handshake_injected(&self) -> Result<Established> {
        let provider = self
            .inner
            .env
            .injected
            .clone()
            .ok_or(WalletError::ProviderUnavailable)?;

        let account = first_account(provider.request_accounts().await?)?;
        let chain_id = parse_chain_id(&provider.chain_id().await?)?;

        Ok(Established {
            kind: ConnectorKind::InjectedProvider,
            account,
            chain_id,
            handle: ProviderHandle::Injected(provider),
        })
    }

    async fn handshake_relay(&self) -> Result<Established> {
        let session = self.inner.env.relay.open(&self.inner.config)?;

        match self.pair(session.as_ref()).await {
            Ok((account, chain_id)) => Ok(Established {
                kind: ConnectorKind::RelaySession,
                account,
                chain_id,
                handle: ProviderHandle::Relay(session),
            }),
            Err(err) => {
                session.disconnect();
                Err(err)
            }
        }
    }

    async fn pair(&self, session: &dyn RelaySession) -> Result<(String, u64)> {
        let timeout = self.inner.config.pairing_timeout;

        match future::select(session.enable(), self.inner.env.sleeper.sleep(timeout)).await {
            Either::Left((enabled, _)) => enabled?,
            Either::Right(_) => return Err(WalletError::SessionTimeout(timeout)),
        }

        let account = first_account(session.list_accounts().await?)?;
        let network = session.network().await?;
        Ok((account, network.chain_id))
    }

    /// Make a finished handshake the active connection.
    fn install(&self, established: Established) {
        let (generation, previous) = {
            let mut state = self.inner.state.borrow_mut();
            (state.next_generation(), state.connection.take())
        };

        if let Some(previous) = previous {
            debug!(kind = %previous.kind, "replacing previous connection");
            previous.teardown();
        }

        let subscription = established
            .handle
            .subscribe(self.event_callback(generation));

        let Established {
            kind,
            account,
            chain_id,
            handle,
        } = established;

        self.inner.state.borrow_mut().connection = Some(ActiveConnection {
            account: account.clone(),
            chain_id,
            kind,
            handle,
            subscription,
            generation,
        });

        if let Err(err) = storage::save_connection(self.inner.env.store.as_ref(), &account, kind) {
            warn!(error = %err, "failed to persist wallet connection");
        }

        info!(kind = %kind, account = %account, chain_id, "wallet connected");
        self.inner.env.notifier.notify(Notification::success(
            "Wallet Connected",
            format!("Connected to {}", shared::utils::shorten_address(&account)),
        ));
        self.publish();
    }

    fn event_callback(&self, generation: u64) -> EventCallback {
        let weak = Rc::downgrade(&self.inner);
        Rc::new(move |event| {
            if let Some(inner) = weak.upgrade() {
                WalletManager { inner }.handle_event(generation, event);
            }
        })
    }

    fn handle_event(&self, generation: u64, event: WalletEvent) {
        let current = self
            .inner
            .state
            .borrow()
            .connection
            .as_ref()
            .map(|c| c.generation);

        if current != Some(generation) {
            debug!(?event, "ignoring event from a detached backend");
            return;
        }

        debug!(?event, "backend event");
        match event {
            WalletEvent::AccountsChanged(accounts) => self.on_accounts_changed(accounts),
            WalletEvent::ChainChanged(chain_id) => self.on_chain_changed(chain_id),
            WalletEvent::Disconnected => {
                info!("backend reported disconnect");
                self.disconnect();
            }
        }
    }

    fn on_accounts_changed(&self, accounts: Vec<String>) {
        let Some(next) = select_account(accounts) else {
            info!("backend returned no accounts");
            self.disconnect();
            return;
        };

        let changed = {
            let mut state = self.inner.state.borrow_mut();
            match state.connection.as_mut() {
                Some(connection) if !connection.account.eq_ignore_ascii_case(&next) => {
                    connection.account = next.clone();
                    Some(connection.kind)
                }
                _ => None,
            }
        };

        let Some(kind) = changed else {
            return;
        };

        if let Err(err) = storage::save_connection(self.inner.env.store.as_ref(), &next, kind) {
            warn!(error = %err, "failed to persist switched account");
        }

        info!(account = %next, "wallet account changed");
        self.inner.env.notifier.notify(Notification::info(
            "Account Changed",
            format!("Connected to {}", shared::utils::shorten_address(&next)),
        ));
        self.publish();
    }

    /// Chain switches invalidate every downstream consumer, so the whole
    /// environment is reloaded after the state update.
    fn on_chain_changed(&self, chain_id: u64) {
        if let Some(connection) = self.inner.state.borrow_mut().connection.as_mut() {
            connection.chain_id = chain_id;
        }

        info!(chain_id, "wallet chain changed, reloading");
        self.publish();
        self.inner.env.reloader.reload();
    }

    fn publish(&self) {
        let snapshot = self.snapshot();
        self.inner.observers.emit(&snapshot);
    }
}

/// First non-blank entry of a backend account list.
fn select_account(accounts: Vec<String>) -> Option<String> {
    accounts.into_iter().find(|a| !a.trim().is_empty())
}

fn first_account(accounts: Vec<String>) -> Result<String> {
    select_account(accounts)
        .ok_or_else(|| WalletError::HandshakeRejected("The wallet returned no accounts".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_account() {
        assert_eq!(
            first_account(vec!["0x1".to_string(), "0x2".to_string()]).unwrap(),
            "0x1"
        );
        assert!(matches!(
            first_account(vec![]),
            Err(WalletError::HandshakeRejected(_))
        ));
    }

    #[test]
    fn test_select_account_skips_blank_entries() {
        assert_eq!(
            select_account(vec!["".to_string(), "  ".to_string(), "0x2".to_string()]).as_deref(),
            Some("0x2")
        );
        assert_eq!(select_account(vec![" ".to_string()]), None);
    }
}
