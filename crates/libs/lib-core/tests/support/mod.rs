//! Test doubles for the wallet manager's collaborators.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use async_trait::async_trait;
use futures::channel::oneshot;

use lib_core::error::{Result, WalletError};
use lib_core::notify::{Notification, NotificationSink};
use lib_core::timer::{Never, Sleeper};
use lib_core::wallet::{
    ConnectionSnapshot, EnvironmentReload, EventCallback, InjectedProvider, KeyValueStore, Listeners,
    MemoryStore, Network, RelayConnector, RelaySession, Subscription, WalletEnvironment, WalletEvent,
    WalletManager,
};
use lib_core::WalletConfig;

pub const ALICE: &str = "0x1111111111111111111111111111111111111111";
pub const BOB: &str = "0x2222222222222222222222222222222222222222";

/// Injected provider with programmable answers
pub struct MockInjected {
    pub accounts: RefCell<Result<Vec<String>>>,
    pub chain_id: RefCell<Result<String>>,
    pub requests: Cell<usize>,
    pub listeners: Listeners<WalletEvent>,
    /// Keep callbacks alive after detach, like a backend that ignores removeListener
    pub leak_listeners: Cell<bool>,
    leaked: RefCell<Vec<EventCallback>>,
}

impl MockInjected {
    pub fn authorized(account: &str, chain_hex: &str) -> Rc<Self> {
        Rc::new(Self {
            accounts: RefCell::new(Ok(vec![account.to_string()])),
            chain_id: RefCell::new(Ok(chain_hex.to_string())),
            requests: Cell::new(0),
            listeners: Listeners::new(),
            leak_listeners: Cell::new(false),
            leaked: RefCell::new(Vec::new()),
        })
    }

    pub fn rejecting(message: &str) -> Rc<Self> {
        let provider = Self::authorized(ALICE, "0x1");
        *provider.accounts.borrow_mut() = Err(WalletError::HandshakeRejected(message.to_string()));
        provider
    }

    pub fn emit(&self, event: WalletEvent) {
        self.listeners.emit(&event);
        let leaked: Vec<EventCallback> = self.leaked.borrow().iter().cloned().collect();
        for callback in leaked {
            callback(event.clone());
        }
    }
}

#[async_trait(?Send)]
impl InjectedProvider for MockInjected {
    async fn request_accounts(&self) -> Result<Vec<String>> {
        self.requests.set(self.requests.get() + 1);
        self.accounts.borrow().clone()
    }

    async fn chain_id(&self) -> Result<String> {
        self.chain_id.borrow().clone()
    }

    fn subscribe(&self, callback: EventCallback) -> Subscription {
        if self.leak_listeners.get() {
            self.leaked.borrow_mut().push(callback);
            return Subscription::noop();
        }
        self.listeners.add(move |event: &WalletEvent| callback(event.clone()))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Pairing {
    Approve,
    Reject(String),
    Hang,
}

/// Relay session with programmable pairing
pub struct MockRelaySession {
    pub pairing: RefCell<Pairing>,
    pub accounts: RefCell<Vec<String>>,
    pub chain_id: Cell<u64>,
    pub disconnects: Cell<usize>,
    pub listeners: Listeners<WalletEvent>,
    gate: RefCell<Option<oneshot::Receiver<()>>>,
}

impl MockRelaySession {
    pub fn approving(account: &str, chain_id: u64) -> Rc<Self> {
        Rc::new(Self {
            pairing: RefCell::new(Pairing::Approve),
            accounts: RefCell::new(vec![account.to_string()]),
            chain_id: Cell::new(chain_id),
            disconnects: Cell::new(0),
            listeners: Listeners::new(),
            gate: RefCell::new(None),
        })
    }

    /// Hold `enable()` until the returned sender fires.
    pub fn gate(&self) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        *self.gate.borrow_mut() = Some(rx);
        tx
    }

    pub fn emit(&self, event: WalletEvent) {
        self.listeners.emit(&event);
    }
}

#[async_trait(?Send)]
impl RelaySession for MockRelaySession {
    async fn enable(&self) -> Result<()> {
        let gate = self.gate.borrow_mut().take();
        if let Some(rx) = gate {
            let _ = rx.await;
        }

        let pairing = self.pairing.borrow().clone();
        match pairing {
            Pairing::Approve => Ok(()),
            Pairing::Reject(message) => Err(WalletError::HandshakeRejected(message)),
            Pairing::Hang => futures::future::pending::<Result<()>>().await,
        }
    }

    async fn list_accounts(&self) -> Result<Vec<String>> {
        Ok(self.accounts.borrow().clone())
    }

    async fn network(&self) -> Result<Network> {
        Ok(Network {
            chain_id: self.chain_id.get(),
        })
    }

    fn disconnect(&self) {
        self.disconnects.set(self.disconnects.get() + 1);
    }

    fn subscribe(&self, callback: EventCallback) -> Subscription {
        self.listeners.add(move |event: &WalletEvent| callback(event.clone()))
    }
}

/// Hands out the same session on every open
pub struct MockRelayConnector {
    pub session: Rc<MockRelaySession>,
    pub opened: Cell<usize>,
}

impl MockRelayConnector {
    pub fn new(session: Rc<MockRelaySession>) -> Rc<Self> {
        Rc::new(Self {
            session,
            opened: Cell::new(0),
        })
    }
}

impl RelayConnector for MockRelayConnector {
    fn open(&self, _config: &WalletConfig) -> Result<Rc<dyn RelaySession>> {
        self.opened.set(self.opened.get() + 1);
        Ok(self.session.clone() as Rc<dyn RelaySession>)
    }
}

#[derive(Default)]
pub struct RecordingSink {
    pub notes: RefCell<Vec<Notification>>,
}

impl RecordingSink {
    pub fn titles(&self) -> Vec<String> {
        self.notes.borrow().iter().map(|n| n.title.clone()).collect()
    }

    pub fn count(&self, title: &str) -> usize {
        self.notes.borrow().iter().filter(|n| n.title == title).count()
    }
}

impl NotificationSink for RecordingSink {
    fn notify(&self, notification: Notification) {
        self.notes.borrow_mut().push(notification);
    }
}

#[derive(Default)]
pub struct CountingReload {
    pub reloads: Cell<usize>,
}

impl EnvironmentReload for CountingReload {
    fn reload(&self) {
        self.reloads.set(self.reloads.get() + 1);
    }
}

/// Manager plus handles to every double behind it
pub struct Harness {
    pub manager: WalletManager,
    pub injected: Option<Rc<MockInjected>>,
    pub relay: Rc<MockRelayConnector>,
    pub store: Rc<MemoryStore>,
    pub sink: Rc<RecordingSink>,
    pub reload: Rc<CountingReload>,
}

impl Harness {
    pub fn session(&self) -> &Rc<MockRelaySession> {
        &self.relay.session
    }

    pub fn injected(&self) -> &Rc<MockInjected> {
        self.injected.as_ref().expect("harness built without injected provider")
    }

    pub fn stored(&self, key: &str) -> Option<String> {
        self.store.get(key)
    }

    /// Record every published snapshot
    pub fn record_snapshots(&self) -> (Rc<RefCell<Vec<ConnectionSnapshot>>>, Subscription) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let subscription = self
            .manager
            .observe(move |snapshot| sink.borrow_mut().push(snapshot.clone()));
        (seen, subscription)
    }
}

pub struct HarnessBuilder {
    injected: Option<Rc<MockInjected>>,
    session: Rc<MockRelaySession>,
    store: Rc<MemoryStore>,
    sleeper: Rc<dyn Sleeper>,
}

impl HarnessBuilder {
    pub fn new() -> Self {
        Self {
            injected: Some(MockInjected::authorized(ALICE, "0x1")),
            session: MockRelaySession::approving(BOB, 137),
            store: Rc::new(MemoryStore::new()),
            sleeper: Rc::new(Never),
        }
    }

    pub fn injected(mut self, injected: Option<Rc<MockInjected>>) -> Self {
        self.injected = injected;
        self
    }

    pub fn session(mut self, session: Rc<MockRelaySession>) -> Self {
        self.session = session;
        self
    }

    pub fn store(mut self, store: MemoryStore) -> Self {
        self.store = Rc::new(store);
        self
    }

    pub fn sleeper(mut self, sleeper: Rc<dyn Sleeper>) -> Self {
        self.sleeper = sleeper;
        self
    }

    pub fn build(self) -> Harness {
        let relay = MockRelayConnector::new(self.session);
        let sink = Rc::new(RecordingSink::default());
        let reload = Rc::new(CountingReload::default());

        let env = WalletEnvironment {
            injected: self
                .injected
                .clone()
                .map(|provider| provider as Rc<dyn InjectedProvider>),
            relay: relay.clone(),
            store: self.store.clone(),
            notifier: sink.clone(),
            reloader: reload.clone(),
            sleeper: self.sleeper,
        };

        let manager = WalletManager::new(WalletConfig::default(), env).expect("default config is valid");

        Harness {
            manager,
            injected: self.injected,
            relay,
            store: self.store,
            sink,
            reload,
        }
    }
}

/// `account`, `chain_id` and `connector_kind` travel together
pub fn assert_consistent(snapshot: &ConnectionSnapshot) {
    let present = [
        snapshot.account.is_some(),
        snapshot.chain_id.is_some(),
        snapshot.connector_kind.is_some(),
    ];
    assert!(
        present.iter().all(|p| *p) || present.iter().all(|p| !*p),
        "inconsistent snapshot: {:?}",
        snapshot
    );
}
