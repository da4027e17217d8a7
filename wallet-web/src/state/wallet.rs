//! Wallet state management
//!
//! Wraps the `lib-core` [`WalletManager`] for the view layer. The manager is
//! single-threaded, so it sits in local storage of a [`StoredValue`]; views
//! read the mirrored [`ConnectionSnapshot`] signal.

use std::rc::Rc;

use leptos::prelude::*;
use lib_core::wallet::{ConnectionPhase, Subscription, WalletEnvironment};
use lib_core::{ConnectionSnapshot, ConnectorKind, Notification, WalletConfig, WalletManager};

use crate::services::host::{BrowserSleeper, LocalStore, PageReload};
use crate::services::injected::BrowserInjected;
use crate::services::relay::BrowserRelay;
use crate::state::toast::{ToastContext, ToastSink};
use crate::utils::constants::{PAIRING_TIMEOUT_SECS, RELAY_RPC};

struct Attached {
    manager: WalletManager,
    _observer: Subscription,
}

/// Global wallet context
#[derive(Clone, Copy)]
pub struct WalletContext {
    pub wallet: RwSignal<ConnectionSnapshot>,
    attached: StoredValue<Option<Attached>, LocalStorage>,
}

impl WalletContext {
    pub fn phase(&self) -> ConnectionPhase {
        self.wallet.with(|snapshot| snapshot.phase())
    }

    pub fn has_injected_provider(&self) -> bool {
        self.manager()
            .map(|manager| manager.has_injected_provider())
            .unwrap_or(false)
    }

    pub fn connect(&self, kind: ConnectorKind) {
        let Some(manager) = self.manager() else {
            log::warn!("connect ignored: wallet manager unavailable");
            return;
        };
        leptos::task::spawn_local(async move {
            manager.connect(kind).await;
        });
    }

    pub fn disconnect(&self) {
        if let Some(manager) = self.manager() {
            manager.disconnect();
        }
    }

    fn manager(&self) -> Option<WalletManager> {
        self.attached
            .with_value(|attached| attached.as_ref().map(|a| a.manager.clone()))
    }
}

fn build_manager(toasts: ToastContext) -> lib_core::Result<WalletManager> {
    let config = WalletConfig::from_values(RELAY_RPC, PAIRING_TIMEOUT_SECS)?;

    let env = WalletEnvironment {
        injected: BrowserInjected::detect(),
        relay: Rc::new(BrowserRelay),
        store: Rc::new(LocalStore),
        notifier: Rc::new(ToastSink(toasts)),
        reloader: Rc::new(PageReload),
        sleeper: Rc::new(BrowserSleeper),
    };

    WalletManager::new(config, env)
}

/// Build the manager, mirror its snapshots into a signal and try to restore
/// the previous session.
pub fn provide_wallet_context(toasts: ToastContext) -> WalletContext {
    let wallet = RwSignal::new(ConnectionSnapshot::default());

    let attached = match build_manager(toasts) {
        Ok(manager) => {
            let observer = manager.observe(move |snapshot| wallet.set(snapshot.clone()));
            wallet.set(manager.snapshot());

            let restoring = manager.clone();
            leptos::task::spawn_local(async move {
                if restoring.restore().await {
                    log::info!("reconnect attempted for the previous wallet session");
                }
            });

            Some(Attached {
                manager,
                _observer: observer,
            })
        }
        Err(err) => {
            log::error!("wallet manager unavailable: {}", err);
            toasts.push(Notification::destructive(err.title(), err.to_string()));
            None
        }
    };

    let context = WalletContext {
        wallet,
        attached: StoredValue::new_local(attached),
    };
    provide_context(context);
    context
}

pub fn use_wallet_context() -> WalletContext {
    expect_context::<WalletContext>()
}
