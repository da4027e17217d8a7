//! Host environment services: durable storage, reload, timers, randomness.

use std::time::Duration;

use futures::future::LocalBoxFuture;
use lib_core::timer::Sleeper;
use lib_core::wallet::{EnvironmentReload, KeyValueStore};
use lib_core::{Result, WalletError};
use web_sys::Storage;

fn local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// `window.localStorage`
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStore;

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let storage =
            local_storage().ok_or_else(|| WalletError::Storage("localStorage unavailable".to_string()))?;
        storage
            .set_item(key, value)
            .map_err(|e| WalletError::Storage(format!("{:?}", e)))
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = local_storage() {
            storage.remove_item(key).ok();
        }
    }
}

/// Full page reload
#[derive(Debug, Default, Clone, Copy)]
pub struct PageReload;

impl EnvironmentReload for PageReload {
    fn reload(&self) {
        let reloaded = web_sys::window().map(|w| w.location().reload());
        if !matches!(reloaded, Some(Ok(()))) {
            log::error!("page reload failed");
        }
    }
}

/// Event-loop timers
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserSleeper;

impl Sleeper for BrowserSleeper {
    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()> {
        Box::pin(gloo_timers::future::sleep(duration))
    }
}

/// Uniform roll in `[0, 1)` for the simulated verification outcome.
pub fn random_roll() -> f64 {
    js_sys::Math::random()
}
