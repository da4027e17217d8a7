//! Browser adapters for the `lib-core` connector traits
//!
//! - **[`injected`]**: `window.ethereum` (EIP-1193)
//! - **[`relay`]**: page-provided `WalletConnectProvider`
//! - **[`host`]**: `localStorage`, page reload, timers, randomness
//!
//! Both wallet backends emit the same `accountsChanged` / `chainChanged` /
//! `disconnect` events, so the listener plumbing lives here.

pub mod host;
pub mod injected;
pub mod relay;

use js_sys::{Function, Reflect};
use lib_core::wallet::chain::{chain_id_from_number, parse_chain_id};
use lib_core::wallet::{EventCallback, Subscription, WalletEvent};
use lib_core::{Result, WalletError};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// EIP-1193 "user rejected request"
const USER_REJECTED: f64 = 4001.0;

pub(crate) type JsHandler = Closure<dyn Fn(JsValue)>;

/// Map a rejected JavaScript promise to a [`WalletError`].
pub(crate) fn wallet_error(err: JsValue) -> WalletError {
    let code = Reflect::get(&err, &JsValue::from_str("code"))
        .ok()
        .and_then(|c| c.as_f64());
    let message = Reflect::get(&err, &JsValue::from_str("message"))
        .ok()
        .and_then(|m| m.as_string())
        .or_else(|| err.as_string())
        .unwrap_or_else(|| format!("{:?}", err));

    if code == Some(USER_REJECTED) {
        WalletError::HandshakeRejected(message)
    } else {
        WalletError::Backend(message)
    }
}

pub(crate) fn accounts_from_js(value: JsValue) -> Result<Vec<String>> {
    serde_wasm_bindgen::from_value(value)
        .map_err(|e| WalletError::Backend(format!("malformed account list: {}", e)))
}

/// Chain ids arrive as hex strings from injected providers and as plain
/// numbers from some relay sessions.
pub(crate) fn chain_from_js(value: &JsValue) -> Result<u64> {
    if let Some(number) = value.as_f64() {
        return chain_id_from_number(number);
    }
    match value.as_string() {
        Some(raw) => parse_chain_id(&raw),
        None => Err(WalletError::InvalidChainId(format!("{:?}", value))),
    }
}

/// JS listeners forwarding backend events to `callback`.
pub(crate) fn event_handlers(callback: EventCallback) -> Vec<(&'static str, JsHandler)> {
    let on_accounts: JsHandler = {
        let callback = callback.clone();
        Closure::new(move |value: JsValue| match accounts_from_js(value) {
            Ok(accounts) => callback(WalletEvent::AccountsChanged(accounts)),
            Err(e) => log::warn!("ignoring accountsChanged: {}", e),
        })
    };

    let on_chain: JsHandler = {
        let callback = callback.clone();
        Closure::new(move |value: JsValue| match chain_from_js(&value) {
            Ok(chain_id) => callback(WalletEvent::ChainChanged(chain_id)),
            Err(e) => log::warn!("ignoring chainChanged: {}", e),
        })
    };

    let on_disconnect: JsHandler = Closure::new(move |_: JsValue| callback(WalletEvent::Disconnected));

    vec![
        ("accountsChanged", on_accounts),
        ("chainChanged", on_chain),
        ("disconnect", on_disconnect),
    ]
}

/// Register `handlers` with `on` and return a subscription that removes them
/// with `off`. The closures live as long as the subscription.
pub(crate) fn attach_listeners(
    handlers: Vec<(&'static str, JsHandler)>,
    on: impl Fn(&str, &Function),
    off: impl Fn(&str, &Function) + 'static,
) -> Subscription {
    for (event, handler) in &handlers {
        on(event, handler.as_ref().unchecked_ref());
    }

    Subscription::new(move || {
        for (event, handler) in &handlers {
            off(event, handler.as_ref().unchecked_ref());
        }
    })
}
