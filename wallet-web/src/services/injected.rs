//! Injected provider (`window.ethereum`) via wasm-bindgen

use std::rc::Rc;

use async_trait::async_trait;
use js_sys::Function;
use lib_core::wallet::chain::chain_id_from_number;
use lib_core::wallet::{EventCallback, InjectedProvider, Subscription};
use lib_core::{Result, WalletError};
use wasm_bindgen::prelude::*;

use super::{accounts_from_js, attach_listeners, event_handlers, wallet_error};

#[wasm_bindgen(inline_js = "
export function hasEthereum() {
    return typeof window !== 'undefined' && !!window.ethereum;
}

export async function ethRequest(method) {
    return await window.ethereum.request({ method });
}

export function ethOn(event, handler) {
    window.ethereum.on(event, handler);
}

export function ethRemoveListener(event, handler) {
    if (window.ethereum && typeof window.ethereum.removeListener === 'function') {
        window.ethereum.removeListener(event, handler);
    }
}
")]
extern "C" {
    #[wasm_bindgen(js_name = hasEthereum)]
    fn has_ethereum() -> bool;

    #[wasm_bindgen(js_name = ethRequest, catch)]
    async fn eth_request(method: &str) -> std::result::Result<JsValue, JsValue>;

    #[wasm_bindgen(js_name = ethOn)]
    fn eth_on(event: &str, handler: &Function);

    #[wasm_bindgen(js_name = ethRemoveListener)]
    fn eth_remove_listener(event: &str, handler: &Function);
}

/// The browser extension's provider.
pub struct BrowserInjected;

impl BrowserInjected {
    /// Look for `window.ethereum` once, at start-up.
    pub fn detect() -> Option<Rc<dyn InjectedProvider>> {
        if has_ethereum() {
            log::info!("injected wallet provider detected");
            Some(Rc::new(BrowserInjected))
        } else {
            log::info!("no injected wallet provider");
            None
        }
    }
}

#[async_trait(?Send)]
impl InjectedProvider for BrowserInjected {
    async fn request_accounts(&self) -> Result<Vec<String>> {
        let value = eth_request("eth_requestAccounts").await.map_err(wallet_error)?;
        accounts_from_js(value)
    }

    async fn chain_id(&self) -> Result<String> {
        let value = eth_request("eth_chainId").await.map_err(wallet_error)?;
        if let Some(raw) = value.as_string() {
            return Ok(raw);
        }
        match value.as_f64() {
            Some(number) => chain_id_from_number(number).map(|id| id.to_string()),
            None => Err(WalletError::InvalidChainId(format!("{:?}", value))),
        }
    }

    fn subscribe(&self, callback: EventCallback) -> Subscription {
        attach_listeners(
            event_handlers(callback),
            |event, handler| eth_on(event, handler),
            |event, handler| eth_remove_listener(event, handler),
        )
    }
}
