//! Relay session (`WalletConnectProvider`) via wasm-bindgen
//!
//! The page loads the WalletConnect UMD bundle, which exposes the provider
//! constructor on `window`. Each [`RelayConnector::open`] builds a fresh
//! provider; pairing starts on `enable()`.

use std::rc::Rc;

use async_trait::async_trait;
use js_sys::{Function, Object, Reflect};
use lib_core::wallet::{EventCallback, Network, RelayConnector, RelaySession, Subscription};
use lib_core::{Result, WalletConfig};
use wasm_bindgen::prelude::*;

use super::{accounts_from_js, attach_listeners, chain_from_js, event_handlers, wallet_error};

#[wasm_bindgen(inline_js = "
function providerClass() {
    const wc = window.WalletConnectProvider;
    if (!wc) return null;
    return wc.default || wc;
}

export function relayCreate(rpc) {
    const Provider = providerClass();
    if (!Provider) {
        throw new Error('WalletConnectProvider is not loaded');
    }
    return new Provider({ rpc });
}

export async function relayEnable(session) {
    return await session.enable();
}

export async function relayRequest(session, method) {
    return await session.request({ method });
}

export async function relayDisconnect(session) {
    try {
        await session.disconnect();
    } catch (err) {
        console.debug('relay session already closed', err);
    }
}

export function relayOn(session, event, handler) {
    session.on(event, handler);
}

export function relayRemoveListener(session, event, handler) {
    if (typeof session.removeListener === 'function') {
        session.removeListener(event, handler);
    }
}
")]
extern "C" {
    #[wasm_bindgen(js_name = relayCreate, catch)]
    fn relay_create(rpc: &JsValue) -> std::result::Result<JsValue, JsValue>;

    #[wasm_bindgen(js_name = relayEnable, catch)]
    async fn relay_enable(session: &JsValue) -> std::result::Result<JsValue, JsValue>;

    #[wasm_bindgen(js_name = relayRequest, catch)]
    async fn relay_request(session: &JsValue, method: &str) -> std::result::Result<JsValue, JsValue>;

    #[wasm_bindgen(js_name = relayDisconnect)]
    async fn relay_disconnect(session: &JsValue);

    #[wasm_bindgen(js_name = relayOn)]
    fn relay_on(session: &JsValue, event: &str, handler: &Function);

    #[wasm_bindgen(js_name = relayRemoveListener)]
    fn relay_remove_listener(session: &JsValue, event: &str, handler: &Function);
}

/// Opens WalletConnect sessions against the configured RPC endpoints.
pub struct BrowserRelay;

impl RelayConnector for BrowserRelay {
    fn open(&self, config: &WalletConfig) -> Result<Rc<dyn RelaySession>> {
        let rpc = Object::new();
        for (chain_id, url) in &config.relay_rpc {
            Reflect::set(&rpc, &JsValue::from_str(&chain_id.to_string()), &JsValue::from_str(url))
                .map_err(wallet_error)?;
        }

        let provider = relay_create(&rpc).map_err(wallet_error)?;
        log::debug!("relay session created for {} chains", config.relay_rpc.len());
        Ok(Rc::new(BrowserRelaySession { provider }))
    }
}

pub struct BrowserRelaySession {
    provider: JsValue,
}

#[async_trait(?Send)]
impl RelaySession for BrowserRelaySession {
    async fn enable(&self) -> Result<()> {
        relay_enable(&self.provider).await.map_err(wallet_error)?;
        Ok(())
    }

    async fn list_accounts(&self) -> Result<Vec<String>> {
        let value = relay_request(&self.provider, "eth_accounts")
            .await
            .map_err(wallet_error)?;
        accounts_from_js(value)
    }

    async fn network(&self) -> Result<Network> {
        let value = relay_request(&self.provider, "eth_chainId")
            .await
            .map_err(wallet_error)?;
        Ok(Network {
            chain_id: chain_from_js(&value)?,
        })
    }

    fn disconnect(&self) {
        let provider = self.provider.clone();
        wasm_bindgen_futures::spawn_local(async move {
            relay_disconnect(&provider).await;
        });
    }

    fn subscribe(&self, callback: EventCallback) -> Subscription {
        let on_provider = self.provider.clone();
        let off_provider = self.provider.clone();
        attach_listeners(
            event_handlers(callback),
            move |event, handler| relay_on(&on_provider, event, handler),
            move |event, handler| relay_remove_listener(&off_provider, event, handler),
        )
    }
}
