//! Navigation bar with the wallet controls

use leptos::prelude::*;
use leptos_router::components::A;
use lib_core::wallet::ConnectionPhase;
use lib_core::ConnectorKind;
use shared::utils::chain_name;

use crate::state::wallet::use_wallet_context;

#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav>
            <div class="nav-inner">
                <A href="/" attr:class="nav-brand">
                    <span class="brand-mark">"Content"</span><span class="brand-name">"Guardian"</span>
                </A>
                <div class="nav-links">
                    <A href="/">"Home"</A>
                    <A href="/register">"Register Content"</A>
                    <A href="/verify">"Verify Ownership"</A>
                    <A href="/license">"License"</A>
                </div>
                <WalletControls/>
            </div>
        </nav>
    }
}

#[component]
fn WalletControls() -> impl IntoView {
    let wallet_ctx = use_wallet_context();

    move || match wallet_ctx.phase() {
        ConnectionPhase::Connecting => view! {
            <div class="wallet-controls">
                <button class="btn btn-outline" disabled=true>"Connecting..."</button>
            </div>
        }
        .into_any(),
        ConnectionPhase::Connected => {
            let (address, network) = wallet_ctx.wallet.with(|snapshot| {
                (
                    snapshot.display_address(),
                    snapshot.chain_id.map(chain_name).unwrap_or_default(),
                )
            });
            view! {
                <div class="wallet-controls">
                    <span class="wallet-address">{address}</span>
                    <span class="wallet-network">{network}</span>
                    <button class="btn btn-outline" on:click=move |_| wallet_ctx.disconnect()>
                        "Disconnect"
                    </button>
                </div>
            }
            .into_any()
        }
        ConnectionPhase::Disconnected => {
            let injected_hint = if wallet_ctx.has_injected_provider() {
                ""
            } else {
                "No browser wallet detected"
            };
            view! {
                <div class="wallet-controls">
                    <button
                        class="btn"
                        title=injected_hint
                        on:click=move |_| wallet_ctx.connect(ConnectorKind::InjectedProvider)
                    >
                        {ConnectorKind::InjectedProvider.label()}
                    </button>
                    <button
                        class="btn btn-outline"
                        on:click=move |_| wallet_ctx.connect(ConnectorKind::RelaySession)
                    >
                        {ConnectorKind::RelaySession.label()}
                    </button>
                </div>
            }
            .into_any()
        }
    }
}
