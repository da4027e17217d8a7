//! Content Guardian browser front-end
//!
//! Wallet connection plus the simulated register/verify workflows, rendered
//! with Leptos. All connection logic lives in `lib-core`; this crate supplies
//! the browser adapters and the views.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

mod app;
mod components;
mod pages;
mod services;
mod state;
mod utils;

use app::App;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Content Guardian starting");

    hide_loading_screen();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

/// Hide the static loading placeholder shipped in `index.html`.
fn hide_loading_screen() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::warn!("no document available");
        return;
    };

    match document.get_element_by_id("guardian-loading") {
        Some(element) => {
            if let Some(html_element) = element.dyn_ref::<HtmlElement>() {
                html_element.class_list().add_1("hidden").ok();
            }
            element.set_attribute("style", "display: none !important;").ok();
        }
        None => log::debug!("loading element not found"),
    }
}
