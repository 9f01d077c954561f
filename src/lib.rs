mod api;
mod app;
mod components;
mod logging;
mod models;
mod pages;
mod panel;
mod state;

use crate::api::EnvConfig;
use crate::app::App;
use crate::state::AppState;
use leptos::prelude::*;
use tracing::info;

// Needed for `#[wasm_bindgen(start)]` on the wasm entrypoint.
#[cfg(all(target_arch = "wasm32", not(test)))]
use wasm_bindgen::prelude::wasm_bindgen;

// Only register the WASM start function for normal builds (not for tests),
// otherwise wasm-bindgen-test will end up with multiple entry symbols.
#[cfg_attr(all(target_arch = "wasm32", not(test)), wasm_bindgen(start))]
pub fn main() {
    console_error_panic_hook::set_once();

    let config = EnvConfig::new();
    logging::init(&config.log_level);
    info!(api_url = %config.api_url, "starting note panel");

    let state = AppState::new(&config);
    mount_to_body(move || view! { <App state=state /> });
}
