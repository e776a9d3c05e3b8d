//! WASM entry point: installs logging and mounts the docs app.

use app::App;
use leptos::prelude::*;
use sqwish_docs_core::DocsConfig;
use wasm_bindgen::prelude::wasm_bindgen;

/// Site configuration baked in at compile time.
const DOCS_CONFIG: &str = include_str!("../../docs.toml");

#[wasm_bindgen(start)]
pub fn start() {
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    let config = load_config(DOCS_CONFIG);
    log::info!("mounting {}", config.site.title);

    leptos::mount::mount_to_body(move || view! { <App config=config /> });
}

/// Parse the embedded configuration, falling back to defaults.
fn load_config(source: &str) -> DocsConfig {
    DocsConfig::from_toml_str(source).unwrap_or_else(|err| {
        log::warn!("invalid docs.toml, using defaults: {err}");
        DocsConfig::default()
    })
}
