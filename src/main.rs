//! Product Showcase - Main Entry Point
//!
//! Serves the product listing page through Dioxus fullstack.
//! Uses dioxus::serve() pattern for dx serve compatibility.

use product_showcase::app::App;

// Server entry point - NO #[tokio::main], dioxus::serve() creates its own runtime
#[cfg(feature = "server")]
fn main() {
    // Initialize tracing BEFORE dioxus::serve
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting Product Showcase...");

    // Warm the catalog so a broken fixture shows up in the server log at startup
    if let Err(e) = product_showcase::domain::catalog() {
        tracing::warn!("Product catalog unavailable: {}. The page will show an error.", e);
    }

    dioxus::serve(|| async move {
        // No API routes: the listing page is the whole surface
        Ok(dioxus::server::router(App))
    });
}

// WASM entry point (browser) - no server feature
#[cfg(all(not(feature = "server"), target_arch = "wasm32"))]
fn main() {
    // Log to browser console to confirm WASM loaded
    web_sys::console::log_1(&"[WASM] Product Showcase - WASM initialized!".into());
    dioxus::launch(App);
}

// Native client (desktop) - no server feature, not WASM
#[cfg(all(not(feature = "server"), not(target_arch = "wasm32")))]
fn main() {
    dioxus::launch(App);
}
