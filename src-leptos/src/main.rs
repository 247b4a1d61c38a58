//! FAQ Accordion - Leptos Frontend
//!
//! Client-side only: the FAQ data is bundled at compile time and panel
//! state lives in the browser's local storage.

// Dependencies used in lib.rs submodules, acknowledged here for bin target
use faq_types as _;
use wasm_bindgen as _;
use web_sys as _;

use faq_leptos::app::App;
use leptos::prelude::*;

fn main() {
    // Initialize panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging (ignore error if already initialized)
    drop(console_log::init_with_level(log::Level::Debug));

    log::info!("FAQ accordion starting...");

    mount_to_body(App);
}
