//! VisionGallery WASM Frontend
//!
//! Client-side behaviour of the detection results page: image deletion, the
//! detail modal, filtering/sorting of result cards and the summary counts.
//! Everything works on attributes the server already rendered into the page.

pub mod api;
pub mod bootstrap;
pub mod config;
pub mod decor;
pub mod deletion;
pub mod dom;
pub mod events;
pub mod filter_sort;
pub mod items;
pub mod modal;
pub mod notify;
pub mod state;
pub mod summary;

use config::GalleryConfig;
use gloo_events::EventListener;
use wasm_bindgen::prelude::*;

/// WASM entry point – called automatically when the module is instantiated.
#[wasm_bindgen(start)]
pub fn start() {
    // Improve panic messages in the browser console
    console_error_panic_hook::set_once();

    let document = dom::document();
    if document.ready_state() == "loading" {
        EventListener::once(&document, "DOMContentLoaded", |_| init()).forget();
    } else {
        init();
    }
}

/// Page bootstrapper: decorations, then the deletion, modal and filter/sort
/// controllers.
fn init() {
    let page = dom::Page::bind(GalleryConfig::load());

    decor::init(&page.config);
    events::bind_events(&page);
    filter_sort::init(&page);

    gloo_console::log!(format!(
        "gallery: {} result items ready",
        items::elements(&page).len()
    ));
}
