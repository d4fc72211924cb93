//! Event binding.
//!
//! Wires every static listener once at startup. The only listener bound
//! later is the detail modal's delete action, which `modal::open` replaces
//! on each open.

use crate::bootstrap;
use crate::deletion;
use crate::dom::{self, Page};
use crate::filter_sort;
use crate::items;
use crate::modal;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, KeyboardEvent, MouseEvent};

/// Helper: attach a click handler for the lifetime of the page.
macro_rules! on_click {
    ($el:expr, $cb:expr) => {{
        let cb = Closure::wrap(Box::new($cb) as Box<dyn FnMut(MouseEvent)>);
        if let Err(e) = $el.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref()) {
            gloo_console::error!("failed to bind click handler", e);
        }
        cb.forget();
    }};
}

/// Bind all UI event listeners. Call once after `Page::bind`.
pub fn bind_events(page: &Page) {
    let cfg = page.config.clone();

    // ── Per-item delete buttons ──
    for btn in dom::query_all(&cfg.delete_button_selector) {
        let Some(id) = btn.get_attribute(&cfg.attrs.id).filter(|id| !id.is_empty()) else {
            gloo_console::warn!(format!("{} without {}", cfg.delete_button_selector, cfg.attrs.id));
            continue;
        };
        let page2 = page.clone();
        on_click!(btn, move |e: MouseEvent| {
            e.prevent_default();
            e.stop_propagation();
            deletion::on_delete_click(&page2, &id);
        });
    }

    // ── Result cards open the detail modal ──
    if page.modal.is_some() {
        for card in items::elements(page) {
            let page2 = page.clone();
            let target = card.clone();
            on_click!(card, move |_: MouseEvent| {
                modal::open(&page2, &target);
            });
        }
    }

    // ── Secondary confirmation overlay ──
    if let Some(confirm) = &page.confirm {
        let page2 = page.clone();
        on_click!(confirm.confirm_button, move |e: MouseEvent| {
            e.prevent_default();
            modal::on_confirm_click(&page2);
        });
    }

    // ── Filter / sort options ──
    for opt in &page.filter_options {
        let key = opt.get_attribute(&cfg.filter.option_attr).unwrap_or_default();
        let page2 = page.clone();
        on_click!(opt, move |e: MouseEvent| {
            e.prevent_default();
            filter_sort::on_filter_click(&page2, &key);
        });
    }
    for opt in &page.sort_options {
        let key = opt.get_attribute(&cfg.sort.option_attr).unwrap_or_default();
        let page2 = page.clone();
        on_click!(opt, move |e: MouseEvent| {
            e.prevent_default();
            filter_sort::on_sort_click(&page2, &key);
        });
    }
    if let Some(clear) = &page.clear_filter {
        let page2 = page.clone();
        on_click!(clear, move |e: MouseEvent| {
            e.prevent_default();
            filter_sort::on_clear_click(&page2);
        });
    }

    // Bootstrap's data API closes its own modals.
    if !bootstrap::is_available() {
        bind_fallback_dismiss(page);
    }
}

/// Close buttons, backdrop clicks and Escape for modals without Bootstrap.
fn bind_fallback_dismiss(page: &Page) {
    for root in modal::roots(page) {
        for btn in dom::query_all_within(&root, r#"[data-bs-dismiss="modal"]"#) {
            let page2 = page.clone();
            let target = root.clone();
            on_click!(btn, move |e: MouseEvent| {
                e.prevent_default();
                modal::hide(&page2, &target);
            });
        }

        let page2 = page.clone();
        let backdrop = root.clone();
        on_click!(root, move |e: MouseEvent| {
            let clicked = e.target().and_then(|t| t.dyn_into::<Element>().ok());
            if clicked.as_ref() == Some(&backdrop) {
                modal::hide(&page2, &backdrop);
            }
        });
    }

    let page2 = page.clone();
    let on_key = Closure::wrap(Box::new(move |e: KeyboardEvent| {
        if e.key() == "Escape" {
            modal::hide_open(&page2);
        }
    }) as Box<dyn FnMut(KeyboardEvent)>);
    if let Err(e) = dom::document().add_event_listener_with_callback("keydown", on_key.as_ref().unchecked_ref()) {
        gloo_console::error!("failed to bind keydown handler", e);
    }
    on_key.forget();
}
