//! Detail modal.
//!
//! One shared overlay shows whichever item was clicked last. Opening it
//! rewrites the delete action's `data-id` and replaces its click listener, so
//! the action can only ever target the item on display.

use crate::bootstrap;
use crate::deletion;
use crate::dom::{self, ModalElements, Page};
use crate::items;
use crate::notify;
use crate::state;
use gloo_events::{EventListener, EventListenerOptions};
use vg_gallery_core::{DetectionResult, StatusBadge, Subject};
use web_sys::Element;

/// Populate the modal from a result item and show it.
pub fn open(page: &Page, card: &Element) {
    let Some(modal) = &page.modal else {
        gloo_console::log!("modal: no detail modal on this page");
        return;
    };
    let item = items::read(page, card);
    let subject = items::subject(page, Some(&item));

    modal.image.set_src(&item.src);
    modal.image.set_alt(&item.filename);
    dom::set_text(&modal.filename, &item.filename);
    render_status(&modal.status, item.result, &subject);

    let attrs = &page.config.attrs;
    let _ = modal.delete_button.set_attribute(&attrs.id, &item.id);
    let _ = modal.delete_button.set_attribute(&attrs.filename, &item.filename);
    rebind_delete(page, modal, item.id);

    show(page, &modal.root);
}

fn render_status(slot: &Element, result: DetectionResult, subject: &Subject) {
    let badge = StatusBadge::for_result(result, subject.singular());
    dom::set_text(slot, "");
    let Some(icon) = dom::create_element("i") else {
        dom::set_text(slot, &badge.text);
        return;
    };
    icon.set_class_name(badge.icon_class);
    let text = dom::document().create_text_node(&badge.text);
    if slot.append_with_node_2(&icon, &text).is_err() {
        dom::set_text(slot, &badge.text);
    }
}

fn rebind_delete(page: &Page, modal: &ModalElements, id: String) {
    let page = page.clone();
    let listener = EventListener::new_with_options(
        &modal.delete_button,
        "click",
        EventListenerOptions::enable_prevent_default(),
        move |e| {
            e.prevent_default();
            request_delete(&page, &id);
        },
    );
    state::replace_modal_delete(listener);
}

/// Modal delete action: close the details, then confirm and delete.
pub fn request_delete(page: &Page, id: &str) {
    if let Some(modal) = &page.modal {
        hide(page, &modal.root);
    }
    match &page.confirm {
        Some(confirm) => {
            let _ = confirm
                .confirm_button
                .set_attribute(&page.config.attrs.id, id);
            show(page, &confirm.root);
        }
        None => {
            if notify::confirm(deletion::CONFIRM_PROMPT) {
                deletion::spawn_delete(page, id);
            }
        }
    }
}

/// Confirm button of the secondary overlay.
pub fn on_confirm_click(page: &Page) {
    let Some(confirm) = &page.confirm else {
        return;
    };
    hide(page, &confirm.root);
    match confirm.confirm_button.get_attribute(&page.config.attrs.id) {
        Some(id) if !id.is_empty() => deletion::spawn_delete(page, &id),
        _ => {
            gloo_console::error!("modal: confirm overlay has no target id");
        }
    }
}

// ── Show / hide ──

pub fn show(page: &Page, root: &Element) {
    if bootstrap::invoke("Modal", root, "show") {
        return;
    }
    dom::add_class(root, &page.config.classes.shown);
    dom::set_style(root, "display", "block");
    let _ = root.remove_attribute("aria-hidden");
    let _ = root.set_attribute("aria-modal", "true");
    if let Some(body) = dom::document().body() {
        dom::add_class(&body, "modal-open");
    }
}

pub fn hide(page: &Page, root: &Element) {
    if bootstrap::invoke("Modal", root, "hide") {
        return;
    }
    dom::remove_class(root, &page.config.classes.shown);
    dom::set_style(root, "display", "none");
    let _ = root.set_attribute("aria-hidden", "true");
    let _ = root.remove_attribute("aria-modal");
    if let Some(body) = dom::document().body() {
        dom::remove_class(&body, "modal-open");
    }
}

/// Every overlay this controller can open.
pub fn roots(page: &Page) -> Vec<Element> {
    page.modal
        .iter()
        .map(|m| m.root.clone())
        .chain(page.confirm.iter().map(|c| c.root.clone()))
        .collect()
}

pub fn hide_open(page: &Page) {
    for root in roots(page) {
        if dom::has_class(&root, &page.config.classes.shown) {
            hide(page, &root);
        }
    }
}
