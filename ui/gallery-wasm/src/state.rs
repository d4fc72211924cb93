//! Global application state.
//!
//! Uses `RefCell`-wrapped `thread_local!` storage (WASM is single-threaded).

use crate::dom;
use gloo_events::EventListener;
use std::cell::RefCell;
use vg_gallery_core::{Deletion, InFlight, ItemState, Selection};

#[derive(Default)]
pub struct AppState {
    pub selection: Selection,
    pub in_flight: InFlight,
    /// Click listener of the modal's delete action for the item on display.
    /// Replacing it drops, and so unregisters, the previous one.
    pub modal_delete: Option<EventListener>,
}

thread_local! {
    static STATE: RefCell<AppState> = RefCell::new(AppState::default());
}

/// Run a closure with shared read access to the state.
pub fn with<F, R>(f: F) -> R
where
    F: FnOnce(&AppState) -> R,
{
    STATE.with(|s| f(&s.borrow()))
}

/// Run a closure with mutable access to the state.
pub fn with_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut AppState) -> R,
{
    STATE.with(|s| f(&mut s.borrow_mut()))
}

// ── Convenience accessors ──

pub fn selection() -> Selection {
    with(|s| s.selection)
}

pub fn set_selection(selection: Selection) {
    with_mut(|s| s.selection = selection);
}

pub fn begin_delete(id: &str) -> Option<Deletion> {
    with_mut(|s| Deletion::begin(&mut s.in_flight, id))
}

pub fn finish_delete(deletion: Deletion) -> ItemState {
    with_mut(|s| deletion.finish(&mut s.in_flight))
}

pub fn replace_modal_delete(listener: EventListener) {
    // the old listener is dropped outside the borrow
    let previous = with_mut(|s| s.modal_delete.replace(listener));
    drop(previous);
}

// ── sessionStorage helpers ──

/// `None` when the browser refuses storage access; callers treat that as
/// empty storage.
fn session_storage() -> Option<web_sys::Storage> {
    dom::window().session_storage().ok().flatten()
}

pub fn session_get(key: &str) -> Option<String> {
    session_storage()?.get_item(key).ok()?
}

pub fn session_set(key: &str, value: &str) {
    let Some(storage) = session_storage() else {
        gloo_console::warn!(format!("sessionStorage unavailable, {key} not saved"));
        return;
    };
    if let Err(e) = storage.set_item(key, value) {
        gloo_console::warn!(format!("sessionStorage: could not write {key}"), e);
    }
}
