//! Image deletion.
//!
//! Item lifecycle: normal → pending-removal (on confirm) → removed (on
//! success), or back to normal when the request fails. An id with a request
//! outstanding ignores further delete clicks until it resolves.

use crate::api;
use crate::dom::{self, Page};
use crate::items;
use crate::notify;
use crate::state;
use crate::summary;
use gloo_timers::future::TimeoutFuture;
use vg_gallery_core::Settled;

pub const CONFIRM_PROMPT: &str = "Are you sure you want to delete this image?";
pub const SUCCESS_MESSAGE: &str = "Image deleted successfully.";
pub const FAILURE_ALERT: &str = "Failed to delete image. Please try again.";

/// Per-item delete button: prompt, then delete in the background.
pub fn on_delete_click(page: &Page, id: &str) {
    if !notify::confirm(CONFIRM_PROMPT) {
        return;
    }
    spawn_delete(page, id);
}

pub fn spawn_delete(page: &Page, id: &str) {
    let page = page.clone();
    let id = id.to_owned();
    wasm_bindgen_futures::spawn_local(async move {
        delete_image(&page, &id).await;
    });
}

/// Delete one image. Assumes the user already confirmed.
pub async fn delete_image(page: &Page, id: &str) {
    let Some(item) = items::find_by_id(page, id) else {
        gloo_console::error!(format!("delete: no result item with id {id}"));
        return;
    };
    let Some(mut deletion) = state::begin_delete(id) else {
        gloo_console::log!(format!("delete: {id} already pending"));
        return;
    };

    let pending = &page.config.classes.pending;
    dom::add_class(&item, pending);

    match deletion.settle(api::delete_image(&page.config, id).await) {
        Settled::Removed(resp) => {
            // let the removal transition play before the node goes
            TimeoutFuture::new(page.config.removal_delay_ms).await;
            items::remove(page, &item);
            notify::success_toast(page, SUCCESS_MESSAGE);
            summary::update_counts(page);
            if let Some(remaining) = resp.remaining_count {
                gloo_console::log!(format!("delete: {id} removed, {remaining} left on server"));
            }
        }
        Settled::Reverted(e) => {
            gloo_console::error!(format!("delete: {id} failed:"), e.to_string());
            dom::remove_class(&item, pending);
            notify::alert(FAILURE_ALERT);
        }
    }

    state::finish_delete(deletion);
}
