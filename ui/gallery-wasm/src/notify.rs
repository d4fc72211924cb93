//! User-facing notifications: success toasts and blocking alerts.

use crate::bootstrap;
use crate::dom::{self, Page};
use gloo_events::EventListener;
use gloo_timers::callback::Timeout;
use web_sys::Element;

pub fn alert(message: &str) {
    let _ = dom::window().alert_with_message(message);
}

/// Blocking yes/no prompt. A prompt the browser refuses counts as "no".
pub fn confirm(message: &str) -> bool {
    dom::window().confirm_with_message(message).unwrap_or(false)
}

/// Append a transient toast to the page's toast container.
pub fn success_toast(page: &Page, message: &str) {
    let Some(container) = &page.toast_container else {
        gloo_console::log!(format!("gallery: no toast container for \"{message}\""));
        return;
    };
    let Some(toast) = build_toast("Success", message) else {
        return;
    };
    if let Err(e) = container.append_child(&toast) {
        gloo_console::warn!("toast: append failed", e);
        return;
    }

    if bootstrap::invoke("Toast", &toast, "show") {
        let el = toast.clone();
        EventListener::once(&toast, "hidden.bs.toast", move |_| el.remove()).forget();
        return;
    }

    dom::add_class(&toast, &page.config.classes.shown);
    if let Some(close) = dom::query_within(&toast, ".btn-close") {
        let el = toast.clone();
        EventListener::once(&close, "click", move |_| el.remove()).forget();
    }
    let el = toast.clone();
    Timeout::new(page.config.toast_lifetime_ms, move || el.remove()).forget();
}

fn build_toast(title: &str, message: &str) -> Option<Element> {
    let toast = dom::create_element("div")?;
    toast.set_class_name("toast");
    let _ = toast.set_attribute("role", "alert");
    let _ = toast.set_attribute("aria-live", "assertive");
    let _ = toast.set_attribute("aria-atomic", "true");

    let header = dom::create_element("div")?;
    header.set_class_name("toast-header");
    let strong = dom::create_element("strong")?;
    strong.set_class_name("me-auto");
    dom::set_text(&strong, title);
    let close = dom::create_element("button")?;
    close.set_class_name("btn-close");
    let _ = close.set_attribute("type", "button");
    let _ = close.set_attribute("data-bs-dismiss", "toast");
    let _ = close.set_attribute("aria-label", "Close");
    header.append_with_node_2(&strong, &close).ok()?;

    let body = dom::create_element("div")?;
    body.set_class_name("toast-body");
    dom::set_text(&body, message);

    toast.append_with_node_2(&header, &body).ok()?;
    Some(toast)
}
