//! Decorative startup behaviour: tooltips, toasts, staggered card fade-in.
//! None of it is needed for the gallery to work.

use crate::bootstrap;
use crate::config::GalleryConfig;
use crate::dom;
use gloo_timers::callback::Timeout;

pub fn init(config: &GalleryConfig) {
    if bootstrap::is_available() {
        for el in dom::query_all(&config.tooltip_selector) {
            let _ = bootstrap::instance("Tooltip", &el);
        }
        for el in dom::query_all(&config.toast_selector) {
            let _ = bootstrap::instance("Toast", &el);
        }
    }
    stagger_fade_in(&config.fade_in_selector, config.fade_in_step_ms);
}

/// Cards start transparent and 20px low, then settle one step apart.
pub fn stagger_fade_in(selector: &str, step_ms: u32) {
    for (index, card) in dom::query_all(selector).into_iter().enumerate() {
        dom::set_style(&card, "opacity", "0");
        dom::set_style(&card, "transform", "translateY(20px)");
        dom::set_style(&card, "transition", "opacity 0.5s ease, transform 0.5s ease");

        let delay = step_ms.saturating_mul(index as u32);
        Timeout::new(delay, move || {
            dom::set_style(&card, "opacity", "1");
            dom::set_style(&card, "transform", "translateY(0)");
        })
        .forget();
    }
}
