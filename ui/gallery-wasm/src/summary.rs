//! Summary panel counts.
//!
//! Counts every item still in the document, hidden or not: they describe
//! what exists, not what the filter shows.

use crate::dom::{self, Page};
use crate::items;
use vg_gallery_core::Counts;

pub fn update_counts(page: &Page) {
    let counts = Counts::tally(items::elements(page).iter().map(|el| items::result_of(page, el)));
    let slots = &page.config.summary;
    for (selector, value) in [
        (&slots.total, counts.total),
        (&slots.detected, counts.detected),
        (&slots.not_detected, counts.not_detected),
        (&slots.unknown, counts.unknown),
    ] {
        match dom::query(selector) {
            Some(el) => dom::set_text(&el, &value.to_string()),
            None => {
                gloo_console::log!(format!("gallery: summary slot {selector} missing"));
            }
        }
    }
}
