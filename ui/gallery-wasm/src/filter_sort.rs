//! Filtering and sorting of result cards.
//!
//! The selection lives in `state`; `vg_gallery_core::GalleryView` decides
//! visibility and order from plain data, and this module only writes that
//! decision back: hidden marker, DOM order, active option, info line.
//! Every change reapplies both filter and sort.

use crate::dom::{self, Page};
use crate::items;
use crate::state;
use js_sys::{Array, JsString, Object};
use std::cmp::Ordering;
use vg_gallery_core::{Filter, GalleryView, ResultItem, Selection, SortKey, SummaryLine};
use web_sys::Element;

/// Restore the stored selection and apply it. Pages without both menus are
/// left untouched: a stored filter could hide cards with no way back.
pub fn init(page: &Page) {
    if let Some(menu) = missing_menu(page.filter_options.len(), page.sort_options.len()) {
        gloo_console::log!(format!("filter/sort: no {menu} menu, controller disabled"));
        return;
    }
    let keys = &page.config.storage;
    let restored = Selection::restore(
        state::session_get(&keys.filter).as_deref(),
        state::session_get(&keys.sort).as_deref(),
    );
    if restored.filter_reset {
        gloo_console::log!("filter: stored value invalid, reset to all");
        state::session_set(&keys.filter, restored.selection.filter.as_str());
    }
    if restored.sort_reset {
        gloo_console::log!("sort: stored value invalid, reset to filename-asc");
        state::session_set(&keys.sort, restored.selection.sort.as_str());
    }
    state::set_selection(restored.selection);
    apply(page);
}

fn missing_menu(filter_options: usize, sort_options: usize) -> Option<&'static str> {
    match (filter_options, sort_options) {
        (0, _) => Some("filter"),
        (_, 0) => Some("sort"),
        _ => None,
    }
}

/// Filter option click. Unknown keys fall back to `all`.
pub fn on_filter_click(page: &Page, key: &str) {
    let filter = key.parse::<Filter>().unwrap_or_else(|e| {
        gloo_console::warn!(e.to_string());
        Filter::All
    });
    select(page, Selection { filter, ..state::selection() });
}

pub fn on_sort_click(page: &Page, key: &str) {
    match key.parse::<SortKey>() {
        Ok(sort) => select(page, Selection { sort, ..state::selection() }),
        Err(e) => {
            gloo_console::warn!(e.to_string());
        }
    }
}

pub fn on_clear_click(page: &Page) {
    select(page, Selection { filter: Filter::All, ..state::selection() });
}

fn select(page: &Page, selection: Selection) {
    state::set_selection(selection);
    let keys = &page.config.storage;
    state::session_set(&keys.filter, selection.filter.as_str());
    state::session_set(&keys.sort, selection.sort.as_str());
    apply(page);
}

/// Write the current selection onto the page.
pub fn apply(page: &Page) {
    let selection = state::selection();
    let (els, items) = items::read_all(page);
    let view = GalleryView::compute_by(&items, selection, locale_compare);

    let hidden = &page.config.classes.hidden;
    for (el, visible) in els.iter().zip(&view.visible) {
        dom::toggle_class(el, hidden, !visible);
    }

    match &page.container {
        Some(container) => {
            for &i in &view.order {
                if let Err(e) = container.append_child(&items::root(page, &els[i])) {
                    gloo_console::warn!("sort: could not move item", e);
                }
            }
        }
        None if !els.is_empty() => {
            gloo_console::warn!("sort: no results container, order unchanged");
        }
        None => {}
    }

    mark_active(page, selection);
    render_info(page, selection, items.first());
}

/// `String.prototype.localeCompare` with the browser's default locale.
fn locale_compare(a: &str, b: &str) -> Ordering {
    JsString::from(a)
        .locale_compare(b, &Array::new(), &Object::new())
        .cmp(&0)
}

fn mark_active(page: &Page, selection: Selection) {
    let active = &page.config.classes.active;
    let mark = |options: &[Element], attr: &str, current: &str| {
        for opt in options {
            let on = opt.get_attribute(attr).as_deref() == Some(current);
            dom::toggle_class(opt, active, on);
        }
    };
    mark(&page.filter_options, &page.config.filter.option_attr, selection.filter.as_str());
    mark(&page.sort_options, &page.config.sort.option_attr, selection.sort.as_str());
}

fn render_info(page: &Page, selection: Selection, first: Option<&ResultItem>) {
    if let Some(clear) = &page.clear_filter {
        dom::toggle_class(clear, &page.config.classes.collapsed, selection.filter == Filter::All);
    }
    let Some(info) = &page.filter_info else {
        return;
    };
    let line = SummaryLine::describe(selection, &items::subject(page, first));

    dom::set_text(info, "");
    let doc = dom::document();
    let mut ok = info.append_child(&doc.create_text_node(&line.lead)).is_ok();
    if let Some(emphasis) = &line.emphasis {
        match dom::create_element("strong") {
            Some(strong) => {
                dom::set_text(&strong, emphasis);
                ok &= info.append_child(&strong).is_ok();
            }
            None => ok = false,
        }
    }
    ok &= info.append_child(&doc.create_text_node(&line.tail)).is_ok();
    if !ok {
        dom::set_text(info, &line.to_plain_text());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn controller_needs_both_menus() {
        assert_eq!(missing_menu(0, 4), Some("filter"));
        assert_eq!(missing_menu(4, 0), Some("sort"));
        assert_eq!(missing_menu(0, 0), Some("filter"));
        assert_eq!(missing_menu(4, 4), None);
    }
}
