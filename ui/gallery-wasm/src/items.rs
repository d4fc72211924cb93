//! Reading result items out of the rendered page.

use crate::dom::{self, Page};
use vg_gallery_core::{DetectionResult, ResultItem, Subject};
use web_sys::Element;

/// Every result item currently in the document, in document order.
pub fn elements(page: &Page) -> Vec<Element> {
    dom::query_all(&page.config.item_selector)
}

pub fn result_of(page: &Page, el: &Element) -> DetectionResult {
    DetectionResult::from_attr(el.get_attribute(&page.config.attrs.result).as_deref())
}

pub fn read(page: &Page, el: &Element) -> ResultItem {
    let attrs = &page.config.attrs;
    ResultItem {
        id: el.get_attribute(&attrs.id).unwrap_or_default(),
        src: el.get_attribute(&attrs.src).unwrap_or_default(),
        filename: el.get_attribute(&attrs.filename).unwrap_or_default(),
        result: result_of(page, el),
        subject: el.get_attribute(&attrs.subject),
    }
}

pub fn read_all(page: &Page) -> (Vec<Element>, Vec<ResultItem>) {
    let els = elements(page);
    let items = els.iter().map(|el| read(page, el)).collect();
    (els, items)
}

/// Compares attributes instead of building a selector, so ids need no escaping.
pub fn find_by_id(page: &Page, id: &str) -> Option<Element> {
    let attr = &page.config.attrs.id;
    elements(page)
        .into_iter()
        .find(|el| el.get_attribute(attr).as_deref() == Some(id))
}

/// The node that moves and disappears with an item: its grid column when the
/// item sits in one directly under the results container, else the item.
pub fn root(page: &Page, el: &Element) -> Element {
    let Some(container) = &page.container else {
        return el.clone();
    };
    match el.parent_element() {
        Some(parent) if &parent == container => el.clone(),
        Some(parent) if parent.parent_element().as_ref() == Some(container) => parent,
        _ => el.clone(),
    }
}

pub fn remove(page: &Page, el: &Element) {
    root(page, el).remove();
}

/// The subject noun: first item, then the container's own attribute.
pub fn subject(page: &Page, first: Option<&ResultItem>) -> Subject {
    let from_container = page
        .container
        .as_ref()
        .and_then(|c| c.get_attribute(&page.config.attrs.subject));
    Subject::resolve([
        first.and_then(|item| item.subject.as_deref()),
        from_container.as_deref(),
    ])
}
