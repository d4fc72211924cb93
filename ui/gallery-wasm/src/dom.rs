//! DOM element bindings.
//!
//! `Page` resolves the long-lived elements once at startup. Result items are
//! not cached here: cards disappear on deletion, so controllers re-query them
//! through `items`. Anything optional that is missing is logged and left as
//! `None`; the behaviour depending on it becomes a no-op.

use crate::config::GalleryConfig;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlImageElement, NodeList, Window};

// ── Helpers ──

pub fn document() -> Document {
    gloo_utils::document()
}

pub fn window() -> Window {
    gloo_utils::window()
}

pub fn by_id(id: &str) -> Option<Element> {
    document().get_element_by_id(id)
}

pub fn query(selector: &str) -> Option<Element> {
    document().query_selector(selector).ok()?
}

pub fn query_within(parent: &Element, selector: &str) -> Option<Element> {
    parent.query_selector(selector).ok()?
}

pub fn query_all(selector: &str) -> Vec<Element> {
    match document().query_selector_all(selector) {
        Ok(nl) => collect(&nl),
        Err(e) => {
            gloo_console::warn!(format!("bad selector {selector}"), e);
            Vec::new()
        }
    }
}

/// Query all matching elements within a parent element.
pub fn query_all_within(parent: &Element, selector: &str) -> Vec<Element> {
    match parent.query_selector_all(selector) {
        Ok(nl) => collect(&nl),
        Err(e) => {
            gloo_console::warn!(format!("bad selector {selector}"), e);
            Vec::new()
        }
    }
}

fn collect(nl: &NodeList) -> Vec<Element> {
    (0..nl.length())
        .filter_map(|i| nl.item(i))
        .filter_map(|n| n.dyn_into::<Element>().ok())
        .collect()
}

pub fn set_text(el: &Element, text: &str) {
    el.set_text_content(Some(text));
}

pub fn add_class(el: &Element, cls: &str) {
    let _ = el.class_list().add_1(cls);
}

pub fn remove_class(el: &Element, cls: &str) {
    let _ = el.class_list().remove_1(cls);
}

pub fn toggle_class(el: &Element, cls: &str, force: bool) {
    let _ = el.class_list().toggle_with_force(cls, force);
}

pub fn has_class(el: &Element, cls: &str) -> bool {
    el.class_list().contains(cls)
}

pub fn create_element(tag: &str) -> Option<Element> {
    document().create_element(tag).ok()
}

pub fn set_style(el: &Element, property: &str, value: &str) {
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        let _ = html.style().set_property(property, value);
    }
}

// ── Page ──

/// The detail modal and the parts the controller writes into.
#[derive(Clone)]
pub struct ModalElements {
    pub root: Element,
    pub image: HtmlImageElement,
    pub filename: Element,
    pub status: Element,
    pub delete_button: Element,
}

/// The secondary "really delete?" overlay.
#[derive(Clone)]
pub struct ConfirmElements {
    pub root: Element,
    pub confirm_button: Element,
}

/// Clone-friendly (all inner types are reference-counted via JS GC).
#[derive(Clone)]
pub struct Page {
    pub config: Rc<GalleryConfig>,
    pub container: Option<Element>,
    pub modal: Option<ModalElements>,
    pub confirm: Option<ConfirmElements>,
    pub filter_options: Vec<Element>,
    pub sort_options: Vec<Element>,
    pub filter_info: Option<Element>,
    pub clear_filter: Option<Element>,
    pub toast_container: Option<Element>,
}

macro_rules! optional {
    ($found:expr, $what:expr) => {{
        let found = $found;
        if found.is_none() {
            gloo_console::log!(format!("gallery: {} not on this page", $what));
        }
        found
    }};
}

impl Page {
    /// Resolve all long-lived references. Call once the document is parsed.
    pub fn bind(config: GalleryConfig) -> Page {
        let container = optional!(query(&config.container_selector), &config.container_selector);
        let modal = bind_modal(&config);
        let confirm = bind_confirm(&config);

        let filter_options = match by_id(&config.filter.menu_id) {
            Some(menu) => query_all_within(&menu, &config.filter.option_selector),
            None => Vec::new(),
        };
        let sort_options = match by_id(&config.sort.menu_id) {
            Some(menu) => query_all_within(&menu, &config.sort.option_selector),
            None => Vec::new(),
        };
        if filter_options.is_empty() || sort_options.is_empty() {
            gloo_console::log!("gallery: filter/sort menus not on this page");
        }

        Page {
            filter_info: by_id(&config.filter.info_text_id),
            clear_filter: by_id(&config.filter.clear_button_id),
            toast_container: query(&config.toast_container_selector),
            container,
            modal,
            confirm,
            filter_options,
            sort_options,
            config: Rc::new(config),
        }
    }
}

fn bind_modal(config: &GalleryConfig) -> Option<ModalElements> {
    let m = &config.modal;
    let root = optional!(by_id(&m.id), format!("#{}", m.id))?;
    let part = |selector: &str| {
        let found = query_within(&root, selector);
        if found.is_none() {
            gloo_console::error!(format!("gallery: #{} has no {}", m.id, selector));
        }
        found
    };
    let image = part(&m.image)?.dyn_into::<HtmlImageElement>().ok()?;
    Some(ModalElements {
        image,
        filename: part(&m.filename)?,
        status: part(&m.status)?,
        delete_button: part(&m.delete_button)?,
        root,
    })
}

fn bind_confirm(config: &GalleryConfig) -> Option<ConfirmElements> {
    let root = by_id(&config.confirm.id)?;
    let Some(confirm_button) = query_within(&root, &config.confirm.confirm_button) else {
        gloo_console::error!(format!(
            "gallery: #{} has no {}, falling back to confirm()",
            config.confirm.id, config.confirm.confirm_button
        ));
        return None;
    };
    Some(ConfirmElements { root, confirm_button })
}
