//! Bridge to the page's Bootstrap bundle, when it loaded one.
//!
//! Components are looked up on `window.bootstrap` at call time and driven via
//! `getOrCreateInstance`, so the same element always maps to one instance.
//! Every function reports whether Bootstrap handled the call; callers fall
//! back to plain class toggling otherwise.

use crate::dom;
use js_sys::{Function, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Element;

fn namespace() -> Option<JsValue> {
    let ns = Reflect::get(&dom::window(), &JsValue::from_str("bootstrap")).ok()?;
    ns.is_object().then_some(ns)
}

fn method(target: &JsValue, name: &str) -> Option<Function> {
    Reflect::get(target, &JsValue::from_str(name))
        .ok()?
        .dyn_into::<Function>()
        .ok()
}

pub fn is_available() -> bool {
    namespace().is_some()
}

/// `bootstrap[component].getOrCreateInstance(el)`
pub fn instance(component: &str, el: &Element) -> Option<JsValue> {
    let ctor = Reflect::get(&namespace()?, &JsValue::from_str(component)).ok()?;
    let get = method(&ctor, "getOrCreateInstance")?;
    get.call1(&ctor, el).ok()
}

/// `bootstrap[component].getOrCreateInstance(el)[action]()`
pub fn invoke(component: &str, el: &Element, action: &str) -> bool {
    let Some(inst) = instance(component, el) else {
        return false;
    };
    match method(&inst, action).map(|f| f.call0(&inst)) {
        Some(Ok(_)) => true,
        Some(Err(e)) => {
            gloo_console::warn!(format!("bootstrap.{component}.{action} failed"), e);
            false
        }
        None => false,
    }
}
