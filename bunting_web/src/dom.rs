// Copyright 2026 the Bunting Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Small DOM lookup and mutation helpers.
//!
//! Missing elements are an expected state, not an error: a controller invoked
//! on a page without its anchor elements must no-op, so everything here
//! returns `Option` and style writes are best-effort.

use alloc::string::String;

use wasm_bindgen::JsCast as _;
use web_sys::{Document, Element, HtmlElement, Storage, Window};

pub(crate) fn window() -> Option<Window> {
    web_sys::window()
}

pub(crate) fn document() -> Option<Document> {
    web_sys::window()?.document()
}

pub(crate) fn by_id(document: &Document, id: &str) -> Option<Element> {
    document.get_element_by_id(id)
}

pub(crate) fn html_by_id(document: &Document, id: &str) -> Option<HtmlElement> {
    document.get_element_by_id(id)?.dyn_into().ok()
}

/// Removes the first descendant of `root` matching `selector`, if any.
pub(crate) fn remove_by_selector(root: &Element, selector: &str) {
    if let Ok(Some(el)) = root.query_selector(selector) {
        el.remove();
    }
}

/// Best-effort single style property write.
pub(crate) fn set_style(el: &HtmlElement, property: &str, value: &str) {
    let _ = el.style().set_property(property, value);
}

/// Viewport dimensions in CSS pixels, zero when unavailable.
pub(crate) fn viewport_size(window: &Window) -> (f64, f64) {
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    (width, height)
}

/// Current vertical scroll offset, zero when unavailable.
pub(crate) fn scroll_y(window: &Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

pub(crate) fn local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// The current location pathname, if readable.
pub(crate) fn pathname(window: &Window) -> Option<String> {
    window.location().pathname().ok()
}
