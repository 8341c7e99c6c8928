// Copyright 2026 the Bunting Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Console diagnostics with a per-controller scope prefix.
//!
//! Failures here are never surfaced to the end user beyond the visual
//! absence of an element, so the console is the only observability surface.

use alloc::format;

use wasm_bindgen::JsValue;
use web_sys::console;

pub(crate) fn log(scope: &str, message: &str) {
    console::log_1(&JsValue::from_str(&format!("[{scope}] {message}")));
}

pub(crate) fn warn(scope: &str, message: &str) {
    console::warn_1(&JsValue::from_str(&format!("[{scope}] {message}")));
}

pub(crate) fn error(scope: &str, message: &str) {
    console::error_1(&JsValue::from_str(&format!("[{scope}] {message}")));
}

/// Warning carrying an opaque JS value (e.g. a rejected promise's reason).
pub(crate) fn warn_with(scope: &str, message: &str, detail: &JsValue) {
    console::warn_2(&JsValue::from_str(&format!("[{scope}] {message}")), detail);
}

/// Error carrying an opaque JS value.
pub(crate) fn error_with(scope: &str, message: &str, detail: &JsValue) {
    console::error_2(&JsValue::from_str(&format!("[{scope}] {message}")), detail);
}
