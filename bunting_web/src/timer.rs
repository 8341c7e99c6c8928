// Copyright 2026 the Bunting Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `setInterval`/`setTimeout` handles that cancel on drop.
//!
//! Repeating timers are the one resource here that must never be duplicated:
//! a countdown or self-check interval surviving a navigation would run
//! concurrently with its replacement. [`Interval`] and [`Timeout`] own both
//! the browser timer id and the JS closure, so replacing a stored handle
//! cancels the old timer and frees its closure in one move.

use alloc::boxed::Box;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;

// Direct global bindings instead of `web_sys::Window` methods — avoids
// fetching (and unwrapping) the Window object on every call.
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = performance, js_name = "now")]
    pub(crate) fn performance_now() -> f64;

    #[wasm_bindgen(js_name = "setInterval")]
    fn set_interval(callback: &JsValue, ms: i32) -> i32;

    #[wasm_bindgen(js_name = "clearInterval")]
    pub(crate) fn clear_interval(id: i32);

    #[wasm_bindgen(js_name = "setTimeout")]
    fn set_timeout(callback: &JsValue, ms: i32) -> i32;

    #[wasm_bindgen(js_name = "clearTimeout")]
    fn clear_timeout(id: i32);
}

/// A repeating timer cancelled when the handle is dropped.
pub(crate) struct Interval {
    id: i32,
    _closure: Closure<dyn FnMut()>,
}

impl Interval {
    /// Starts a repeating timer firing `callback` every `ms` milliseconds.
    pub(crate) fn new(ms: i32, callback: impl FnMut() + 'static) -> Self {
        let closure = Closure::wrap(Box::new(callback) as Box<dyn FnMut()>);
        let id = set_interval(closure.as_ref(), ms);
        Self {
            id,
            _closure: closure,
        }
    }

    /// The browser timer id, for self-cancellation from inside the callback
    /// (clearing an already-cleared id is a no-op).
    pub(crate) fn id(&self) -> i32 {
        self.id
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        clear_interval(self.id);
    }
}

impl core::fmt::Debug for Interval {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Interval").field("id", &self.id).finish()
    }
}

/// A one-shot timer cancelled when the handle is dropped.
pub(crate) struct Timeout {
    id: i32,
    _closure: Closure<dyn FnMut()>,
}

impl Timeout {
    /// Schedules `callback` to run once after `ms` milliseconds.
    pub(crate) fn new(ms: i32, callback: impl FnOnce() + 'static) -> Self {
        let closure = Closure::once(callback);
        let id = set_timeout(closure.as_ref(), ms);
        Self {
            id,
            _closure: closure,
        }
    }
}

impl Drop for Timeout {
    fn drop(&mut self) {
        clear_timeout(self.id);
    }
}

impl core::fmt::Debug for Timeout {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Timeout").field("id", &self.id).finish()
    }
}

/// Fire-and-forget one-shot timer for deferred consistency checks that
/// outlive any handle we could store. The closure is leaked to the page
/// session, matching its lifetime.
pub(crate) fn timeout_once(ms: i32, callback: impl FnOnce() + 'static) {
    let closure = Closure::once(callback);
    let _ = set_timeout(closure.as_ref(), ms);
    closure.forget();
}
