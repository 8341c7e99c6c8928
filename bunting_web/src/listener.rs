// Copyright 2026 the Bunting Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An event listener registration that unregisters on drop.
//!
//! Controllers re-run their setup on every navigation; listeners on
//! long-lived targets (window, document) would otherwise accumulate. Holding
//! the registration in an [`EventListener`] ties its lifetime to the
//! controller state that replaced it.

use alloc::boxed::Box;

use wasm_bindgen::JsCast as _;
use wasm_bindgen::closure::Closure;
use web_sys::{Event, EventTarget};

/// A listener on `target` removed again when this handle is dropped.
pub(crate) struct EventListener {
    target: EventTarget,
    event_type: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

impl EventListener {
    /// Registers `callback` for `event_type` events on `target`.
    pub(crate) fn new(
        target: &EventTarget,
        event_type: &'static str,
        callback: impl FnMut(Event) + 'static,
    ) -> Self {
        let closure = Closure::wrap(Box::new(callback) as Box<dyn FnMut(Event)>);
        let _ = target
            .add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref());
        Self {
            target: target.clone(),
            event_type,
            closure,
        }
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(
                self.event_type,
                self.closure.as_ref().unchecked_ref(),
            );
    }
}

impl core::fmt::Debug for EventListener {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("EventListener")
            .field("event_type", &self.event_type)
            .finish()
    }
}
