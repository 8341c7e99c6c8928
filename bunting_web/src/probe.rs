// Copyright 2026 the Bunting Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Browser implementation of the platform capability probe.
//!
//! All platform detection happens here, once, behind the structured
//! [`PlatformProbe`] answers; no other module inspects the user agent.

use alloc::boxed::Box;

use bunting_core::capability::{PlatformProbe, PointerClass, SensorCapability};
use js_sys::{Function, Promise, Reflect};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast as _, JsValue};
use web_sys::Window;

use crate::dom;

/// Capability probe backed by live browser state.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserProbe;

impl BrowserProbe {
    /// Creates the probe.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Runs the platform's explicit sensor permission flow and invokes
    /// `on_granted` only when the user grants access. Denial silently
    /// disables the feature; there is no retry.
    pub(crate) fn request_orientation_permission(on_granted: impl FnOnce() + 'static) {
        let Some(window) = dom::window() else { return };
        let Ok(ctor) = Reflect::get(window.as_ref(), &JsValue::from_str("DeviceOrientationEvent"))
        else {
            return;
        };
        let Ok(request) = Reflect::get(&ctor, &JsValue::from_str("requestPermission")) else {
            return;
        };
        if !request.is_function() {
            // Nothing to ask on this platform.
            on_granted();
            return;
        }
        let request: Function = request.unchecked_into();
        let Ok(result) = request.call0(&ctor) else { return };
        let Ok(promise) = result.dyn_into::<Promise>() else { return };

        let mut granted = Some(on_granted);
        let on_state = Closure::wrap(Box::new(move |state: JsValue| {
            if state.as_string().as_deref() == Some("granted")
                && let Some(f) = granted.take()
            {
                f();
            }
        }) as Box<dyn FnMut(JsValue)>);
        let _ = promise.then(&on_state);
        on_state.forget();
    }
}

impl PlatformProbe for BrowserProbe {
    fn orientation_sensor(&self) -> SensorCapability {
        let Some(window) = dom::window() else {
            return SensorCapability::Unsupported;
        };
        // Orientation events fire but report unusable angles on Apple's
        // mobile browsers, so the sensor is treated as absent there.
        if apple_mobile(&window) {
            return SensorCapability::Unsupported;
        }
        let Ok(ctor) = Reflect::get(window.as_ref(), &JsValue::from_str("DeviceOrientationEvent"))
        else {
            return SensorCapability::Unsupported;
        };
        if ctor.is_undefined() {
            return SensorCapability::Unsupported;
        }
        let needs_permission = Reflect::get(&ctor, &JsValue::from_str("requestPermission"))
            .map(|v| v.is_function())
            .unwrap_or(false);
        if needs_permission {
            SensorCapability::PermissionRequired
        } else {
            SensorCapability::Available
        }
    }

    fn pointer_class(&self) -> PointerClass {
        let coarse = dom::window()
            .and_then(|w| w.match_media("(pointer: coarse)").ok().flatten())
            .is_some_and(|m| m.matches());
        if coarse {
            PointerClass::Coarse
        } else {
            PointerClass::Fine
        }
    }
}

fn apple_mobile(window: &Window) -> bool {
    let Ok(user_agent) = window.navigator().user_agent() else {
        return false;
    };
    let apple_device = ["iPad", "iPhone", "iPod"]
        .iter()
        .any(|token| user_agent.contains(token));
    let ms_stream = Reflect::has(window.as_ref(), &JsValue::from_str("MSStream")).unwrap_or(false);
    apple_device && !ms_stream
}
