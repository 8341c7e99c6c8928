// Copyright 2026 the Bunting Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Demo entry point wiring the three controllers to the sample blog page in
//! `index.html`.

#![no_std]

extern crate alloc;

use alloc::string::String;

use bunting_web::{BackgroundConfig, Controllers, CountdownConfig, FooterConfig};
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::wasm_bindgen;

/// Milliseconds since the Unix epoch for a date literal, interpreted in the
/// visitor's local time zone.
fn local_epoch_ms(date: &str) -> i64 {
    #[expect(
        clippy::cast_possible_truncation,
        reason = "Date.getTime() is integral and far below i64::MAX milliseconds"
    )]
    let ms = js_sys::Date::new(&JsValue::from_str(date)).get_time() as i64;
    ms
}

/// Installs the controllers for the demo page.
#[wasm_bindgen(start)]
pub fn run() {
    let controllers = Controllers::new(
        CountdownConfig {
            target_epoch_ms: local_epoch_ms("2026-02-17T00:00:00"),
        },
        FooterConfig {
            image_url: String::from("assets/footer-pet.webp"),
            wall_image_url: String::from("assets/wall.webp"),
        },
        BackgroundConfig::default(),
    );
    controllers.install();
}
