// Copyright 2026 the Bunting Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core logic for bunting's decorative blog-theme behaviors.
//!
//! `bunting_core` holds every decision the browser-facing crate makes that
//! does not require a DOM: time arithmetic, the orientation state machine,
//! media selection and fallback, scroll and parallax math, and the structured
//! sensor capability model. It is `no_std` compatible (with `alloc`) so all
//! of it runs under the host test harness as well as on `wasm32`.
//!
//! # Architecture
//!
//! Each module mirrors one concern of the browser layer:
//!
//! **[`countdown`]** — remaining-time split and zero-padded field rendering
//! for the countdown widget. Returns `None` at expiry so the caller knows to
//! cancel its repeating timer.
//!
//! **[`theme`]** — the persisted theme preference: storage key and CSS class
//! composition.
//!
//! **[`orientation`]** — viewport orientation and the change-gate that makes
//! background reloads idempotent.
//!
//! **[`media`]** — per-orientation media descriptors, video-over-image
//! selection, and the single-attempt fallback rule.
//!
//! **[`effects`]** — scroll-driven fade/mask math, the scroll throttle gate,
//! and the pointer/touch/tilt parallax transforms.
//!
//! **[`capability`]** — the [`PlatformProbe`](capability::PlatformProbe)
//! trait and the structured sensor capability result that replaces
//! user-agent sniffing.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod capability;
pub mod countdown;
pub mod effects;
pub mod media;
pub mod orientation;
pub mod theme;
