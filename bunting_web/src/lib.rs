// Copyright 2026 the Bunting Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Browser bindings for bunting's decorative blog-theme behaviors.
//!
//! This crate attaches three self-contained UI controllers to a blog theme's
//! DOM and keeps them healthy across pjax-style client-side navigations:
//!
//! - [`CountdownWidget`]: days/hours/minutes/seconds to a fixed target date,
//!   with a persisted visual theme selectable from a settings menu
//! - [`FooterDecoration`]: a decorative image block inserted above the footer
//!   exactly once per page view
//! - [`ResponsiveBackgroundMedia`]: an orientation-aware image or video
//!   background with parallax and scroll-driven fade/mask effects
//!
//! [`Controllers`] wires all three to DOM-ready and pjax completion events.
//! Every controller's `init` is idempotent: it tears down its own timers,
//! listeners, and elements before creating new ones, so repeated invocation
//! after navigation never stacks duplicates.
//!
//! All decision logic lives in [`bunting_core`]; this crate only samples
//! browser state and writes the results back as DOM mutations.

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(
    not(target_arch = "wasm32"),
    allow(dead_code, reason = "this crate only runs in the browser")
)]

extern crate alloc;

mod background;
mod countdown;
mod diag;
mod dom;
mod footer;
mod listener;
mod probe;
mod scroll;
mod session;
mod timer;

pub use background::{BackgroundConfig, ResponsiveBackgroundMedia};
pub use bunting_core::countdown::CountdownConfig;
pub use countdown::CountdownWidget;
pub use footer::{FooterConfig, FooterDecoration};
pub use probe::BrowserProbe;
pub use session::Controllers;
