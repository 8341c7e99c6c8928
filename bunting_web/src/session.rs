// Copyright 2026 the Bunting Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Page-session wiring for the three controllers.
//!
//! [`Controllers`] owns one instance of each controller and re-runs their
//! `init` on initial DOM readiness and after every pjax navigation. The
//! controllers themselves are idempotent, so firing them more than once per
//! navigation is harmless.

use alloc::boxed::Box;
use alloc::rc::Rc;

use wasm_bindgen::JsCast as _;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Event};

use crate::background::{BackgroundConfig, ResponsiveBackgroundMedia};
use crate::countdown::CountdownWidget;
use crate::footer::{FooterConfig, FooterDecoration};
use crate::{diag, dom};

use bunting_core::countdown::CountdownConfig;

const SCOPE: &str = "session";

/// Navigation-complete events fired by the theme's pjax router.
const NAVIGATION_EVENTS: [&str; 2] = ["pjax:complete", "pjax:success"];

/// One instance of each controller, re-initialized on every navigation.
#[derive(Debug)]
pub struct Controllers {
    countdown: Rc<CountdownWidget>,
    footer: FooterDecoration,
    background: Rc<ResponsiveBackgroundMedia>,
}

impl Controllers {
    /// Creates the controller set.
    #[must_use]
    pub fn new(
        countdown: CountdownConfig,
        footer: FooterConfig,
        background: BackgroundConfig,
    ) -> Rc<Self> {
        Rc::new(Self {
            countdown: CountdownWidget::new(countdown),
            footer: FooterDecoration::new(footer),
            background: ResponsiveBackgroundMedia::new(background),
        })
    }

    /// Runs the controllers at DOM readiness and re-runs them after every
    /// pjax navigation. Call once per page session.
    pub fn install(self: &Rc<Self>) {
        let Some(document) = dom::document() else {
            return;
        };

        if document.ready_state() == "loading" {
            let this = Rc::clone(self);
            let closure = Closure::wrap(Box::new(move |_event: Event| {
                this.invoke_all();
            }) as Box<dyn FnMut(Event)>);
            let _ = document.add_event_listener_with_callback(
                "DOMContentLoaded",
                closure.as_ref().unchecked_ref(),
            );
            closure.forget();
        } else {
            self.invoke_all();
        }

        self.bind_navigation(&document);
    }

    fn bind_navigation(self: &Rc<Self>, document: &Document) {
        for event_type in NAVIGATION_EVENTS {
            let this = Rc::clone(self);
            let closure = Closure::wrap(Box::new(move |_event: Event| {
                diag::log(SCOPE, event_type);
                this.invoke_all();
            }) as Box<dyn FnMut(Event)>);
            let _ = document
                .add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn invoke_all(&self) {
        self.countdown.init();
        self.footer.init();
        self.background.init();
    }
}
