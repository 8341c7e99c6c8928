// Copyright 2026 the Bunting Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The countdown widget controller.
//!
//! Renders days/hours/minutes/seconds to a fixed target date once per second
//! and manages the widget's persisted visual theme.
//!
//! # DOM contract
//!
//! - `#days`, `#hours`, `#minutes`, `#seconds` — the four display fields
//! - `#countdown-main-content` — container carrying the theme class
//! - `#countdown-menu` — settings menu, shown via a `show` class
//! - `.countdown-settings` — the menu trigger control
//! - elements with a `data-countdown-theme` attribute — theme options
//!
//! [`init`](CountdownWidget::init) is idempotent: it cancels the previous
//! interval before starting a new one (pjax navigations must never stack
//! timers) and silently no-ops when the widget's elements are absent.

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::{Cell, RefCell};

use bunting_core::countdown::{CountdownConfig, Remaining};
use bunting_core::theme;
use wasm_bindgen::JsCast as _;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event, HtmlElement, Node};

use crate::timer::{self, Interval};
use crate::{diag, dom};

const SCOPE: &str = "countdown";

const FIELD_IDS: [&str; 4] = ["days", "hours", "minutes", "seconds"];
const CONTENT_ID: &str = "countdown-main-content";
const MENU_ID: &str = "countdown-menu";
const SETTINGS_SELECTOR: &str = ".countdown-settings";
const THEME_OPTION_SELECTOR: &str = "[data-countdown-theme]";
const MENU_SHOWN_CLASS: &str = "show";
const TICK_MS: i32 = 1_000;

/// Countdown timer widget with a persisted, menu-selectable theme.
///
/// Construct once per page session and call [`init`](Self::init) on every
/// navigation-complete event.
pub struct CountdownWidget {
    config: CountdownConfig,
    timer: RefCell<Option<Interval>>,
    menu_toggle: RefCell<Option<Closure<dyn FnMut()>>>,
    theme_handlers: RefCell<Vec<Closure<dyn FnMut()>>>,
    outside_close_bound: Cell<bool>,
}

impl CountdownWidget {
    /// Creates the widget controller for a fixed target date.
    #[must_use]
    pub fn new(config: CountdownConfig) -> Rc<Self> {
        Rc::new(Self {
            config,
            timer: RefCell::new(None),
            menu_toggle: RefCell::new(None),
            theme_handlers: RefCell::new(Vec::new()),
            outside_close_bound: Cell::new(false),
        })
    }

    /// (Re)binds the widget to the current DOM.
    ///
    /// Safe to call any number of times: at most one repeating timer is ever
    /// active, and absent elements make this a no-op.
    pub fn init(self: &Rc<Self>) {
        // Cancel the interval from the previous page view before anything else.
        self.timer.borrow_mut().take();

        let Some(document) = dom::document() else {
            return;
        };
        self.load_saved_theme(&document);
        self.bind_menu(&document);
        self.ensure_outside_close(&document);
        self.start_timer(&document);
    }

    fn start_timer(self: &Rc<Self>, document: &Document) {
        if FIELD_IDS
            .iter()
            .any(|id| dom::by_id(document, id).is_none())
        {
            return;
        }

        let target_ms = self.config.target_epoch_ms;
        if !render_fields(target_ms) {
            // Already expired; leave the display as-is.
            return;
        }

        // The tick cancels its own browser timer at expiry; the handle we
        // store keeps the closure alive until the next init replaces it.
        let interval_id = Rc::new(Cell::new(0));
        let id_for_tick = Rc::clone(&interval_id);
        let interval = Interval::new(TICK_MS, move || {
            if !render_fields(target_ms) {
                timer::clear_interval(id_for_tick.get());
            }
        });
        interval_id.set(interval.id());
        *self.timer.borrow_mut() = Some(interval);
    }

    fn load_saved_theme(&self, document: &Document) {
        let saved = dom::local_storage().and_then(|s| s.get_item(theme::STORAGE_KEY).ok().flatten());
        if let Some(name) = saved {
            apply_theme(document, &name);
        }
    }

    fn bind_menu(&self, document: &Document) {
        // The trigger toggles the menu. `onclick` assignment replaces any
        // previous handler, so re-binding after navigation cannot stack.
        let toggle = {
            let doc = document.clone();
            Closure::wrap(Box::new(move || {
                if let Some(menu) = dom::by_id(&doc, MENU_ID) {
                    let _ = menu.class_list().toggle(MENU_SHOWN_CLASS);
                }
            }) as Box<dyn FnMut()>)
        };
        if let Ok(Some(trigger)) = document.query_selector(SETTINGS_SELECTOR)
            && let Ok(trigger) = trigger.dyn_into::<HtmlElement>()
        {
            trigger.set_onclick(Some(toggle.as_ref().unchecked_ref()));
        }
        *self.menu_toggle.borrow_mut() = Some(toggle);

        // One handler per theme option: apply, persist, close the menu.
        let mut handlers = Vec::new();
        if let Ok(options) = document.query_selector_all(THEME_OPTION_SELECTOR) {
            for i in 0..options.length() {
                let Some(option) = options.item(i).and_then(|n| n.dyn_into::<Element>().ok())
                else {
                    continue;
                };
                let Some(name) = option.get_attribute("data-countdown-theme") else {
                    continue;
                };
                let doc = document.clone();
                let handler = Closure::wrap(Box::new(move || {
                    select_theme(&doc, &name);
                }) as Box<dyn FnMut()>);
                if let Ok(option) = option.dyn_into::<HtmlElement>() {
                    option.set_onclick(Some(handler.as_ref().unchecked_ref()));
                }
                handlers.push(handler);
            }
        }
        *self.theme_handlers.borrow_mut() = handlers;
    }

    /// Clicking anywhere outside the open menu and its trigger closes it.
    /// Bound to the document once per page session.
    fn ensure_outside_close(&self, document: &Document) {
        if self.outside_close_bound.get() {
            return;
        }
        self.outside_close_bound.set(true);

        let doc = document.clone();
        let closure = Closure::wrap(Box::new(move |event: Event| {
            let Some(menu) = dom::by_id(&doc, MENU_ID) else {
                return;
            };
            if !menu.class_list().contains(MENU_SHOWN_CLASS) {
                return;
            }
            let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
            let inside_menu = menu.contains(target.as_ref());
            let inside_trigger = doc
                .query_selector(SETTINGS_SELECTOR)
                .ok()
                .flatten()
                .is_some_and(|trigger| trigger.contains(target.as_ref()));
            if !inside_menu && !inside_trigger {
                let _ = menu.class_list().remove_1(MENU_SHOWN_CLASS);
            }
        }) as Box<dyn FnMut(Event)>);
        let _ =
            document.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

impl core::fmt::Debug for CountdownWidget {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CountdownWidget")
            .field("config", &self.config)
            .field("timer_active", &self.timer.borrow().is_some())
            .finish()
    }
}

fn apply_theme(document: &Document, name: &str) {
    if let Some(content) = dom::by_id(document, CONTENT_ID) {
        content.set_class_name(&theme::theme_class(name));
    }
}

fn select_theme(document: &Document, name: &str) {
    if dom::by_id(document, CONTENT_ID).is_none() {
        return;
    }
    apply_theme(document, name);
    if let Some(storage) = dom::local_storage() {
        let _ = storage.set_item(theme::STORAGE_KEY, name);
    }
    if let Some(menu) = dom::by_id(document, MENU_ID) {
        let _ = menu.class_list().remove_1(MENU_SHOWN_CLASS);
    }
}

/// Renders the four fields for the current instant.
///
/// Returns `false` once the target has passed, telling the tick to cancel
/// itself; the display keeps its last rendered values. Missing fields are a
/// silent no-op that leaves the timer running.
fn render_fields(target_ms: i64) -> bool {
    let Some(document) = dom::document() else {
        return true;
    };
    let mut fields: [Option<HtmlElement>; 4] = [None, None, None, None];
    for (slot, id) in fields.iter_mut().zip(FIELD_IDS) {
        *slot = dom::html_by_id(&document, id);
    }
    let [Some(days), Some(hours), Some(minutes), Some(seconds)] = fields else {
        return true;
    };

    #[expect(
        clippy::cast_possible_truncation,
        reason = "Date.now() is integral and far below i64::MAX milliseconds"
    )]
    let now_ms = js_sys::Date::now() as i64;
    match Remaining::until(target_ms, now_ms) {
        Some(remaining) => {
            let [d, h, m, s] = remaining.fields();
            days.set_inner_text(&d);
            hours.set_inner_text(&h);
            minutes.set_inner_text(&m);
            seconds.set_inner_text(&s);
            true
        }
        None => {
            diag::log(SCOPE, "target reached; stopping updates");
            false
        }
    }
}
