// Copyright 2026 the Bunting Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Throttled scroll-driven effects.
//!
//! A [`ScrollEffect`] runs its `apply` closure once at setup and then on
//! scroll, rate-limited through [`Throttle`]. When a scroll event lands
//! inside the throttle window a trailing run is scheduled so the final scroll
//! position is never dropped; a newer event supersedes the pending trailing
//! run. Dropping the effect removes the scroll listener and cancels any
//! pending trailing run.

use alloc::rc::Rc;
use core::cell::RefCell;

use bunting_core::effects::{Gate, SCROLL_THROTTLE_MS, Throttle};
use web_sys::Window;

use crate::listener::EventListener;
use crate::timer::{self, Timeout};

/// A throttled `scroll` listener torn down on drop.
pub(crate) struct ScrollEffect {
    _listener: EventListener,
    _pending: Rc<RefCell<Option<Timeout>>>,
}

impl ScrollEffect {
    /// Installs `apply` as a throttled scroll handler and runs it once
    /// immediately.
    pub(crate) fn new(window: &Window, apply: impl Fn() + 'static) -> Self {
        let apply: Rc<dyn Fn()> = Rc::new(apply);
        apply();

        let throttle = Rc::new(RefCell::new(Throttle::new(SCROLL_THROTTLE_MS)));
        let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));

        let listener = {
            let apply = Rc::clone(&apply);
            let throttle = Rc::clone(&throttle);
            let pending = Rc::clone(&pending);
            EventListener::new(window, "scroll", move |_event| {
                match throttle.borrow_mut().poll(timer::performance_now()) {
                    Gate::Run => apply(),
                    Gate::Defer(remaining_ms) => {
                        let apply = Rc::clone(&apply);
                        let throttle = Rc::clone(&throttle);
                        #[expect(
                            clippy::cast_possible_truncation,
                            reason = "remaining_ms is below the 50ms window; timer granularity dwarfs the fraction"
                        )]
                        let trailing = Timeout::new(remaining_ms as i32, move || {
                            throttle.borrow_mut().mark_ran(timer::performance_now());
                            apply();
                        });
                        // Replacing cancels the previously scheduled run.
                        *pending.borrow_mut() = Some(trailing);
                    }
                }
            })
        };

        Self {
            _listener: listener,
            _pending: pending,
        }
    }
}

impl core::fmt::Debug for ScrollEffect {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ScrollEffect").finish()
    }
}
