// Copyright 2026 the Bunting Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Viewport orientation and the background reload change-gate.
//!
//! The background media loader only tears down and rebuilds its DOM when the
//! orientation actually changes. [`OrientationTracker`] is that gate: it
//! remembers the last orientation it acted on and reports a new one only on
//! a transition. The self-heal paths call [`reset`](OrientationTracker::reset)
//! to force the next observation through the gate.

/// Which way the viewport is currently oriented.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Viewport height exceeds width.
    Portrait,
    /// Width is at least height.
    Landscape,
}

impl Orientation {
    /// Derives the orientation from viewport dimensions in CSS pixels.
    #[must_use]
    pub fn from_viewport(width: f64, height: f64) -> Self {
        if height > width {
            Self::Portrait
        } else {
            Self::Landscape
        }
    }

    /// Stable name used in data-attribute keys and diagnostics.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Portrait => "portrait",
            Self::Landscape => "landscape",
        }
    }
}

/// Remembers the last orientation acted on, so redundant reloads are skipped.
///
/// Starts empty: the first [`observe`](Self::observe) always reports a
/// change.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OrientationTracker {
    last: Option<Orientation>,
}

impl OrientationTracker {
    /// Creates an empty tracker.
    #[must_use]
    pub const fn new() -> Self {
        Self { last: None }
    }

    /// Observes the current viewport dimensions.
    ///
    /// Returns `Some(orientation)` and records it when it differs from the
    /// last recorded one; returns `None` when unchanged (the caller should
    /// skip all reload work).
    pub fn observe(&mut self, width: f64, height: f64) -> Option<Orientation> {
        let current = Orientation::from_viewport(width, height);
        if self.last == Some(current) {
            return None;
        }
        self.last = Some(current);
        Some(current)
    }

    /// The last orientation recorded, if any.
    #[must_use]
    pub const fn last(&self) -> Option<Orientation> {
        self.last
    }

    /// Forgets the recorded orientation so the next observation reloads.
    pub fn reset(&mut self) {
        self.last = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn portrait_iff_height_exceeds_width() {
        assert_eq!(Orientation::from_viewport(400.0, 800.0), Orientation::Portrait);
        assert_eq!(Orientation::from_viewport(800.0, 400.0), Orientation::Landscape);
        // Square counts as landscape.
        assert_eq!(Orientation::from_viewport(500.0, 500.0), Orientation::Landscape);
    }

    #[test]
    fn first_observation_always_fires() {
        let mut tracker = OrientationTracker::new();
        assert_eq!(tracker.observe(800.0, 400.0), Some(Orientation::Landscape));
    }

    #[test]
    fn unchanged_observation_is_a_no_op() {
        let mut tracker = OrientationTracker::new();
        assert!(tracker.observe(800.0, 400.0).is_some());
        assert_eq!(tracker.observe(900.0, 500.0), None);
        assert_eq!(tracker.last(), Some(Orientation::Landscape));
    }

    #[test]
    fn transition_fires_once_per_change() {
        let mut tracker = OrientationTracker::new();
        assert!(tracker.observe(800.0, 400.0).is_some());
        assert_eq!(tracker.observe(400.0, 800.0), Some(Orientation::Portrait));
        assert_eq!(tracker.observe(400.0, 800.0), None);
    }

    #[test]
    fn reset_forces_the_next_observation_through() {
        let mut tracker = OrientationTracker::new();
        assert!(tracker.observe(800.0, 400.0).is_some());
        tracker.reset();
        assert_eq!(tracker.last(), None);
        assert_eq!(tracker.observe(800.0, 400.0), Some(Orientation::Landscape));
    }
}
