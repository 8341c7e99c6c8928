// Copyright 2026 the Bunting Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll- and motion-driven effect math for the background media.
//!
//! Everything here is pure: the browser layer samples scroll position,
//! pointer position, or tilt angles and feeds them through these functions to
//! get an opacity, a mask percentage, or a [`MediaTransform`] to write back
//! as CSS.
//!
//! Three parallax inputs share one transform shape:
//!
//! - [`pointer_parallax`] — cursor offset from the header's center
//! - [`touch_parallax`] — same, at half intensity
//! - [`tilt_parallax`] — device-orientation angles on sensor-equipped devices

use alloc::format;
use alloc::string::String;

use kurbo::{Point, Vec2};

use crate::orientation::Orientation;

/// Fraction of the element translated per unit of input offset.
pub const PARALLAX_INTENSITY: f64 = 0.05;

/// Extra scale applied while a parallax input is active.
pub const SCALE_INTENSITY: f64 = 0.05;

/// Minimum milliseconds between accepted scroll-effect computations.
pub const SCROLL_THROTTLE_MS: f64 = 50.0;

/// Opacity driven by vertical scroll, 1 at the top fading to 0 at one
/// viewport height, clamped to `[0, 1]`.
#[must_use]
pub fn fade_opacity(scroll_y: f64, viewport_height: f64) -> f64 {
    if viewport_height <= 0.0 {
        return 1.0;
    }
    (1.0 - scroll_y / viewport_height).clamp(0.0, 1.0)
}

/// Mask height percentage driven by vertical scroll, 0 at the top rising to
/// 100 at one viewport height, clamped to `[0, 100]`.
#[must_use]
pub fn mask_height_percent(scroll_y: f64, viewport_height: f64) -> f64 {
    if viewport_height <= 0.0 {
        return 0.0;
    }
    (scroll_y / viewport_height * 100.0).clamp(0.0, 100.0)
}

/// Decision from [`Throttle::poll`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Gate {
    /// Run the effect now.
    Run,
    /// Too soon; run after this many milliseconds unless superseded.
    Defer(f64),
}

/// Rate gate for scroll listeners: at most one accepted run per
/// [`SCROLL_THROTTLE_MS`] window, with the deferred remainder reported so the
/// caller can schedule a trailing run (the last scroll position must not be
/// dropped).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Throttle {
    limit_ms: f64,
    last_ran: Option<f64>,
}

impl Throttle {
    /// Creates a gate accepting one run per `limit_ms` window.
    #[must_use]
    pub const fn new(limit_ms: f64) -> Self {
        Self {
            limit_ms,
            last_ran: None,
        }
    }

    /// Polls the gate at the current timestamp (milliseconds, any monotonic
    /// origin). The first poll always runs.
    pub fn poll(&mut self, now_ms: f64) -> Gate {
        match self.last_ran {
            Some(last) if now_ms - last < self.limit_ms => {
                Gate::Defer(self.limit_ms - (now_ms - last))
            }
            _ => {
                self.last_ran = Some(now_ms);
                Gate::Run
            }
        }
    }

    /// Records a trailing run executed by the caller at `now_ms`.
    pub fn mark_ran(&mut self, now_ms: f64) {
        self.last_ran = Some(now_ms);
    }
}

/// A translate-and-scale transform applied to the media element.
///
/// Translation is in percent of the element's own size, matching CSS
/// `translate(x%, y%)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MediaTransform {
    /// Percent translation on each axis.
    pub translate: Vec2,
    /// Uniform scale factor.
    pub scale: f64,
}

impl MediaTransform {
    /// No translation, no scaling.
    pub const NEUTRAL: Self = Self {
        translate: Vec2::new(0.0, 0.0),
        scale: 1.0,
    };

    /// A pure scale with no translation.
    #[must_use]
    pub const fn scale_only(scale: f64) -> Self {
        Self {
            translate: Vec2::new(0.0, 0.0),
            scale,
        }
    }

    /// Renders the CSS `transform` property value.
    #[must_use]
    pub fn to_css(&self) -> String {
        format!(
            "translate({}%, {}%) scale({})",
            self.translate.x, self.translate.y, self.scale
        )
    }
}

/// Parallax from a cursor position normalized to `[0, 1]` within the header
/// region. The center is neutral; corners give the full ±5% offset.
#[must_use]
pub fn pointer_parallax(norm: Point) -> MediaTransform {
    MediaTransform {
        translate: Vec2::new(
            (norm.x - 0.5) * PARALLAX_INTENSITY * 100.0,
            (norm.y - 0.5) * PARALLAX_INTENSITY * 100.0,
        ),
        scale: 1.0 + SCALE_INTENSITY,
    }
}

/// Parallax from a touch position normalized to `[0, 1]`, at half the
/// pointer intensity for both translation and scale.
#[must_use]
pub fn touch_parallax(norm: Point) -> MediaTransform {
    MediaTransform {
        translate: Vec2::new(
            (norm.x - 0.5) * PARALLAX_INTENSITY * 50.0,
            (norm.y - 0.5) * PARALLAX_INTENSITY * 50.0,
        ),
        scale: 1.0 + SCALE_INTENSITY * 0.5,
    }
}

/// Parallax from device-orientation angles.
///
/// `beta` is front-back tilt (−180..180), `gamma` left-right (−90..90); both
/// are normalized to their full range. `base_scale` carries the portrait
/// entrance scale so tilting never shrinks below it.
#[must_use]
pub fn tilt_parallax(beta: f64, gamma: f64, base_scale: f64) -> MediaTransform {
    MediaTransform {
        translate: Vec2::new(
            (gamma / 90.0) * PARALLAX_INTENSITY * 100.0,
            (beta / 180.0) * PARALLAX_INTENSITY * 100.0,
        ),
        scale: base_scale + SCALE_INTENSITY,
    }
}

/// Scale the video starts at, before any load event.
#[must_use]
pub const fn entrance_scale(orientation: Orientation) -> f64 {
    match orientation {
        Orientation::Portrait => 1.05,
        Orientation::Landscape => 1.2,
    }
}

/// Scale the video settles to once data has loaded.
///
/// Landscape animates down to neutral; portrait keeps its fixed entrance
/// scale with no animation.
#[must_use]
pub const fn settled_scale(orientation: Orientation) -> f64 {
    match orientation {
        Orientation::Portrait => 1.05,
        Orientation::Landscape => 1.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fade_is_one_at_top() {
        assert_eq!(fade_opacity(0.0, 900.0), 1.0);
    }

    #[test]
    fn fade_is_zero_at_one_viewport() {
        assert_eq!(fade_opacity(900.0, 900.0), 0.0);
    }

    #[test]
    fn fade_clamps_past_one_viewport() {
        assert_eq!(fade_opacity(1800.0, 900.0), 0.0);
    }

    #[test]
    fn fade_is_linear_in_between() {
        assert!((fade_opacity(450.0, 900.0) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn fade_survives_degenerate_viewport() {
        assert_eq!(fade_opacity(100.0, 0.0), 1.0);
    }

    #[test]
    fn mask_clamps_to_its_percent_range() {
        assert_eq!(mask_height_percent(0.0, 900.0), 0.0);
        assert_eq!(mask_height_percent(450.0, 900.0), 50.0);
        assert_eq!(mask_height_percent(900.0, 900.0), 100.0);
        assert_eq!(mask_height_percent(2700.0, 900.0), 100.0);
    }

    #[test]
    fn throttle_first_poll_runs() {
        let mut gate = Throttle::new(50.0);
        assert_eq!(gate.poll(1000.0), Gate::Run);
    }

    #[test]
    fn throttle_defers_within_the_window() {
        let mut gate = Throttle::new(50.0);
        assert_eq!(gate.poll(1000.0), Gate::Run);
        assert_eq!(gate.poll(1020.0), Gate::Defer(30.0));
        assert_eq!(gate.poll(1050.0), Gate::Run);
    }

    #[test]
    fn trailing_run_restarts_the_window() {
        let mut gate = Throttle::new(50.0);
        assert_eq!(gate.poll(1000.0), Gate::Run);
        gate.mark_ran(1050.0);
        assert_eq!(gate.poll(1060.0), Gate::Defer(40.0));
    }

    #[test]
    fn pointer_center_is_neutral_translation() {
        let t = pointer_parallax(Point::new(0.5, 0.5));
        assert_eq!(t.translate, Vec2::new(0.0, 0.0));
        assert_eq!(t.scale, 1.0 + SCALE_INTENSITY);
    }

    #[test]
    fn pointer_corner_gives_full_offset() {
        let t = pointer_parallax(Point::new(1.0, 0.0));
        assert!((t.translate.x - 2.5).abs() < 1e-12);
        assert!((t.translate.y + 2.5).abs() < 1e-12);
    }

    #[test]
    fn touch_is_half_intensity() {
        let pointer = pointer_parallax(Point::new(1.0, 1.0));
        let touch = touch_parallax(Point::new(1.0, 1.0));
        assert!((touch.translate.x - pointer.translate.x / 2.0).abs() < 1e-12);
        assert!((touch.scale - (1.0 + SCALE_INTENSITY * 0.5)).abs() < 1e-12);
    }

    #[test]
    fn tilt_normalizes_both_axes() {
        let t = tilt_parallax(180.0, 90.0, 1.0);
        assert!((t.translate.x - 5.0).abs() < 1e-12);
        assert!((t.translate.y - 2.5).abs() < 1e-12);
    }

    #[test]
    fn tilt_preserves_the_base_scale() {
        let t = tilt_parallax(0.0, 0.0, 1.05);
        assert!((t.scale - 1.1).abs() < 1e-12);
    }

    #[test]
    fn entrance_and_settled_scales_per_orientation() {
        assert_eq!(entrance_scale(Orientation::Landscape), 1.2);
        assert_eq!(entrance_scale(Orientation::Portrait), 1.05);
        assert_eq!(settled_scale(Orientation::Landscape), 1.0);
        assert_eq!(settled_scale(Orientation::Portrait), 1.05);
    }

    #[test]
    fn transform_css_shape() {
        let t = MediaTransform {
            translate: Vec2::new(2.5, -1.25),
            scale: 1.05,
        };
        assert_eq!(t.to_css(), "translate(2.5%, -1.25%) scale(1.05)");
        assert_eq!(MediaTransform::NEUTRAL.to_css(), "translate(0%, 0%) scale(1)");
    }
}
