// Copyright 2026 the Bunting Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Remaining-time arithmetic for the countdown widget.
//!
//! The widget re-renders once per second until a fixed target timestamp.
//! [`Remaining::until`] splits the time left into days/hours/minutes/seconds
//! and returns `None` once the target has passed — the signal for the caller
//! to cancel its repeating timer. The display is intentionally left at its
//! last rendered values at expiry (no clamp to all-zero).

use alloc::format;
use alloc::string::String;

const SECOND_MS: i64 = 1_000;
const MINUTE_MS: i64 = 60 * SECOND_MS;
const HOUR_MS: i64 = 60 * MINUTE_MS;
const DAY_MS: i64 = 24 * HOUR_MS;

/// Fixed countdown target, as milliseconds since the Unix epoch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CountdownConfig {
    /// Target timestamp in epoch milliseconds.
    pub target_epoch_ms: i64,
}

impl CountdownConfig {
    /// Creates a config for the given epoch-millisecond target.
    #[must_use]
    pub const fn new(target_epoch_ms: i64) -> Self {
        Self { target_epoch_ms }
    }
}

/// Time left until the target, split into display units.
///
/// `days` is unbounded; the other fields are reduced modulo their unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Remaining {
    /// Whole days left.
    pub days: i64,
    /// Hours left within the current day (0–23).
    pub hours: i64,
    /// Minutes left within the current hour (0–59).
    pub minutes: i64,
    /// Seconds left within the current minute (0–59).
    pub seconds: i64,
}

impl Remaining {
    /// Splits the time left between `now_ms` and `target_ms`.
    ///
    /// Returns `None` when the target has passed (`diff <= 0`), which is the
    /// caller's cue to stop updating.
    #[must_use]
    pub const fn until(target_ms: i64, now_ms: i64) -> Option<Self> {
        let diff = target_ms - now_ms;
        if diff <= 0 {
            return None;
        }
        Some(Self {
            days: diff / DAY_MS,
            hours: (diff % DAY_MS) / HOUR_MS,
            minutes: (diff % HOUR_MS) / MINUTE_MS,
            seconds: (diff % MINUTE_MS) / SECOND_MS,
        })
    }

    /// Renders the four fields zero-padded to at least two digits, in
    /// days/hours/minutes/seconds order.
    #[must_use]
    pub fn fields(&self) -> [String; 4] {
        [
            format!("{:02}", self.days),
            format!("{:02}", self.hours),
            format!("{:02}", self.minutes),
            format!("{:02}", self.seconds),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_a_mixed_remainder() {
        // 3 days, 4 hours, 5 minutes, 6 seconds.
        let diff = 3 * DAY_MS + 4 * HOUR_MS + 5 * MINUTE_MS + 6 * SECOND_MS;
        let r = Remaining::until(diff, 0).expect("target is in the future");
        assert_eq!(r.days, 3);
        assert_eq!(r.hours, 4);
        assert_eq!(r.minutes, 5);
        assert_eq!(r.seconds, 6);
    }

    #[test]
    fn one_second_boundary() {
        let target = 1_771_286_400_000;
        let r = Remaining::until(target, target - 1_000).expect("one second left");
        assert_eq!(r.fields(), ["00", "00", "00", "01"]);
    }

    #[test]
    fn expiry_stops_updates() {
        let target = 1_771_286_400_000;
        assert_eq!(Remaining::until(target, target), None);
        assert_eq!(Remaining::until(target, target + 1), None);
        assert_eq!(Remaining::until(target, target + DAY_MS), None);
    }

    #[test]
    fn fields_are_zero_padded() {
        let diff = 2 * HOUR_MS + 3 * SECOND_MS;
        let r = Remaining::until(diff, 0).expect("target is in the future");
        assert_eq!(r.fields(), ["00", "02", "00", "03"]);
    }

    #[test]
    fn days_exceeding_two_digits_are_not_truncated() {
        let r = Remaining::until(123 * DAY_MS, 0).expect("target is in the future");
        assert_eq!(r.fields()[0], "123");
    }
}
