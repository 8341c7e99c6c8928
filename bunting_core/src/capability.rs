// Copyright 2026 the Bunting Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Structured platform capability probing.
//!
//! Instead of sniffing user-agent strings at each decision point, the browser
//! layer implements [`PlatformProbe`] once and every consumer works from its
//! structured answers. The probe decides, in one place, that the orientation
//! sensor is [`Unsupported`](SensorCapability::Unsupported) on platforms
//! where the API is unreliable.

/// What the platform offers for orientation-sensor parallax.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SensorCapability {
    /// Sensor events can be subscribed to directly.
    Available,
    /// Sensor exists but the platform requires an explicit permission grant
    /// before events are delivered.
    PermissionRequired,
    /// No usable sensor (absent, or present but unreliable on this platform).
    Unsupported,
}

/// The primary pointing device class.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerClass {
    /// A precise pointer (mouse, trackpad).
    Fine,
    /// A touch screen or similar coarse pointer.
    Coarse,
}

/// One-stop capability probe implemented per platform.
pub trait PlatformProbe {
    /// Orientation-sensor availability for tilt parallax.
    fn orientation_sensor(&self) -> SensorCapability;

    /// Whether the primary pointer is fine or coarse.
    fn pointer_class(&self) -> PointerClass;
}

/// Which parallax input to wire up for the current platform.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParallaxMode {
    /// Mouse movement over the header region.
    Pointer,
    /// Touch movement, at reduced intensity.
    Touch,
    /// Device-orientation angles.
    Tilt {
        /// The platform demands an explicit permission request first.
        needs_permission: bool,
    },
}

/// Chooses the parallax input from the probe's answers.
///
/// Fine pointers always use the mouse. Coarse-pointer devices prefer the
/// orientation sensor and fall back to touch when it is unsupported.
#[must_use]
pub fn parallax_mode(probe: &impl PlatformProbe) -> ParallaxMode {
    match probe.pointer_class() {
        PointerClass::Fine => ParallaxMode::Pointer,
        PointerClass::Coarse => match probe.orientation_sensor() {
            SensorCapability::Available => ParallaxMode::Tilt {
                needs_permission: false,
            },
            SensorCapability::PermissionRequired => ParallaxMode::Tilt {
                needs_permission: true,
            },
            SensorCapability::Unsupported => ParallaxMode::Touch,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedProbe {
        sensor: SensorCapability,
        pointer: PointerClass,
    }

    impl PlatformProbe for FixedProbe {
        fn orientation_sensor(&self) -> SensorCapability {
            self.sensor
        }

        fn pointer_class(&self) -> PointerClass {
            self.pointer
        }
    }

    #[test]
    fn fine_pointer_ignores_the_sensor() {
        let probe = FixedProbe {
            sensor: SensorCapability::Available,
            pointer: PointerClass::Fine,
        };
        assert_eq!(parallax_mode(&probe), ParallaxMode::Pointer);
    }

    #[test]
    fn coarse_pointer_prefers_the_sensor() {
        let probe = FixedProbe {
            sensor: SensorCapability::Available,
            pointer: PointerClass::Coarse,
        };
        assert_eq!(
            parallax_mode(&probe),
            ParallaxMode::Tilt {
                needs_permission: false
            }
        );
    }

    #[test]
    fn permission_gated_sensor_is_reported() {
        let probe = FixedProbe {
            sensor: SensorCapability::PermissionRequired,
            pointer: PointerClass::Coarse,
        };
        assert_eq!(
            parallax_mode(&probe),
            ParallaxMode::Tilt {
                needs_permission: true
            }
        );
    }

    #[test]
    fn unsupported_sensor_falls_back_to_touch() {
        let probe = FixedProbe {
            sensor: SensorCapability::Unsupported,
            pointer: PointerClass::Coarse,
        };
        assert_eq!(parallax_mode(&probe), ParallaxMode::Touch);
    }
}
