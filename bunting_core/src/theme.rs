// Copyright 2026 the Bunting Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The persisted countdown theme preference.
//!
//! A theme is just a string suffix applied as a CSS class; any string the
//! user selected previously is accepted and re-applied verbatim. Persistence
//! is a single local-storage key owned by the browser layer.

use alloc::format;
use alloc::string::String;

/// Local-storage key holding the last-selected theme name.
pub const STORAGE_KEY: &str = "countdown-theme";

/// Base class the widget container always carries.
pub const BASE_CLASS: &str = "countdown-content";

/// Composes the container's full class list for a theme name.
///
/// The structure is always `countdown-content theme-<name>`; no allow-list
/// is enforced.
#[must_use]
pub fn theme_class(name: &str) -> String {
    format!("{BASE_CLASS} theme-{name}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_keeps_base_and_suffix_structure() {
        assert_eq!(theme_class("spring"), "countdown-content theme-spring");
    }

    #[test]
    fn arbitrary_names_pass_through() {
        assert_eq!(theme_class("x y"), "countdown-content theme-x y");
    }
}
