// Copyright 2026 the Bunting Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-orientation background media descriptors and selection.
//!
//! Each orientation carries up to three externally authored URLs: a primary
//! video, a fallback image, and a poster shown while loading. Selection
//! prefers video over image. When the selected resource fails to load, at
//! most one fallback to the alternate kind is attempted, and only if it names
//! a different URL.

use alloc::string::String;

/// What kind of element carries the background.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MediaKind {
    /// An autoplaying, muted, looping `<video>`.
    Video,
    /// A plain `<img>`.
    Image,
}

impl MediaKind {
    /// The HTML tag name for this kind.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Video => "video",
            Self::Image => "img",
        }
    }

    /// The other kind.
    #[must_use]
    pub const fn alternate(self) -> Self {
        match self {
            Self::Video => Self::Image,
            Self::Image => Self::Video,
        }
    }
}

/// The URLs configured for one orientation.
///
/// All fields are optional; a descriptor with neither video nor image yields
/// no selection and the container is left empty.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MediaDescriptor {
    /// Primary video URL.
    pub video: Option<String>,
    /// Fallback image URL.
    pub image: Option<String>,
    /// Poster / loading-placeholder image URL.
    pub poster: Option<String>,
}

/// A concrete choice of media element to construct.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MediaSelection {
    /// Which element kind to build.
    pub kind: MediaKind,
    /// The resource it should load.
    pub url: String,
}

impl MediaDescriptor {
    /// Picks the media to show: video takes priority over image.
    #[must_use]
    pub fn select(&self) -> Option<MediaSelection> {
        if let Some(url) = &self.video {
            return Some(MediaSelection {
                kind: MediaKind::Video,
                url: url.clone(),
            });
        }
        self.image.as_ref().map(|url| MediaSelection {
            kind: MediaKind::Image,
            url: url.clone(),
        })
    }

    /// Picks the one-shot fallback after `failed` could not load.
    ///
    /// The alternate kind for the same orientation is used, but only when its
    /// URL exists and differs from the one that just failed; otherwise the
    /// element stays hidden until a later orientation or navigation event
    /// retries from scratch.
    #[must_use]
    pub fn fallback(&self, failed: &MediaSelection) -> Option<MediaSelection> {
        let kind = failed.kind.alternate();
        let url = match kind {
            MediaKind::Video => self.video.as_ref(),
            MediaKind::Image => self.image.as_ref(),
        }?;
        if *url == failed.url {
            return None;
        }
        Some(MediaSelection {
            kind,
            url: url.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    fn descriptor(video: Option<&str>, image: Option<&str>) -> MediaDescriptor {
        MediaDescriptor {
            video: video.map(ToString::to_string),
            image: image.map(ToString::to_string),
            poster: None,
        }
    }

    #[test]
    fn video_wins_over_image() {
        let desc = descriptor(Some("bg.mp4"), Some("bg.webp"));
        let sel = desc.select().expect("video configured");
        assert_eq!(sel.kind, MediaKind::Video);
        assert_eq!(sel.url, "bg.mp4");
    }

    #[test]
    fn image_used_when_no_video() {
        let desc = descriptor(None, Some("bg.webp"));
        let sel = desc.select().expect("image configured");
        assert_eq!(sel.kind, MediaKind::Image);
    }

    #[test]
    fn empty_descriptor_selects_nothing() {
        assert_eq!(descriptor(None, None).select(), None);
    }

    #[test]
    fn failed_video_falls_back_to_image() {
        let desc = descriptor(Some("bg.mp4"), Some("bg.webp"));
        let failed = desc.select().expect("video configured");
        let fb = desc.fallback(&failed).expect("image available");
        assert_eq!(fb.kind, MediaKind::Image);
        assert_eq!(fb.url, "bg.webp");
    }

    #[test]
    fn no_fallback_without_an_alternate_url() {
        let desc = descriptor(Some("bg.mp4"), None);
        let failed = desc.select().expect("video configured");
        assert_eq!(desc.fallback(&failed), None);
    }

    #[test]
    fn no_fallback_to_the_same_url() {
        let desc = descriptor(Some("bg.mp4"), Some("bg.mp4"));
        let failed = desc.select().expect("video configured");
        assert_eq!(desc.fallback(&failed), None);
    }
}
