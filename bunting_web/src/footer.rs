// Copyright 2026 the Bunting Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The footer decoration controller.
//!
//! Inserts a decorative image block immediately above the `#footer-bar`
//! anchor. The block is tagged `#footer-decoration` so a re-invocation after
//! navigation removes the previous one first, and the supporting stylesheet
//! is tagged `#footer-decoration-style` so it is injected at most once per
//! page load.

use alloc::format;
use alloc::string::String;

use wasm_bindgen::{JsCast as _, JsValue};
use web_sys::{Document, Element, HtmlImageElement};

use crate::{diag, dom};

const SCOPE: &str = "footer-decoration";

const ANCHOR_ID: &str = "footer-bar";
const DECORATION_ID: &str = "footer-decoration";
const STYLE_ID: &str = "footer-decoration-style";
const IMAGE_CLASS: &str = "footer-decoration-img";

/// Externally authored assets for the decoration.
#[derive(Clone, Debug)]
pub struct FooterConfig {
    /// The decorative image shown above the footer.
    pub image_url: String,
    /// Repeating wall-strip background behind the image.
    pub wall_image_url: String,
}

/// Decorative image block inserted above the footer, once per page view.
#[derive(Debug)]
pub struct FooterDecoration {
    config: FooterConfig,
}

impl FooterDecoration {
    /// Creates the controller with its asset configuration.
    #[must_use]
    pub const fn new(config: FooterConfig) -> Self {
        Self { config }
    }

    /// (Re)inserts the decoration before the footer anchor.
    ///
    /// Idempotent: any number of invocations leaves exactly one decoration
    /// node and exactly one injected stylesheet block in the document. A
    /// missing anchor is a silent no-op.
    pub fn init(&self) {
        let Some(document) = dom::document() else {
            return;
        };
        let Some(anchor) = dom::by_id(&document, ANCHOR_ID) else {
            return;
        };
        if let Err(err) = self.insert(&document, &anchor) {
            diag::error_with(SCOPE, "failed to insert decoration", &err);
        }
    }

    fn insert(&self, document: &Document, anchor: &Element) -> Result<(), JsValue> {
        // Remove the node from the previous page view so pjax navigations
        // never stack decorations.
        if let Some(previous) = dom::by_id(document, DECORATION_ID) {
            previous.remove();
        }

        let block = document.create_element("div")?;
        block.set_id(DECORATION_ID);

        let image: HtmlImageElement = document.create_element("img")?.unchecked_into();
        image.set_class_name(IMAGE_CLASS);
        image.set_alt("footer decoration");
        image.set_src(&self.config.image_url);
        block.append_child(&image)?;

        anchor.insert_adjacent_element("beforebegin", &block)?;
        self.ensure_stylesheet(document)?;
        Ok(())
    }

    /// Injects the decoration's stylesheet, at most once per page load.
    fn ensure_stylesheet(&self, document: &Document) -> Result<(), JsValue> {
        if dom::by_id(document, STYLE_ID).is_some() {
            return Ok(());
        }
        let Some(head) = document.head() else {
            return Ok(());
        };
        let style = document.create_element("style")?;
        style.set_id(STYLE_ID);
        style.set_text_content(Some(&self.stylesheet()));
        head.append_child(&style)?;
        Ok(())
    }

    fn stylesheet(&self) -> String {
        let wall = &self.config.wall_image_url;
        format!(
            r#"
#{DECORATION_ID} {{
    position: relative;
    width: 100%;
    line-height: 0;
    /* Close the sub-pixel seam against the footer below. */
    margin-bottom: -1px;
    background: url("{wall}") repeat-x bottom;
    background-size: auto 36px;
}}

.{IMAGE_CLASS} {{
    position: relative;
    display: block;
    margin: 0 auto;
    max-width: min(974px, 100vw);
    height: auto;
    z-index: 1;
}}

#{ANCHOR_ID} {{
    margin-top: 0 !important;
}}

[data-theme=dark] #{DECORATION_ID} {{
    filter: brightness(.8);
}}

@media screen and (max-width: 768px) {{
    #{DECORATION_ID} {{
        background-size: auto 24px;
    }}
}}
"#
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::String;

    fn decoration() -> FooterDecoration {
        FooterDecoration::new(FooterConfig {
            image_url: String::from("assets/footer-pet.webp"),
            wall_image_url: String::from("assets/wall.webp"),
        })
    }

    #[test]
    fn stylesheet_targets_the_tagged_nodes() {
        let css = decoration().stylesheet();
        assert!(css.contains("#footer-decoration {"));
        assert!(css.contains(".footer-decoration-img {"));
        assert!(css.contains("#footer-bar {"));
    }

    #[test]
    fn wall_strip_shrinks_under_the_mobile_breakpoint() {
        let css = decoration().stylesheet();
        // 36px by default, 24px on narrow screens.
        assert!(css.contains("background-size: auto 36px"));
        assert!(css.contains("@media screen and (max-width: 768px)"));
        assert!(css.contains("background-size: auto 24px"));
    }

    #[test]
    fn dark_mode_dims_the_decoration() {
        let css = decoration().stylesheet();
        assert!(css.contains("[data-theme=dark] #footer-decoration"));
        assert!(css.contains("filter: brightness(.8)"));
    }

    #[test]
    fn wall_image_url_is_interpolated() {
        let css = decoration().stylesheet();
        assert!(css.contains(r#"url("assets/wall.webp")"#));
    }
}
