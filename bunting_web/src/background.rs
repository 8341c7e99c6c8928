// Copyright 2026 the Bunting Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The orientation-aware background media controller.
//!
//! Selects a per-orientation image or video for the home header, overlays a
//! loading placeholder until the media is ready, and layers on parallax and
//! scroll-driven fade/mask effects. Orientation is the reload gate: work is
//! only redone when portrait/landscape actually flips.
//!
//! # DOM contract
//!
//! The container (`#home-media-container` by default) carries per-orientation
//! data attributes: `data-portrait-video`, `data-portrait-img`,
//! `data-portrait-poster`, and the `landscape` equivalents. The pointer
//! parallax surface is the page header (`#page-header` by default).
//!
//! # Self-healing
//!
//! Five overlapping mechanisms can each force a rebuild: the debounced resize
//! handler, the history-cache restore handler, the back/forward navigation
//! handler, the periodic presence check, and the post-construction attachment
//! check. The overlap is deliberate defense-in-depth — each mechanism catches
//! page-transition scenarios the others can miss, so they must not be
//! consolidated.

use alloc::boxed::Box;
use alloc::format;
use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;
use core::cell::{Cell, RefCell};

use bunting_core::capability::{ParallaxMode, parallax_mode};
use bunting_core::effects::{self, MediaTransform};
use bunting_core::media::{MediaDescriptor, MediaKind, MediaSelection};
use bunting_core::orientation::{Orientation, OrientationTracker};
use kurbo::Point;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast as _, JsValue};
use web_sys::{
    DeviceOrientationEvent, Document, Element, Event, HtmlElement, HtmlSourceElement,
    HtmlVideoElement, MouseEvent, PageTransitionEvent, TouchEvent, VisibilityState, Window,
};

use crate::listener::EventListener;
use crate::probe::BrowserProbe;
use crate::scroll::ScrollEffect;
use crate::timer::{Interval, Timeout, timeout_once};
use crate::{diag, dom};

const SCOPE: &str = "background-media";

const MEDIA_CLASS: &str = "home-media";
const MEDIA_SELECTOR: &str = ".home-media";
const LOADER_CLASS: &str = "custom-loader";
const LOADER_SELECTOR: &str = ".custom-loader";
const LOADER_ANIMATION_CLASS: &str = "loader-animation";

const RESIZE_DEBOUNCE_MS: i32 = 500;
const SELF_CHECK_MS: i32 = 500;
const ROUTE_SETTLE_MS: i32 = 300;
const ATTACHMENT_CHECK_MS: i32 = 1_000;
const LOADER_FADE_MS: i32 = 500;
const ENTRANCE_SETTLE_DELAY_MS: i32 = 100;

/// Fixed element ids and the route the background lives on.
#[derive(Clone, Debug)]
pub struct BackgroundConfig {
    /// Id of the container carrying the per-orientation data attributes.
    pub container_id: String,
    /// Id of the header region used as the pointer parallax surface.
    pub header_id: String,
    /// Pathname of the page that owns the background (self-heal only runs
    /// there).
    pub home_path: String,
}

impl Default for BackgroundConfig {
    fn default() -> Self {
        Self {
            container_id: String::from("home-media-container"),
            header_id: String::from("page-header"),
            home_path: String::from("/"),
        }
    }
}

/// Orientation-aware background media with parallax and scroll effects.
///
/// Construct once per page session and call [`init`](Self::init) on every
/// navigation-complete event; reloads are gated on actual orientation
/// changes, so repeated invocation with unchanged viewport dimensions mutates
/// the DOM at most once.
pub struct ResponsiveBackgroundMedia {
    config: BackgroundConfig,
    probe: BrowserProbe,
    orientation: RefCell<OrientationTracker>,
    self_check: RefCell<Option<Interval>>,
    resize_debounce: RefCell<Option<Timeout>>,
    fade: RefCell<Option<ScrollEffect>>,
    mask: RefCell<Option<ScrollEffect>>,
    media_effects: RefCell<Option<MediaEffects>>,
    lifecycle_bound: Cell<bool>,
}

impl ResponsiveBackgroundMedia {
    /// Creates the controller.
    #[must_use]
    pub fn new(config: BackgroundConfig) -> Rc<Self> {
        Rc::new(Self {
            config,
            probe: BrowserProbe::new(),
            orientation: RefCell::new(OrientationTracker::new()),
            self_check: RefCell::new(None),
            resize_debounce: RefCell::new(None),
            fade: RefCell::new(None),
            mask: RefCell::new(None),
            media_effects: RefCell::new(None),
            lifecycle_bound: Cell::new(false),
        })
    }

    /// (Re)binds the controller to the current DOM.
    pub fn init(self: &Rc<Self>) {
        self.reload();
        self.bind_lifecycle();
        self.restart_self_check();
    }

    /// Tears down and rebuilds the media element if the orientation changed
    /// since the last build; otherwise does nothing.
    fn reload(self: &Rc<Self>) {
        let Some(window) = dom::window() else { return };
        let Some(document) = window.document() else { return };
        let Some(container) = dom::by_id(&document, &self.config.container_id) else {
            diag::error(SCOPE, "media container not found");
            return;
        };

        let (width, height) = dom::viewport_size(&window);
        let Some(orientation) = self.orientation.borrow_mut().observe(width, height) else {
            diag::log(SCOPE, "orientation unchanged; skipping reload");
            return;
        };
        diag::log(
            SCOPE,
            &format!("orientation changed: {}", orientation.as_str()),
        );

        dom::remove_by_selector(&container, MEDIA_SELECTOR);
        dom::remove_by_selector(&container, LOADER_SELECTOR);
        self.media_effects.borrow_mut().take();

        let descriptor = descriptor_for(&container, orientation);
        let Some(selection) = descriptor.select() else {
            diag::error(SCOPE, "no usable media resource configured");
            return;
        };
        diag::log(
            SCOPE,
            &format!("loading {} as <{}>", selection.url, selection.kind.tag()),
        );

        if let Err(err) =
            self.build_media(&document, &container, orientation, descriptor, selection)
        {
            diag::error_with(SCOPE, "failed to build media element", &err);
            return;
        }

        self.setup_scroll_fade();
        self.setup_scroll_mask();
    }

    fn build_media(
        self: &Rc<Self>,
        document: &Document,
        container: &Element,
        orientation: Orientation,
        descriptor: MediaDescriptor,
        selection: MediaSelection,
    ) -> Result<(), JsValue> {
        let kind = selection.kind;
        let media: HtmlElement = document.create_element(kind.tag())?.unchecked_into();
        media.set_class_name(MEDIA_CLASS);
        let style = media.style();
        style.set_css_text("width:100%;height:100%;object-fit:cover");
        let _ = style.set_property("opacity", "1");
        let _ = style.set_property("transition", "opacity 0.5s ease");
        container.append_child(&media)?;

        let loader = build_loader(document, descriptor.poster.as_deref())?;
        container.prepend_with_node_1(&loader)?;

        let mut source = None;
        match kind {
            MediaKind::Video => {
                let video: HtmlVideoElement = media.clone().unchecked_into();
                video.set_autoplay(true);
                video.set_muted(true);
                video.set_loop(true);
                // Inline playback attributes are required for mobile autoplay.
                // web-sys has no `set_plays_inline`; set the attribute directly.
                video.set_attribute("playsinline", "")?;
                video.set_attribute("webkit-playsinline", "")?;
                let src: HtmlSourceElement = document.create_element("source")?.unchecked_into();
                src.set_src(&selection.url);
                src.set_type("video/mp4");
                video.append_child(&src)?;
                source = Some(src);
                bind_loader_removal(&media, "loadeddata", &loader);
                start_playback(&video);
            }
            MediaKind::Image => {
                media.set_attribute("loading", "eager")?;
                bind_loader_removal(&media, "load", &loader);
                media.set_attribute("src", &selection.url)?;
            }
        }

        bind_error_fallback(&media, source.as_ref(), descriptor, selection);
        self.install_media_effects(document, &media, orientation, kind);
        self.schedule_attachment_check(&media);
        Ok(())
    }

    /// Entrance scale, settle animation, and the parallax input chosen by the
    /// capability probe. Video only; images stay static.
    fn install_media_effects(
        self: &Rc<Self>,
        document: &Document,
        media: &HtmlElement,
        orientation: Orientation,
        kind: MediaKind,
    ) {
        if kind != MediaKind::Video {
            return;
        }

        let style = media.style();
        let entrance = MediaTransform::scale_only(effects::entrance_scale(orientation));
        let _ = style.set_property("transform", &entrance.to_css());
        let _ = style.set_property("transition", "opacity 0.5s ease, transform 0.5s ease-out");
        let _ = style.set_property("transform-origin", "center center");
        bind_entrance_settle(media, orientation);

        let Some(header) = dom::html_by_id(document, &self.config.header_id) else {
            return;
        };
        dom::set_style(&header, "overflow", "hidden");

        let effects_state = MediaEffects::new();
        match parallax_mode(&self.probe) {
            ParallaxMode::Pointer => bind_pointer(&effects_state, &header, media),
            ParallaxMode::Touch => bind_touch(&effects_state, &header, media),
            ParallaxMode::Tilt { needs_permission } => {
                let Some(window) = dom::window() else { return };
                if needs_permission {
                    let listeners = Rc::clone(&effects_state.listeners);
                    let active = Rc::clone(&effects_state.active);
                    let alive = Rc::clone(&effects_state.alive);
                    let document = document.clone();
                    let window = window.clone();
                    let media = media.clone();
                    BrowserProbe::request_orientation_permission(move || {
                        // The media element may already have been replaced by
                        // the time the user answers the prompt.
                        if !alive.get() {
                            return;
                        }
                        bind_tilt(&listeners, &active, &document, &window, &media, orientation);
                    });
                } else {
                    bind_tilt(
                        &effects_state.listeners,
                        &effects_state.active,
                        document,
                        &window,
                        media,
                        orientation,
                    );
                }
            }
        }
        *self.media_effects.borrow_mut() = Some(effects_state);
    }

    /// Deferred check that the freshly built element actually stayed in the
    /// document; a pjax DOM swap racing the build can silently detach it.
    fn schedule_attachment_check(self: &Rc<Self>, media: &HtmlElement) {
        let media = media.clone();
        let this = Rc::clone(self);
        timeout_once(ATTACHMENT_CHECK_MS, move || {
            if media.is_connected() {
                return;
            }
            diag::warn(SCOPE, "media element detached after construction; rebuilding");
            this.orientation.borrow_mut().reset();
            this.reload();
            let that = Rc::clone(&this);
            timeout_once(LOADER_FADE_MS, move || that.setup_scroll_fade());
        });
    }

    /// Re-binds the throttled scroll-fade handler to the current media
    /// element, dropping the previous listener first.
    fn setup_scroll_fade(&self) {
        self.fade.borrow_mut().take();
        let Some(window) = dom::window() else { return };
        let Some(document) = window.document() else { return };
        let Some(container) = dom::by_id(&document, &self.config.container_id) else {
            return;
        };
        let Some(media) = container
            .query_selector(MEDIA_SELECTOR)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        else {
            return;
        };

        let win = window.clone();
        let effect = ScrollEffect::new(&window, move || {
            let (_, height) = dom::viewport_size(&win);
            let opacity = effects::fade_opacity(dom::scroll_y(&win), height);
            let _ = media.style().set_property("opacity", &format!("{opacity}"));
        });
        *self.fade.borrow_mut() = Some(effect);
    }

    /// Re-binds the throttled scroll-mask handler, which exposes the mask
    /// height to the theme's CSS as `--mask-height` on the container.
    fn setup_scroll_mask(&self) {
        self.mask.borrow_mut().take();
        let Some(window) = dom::window() else { return };
        let Some(document) = window.document() else { return };
        let Some(container) = dom::html_by_id(&document, &self.config.container_id) else {
            return;
        };

        let win = window.clone();
        let effect = ScrollEffect::new(&window, move || {
            let (_, height) = dom::viewport_size(&win);
            let mask = effects::mask_height_percent(dom::scroll_y(&win), height);
            let _ = container
                .style()
                .set_property("--mask-height", &format!("{mask}%"));
        });
        *self.mask.borrow_mut() = Some(effect);
    }

    /// Window/document lifecycle listeners, bound once per page session.
    fn bind_lifecycle(self: &Rc<Self>) {
        if self.lifecycle_bound.get() {
            return;
        }
        self.lifecycle_bound.set(true);
        let Some(window) = dom::window() else { return };
        let Some(document) = window.document() else { return };

        // Debounced resize: reload on an orientation flip, otherwise just
        // re-anchor the fade to the (unchanged) media element.
        {
            let this = Rc::clone(self);
            let closure = Closure::wrap(Box::new(move |_event: Event| {
                let inner = Rc::clone(&this);
                let debounce = Timeout::new(RESIZE_DEBOUNCE_MS, move || {
                    let Some(window) = dom::window() else { return };
                    let (width, height) = dom::viewport_size(&window);
                    let current = Orientation::from_viewport(width, height);
                    if inner.orientation.borrow().last() == Some(current) {
                        diag::log(SCOPE, "resize without orientation change");
                        inner.setup_scroll_fade();
                    } else {
                        diag::log(SCOPE, "resize flipped orientation; reloading media");
                        inner.reload();
                    }
                });
                // Replacing the handle cancels the previously scheduled run.
                *this.resize_debounce.borrow_mut() = Some(debounce);
            }) as Box<dyn FnMut(Event)>);
            let _ = window
                .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Page visible again: resume paused playback, refresh the fade.
        {
            let this = Rc::clone(self);
            let doc = document.clone();
            let closure = Closure::wrap(Box::new(move |_event: Event| {
                if doc.visibility_state() != VisibilityState::Visible {
                    return;
                }
                if let Some(container) = dom::by_id(&doc, &this.config.container_id)
                    && let Ok(Some(video)) = container.query_selector("video")
                    && let Ok(video) = video.dyn_into::<HtmlVideoElement>()
                    && video.paused()
                {
                    diag::log(SCOPE, "page visible again; resuming playback");
                    start_playback(&video);
                }
                this.setup_scroll_fade();
            }) as Box<dyn FnMut(Event)>);
            let _ = document.add_event_listener_with_callback(
                "visibilitychange",
                closure.as_ref().unchecked_ref(),
            );
            closure.forget();
        }

        // Restored from the history cache on the home route: the cached DOM
        // may hold a dead media element, so force a rebuild.
        {
            let this = Rc::clone(self);
            let closure = Closure::wrap(Box::new(move |event: Event| {
                let event: PageTransitionEvent = event.unchecked_into();
                if !event.persisted() || !this.at_home() {
                    return;
                }
                diag::log(SCOPE, "restored from history cache; forcing reload");
                this.orientation.borrow_mut().reset();
                this.reload();
                let that = Rc::clone(&this);
                timeout_once(ROUTE_SETTLE_MS, move || that.setup_scroll_fade());
            }) as Box<dyn FnMut(Event)>);
            let _ = window
                .add_event_listener_with_callback("pageshow", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Back/forward navigation to the home route: give the router a
        // moment to settle, then rebuild only if the media is gone.
        {
            let this = Rc::clone(self);
            let closure = Closure::wrap(Box::new(move |_event: Event| {
                if !this.at_home() {
                    return;
                }
                let that = Rc::clone(&this);
                timeout_once(ROUTE_SETTLE_MS, move || {
                    let Some(document) = dom::document() else { return };
                    if let Some(container) = dom::by_id(&document, &that.config.container_id)
                        && container
                            .query_selector(MEDIA_SELECTOR)
                            .ok()
                            .flatten()
                            .is_none()
                    {
                        diag::log(SCOPE, "returned home without media; reloading");
                        that.orientation.borrow_mut().reset();
                        that.reload();
                    }
                    that.setup_scroll_fade();
                });
            }) as Box<dyn FnMut(Event)>);
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// (Re)starts the periodic presence check, cancelling any previous
    /// interval first so navigations never accumulate concurrent timers.
    fn restart_self_check(self: &Rc<Self>) {
        self.self_check.borrow_mut().take();
        let this = Rc::clone(self);
        let interval = Interval::new(SELF_CHECK_MS, move || this.self_check_tick());
        *self.self_check.borrow_mut() = Some(interval);
    }

    fn self_check_tick(self: &Rc<Self>) {
        if !self.at_home() {
            return;
        }
        let Some(document) = dom::document() else { return };
        let Some(container) = dom::by_id(&document, &self.config.container_id) else {
            return;
        };
        if container
            .query_selector(MEDIA_SELECTOR)
            .ok()
            .flatten()
            .is_some()
        {
            return;
        }
        diag::warn(SCOPE, "self-check found media missing; reloading");
        self.orientation.borrow_mut().reset();
        self.reload();
    }

    fn at_home(&self) -> bool {
        dom::window()
            .and_then(|w| dom::pathname(&w))
            .is_some_and(|path| path == self.config.home_path)
    }
}

impl core::fmt::Debug for ResponsiveBackgroundMedia {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ResponsiveBackgroundMedia")
            .field("config", &self.config)
            .field("orientation", &self.orientation.borrow().last())
            .field("self_check_active", &self.self_check.borrow().is_some())
            .finish()
    }
}

/// Listeners and shared flags for the parallax effects of one media element.
///
/// Dropping it removes the listeners and invalidates any pending permission
/// callback.
struct MediaEffects {
    listeners: Rc<RefCell<Vec<EventListener>>>,
    active: Rc<Cell<bool>>,
    alive: Rc<Cell<bool>>,
}

impl MediaEffects {
    fn new() -> Self {
        Self {
            listeners: Rc::new(RefCell::new(Vec::new())),
            active: Rc::new(Cell::new(true)),
            alive: Rc::new(Cell::new(true)),
        }
    }
}

impl Drop for MediaEffects {
    fn drop(&mut self) {
        self.alive.set(false);
        self.listeners.borrow_mut().clear();
    }
}

fn descriptor_for(container: &Element, orientation: Orientation) -> MediaDescriptor {
    let Some(container) = container.dyn_ref::<HtmlElement>() else {
        return MediaDescriptor::default();
    };
    let dataset = container.dataset();
    match orientation {
        Orientation::Portrait => MediaDescriptor {
            video: dataset.get("portraitVideo"),
            image: dataset.get("portraitImg"),
            poster: dataset.get("portraitPoster"),
        },
        Orientation::Landscape => MediaDescriptor {
            video: dataset.get("landscapeVideo"),
            image: dataset.get("landscapeImg"),
            poster: dataset.get("landscapePoster"),
        },
    }
}

fn build_loader(document: &Document, poster: Option<&str>) -> Result<Element, JsValue> {
    let loader = document.create_element("div")?;
    loader.set_class_name(LOADER_CLASS);
    if let Some(loader) = loader.dyn_ref::<HtmlElement>() {
        dom::set_style(loader, "transition", "opacity 0.5s ease");
    }
    let animation = document.create_element("div")?;
    animation.set_class_name(LOADER_ANIMATION_CLASS);
    if let (Some(animation), Some(poster)) = (animation.dyn_ref::<HtmlElement>(), poster) {
        dom::set_style(animation, "background-image", &format!("url({poster})"));
    }
    loader.append_child(&animation)?;
    Ok(loader)
}

/// Fades the loader out and removes it once the media reports its data
/// loaded (`loadeddata` for video, `load` for images).
fn bind_loader_removal(media: &HtmlElement, event_type: &'static str, loader: &Element) {
    let loader = loader.clone();
    let closure = Closure::wrap(Box::new(move |_event: Event| {
        if let Some(loader) = loader.dyn_ref::<HtmlElement>() {
            dom::set_style(loader, "opacity", "0");
        }
        let loader = loader.clone();
        timeout_once(LOADER_FADE_MS, move || loader.remove());
    }) as Box<dyn FnMut(Event)>);
    let _ = media.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Landscape animates down to neutral shortly after data loads; portrait
/// holds its fixed entrance scale with no animation.
fn bind_entrance_settle(media: &HtmlElement, orientation: Orientation) {
    let target = media.clone();
    let media = media.clone();
    let closure = Closure::wrap(Box::new(move |_event: Event| {
        let settled = MediaTransform::scale_only(effects::settled_scale(orientation));
        match orientation {
            Orientation::Portrait => {
                let _ = media.style().set_property("transform", &settled.to_css());
            }
            Orientation::Landscape => {
                let media = media.clone();
                timeout_once(ENTRANCE_SETTLE_DELAY_MS, move || {
                    let _ = media.style().set_property("transform", &settled.to_css());
                });
            }
        }
    }) as Box<dyn FnMut(Event)>);
    let _ = target.add_event_listener_with_callback("loadeddata", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Kicks off playback; if the platform rejects autoplay, forces mute and
/// retries once.
fn start_playback(video: &HtmlVideoElement) {
    let Ok(promise) = video.play() else { return };
    let retry = video.clone();
    let on_reject = Closure::wrap(Box::new(move |reason: JsValue| {
        diag::warn_with(SCOPE, "autoplay rejected; retrying muted", &reason);
        retry.set_muted(true);
        let _ = retry.play();
    }) as Box<dyn FnMut(JsValue)>);
    let _ = promise.catch(&on_reject);
    on_reject.forget();
}

/// Hides the element on a load/render error and attempts one fallback to the
/// alternate media kind for the same orientation; a second failure leaves it
/// hidden until a later orientation or navigation event retries from scratch.
fn bind_error_fallback(
    media: &HtmlElement,
    source: Option<&HtmlSourceElement>,
    descriptor: MediaDescriptor,
    selection: MediaSelection,
) {
    let el = media.clone();
    let attempted = Cell::new(false);
    let closure = Closure::wrap(Box::new(move |_event: Event| {
        dom::set_style(&el, "display", "none");
        diag::error(SCOPE, &format!("resource failed to load: {}", selection.url));
        if attempted.replace(true) {
            return;
        }
        if let Some(fallback) = descriptor.fallback(&selection) {
            diag::warn(SCOPE, &format!("falling back to {}", fallback.url));
            // Setting `src` on the element directly overrides any <source>
            // children.
            let _ = el.set_attribute("src", &fallback.url);
            dom::set_style(&el, "display", "block");
        }
    }) as Box<dyn FnMut(Event)>);
    let _ = media.add_event_listener_with_callback("error", closure.as_ref().unchecked_ref());
    if let Some(source) = source {
        // Load errors for <source>-based playback fire on the source
        // element, not the video element.
        let _ = source.add_event_listener_with_callback("error", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn bind_pointer(effects_state: &MediaEffects, header: &HtmlElement, media: &HtmlElement) {
    let on_move = {
        let surface = header.clone();
        let media = media.clone();
        EventListener::new(header, "mousemove", move |event| {
            let event: MouseEvent = event.unchecked_into();
            let rect = surface.get_bounding_client_rect();
            if rect.width() <= 0.0 || rect.height() <= 0.0 {
                return;
            }
            let norm = Point::new(
                (f64::from(event.client_x()) - rect.left()) / rect.width(),
                (f64::from(event.client_y()) - rect.top()) / rect.height(),
            );
            let _ = media
                .style()
                .set_property("transform", &effects::pointer_parallax(norm).to_css());
        })
    };
    let on_leave = {
        let media = media.clone();
        EventListener::new(header, "mouseleave", move |_event| {
            let _ = media
                .style()
                .set_property("transform", &MediaTransform::NEUTRAL.to_css());
        })
    };
    effects_state
        .listeners
        .borrow_mut()
        .extend([on_move, on_leave]);
}

fn bind_touch(effects_state: &MediaEffects, header: &HtmlElement, media: &HtmlElement) {
    let on_move = {
        let surface = header.clone();
        let media = media.clone();
        EventListener::new(header, "touchmove", move |event| {
            event.prevent_default();
            let event: TouchEvent = event.unchecked_into();
            let Some(touch) = event.touches().get(0) else {
                return;
            };
            let rect = surface.get_bounding_client_rect();
            if rect.width() <= 0.0 || rect.height() <= 0.0 {
                return;
            }
            let norm = Point::new(
                (f64::from(touch.client_x()) - rect.left()) / rect.width(),
                (f64::from(touch.client_y()) - rect.top()) / rect.height(),
            );
            let _ = media
                .style()
                .set_property("transform", &effects::touch_parallax(norm).to_css());
        })
    };
    let on_end = {
        let media = media.clone();
        EventListener::new(header, "touchend", move |_event| {
            let _ = media
                .style()
                .set_property("transform", &MediaTransform::NEUTRAL.to_css());
        })
    };
    effects_state
        .listeners
        .borrow_mut()
        .extend([on_move, on_end]);
}

/// Device-orientation parallax, paused while the page is hidden.
fn bind_tilt(
    listeners: &Rc<RefCell<Vec<EventListener>>>,
    active: &Rc<Cell<bool>>,
    document: &Document,
    window: &Window,
    media: &HtmlElement,
    orientation: Orientation,
) {
    let base_scale = effects::settled_scale(orientation);
    let on_tilt = {
        let active = Rc::clone(active);
        let media = media.clone();
        EventListener::new(window, "deviceorientation", move |event| {
            if !active.get() {
                return;
            }
            let event: DeviceOrientationEvent = event.unchecked_into();
            let beta = event.beta().unwrap_or(0.0);
            let gamma = event.gamma().unwrap_or(0.0);
            let _ = media.style().set_property(
                "transform",
                &effects::tilt_parallax(beta, gamma, base_scale).to_css(),
            );
        })
    };
    let on_visibility = {
        let active = Rc::clone(active);
        let doc = document.clone();
        EventListener::new(document, "visibilitychange", move |_event| {
            active.set(doc.visibility_state() == VisibilityState::Visible);
        })
    };
    listeners.borrow_mut().extend([on_tilt, on_visibility]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_the_theme_dom() {
        let config = BackgroundConfig::default();
        assert_eq!(config.container_id, "home-media-container");
        assert_eq!(config.header_id, "page-header");
        assert_eq!(config.home_path, "/");
    }
}
