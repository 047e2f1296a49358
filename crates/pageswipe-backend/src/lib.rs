#![forbid(unsafe_code)]
#![doc = "Backend traits for pageswipe: the boundary between the paging state machine and its host."]
#![doc = ""]
#![doc = "A host (a DOM binding, a native view, or the headless harness) implements these"]
#![doc = "ports; `pageswipe-runtime` drives them. The core never measures, styles, or"]
#![doc = "fetches anything itself."]

use core::fmt;

use pageswipe_core::{Measurement, SwipeSignal, TrackLayout, Transition, Translation};

/// Reads container metrics once, at construction.
pub trait Geometry {
    /// Host-specific lookup failure.
    type Error: fmt::Debug + fmt::Display;

    /// Locate the container by `container` and its pages by `item`, and
    /// report the viewport size and page count.
    fn measure(&self, container: &str, item: &str) -> Result<Measurement, Self::Error>;
}

/// Applies style mutations to the container and its pages.
///
/// Mutations are fire-and-forget; hosts that cannot apply one should log it
/// on their side.
pub trait StyleMutator {
    /// Size the track and each page.
    fn layout_track(&mut self, layout: TrackLayout);

    /// Set the transition used by the next transform change.
    fn set_transition(&mut self, transition: Transition);

    /// Translate the track.
    fn set_transform(&mut self, translation: Translation);

    /// Add (`on = true`) or remove `marker` on page `page`.
    fn set_marker(&mut self, page: usize, marker: &str, on: bool);
}

/// Delivers pointer and completion signals.
///
/// This is the input half of the boundary: the runtime drains it without
/// knowing whether signals come from touch events, a mouse, or a script.
pub trait GestureSource {
    /// Next pending signal, or `None` if none is ready. Must not block.
    fn poll_signal(&mut self) -> Option<SwipeSignal>;
}

/// Whether an image request finished synchronously.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    /// The image was already available (cached).
    Complete,
    /// The host will deliver `ImageLoaded` or `ImageFailed` later.
    Pending,
}

/// Per-page lazy image access. Only used when lazy loading is enabled.
pub trait ImageHost {
    /// Deferred source of the page's lazy element, if it has one.
    fn lazy_source(&self, page: usize) -> Option<String>;

    /// Resolved source of the page's lazy element; absent until loaded.
    fn resolved_source(&self, page: usize) -> Option<String>;

    /// Speculatively fetch `source` so a later load hits the cache.
    fn preload(&mut self, page: usize, source: &str);

    /// Insert a placeholder image ahead of the page's real image.
    fn show_placeholder(&mut self, page: usize, placeholder: &str);

    /// Remove the page's placeholder.
    fn remove_placeholder(&mut self, page: usize);

    /// Start loading the page's real image.
    fn load(&mut self, page: usize, source: &str) -> LoadStatus;

    /// Point the page's lazy element at its loaded image.
    fn set_resolved_source(&mut self, page: usize, source: &str);
}

/// Unified backend combining geometry, styling, and images.
///
/// `Swiper` is generic over this trait. Signals arrive separately through a
/// [`GestureSource`] or by direct dispatch.
pub trait Backend {
    /// Container lookup error.
    type Error: fmt::Debug + fmt::Display;

    type Geometry: Geometry<Error = Self::Error>;

    type Style: StyleMutator;

    type Images: ImageHost;

    fn geometry(&self) -> &Self::Geometry;

    fn style(&mut self) -> &mut Self::Style;

    fn images(&mut self) -> &mut Self::Images;
}
