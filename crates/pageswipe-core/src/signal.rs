#![forbid(unsafe_code)]

//! Signals delivered to a swiper by its host.

use crate::geometry::Point;

/// Which element a settle-completion signal originated from.
///
/// Hosts typically observe completion events bubbling up from descendants
/// (a page's own transitions, for example). Only the container's own
/// completion finishes a page transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalTarget {
    Container,
    Foreign,
}

/// An externally delivered event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SwipeSignal {
    /// A pointer touched down on the container.
    PointerDown(Point),
    /// The active pointer moved.
    PointerMove(Point),
    /// The active pointer lifted.
    PointerUp(Point),
    /// A transform transition finished.
    SettleFinished { target: SignalTarget },
    /// The real image for `page` finished loading.
    ImageLoaded { page: usize },
    /// The real image for `page` could not be loaded.
    ImageFailed { page: usize },
}

/// A committed move between pages, reported once the track comes to rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageChange {
    pub previous: usize,
    pub current: usize,
}

impl PageChange {
    #[inline]
    #[must_use]
    pub const fn new(previous: usize, current: usize) -> Self {
        Self { previous, current }
    }
}
