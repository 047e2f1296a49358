#![forbid(unsafe_code)]

//! Geometric primitives for a paged track.
//!
//! Screen coordinates are CSS pixels with the origin at the top-left of the
//! page. Page extents are whole pixels; pointer samples may be fractional.

use core::fmt;

use bitflags::bitflags;

/// Paging axis selected at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "config", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "config", serde(rename_all = "lowercase"))]
pub enum Direction {
    /// Pages stacked top to bottom; the active axis is `y`.
    #[default]
    Vertical,
    /// Pages laid out left to right; the active axis is `x`.
    Horizontal,
}

impl Direction {
    /// Component of `point` along the active axis.
    #[inline]
    #[must_use]
    pub const fn along(self, point: Point) -> f64 {
        match self {
            Self::Vertical => point.y,
            Self::Horizontal => point.x,
        }
    }

    /// Viewport length along the active axis.
    #[inline]
    #[must_use]
    pub const fn extent_of(self, measurement: Measurement) -> u32 {
        match self {
            Self::Vertical => measurement.height,
            Self::Horizontal => measurement.width,
        }
    }
}

/// A pointer sample in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Container metrics reported by the host once, at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Measurement {
    /// Viewport width in pixels.
    pub width: u32,
    /// Viewport height in pixels.
    pub height: u32,
    /// Number of page elements found inside the container.
    pub page_count: usize,
}

impl Measurement {
    #[must_use]
    pub const fn new(width: u32, height: u32, page_count: usize) -> Self {
        Self {
            width,
            height,
            page_count,
        }
    }
}

/// Sizes applied to the track and its pages when the swiper is built.
///
/// The track spans every page along the active axis; each page keeps the
/// viewport size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackLayout {
    pub track_width: u64,
    pub track_height: u64,
    pub page_width: u32,
    pub page_height: u32,
}

impl TrackLayout {
    /// Compute the track layout for `measurement` along `direction`.
    #[must_use]
    pub fn compute(direction: Direction, measurement: Measurement) -> Self {
        let count = measurement.page_count as u64;
        let (track_width, track_height) = match direction {
            Direction::Vertical => (
                u64::from(measurement.width),
                u64::from(measurement.height) * count,
            ),
            Direction::Horizontal => (
                u64::from(measurement.width) * count,
                u64::from(measurement.height),
            ),
        };
        Self {
            track_width,
            track_height,
            page_width: measurement.width,
            page_height: measurement.height,
        }
    }
}

/// A translation of the whole track along the active axis.
///
/// Negative offsets move content toward the start, revealing later pages.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Translation {
    pub direction: Direction,
    pub offset: f64,
}

impl Translation {
    #[inline]
    #[must_use]
    pub const fn new(direction: Direction, offset: f64) -> Self {
        Self { direction, offset }
    }
}

impl fmt::Display for Translation {
    /// Renders as a CSS `translate3d` value.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.direction {
            Direction::Vertical => write!(f, "translate3d(0, {}px, 0)", self.offset),
            Direction::Horizontal => write!(f, "translate3d({}px, 0, 0)", self.offset),
        }
    }
}

/// Transition timing applied alongside a transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Changes apply immediately (live preview while dragging).
    None,
    /// Changes animate over the given number of milliseconds.
    Millis(u32),
}

impl Transition {
    /// Whether a completion signal is expected after applying a transform.
    #[inline]
    #[must_use]
    pub const fn animates(self) -> bool {
        matches!(self, Self::Millis(ms) if ms > 0)
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("none"),
            Self::Millis(ms) => write!(f, "{ms}ms"),
        }
    }
}

bitflags! {
    /// Which ends of the page sequence the committed page touches.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Boundary: u8 {
        /// Committed page is the first page.
        const START = 0b01;
        /// Committed page is the last page.
        const END = 0b10;
    }
}

impl Boundary {
    /// Boundary flags for `index` in a sequence of `page_count` pages.
    ///
    /// Empty and single-page sequences touch both ends.
    #[must_use]
    pub fn of(index: usize, page_count: usize) -> Self {
        let mut flags = Self::empty();
        if index == 0 {
            flags |= Self::START;
        }
        if index + 1 >= page_count {
            flags |= Self::END;
        }
        flags
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_selects_axis() {
        let p = Point::new(3.0, 7.5);
        assert_eq!(Direction::Vertical.along(p), 7.5);
        assert_eq!(Direction::Horizontal.along(p), 3.0);
    }

    #[test]
    fn track_layout_spans_pages_along_axis() {
        let m = Measurement::new(320, 480, 4);
        let v = TrackLayout::compute(Direction::Vertical, m);
        assert_eq!((v.track_width, v.track_height), (320, 1920));
        let h = TrackLayout::compute(Direction::Horizontal, m);
        assert_eq!((h.track_width, h.track_height), (1280, 480));
        assert_eq!((h.page_width, h.page_height), (320, 480));
    }

    #[test]
    fn translation_renders_translate3d() {
        let v = Translation::new(Direction::Vertical, -480.0);
        assert_eq!(v.to_string(), "translate3d(0, -480px, 0)");
        let h = Translation::new(Direction::Horizontal, 12.5);
        assert_eq!(h.to_string(), "translate3d(12.5px, 0, 0)");
    }

    #[test]
    fn transition_renders_css_duration() {
        assert_eq!(Transition::None.to_string(), "none");
        assert_eq!(Transition::Millis(300).to_string(), "300ms");
        assert!(!Transition::Millis(0).animates());
        assert!(Transition::Millis(1).animates());
    }

    #[test]
    fn boundary_flags() {
        assert_eq!(Boundary::of(0, 5), Boundary::START);
        assert_eq!(Boundary::of(2, 5), Boundary::empty());
        assert_eq!(Boundary::of(4, 5), Boundary::END);
        assert_eq!(Boundary::of(0, 1), Boundary::START | Boundary::END);
        assert_eq!(Boundary::of(0, 0), Boundary::START | Boundary::END);
    }
}
