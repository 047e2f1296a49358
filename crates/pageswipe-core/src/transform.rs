#![forbid(unsafe_code)]

//! Maps drag displacement and committed position to track translations.

use crate::geometry::{Boundary, Direction, Transition, Translation};

/// A translation paired with the transition timing that should carry it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SettleRequest {
    pub translation: Translation,
    pub transition: Transition,
}

/// Computes live previews and settle targets.
#[derive(Debug, Clone, Copy)]
pub struct TransformComputer {
    direction: Direction,
    bounce: bool,
    duration_ms: u32,
}

impl TransformComputer {
    #[must_use]
    pub const fn new(direction: Direction, bounce: bool, duration_ms: u32) -> Self {
        Self {
            direction,
            bounce,
            duration_ms,
        }
    }

    /// Live translation while dragging, or `None` when the preview must not
    /// change.
    ///
    /// With bounce suppression on, a drag that would pull the first page
    /// further toward the start (`displacement >= 0`) or the last page further
    /// toward the end (`displacement <= 0`) is frozen.
    #[must_use]
    pub fn preview(
        &self,
        displacement: f64,
        committed_offset: f64,
        boundary: Boundary,
    ) -> Option<Translation> {
        if self.bounce {
            let past_start = boundary.contains(Boundary::START) && displacement >= 0.0;
            // The live displacement, not the track position: the latter is
            // negative for every page past the first.
            let past_end = boundary.contains(Boundary::END) && displacement <= 0.0;
            if past_start || past_end {
                return None;
            }
        }
        Some(Translation::new(
            self.direction,
            displacement - committed_offset,
        ))
    }

    /// Animated translation that brings page `index` into view.
    #[must_use]
    pub fn settle(&self, index: usize, page_extent: u32) -> SettleRequest {
        SettleRequest {
            translation: Translation::new(self.direction, -offset_of(index, page_extent)),
            transition: Transition::Millis(self.duration_ms),
        }
    }
}

/// Distance from the start of the track to the leading edge of page `index`.
#[inline]
#[must_use]
pub fn offset_of(index: usize, page_extent: u32) -> f64 {
    index as f64 * f64::from(page_extent)
}
