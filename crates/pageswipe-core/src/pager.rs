#![forbid(unsafe_code)]

//! Committed page index and the decisions that move it.
//!
//! # Invariants
//!
//! 1. `committed < page_count` whenever `page_count > 0`; otherwise 0.
//! 2. `committed_offset() == committed * page_extent` at all times. Live
//!    previews never write back into the controller.
//! 3. Threshold comparisons are strict: a release of exactly `threshold`
//!    pixels does not change the page.
//!
//! # Navigation quirks
//!
//! `jump_to` derives `previous` from the target (`index - 1`, or 0 for the
//! first page) rather than from the page being left, and records a pending
//! target so the jump is finalized even when `previous == committed`.
//! `advance` records the page it leaves and never needs a pending target.

use crate::error::NavigationRejected;
use crate::geometry::Boundary;
use crate::signal::PageChange;
use crate::transform::offset_of;

/// How a release moved (or did not move) the committed page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseOutcome {
    /// Dragged toward the start past the threshold; previous page committed.
    Backward,
    /// Dragged toward the end past the threshold; next page committed.
    Forward,
    /// Past the threshold toward the start, but already on the first page.
    ClampedAtStart,
    /// Past the threshold toward the end, but already on the last page.
    ClampedAtEnd,
    /// Within the threshold; the track snaps back to the same page.
    SnapBack,
}

/// Result of one release.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReleaseDecision {
    /// Final active-axis displacement of the gesture.
    pub displacement: f64,
    pub previous: usize,
    pub committed: usize,
    pub outcome: ReleaseOutcome,
}

impl ReleaseDecision {
    /// Whether the committed page changed.
    #[inline]
    #[must_use]
    pub fn changed(&self) -> bool {
        self.previous != self.committed
    }
}

/// Owns the committed page index.
#[derive(Debug, Clone)]
pub struct PageIndexController {
    page_count: usize,
    page_extent: u32,
    threshold: u32,
    committed: usize,
    previous: usize,
    pending_target: Option<usize>,
}

impl PageIndexController {
    #[must_use]
    pub const fn new(page_count: usize, page_extent: u32, threshold: u32) -> Self {
        Self {
            page_count,
            page_extent,
            threshold,
            committed: 0,
            previous: 0,
            pending_target: None,
        }
    }

    /// Decide the committed page from a release displacement.
    ///
    /// Positive displacement (toward the content start) reveals the prior
    /// page; negative displacement reveals the next one.
    pub fn on_release(&mut self, displacement: f64) -> ReleaseDecision {
        self.previous = self.committed;
        let threshold = f64::from(self.threshold);

        let outcome = if displacement > threshold {
            if self.committed == 0 {
                ReleaseOutcome::ClampedAtStart
            } else {
                self.committed -= 1;
                ReleaseOutcome::Backward
            }
        } else if displacement < -threshold {
            if self.committed + 1 >= self.page_count {
                ReleaseOutcome::ClampedAtEnd
            } else {
                self.committed += 1;
                ReleaseOutcome::Forward
            }
        } else {
            ReleaseOutcome::SnapBack
        };

        ReleaseDecision {
            displacement,
            previous: self.previous,
            committed: self.committed,
            outcome,
        }
    }

    /// Commit page `index` directly.
    pub fn jump_to(&mut self, index: usize) -> Result<PageChange, NavigationRejected> {
        if index >= self.page_count {
            return Err(NavigationRejected::OutOfRange {
                index,
                page_count: self.page_count,
            });
        }
        if index == self.committed {
            return Err(NavigationRejected::AlreadyCurrent { index });
        }

        self.previous = index.saturating_sub(1);
        self.pending_target = Some(index);
        self.committed = index;
        Ok(PageChange::new(self.previous, self.committed))
    }

    /// Commit the next page.
    pub fn advance(&mut self) -> Result<PageChange, NavigationRejected> {
        if self.committed + 1 >= self.page_count {
            return Err(NavigationRejected::AtLastPage);
        }
        self.previous = self.committed;
        self.committed += 1;
        Ok(PageChange::new(self.previous, self.committed))
    }

    /// Settle-completion rule: report the transition if the page changed or a
    /// jump is pending, and clear the pending jump.
    pub fn finalize(&mut self) -> Option<PageChange> {
        if self.committed == self.previous && self.pending_target.is_none() {
            return None;
        }
        self.pending_target = None;
        Some(PageChange::new(self.previous, self.committed))
    }

    #[inline]
    #[must_use]
    pub const fn committed(&self) -> usize {
        self.committed
    }

    #[inline]
    #[must_use]
    pub const fn previous(&self) -> usize {
        self.previous
    }

    #[inline]
    #[must_use]
    pub const fn pending_target(&self) -> Option<usize> {
        self.pending_target
    }

    #[inline]
    #[must_use]
    pub const fn page_count(&self) -> usize {
        self.page_count
    }

    #[inline]
    #[must_use]
    pub const fn page_extent(&self) -> u32 {
        self.page_extent
    }

    #[inline]
    #[must_use]
    pub const fn threshold(&self) -> u32 {
        self.threshold
    }

    /// Offset of the committed page from the start of the track.
    #[inline]
    #[must_use]
    pub fn committed_offset(&self) -> f64 {
        offset_of(self.committed, self.page_extent)
    }

    /// Which ends of the sequence the committed page touches.
    #[inline]
    #[must_use]
    pub fn boundary(&self) -> Boundary {
        Boundary::of(self.committed, self.page_count)
    }
}
