#![forbid(unsafe_code)]

//! Reconciles settle-animation completion with the active-page marker.
//!
//! # Invariants
//!
//! 1. At most one page carries the marker; at rest it is the committed page.
//! 2. A transition is finalized at most once: completion needs an outstanding
//!    settle request, and every finalization consumes it.
//! 3. Completion signals from foreign targets never finalize anything.

use crate::pager::PageIndexController;
use crate::signal::{PageChange, SignalTarget};

/// Why a completion signal was not acted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionIgnored {
    /// The signal came from a descendant, not the container.
    ForeignTarget,
    /// No settle animation was requested since the last completion.
    NoSettleInFlight,
}

/// Marker mutation the host must apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerMove {
    /// Page that loses the marker, if another page carried it.
    pub unmark: Option<usize>,
    /// Page that gains the marker.
    pub mark: usize,
}

/// What a settle-completion signal resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// A page transition finished.
    Finalized { change: PageChange, marker: MarkerMove },
    /// The track came back to the same page; nothing to report.
    SnappedBack,
    Ignored(CompletionIgnored),
}

/// Tracks the outstanding settle request and which page holds the marker.
#[derive(Debug, Clone, Default)]
pub struct TransitionCompletionHandler {
    awaiting_settle: bool,
    marked: Option<usize>,
}

impl TransitionCompletionHandler {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            awaiting_settle: false,
            marked: None,
        }
    }

    /// Mark the first page of a freshly built sequence.
    ///
    /// Returns the page to mark, or `None` for an empty sequence.
    pub fn activate_initial(&mut self, page_count: usize) -> Option<usize> {
        self.marked = (page_count > 0).then_some(0);
        self.marked
    }

    /// A settle animation was requested.
    pub fn settle_requested(&mut self) {
        self.awaiting_settle = true;
    }

    /// Handle a settle-finished signal.
    pub fn on_settle_finished(
        &mut self,
        target: SignalTarget,
        pager: &mut PageIndexController,
    ) -> Completion {
        if target == SignalTarget::Foreign {
            return Completion::Ignored(CompletionIgnored::ForeignTarget);
        }
        if !self.awaiting_settle {
            return Completion::Ignored(CompletionIgnored::NoSettleInFlight);
        }
        self.awaiting_settle = false;

        let Some(change) = pager.finalize() else {
            return Completion::SnappedBack;
        };

        let unmark = self.marked.filter(|&page| page != change.current);
        self.marked = Some(change.current);
        Completion::Finalized {
            change,
            marker: MarkerMove {
                unmark,
                mark: change.current,
            },
        }
    }

    #[inline]
    #[must_use]
    pub const fn awaiting_settle(&self) -> bool {
        self.awaiting_settle
    }

    /// Page currently carrying the marker.
    #[inline]
    #[must_use]
    pub const fn marked(&self) -> Option<usize> {
        self.marked
    }
}
