#![forbid(unsafe_code)]

//! Per-signal dispatch outcomes.

use pageswipe_core::{PageChange, ReleaseDecision, Translation};

/// Why an incoming signal was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoredReason {
    /// Move or release without a preceding pointer-down.
    NotDragging,
    /// Settle completion bubbled up from a descendant.
    ForeignTarget,
    /// Settle completion with no settle animation outstanding.
    NoSettleInFlight,
    /// Image signal for a page that was not waiting on an image.
    UnexpectedImage,
}

/// Result of dispatching one signal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SignalOutcome {
    /// A drag began; `interrupted_settle` if a settle animation was cut short.
    DragStarted { interrupted_settle: bool },
    /// The live preview moved the track.
    Previewed(Translation),
    /// Bounce suppression kept the track where it was.
    PreviewFrozen,
    /// The drag was released and a settle animation requested.
    Released(ReleaseDecision),
    /// The track came to rest on a new page.
    Settled(PageChange),
    /// The track came to rest on the page it started from.
    SnappedBack,
    /// A page's real image replaced its placeholder.
    ImageResolved { page: usize },
    /// A page's real image failed; its placeholder stays.
    ImageFailed { page: usize },
    Ignored(IgnoredReason),
}

impl SignalOutcome {
    #[inline]
    #[must_use]
    pub const fn is_ignored(&self) -> bool {
        matches!(self, Self::Ignored(_))
    }
}
