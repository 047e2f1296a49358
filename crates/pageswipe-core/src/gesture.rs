#![forbid(unsafe_code)]

//! Gesture tracking: turns raw pointer samples into active-axis displacement.
//!
//! [`GestureTracker`] records where a drag began, its most recent sample, and
//! where it was released, and reports displacement along the configured axis.
//!
//! # State Machine
//!
//! ```text
//!   Idle ──start──▶ Dragging ──release──▶ Settling ──settled──▶ Idle
//!                      ▲                     │
//!                      └────────start────────┘
//! ```
//!
//! # Invariants
//!
//! 1. `sample` and `release` only report a displacement while dragging.
//! 2. A new `start` always begins a fresh drag, even mid-settle.
//! 3. Displacement is `current.axis - origin.axis`; positive values point
//!    toward the start of the sequence.
//!
//! # Failure Modes
//!
//! - Move or release without a prior start: ignored, returns `None`. The
//!   caller must not touch committed state for these.

use crate::geometry::{Direction, Point};

// ---------------------------------------------------------------------------
// Phase
// ---------------------------------------------------------------------------

/// Phase of the gesture lifecycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GesturePhase {
    /// No pointer is down and no settle animation is outstanding.
    Idle,
    /// A pointer is down.
    Dragging { origin: Point, last: Point },
    /// The pointer lifted; the track is animating to its committed position.
    Settling { origin: Point, release: Point },
}

// ---------------------------------------------------------------------------
// GestureTracker
// ---------------------------------------------------------------------------

/// Records origin, current, and release positions of one drag at a time.
#[derive(Debug, Clone)]
pub struct GestureTracker {
    direction: Direction,
    phase: GesturePhase,
}

impl GestureTracker {
    #[must_use]
    pub const fn new(direction: Direction) -> Self {
        Self {
            direction,
            phase: GesturePhase::Idle,
        }
    }

    /// Begin a drag at `point`, from any phase.
    pub fn start(&mut self, point: Point) {
        self.phase = GesturePhase::Dragging {
            origin: point,
            last: point,
        };
    }

    /// Record a move sample and return the displacement from the origin.
    pub fn sample(&mut self, point: Point) -> Option<f64> {
        let GesturePhase::Dragging { origin, ref mut last } = self.phase else {
            return None;
        };
        *last = point;
        Some(self.displacement(origin, point))
    }

    /// Record the release point and return the final displacement.
    pub fn release(&mut self, point: Point) -> Option<f64> {
        let GesturePhase::Dragging { origin, .. } = self.phase else {
            return None;
        };
        self.phase = GesturePhase::Settling {
            origin,
            release: point,
        };
        Some(self.displacement(origin, point))
    }

    /// The settle animation finished; the gesture is over.
    pub fn settled(&mut self) {
        if matches!(self.phase, GesturePhase::Settling { .. }) {
            self.phase = GesturePhase::Idle;
        }
    }

    #[inline]
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, GesturePhase::Dragging { .. })
    }

    #[inline]
    #[must_use]
    pub const fn phase(&self) -> GesturePhase {
        self.phase
    }

    #[inline]
    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    fn displacement(&self, origin: Point, current: Point) -> f64 {
        self.direction.along(current) - self.direction.along(origin)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn vertical_displacement_uses_y() {
        let mut g = GestureTracker::new(Direction::Vertical);
        g.start(pt(10.0, 200.0));
        assert_eq!(g.sample(pt(90.0, 150.0)), Some(-50.0));
        assert_eq!(g.release(pt(90.0, 140.0)), Some(-60.0));
    }

    #[test]
    fn horizontal_displacement_uses_x() {
        let mut g = GestureTracker::new(Direction::Horizontal);
        g.start(pt(100.0, 0.0));
        assert_eq!(g.sample(pt(130.0, 999.0)), Some(30.0));
    }

    #[test]
    fn sample_without_start_is_ignored() {
        let mut g = GestureTracker::new(Direction::Vertical);
        assert_eq!(g.sample(pt(0.0, 40.0)), None);
        assert_eq!(g.phase(), GesturePhase::Idle);
    }

    #[test]
    fn release_without_start_is_ignored() {
        let mut g = GestureTracker::new(Direction::Vertical);
        assert_eq!(g.release(pt(0.0, 40.0)), None);
        assert_eq!(g.phase(), GesturePhase::Idle);
    }

    #[test]
    fn release_moves_to_settling() {
        let mut g = GestureTracker::new(Direction::Vertical);
        g.start(pt(0.0, 0.0));
        g.release(pt(0.0, -70.0));
        assert!(!g.is_dragging());
        assert!(matches!(g.phase(), GesturePhase::Settling { .. }));
        // A second release is stray.
        assert_eq!(g.release(pt(0.0, -90.0)), None);
        g.settled();
        assert_eq!(g.phase(), GesturePhase::Idle);
    }

    #[test]
    fn start_during_settle_begins_new_drag() {
        let mut g = GestureTracker::new(Direction::Vertical);
        g.start(pt(0.0, 0.0));
        g.release(pt(0.0, 10.0));
        g.start(pt(5.0, 5.0));
        assert_eq!(
            g.phase(),
            GesturePhase::Dragging {
                origin: pt(5.0, 5.0),
                last: pt(5.0, 5.0),
            }
        );
        assert_eq!(g.release(pt(5.0, 25.0)), Some(20.0));
    }

    #[test]
    fn sample_tracks_last_point() {
        let mut g = GestureTracker::new(Direction::Vertical);
        g.start(pt(0.0, 100.0));
        g.sample(pt(0.0, 80.0));
        g.sample(pt(0.0, 60.0));
        assert_eq!(
            g.phase(),
            GesturePhase::Dragging {
                origin: pt(0.0, 100.0),
                last: pt(0.0, 60.0),
            }
        );
    }

    #[test]
    fn settled_while_dragging_keeps_drag() {
        let mut g = GestureTracker::new(Direction::Vertical);
        g.start(pt(0.0, 0.0));
        g.settled();
        assert!(g.is_dragging());
    }
}
