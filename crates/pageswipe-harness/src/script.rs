#![forbid(unsafe_code)]

//! Scripted signal sequences.

use std::collections::VecDeque;

use pageswipe_backend::GestureSource;
use pageswipe_core::{Direction, Point, SignalTarget, SwipeSignal};

/// Queue-backed [`GestureSource`] with helpers for common drags.
#[derive(Debug, Clone, Default)]
pub struct ScriptedGestures {
    queue: VecDeque<SwipeSignal>,
}

impl ScriptedGestures {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, signal: SwipeSignal) -> &mut Self {
        self.queue.push_back(signal);
        self
    }

    /// Press at `from`, move in `steps` even increments, release at `to`.
    pub fn drag(&mut self, from: Point, to: Point, steps: u32) -> &mut Self {
        self.push(SwipeSignal::PointerDown(from));
        for step in 1..=steps {
            let t = f64::from(step) / f64::from(steps);
            self.push(SwipeSignal::PointerMove(Point::new(
                from.x + (to.x - from.x) * t,
                from.y + (to.y - from.y) * t,
            )));
        }
        self.push(SwipeSignal::PointerUp(to))
    }

    /// Drag by `displacement` along `direction`, starting mid-screen.
    pub fn swipe(&mut self, direction: Direction, displacement: f64) -> &mut Self {
        let from = Point::new(200.0, 400.0);
        let to = match direction {
            Direction::Vertical => Point::new(from.x, from.y + displacement),
            Direction::Horizontal => Point::new(from.x + displacement, from.y),
        };
        self.drag(from, to, 4)
    }

    /// The container's settle transition finished.
    pub fn settle(&mut self) -> &mut Self {
        self.push(SwipeSignal::SettleFinished {
            target: SignalTarget::Container,
        })
    }

    /// A descendant's transition finished.
    pub fn foreign_settle(&mut self) -> &mut Self {
        self.push(SwipeSignal::SettleFinished {
            target: SignalTarget::Foreign,
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl GestureSource for ScriptedGestures {
    fn poll_signal(&mut self) -> Option<SwipeSignal> {
        self.queue.pop_front()
    }
}
