//! Property-based invariant tests for a swiper driven by arbitrary signals.
//!
//! 1. The committed index stays inside the sequence
//! 2. At most one page carries the active marker, and it is the tracked page
//! 3. The `settled` handler runs exactly once per reported transition
//! 4. Once quiescent, the marker sits on the committed page

use std::cell::Cell;
use std::rc::Rc;

use pageswipe_harness::HeadlessHost;
use pageswipe_runtime::{
    Point, SETTLED, SignalOutcome, SignalTarget, SwipeSignal, Swiper, SwiperConfig,
};
use proptest::prelude::*;

// ── Strategies ──────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
enum Op {
    Signal(SwipeSignal),
    Jump(usize),
    Advance,
}

fn point_strategy() -> impl Strategy<Value = Point> {
    (0.0f64..400.0, 0.0f64..800.0).prop_map(|(x, y)| Point::new(x, y))
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => point_strategy().prop_map(|p| Op::Signal(SwipeSignal::PointerDown(p))),
        4 => point_strategy().prop_map(|p| Op::Signal(SwipeSignal::PointerMove(p))),
        3 => point_strategy().prop_map(|p| Op::Signal(SwipeSignal::PointerUp(p))),
        3 => Just(Op::Signal(SwipeSignal::SettleFinished { target: SignalTarget::Container })),
        1 => Just(Op::Signal(SwipeSignal::SettleFinished { target: SignalTarget::Foreign })),
        1 => (0usize..10).prop_map(|page| Op::Signal(SwipeSignal::ImageLoaded { page })),
        1 => (0usize..12).prop_map(Op::Jump),
        1 => Just(Op::Advance),
    ]
}

fn config_strategy() -> impl Strategy<Value = SwiperConfig> {
    (any::<bool>(), any::<bool>(), 1u32..120, prop_oneof![Just(0u32), Just(300u32)]).prop_map(
        |(bounce, lazy, threshold, duration)| {
            SwiperConfig::default()
                .with_bounce(bounce)
                .with_lazy_loading(lazy)
                .with_threshold(threshold)
                .with_duration_ms(duration)
        },
    )
}

fn apply(swiper: &mut Swiper<HeadlessHost>, op: &Op) -> Option<SignalOutcome> {
    match op {
        Op::Signal(signal) => Some(swiper.handle(*signal)),
        Op::Jump(index) => {
            let _ = swiper.jump_to(*index);
            None
        }
        Op::Advance => {
            let _ = swiper.advance();
            None
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 1–2. Bounds and marker uniqueness
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn arbitrary_signals_preserve_invariants(
        count in 0usize..8,
        config in config_strategy(),
        ops in prop::collection::vec(op_strategy(), 0..80),
    ) {
        let host = HeadlessHost::new(400, 800, count).with_lazy_images();
        let mut swiper = Swiper::new(config, host).expect("valid config");

        for op in &ops {
            apply(&mut swiper, op);

            if count > 0 {
                prop_assert!(swiper.current_index() < count);
            } else {
                prop_assert_eq!(swiper.current_index(), 0);
            }
            prop_assert_eq!(
                swiper.committed_offset(),
                swiper.current_index() as f64 * 800.0
            );

            let marked = swiper.backend().pages_marked("active");
            prop_assert!(marked.len() <= 1, "marked pages: {:?}", marked);
            prop_assert_eq!(marked.first().copied(), swiper.marked_page());
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 3. Exactly-once notification
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn settled_outcomes_match_handler_calls(
        count in 1usize..8,
        config in config_strategy(),
        ops in prop::collection::vec(op_strategy(), 0..80),
    ) {
        let mut swiper = Swiper::new(config, HeadlessHost::new(400, 800, count)).expect("valid config");
        let calls = Rc::new(Cell::new(0usize));
        let sink = Rc::clone(&calls);
        swiper.on(SETTLED, move |_| sink.set(sink.get() + 1)).expect("first registration");

        for op in &ops {
            let before = calls.get();
            let outcome = apply(&mut swiper, op);
            let fired = calls.get() - before;
            prop_assert!(fired <= 1, "handler ran {} times for one op", fired);
            if let Some(SignalOutcome::Settled(_)) = outcome {
                prop_assert_eq!(fired, 1);
            }
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 4. Quiescence
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn marker_rests_on_committed_page(
        count in 1usize..8,
        config in config_strategy(),
        ops in prop::collection::vec(op_strategy(), 0..80),
    ) {
        let mut swiper = Swiper::new(config, HeadlessHost::new(400, 800, count)).expect("valid config");
        for op in &ops {
            apply(&mut swiper, op);
        }

        // Cut any animation short, then let a still release come to rest.
        let origin = Point::new(0.0, 0.0);
        swiper.handle(SwipeSignal::PointerDown(origin));
        swiper.handle(SwipeSignal::PointerUp(origin));
        swiper.handle(SwipeSignal::SettleFinished { target: SignalTarget::Container });

        prop_assert_eq!(swiper.marked_page(), Some(swiper.current_index()));
        prop_assert_eq!(
            swiper.backend().pages_marked("active"),
            vec![swiper.current_index()]
        );
        prop_assert_eq!(swiper.pending_target(), None);
    }
}
