#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use pageswipe_core::{Direction, Point, SignalTarget, SwipeSignal};
use pageswipe_harness::{HeadlessHost, LoadMode};
use pageswipe_runtime::{Swiper, SwiperConfig};

#[derive(Debug, Arbitrary)]
struct Setup {
    pages: u8,
    horizontal: bool,
    bounce: bool,
    lazy: bool,
    immediate_loads: bool,
    threshold: u8,
    instant: bool,
}

#[derive(Debug, Arbitrary)]
enum Op {
    Down(i16, i16),
    Move(i16, i16),
    Up(i16, i16),
    Settle,
    ForeignSettle,
    ImageLoaded(u8),
    ImageFailed(u8),
    Jump(u8),
    Advance,
}

fn point(x: i16, y: i16) -> Point {
    Point::new(f64::from(x), f64::from(y))
}

fuzz_target!(|input: (Setup, Vec<Op>)| {
    let (setup, ops) = input;
    let pages = usize::from(setup.pages % 16);

    let mut config = SwiperConfig::default()
        .with_bounce(setup.bounce)
        .with_lazy_loading(setup.lazy)
        .with_threshold(u32::from(setup.threshold).max(1))
        .with_duration_ms(if setup.instant { 0 } else { 300 });
    if setup.horizontal {
        config = config.with_direction(Direction::Horizontal);
    }
    let mode = if setup.immediate_loads {
        LoadMode::Immediate
    } else {
        LoadMode::Deferred
    };
    let host = HeadlessHost::new(360, 640, pages)
        .with_lazy_images()
        .with_load_mode(mode);
    let Ok(mut swiper) = Swiper::new(config, host) else {
        return;
    };
    let extent = if setup.horizontal { 360.0 } else { 640.0 };

    for op in ops.into_iter().take(512) {
        match op {
            Op::Down(x, y) => {
                swiper.handle(SwipeSignal::PointerDown(point(x, y)));
            }
            Op::Move(x, y) => {
                swiper.handle(SwipeSignal::PointerMove(point(x, y)));
            }
            Op::Up(x, y) => {
                swiper.handle(SwipeSignal::PointerUp(point(x, y)));
            }
            Op::Settle => {
                swiper.handle(SwipeSignal::SettleFinished {
                    target: SignalTarget::Container,
                });
            }
            Op::ForeignSettle => {
                swiper.handle(SwipeSignal::SettleFinished {
                    target: SignalTarget::Foreign,
                });
            }
            Op::ImageLoaded(page) => {
                swiper.handle(SwipeSignal::ImageLoaded {
                    page: usize::from(page),
                });
            }
            Op::ImageFailed(page) => {
                swiper.handle(SwipeSignal::ImageFailed {
                    page: usize::from(page),
                });
            }
            Op::Jump(page) => {
                let _ = swiper.jump_to(usize::from(page));
            }
            Op::Advance => {
                let _ = swiper.advance();
            }
        }

        // Post-conditions that must always hold:
        let current = swiper.current_index();
        assert!(pages == 0 || current < pages, "current {current} OOB");
        assert_eq!(swiper.committed_offset(), current as f64 * extent);
        let marked = swiper.backend().pages_marked("active");
        assert!(marked.len() <= 1, "marker on {marked:?}");
        assert_eq!(marked.first().copied(), swiper.marked_page());
    }

    if let Some(lazy) = swiper.lazy_images() {
        let loaded: Vec<usize> = lazy.loaded().collect();
        let preloaded = swiper.backend().preloads().len();
        assert_eq!(loaded.len(), preloaded, "page dispatched twice");
        assert!(loaded.iter().all(|&page| page < pages));
    }
});
