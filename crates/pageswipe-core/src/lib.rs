#![forbid(unsafe_code)]

//! Core: the gesture-to-page state machine behind a touch-driven pager.
//!
//! # Role in pageswipe
//! `pageswipe-core` is pure and I/O-free. It turns pointer samples into
//! displacement, displacement into live previews and committed page indices,
//! and settle completions into page-change notifications. Everything that
//! touches a real surface lives behind the ports in `pageswipe-backend`.
//!
//! # Primary responsibilities
//! - **GestureTracker**: origin/sample/release bookkeeping per drag.
//! - **TransformComputer**: live previews with bounce suppression, settle targets.
//! - **PageIndexController**: threshold decisions, `jump_to`, `advance`.
//! - **TransitionCompletionHandler**: exactly-once finalization, marker moves.
//! - **LazyImageLoader**: forward preload window with dedup.
//! - **EventRegistry**: one handler per event name.
//!
//! # How it fits in the system
//! `pageswipe-runtime` owns one of each component inside a `Swiper` and
//! applies their decisions through the backend ports.

pub mod completion;
pub mod config;
pub mod error;
pub mod events;
pub mod geometry;
pub mod gesture;
pub mod lazy;
pub mod pager;
pub mod signal;
pub mod transform;

pub use completion::{Completion, CompletionIgnored, MarkerMove, TransitionCompletionHandler};
#[cfg(feature = "config")]
pub use config::ConfigError;
pub use config::SwiperConfig;
pub use error::{NavigationRejected, SwiperError};
pub use events::{EventRegistry, SETTLED};
pub use geometry::{Boundary, Direction, Measurement, Point, TrackLayout, Transition, Translation};
pub use gesture::{GesturePhase, GestureTracker};
pub use lazy::{LazyImageLoader, LazyPlan, PRELOAD_WINDOW};
pub use pager::{PageIndexController, ReleaseDecision, ReleaseOutcome};
pub use signal::{PageChange, SignalTarget, SwipeSignal};
pub use transform::{SettleRequest, TransformComputer};
