#![forbid(unsafe_code)]

//! Runtime: binds the pageswipe state machine to a host [`Backend`].
//!
//! # Role in pageswipe
//! `pageswipe-runtime` owns a [`Swiper`]: one gesture tracker, pager,
//! completion handler, lazy loader, and event registry per container. Hosts
//! push [`SwipeSignal`]s in (directly via [`Swiper::handle`] or through a
//! [`GestureSource`] with [`Swiper::pump`]) and receive style, marker, and
//! image requests back through the backend ports.
//!
//! Everything is single-threaded and event-driven: between signals the swiper
//! is idle and its state can be inspected freely.
//!
//! # Example
//!
//! ```rust,ignore
//! let mut swiper = Swiper::new(SwiperConfig::default(), host)?
//!     .on_release(|decision| println!("released: {:?}", decision.outcome));
//! swiper.on(SETTLED, |change| println!("{} -> {}", change.previous, change.current))?;
//! swiper.handle(SwipeSignal::PointerDown(Point::new(0.0, 400.0)));
//! swiper.handle(SwipeSignal::PointerUp(Point::new(0.0, 320.0)));
//! ```

pub mod dispatch;
pub mod swiper;

pub use dispatch::{IgnoredReason, SignalOutcome};
pub use swiper::Swiper;

pub use pageswipe_backend::{Backend, Geometry, GestureSource, ImageHost, LoadStatus, StyleMutator};
pub use pageswipe_core::{
    Direction, NavigationRejected, PageChange, Point, ReleaseDecision, ReleaseOutcome, SETTLED,
    SignalTarget, SwipeSignal, SwiperConfig, SwiperError,
};
