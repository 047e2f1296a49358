#![forbid(unsafe_code)]

//! Test harness: a deterministic headless backend and scripted gestures.
//!
//! # Role in pageswipe
//! `pageswipe-harness` lets tests and fuzz targets drive a real `Swiper`
//! without a layout engine. [`HeadlessHost`] implements every backend port
//! over plain collections and records each mutation so assertions can replay
//! what a host would have seen. [`ScriptedGestures`] queues pointer and
//! completion signals for `Swiper::pump`.

pub mod host;
pub mod script;

pub use host::{HeadlessHost, HostError, LoadMode, PageImage, StyleOp};
pub use script::ScriptedGestures;
