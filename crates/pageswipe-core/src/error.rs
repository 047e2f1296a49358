#![forbid(unsafe_code)]

//! Error types.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SwiperError>;

/// Errors surfaced while building or wiring a swiper.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SwiperError {
    /// An event name already has a handler; handlers cannot be replaced.
    #[error("event {event} is already registered")]
    DuplicateHandler { event: String },

    /// The host could not locate the container or its pages.
    #[error("container {container} not found: {reason}")]
    ContainerNotFound { container: String, reason: String },

    /// The configuration failed validation.
    #[error("invalid swiper configuration: {}", problems.join("; "))]
    InvalidConfig { problems: Vec<String> },
}

/// Why a programmatic navigation request was not carried out.
///
/// Requesting the current page or a page outside the sequence is legitimate
/// caller behavior, so this is reported rather than raised.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum NavigationRejected {
    #[error("page {index} is outside 0..{page_count}")]
    OutOfRange { index: usize, page_count: usize },

    #[error("page {index} is already the current page")]
    AlreadyCurrent { index: usize },

    #[error("already at the last page")]
    AtLastPage,
}
