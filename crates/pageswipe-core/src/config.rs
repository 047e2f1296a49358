#![forbid(unsafe_code)]

//! Swiper configuration.
//!
//! [`SwiperConfig`] is fixed at construction. With the `config` feature it
//! can also be loaded from TOML or JSON:
//!
//! ```toml
//! # swiper.toml
//! container = "#gallery"
//! item = ".slide"
//! direction = "horizontal"
//! threshold = 40
//! lazy_loading = true
//! ```
//!
//! ```rust,ignore
//! let config = SwiperConfig::from_toml_file("swiper.toml")?;
//! let config = SwiperConfig::from_json_str(json)?;
//! ```
//!
//! Missing keys take the defaults listed on each field.

#[cfg(feature = "config")]
use std::path::Path;

use core::time::Duration;

#[cfg(feature = "config")]
use serde::{Deserialize, Serialize};

use crate::geometry::{Direction, Transition};

/// Default locator for the host container.
pub const DEFAULT_CONTAINER: &str = ".swiper";
/// Default locator for page elements inside the container.
pub const DEFAULT_ITEM: &str = ".item";
/// Default marker applied to the current page.
pub const DEFAULT_ACTIVE_MARKER: &str = "active";
/// Default placeholder shown while a page image loads.
pub const DEFAULT_PLACEHOLDER: &str = "../../b_waiting.gif";
/// Default release threshold in pixels.
pub const DEFAULT_THRESHOLD: u32 = 50;
/// Default settle animation length in milliseconds.
pub const DEFAULT_DURATION_MS: u32 = 300;

/// Immutable swiper options.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config", serde(default))]
pub struct SwiperConfig {
    /// Locator for the host container (default: `.swiper`).
    pub container: String,
    /// Locator for page elements within the container (default: `.item`).
    pub item: String,
    /// Paging axis (default: vertical).
    pub direction: Direction,
    /// Marker carried by exactly one page at rest (default: `active`).
    pub active_marker: String,
    /// Block live previews that would overscroll the first or last page.
    pub bounce: bool,
    /// Load page images on demand with a placeholder and forward preload.
    pub lazy_loading: bool,
    /// Image shown while a page's real image loads.
    pub placeholder_source: String,
    /// Release displacement (pixels) that must be exceeded to change page.
    pub threshold: u32,
    /// Settle animation length in milliseconds.
    pub duration_ms: u32,
}

impl Default for SwiperConfig {
    fn default() -> Self {
        Self {
            container: DEFAULT_CONTAINER.to_owned(),
            item: DEFAULT_ITEM.to_owned(),
            direction: Direction::Vertical,
            active_marker: DEFAULT_ACTIVE_MARKER.to_owned(),
            bounce: false,
            lazy_loading: false,
            placeholder_source: DEFAULT_PLACEHOLDER.to_owned(),
            threshold: DEFAULT_THRESHOLD,
            duration_ms: DEFAULT_DURATION_MS,
        }
    }
}

impl SwiperConfig {
    #[must_use]
    pub fn with_container(mut self, container: impl Into<String>) -> Self {
        self.container = container.into();
        self
    }

    #[must_use]
    pub fn with_item(mut self, item: impl Into<String>) -> Self {
        self.item = item.into();
        self
    }

    #[must_use]
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    #[must_use]
    pub fn with_active_marker(mut self, marker: impl Into<String>) -> Self {
        self.active_marker = marker.into();
        self
    }

    #[must_use]
    pub fn with_bounce(mut self, bounce: bool) -> Self {
        self.bounce = bounce;
        self
    }

    #[must_use]
    pub fn with_lazy_loading(mut self, lazy_loading: bool) -> Self {
        self.lazy_loading = lazy_loading;
        self
    }

    #[must_use]
    pub fn with_placeholder_source(mut self, source: impl Into<String>) -> Self {
        self.placeholder_source = source.into();
        self
    }

    #[must_use]
    pub fn with_threshold(mut self, threshold: u32) -> Self {
        self.threshold = threshold;
        self
    }

    #[must_use]
    pub fn with_duration_ms(mut self, duration_ms: u32) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    /// Settle animation length.
    #[inline]
    #[must_use]
    pub fn duration(&self) -> Duration {
        Duration::from_millis(u64::from(self.duration_ms))
    }

    /// Transition used for settle animations.
    #[inline]
    #[must_use]
    pub fn settle_transition(&self) -> Transition {
        Transition::Millis(self.duration_ms)
    }

    /// Validate option values.
    ///
    /// Returns a list of problems. An empty list means the config is valid.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut problems = Vec::new();

        if self.threshold == 0 {
            problems.push("threshold must be > 0".into());
        }
        if self.container.trim().is_empty() {
            problems.push("container must not be empty".into());
        }
        if self.item.trim().is_empty() {
            problems.push("item must not be empty".into());
        }
        if self.active_marker.trim().is_empty() {
            problems.push("active_marker must not be empty".into());
        }
        if self.lazy_loading && self.placeholder_source.trim().is_empty() {
            problems.push("placeholder_source must not be empty when lazy_loading is on".into());
        }

        problems
    }
}

#[cfg(feature = "config")]
impl SwiperConfig {
    /// Load from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(ConfigError::Toml)
    }

    /// Load from a TOML file on disk.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(ConfigError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Load from a JSON string.
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(s).map_err(ConfigError::Json)
    }

    /// Load from a JSON file on disk.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(ConfigError::Io)?;
        Self::from_json_str(&content)
    }
}

/// Failure while loading a [`SwiperConfig`] from disk or text.
#[cfg(feature = "config")]
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(toml::de::Error),

    #[error("JSON parse error: {0}")]
    Json(serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = SwiperConfig::default();
        assert_eq!(config.container, ".swiper");
        assert_eq!(config.item, ".item");
        assert_eq!(config.direction, Direction::Vertical);
        assert_eq!(config.active_marker, "active");
        assert!(!config.bounce);
        assert!(!config.lazy_loading);
        assert_eq!(config.threshold, 50);
        assert_eq!(config.duration(), Duration::from_millis(300));
        assert!(config.validate().is_empty());
    }

    #[test]
    fn zero_threshold_is_rejected() {
        let problems = SwiperConfig::default().with_threshold(0).validate();
        assert_eq!(problems, vec!["threshold must be > 0".to_string()]);
    }

    #[test]
    fn empty_placeholder_only_matters_in_lazy_mode() {
        let config = SwiperConfig::default().with_placeholder_source("");
        assert!(config.validate().is_empty());
        assert_eq!(config.with_lazy_loading(true).validate().len(), 1);
    }

    #[test]
    fn settle_transition_uses_duration() {
        let config = SwiperConfig::default().with_duration_ms(120);
        assert_eq!(config.settle_transition(), Transition::Millis(120));
    }

    #[cfg(feature = "config")]
    #[test]
    fn partial_toml_fills_defaults() {
        let config = SwiperConfig::from_toml_str(
            r#"
            direction = "horizontal"
            threshold = 40
            lazy_loading = true
            "#,
        )
        .expect("valid toml");
        assert_eq!(config.direction, Direction::Horizontal);
        assert_eq!(config.threshold, 40);
        assert!(config.lazy_loading);
        assert_eq!(config.container, ".swiper");
        assert_eq!(config.duration_ms, 300);
    }

    #[cfg(feature = "config")]
    #[test]
    fn json_round_trip_keeps_values() {
        let config = SwiperConfig::default()
            .with_item(".slide")
            .with_bounce(true);
        let json = serde_json::to_string(&config).expect("serialize");
        let back = SwiperConfig::from_json_str(&json).expect("deserialize");
        assert_eq!(back, config);
    }

    #[cfg(feature = "config")]
    #[test]
    fn malformed_toml_reports_toml_error() {
        let err = SwiperConfig::from_toml_str("threshold = \"wide\"").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }
}
