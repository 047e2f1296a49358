#![forbid(unsafe_code)]

//! Headless host that records every port mutation.
//!
//! Stands in for a real layout tree: pages are numbered, markers are sets of
//! names, and image loads either complete immediately or wait for the test to
//! deliver a completion signal.

use std::collections::{BTreeMap, BTreeSet};

use pageswipe_backend::{Backend, Geometry, ImageHost, LoadStatus, StyleMutator};
use pageswipe_core::{Measurement, TrackLayout, Transition, Translation};
use thiserror::Error;

/// Lookup failure reported by [`HeadlessHost`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    #[error("no element matches {0}")]
    NoMatch(String),
}

/// How [`HeadlessHost::load`] answers real image requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadMode {
    /// Every image is already cached.
    Immediate,
    /// Images complete only when the test delivers `ImageLoaded`.
    #[default]
    Deferred,
}

/// One recorded style mutation.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleOp {
    Layout(TrackLayout),
    Transition(Transition),
    Transform(Translation),
    Marker { page: usize, marker: String, on: bool },
}

/// Image state of one page's lazy element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageImage {
    pub lazy_source: Option<String>,
    pub resolved: Option<String>,
    pub placeholder: Option<String>,
}

/// Deterministic in-memory backend.
#[derive(Debug, Clone)]
pub struct HeadlessHost {
    measurement: Measurement,
    container_present: bool,
    load_mode: LoadMode,
    layout: Option<TrackLayout>,
    transition: Transition,
    transform: Option<Translation>,
    markers: BTreeMap<usize, BTreeSet<String>>,
    pages: Vec<PageImage>,
    style_log: Vec<StyleOp>,
    preloads: Vec<(usize, String)>,
    loads: Vec<(usize, String)>,
}

impl HeadlessHost {
    /// A container of `width × height` holding `page_count` pages without
    /// lazy images.
    #[must_use]
    pub fn new(width: u32, height: u32, page_count: usize) -> Self {
        Self {
            measurement: Measurement::new(width, height, page_count),
            container_present: true,
            load_mode: LoadMode::default(),
            layout: None,
            transition: Transition::None,
            transform: None,
            markers: BTreeMap::new(),
            pages: vec![PageImage::default(); page_count],
            style_log: Vec::new(),
            preloads: Vec::new(),
            loads: Vec::new(),
        }
    }

    /// Give every page a lazy element whose deferred source is `page-<n>.jpg`.
    #[must_use]
    pub fn with_lazy_images(mut self) -> Self {
        for (page, image) in self.pages.iter_mut().enumerate() {
            image.lazy_source = Some(format!("page-{page}.jpg"));
        }
        self
    }

    /// Mark `page`'s lazy element as already resolved.
    #[must_use]
    pub fn with_resolved(mut self, page: usize, source: impl Into<String>) -> Self {
        if let Some(image) = self.pages.get_mut(page) {
            image.resolved = Some(source.into());
        }
        self
    }

    /// Remove `page`'s lazy element.
    #[must_use]
    pub fn without_lazy_element(mut self, page: usize) -> Self {
        if let Some(image) = self.pages.get_mut(page) {
            image.lazy_source = None;
        }
        self
    }

    #[must_use]
    pub fn with_load_mode(mut self, mode: LoadMode) -> Self {
        self.load_mode = mode;
        self
    }

    /// Make container lookup fail.
    #[must_use]
    pub fn without_container(mut self) -> Self {
        self.container_present = false;
        self
    }

    // -----------------------------------------------------------------------
    // Inspection
    // -----------------------------------------------------------------------

    #[must_use]
    pub fn layout(&self) -> Option<TrackLayout> {
        self.layout
    }

    #[must_use]
    pub fn transition(&self) -> Transition {
        self.transition
    }

    #[must_use]
    pub fn transform(&self) -> Option<Translation> {
        self.transform
    }

    /// Pages currently carrying `marker`, ascending.
    #[must_use]
    pub fn pages_marked(&self, marker: &str) -> Vec<usize> {
        self.markers
            .iter()
            .filter(|(_, names)| names.contains(marker))
            .map(|(&page, _)| page)
            .collect()
    }

    #[must_use]
    pub fn page_image(&self, page: usize) -> Option<&PageImage> {
        self.pages.get(page)
    }

    #[must_use]
    pub fn style_log(&self) -> &[StyleOp] {
        &self.style_log
    }

    /// Transforms applied so far, in order.
    pub fn transforms(&self) -> impl Iterator<Item = Translation> + '_ {
        self.style_log.iter().filter_map(|op| match op {
            StyleOp::Transform(t) => Some(*t),
            _ => None,
        })
    }

    pub fn clear_style_log(&mut self) {
        self.style_log.clear();
    }

    #[must_use]
    pub fn preloads(&self) -> &[(usize, String)] {
        &self.preloads
    }

    #[must_use]
    pub fn loads(&self) -> &[(usize, String)] {
        &self.loads
    }
}

impl Geometry for HeadlessHost {
    type Error = HostError;

    fn measure(&self, container: &str, _item: &str) -> Result<Measurement, HostError> {
        if self.container_present {
            Ok(self.measurement)
        } else {
            Err(HostError::NoMatch(container.to_owned()))
        }
    }
}

impl StyleMutator for HeadlessHost {
    fn layout_track(&mut self, layout: TrackLayout) {
        self.layout = Some(layout);
        self.style_log.push(StyleOp::Layout(layout));
    }

    fn set_transition(&mut self, transition: Transition) {
        self.transition = transition;
        self.style_log.push(StyleOp::Transition(transition));
    }

    fn set_transform(&mut self, translation: Translation) {
        self.transform = Some(translation);
        self.style_log.push(StyleOp::Transform(translation));
    }

    fn set_marker(&mut self, page: usize, marker: &str, on: bool) {
        let names = self.markers.entry(page).or_default();
        if on {
            names.insert(marker.to_owned());
        } else {
            names.remove(marker);
        }
        self.style_log.push(StyleOp::Marker {
            page,
            marker: marker.to_owned(),
            on,
        });
    }
}

impl ImageHost for HeadlessHost {
    fn lazy_source(&self, page: usize) -> Option<String> {
        self.pages.get(page)?.lazy_source.clone()
    }

    fn resolved_source(&self, page: usize) -> Option<String> {
        self.pages.get(page)?.resolved.clone()
    }

    fn preload(&mut self, page: usize, source: &str) {
        self.preloads.push((page, source.to_owned()));
    }

    fn show_placeholder(&mut self, page: usize, placeholder: &str) {
        if let Some(image) = self.pages.get_mut(page) {
            image.placeholder = Some(placeholder.to_owned());
        }
    }

    fn remove_placeholder(&mut self, page: usize) {
        if let Some(image) = self.pages.get_mut(page) {
            image.placeholder = None;
        }
    }

    fn load(&mut self, page: usize, source: &str) -> LoadStatus {
        self.loads.push((page, source.to_owned()));
        match self.load_mode {
            LoadMode::Immediate => LoadStatus::Complete,
            LoadMode::Deferred => LoadStatus::Pending,
        }
    }

    fn set_resolved_source(&mut self, page: usize, source: &str) {
        if let Some(image) = self.pages.get_mut(page) {
            image.resolved = Some(source.to_owned());
        }
    }
}

impl Backend for HeadlessHost {
    type Error = HostError;
    type Geometry = Self;
    type Style = Self;
    type Images = Self;

    fn geometry(&self) -> &Self {
        self
    }

    fn style(&mut self) -> &mut Self {
        self
    }

    fn images(&mut self) -> &mut Self {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pageswipe_core::Direction;
    use pretty_assertions::assert_eq;

    #[test]
    fn missing_container_fails_lookup() {
        let host = HeadlessHost::new(100, 100, 3).without_container();
        assert_eq!(
            host.measure(".swiper", ".item"),
            Err(HostError::NoMatch(".swiper".into()))
        );
    }

    #[test]
    fn markers_toggle_per_page() {
        let mut host = HeadlessHost::new(100, 100, 3);
        host.set_marker(0, "active", true);
        host.set_marker(2, "active", true);
        host.set_marker(0, "active", false);
        assert_eq!(host.pages_marked("active"), vec![2]);
        assert_eq!(host.style_log().len(), 3);
    }

    #[test]
    fn transforms_are_recorded_in_order() {
        let mut host = HeadlessHost::new(100, 100, 3);
        host.set_transition(Transition::None);
        host.set_transform(Translation::new(Direction::Vertical, -10.0));
        host.set_transform(Translation::new(Direction::Vertical, -20.0));
        let offsets: Vec<f64> = host.transforms().map(|t| t.offset).collect();
        assert_eq!(offsets, vec![-10.0, -20.0]);
        assert_eq!(host.transition(), Transition::None);
    }

    #[test]
    fn load_mode_controls_status() {
        let mut host = HeadlessHost::new(100, 100, 1).with_lazy_images();
        assert_eq!(host.load(0, "page-0.jpg"), LoadStatus::Pending);
        let mut host = host.with_load_mode(LoadMode::Immediate);
        assert_eq!(host.load(0, "page-0.jpg"), LoadStatus::Complete);
        assert_eq!(host.loads().len(), 2);
    }

    #[test]
    fn lazy_images_are_numbered() {
        let host = HeadlessHost::new(100, 100, 2)
            .with_lazy_images()
            .with_resolved(1, "done.jpg");
        assert_eq!(host.lazy_source(0).as_deref(), Some("page-0.jpg"));
        assert_eq!(host.resolved_source(1).as_deref(), Some("done.jpg"));
        assert_eq!(host.resolved_source(0), None);
        assert_eq!(host.lazy_source(5), None);
    }
}
