#![forbid(unsafe_code)]

//! The swiper: one paged container driven by pointer signals.
//!
//! # Control flow
//!
//! ```text
//! PointerDown ─▶ GestureTracker::start ─▶ transition: none
//! PointerMove ─▶ GestureTracker::sample ─▶ TransformComputer::preview ─▶ transform
//! PointerUp   ─▶ GestureTracker::release ─▶ PageIndexController::on_release
//!             ─▶ settle transform + duration ─▶ release callback
//! SettleFinished ─▶ TransitionCompletionHandler ─▶ marker move
//!             ─▶ "settled" handler ─▶ lazy images for the new page
//! ```
//!
//! A zero-length settle never produces a completion signal, so it is
//! finalized as soon as it is requested. Likewise a settle cut short by a
//! pointer-down, or by a release after a mid-drag `jump_to`/`advance`, is
//! finalized before the new gesture step is applied.

use core::fmt;

use pageswipe_backend::{Backend, Geometry, GestureSource, ImageHost, LoadStatus, StyleMutator};
use pageswipe_core::{
    Completion, CompletionIgnored, EventRegistry, GesturePhase, GestureTracker, LazyImageLoader,
    NavigationRejected, PageChange, PageIndexController, ReleaseDecision, SETTLED, SignalTarget,
    SwipeSignal, SwiperConfig, SwiperError, TrackLayout, TransformComputer, Transition,
    TransitionCompletionHandler,
};

use crate::dispatch::{IgnoredReason, SignalOutcome};

const TARGET: &str = "pageswipe.swiper";

type ReleaseCallback = Box<dyn FnMut(ReleaseDecision)>;

/// A paged container bound to a host backend.
pub struct Swiper<B: Backend> {
    backend: B,
    config: SwiperConfig,
    gesture: GestureTracker,
    transform: TransformComputer,
    pager: PageIndexController,
    completion: TransitionCompletionHandler,
    lazy: Option<LazyImageLoader>,
    events: EventRegistry,
    release_callback: Option<ReleaseCallback>,
}

impl<B: Backend> fmt::Debug for Swiper<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Swiper")
            .field("current", &self.pager.committed())
            .field("previous", &self.pager.previous())
            .field("page_count", &self.pager.page_count())
            .field("phase", &self.gesture.phase())
            .field("events", &self.events)
            .finish_non_exhaustive()
    }
}

impl<B: Backend> Swiper<B> {
    /// Measure the container, lay out the track, and mark the first page.
    pub fn new(config: SwiperConfig, mut backend: B) -> Result<Self, SwiperError> {
        let problems = config.validate();
        if !problems.is_empty() {
            return Err(SwiperError::InvalidConfig { problems });
        }

        let measurement = backend
            .geometry()
            .measure(&config.container, &config.item)
            .map_err(|err| SwiperError::ContainerNotFound {
                container: config.container.clone(),
                reason: err.to_string(),
            })?;
        let page_extent = config.direction.extent_of(measurement);

        let style = backend.style();
        style.layout_track(TrackLayout::compute(config.direction, measurement));

        let mut completion = TransitionCompletionHandler::new();
        if let Some(page) = completion.activate_initial(measurement.page_count) {
            style.set_marker(page, &config.active_marker, true);
        }

        tracing::info!(
            target: TARGET,
            page_count = measurement.page_count,
            page_extent,
            direction = ?config.direction,
            lazy_loading = config.lazy_loading,
            "swiper ready"
        );

        let mut swiper = Self {
            gesture: GestureTracker::new(config.direction),
            transform: TransformComputer::new(config.direction, config.bounce, config.duration_ms),
            pager: PageIndexController::new(
                measurement.page_count,
                page_extent,
                config.threshold,
            ),
            completion,
            lazy: config.lazy_loading.then(LazyImageLoader::default),
            events: EventRegistry::new(),
            release_callback: None,
            backend,
            config,
        };
        swiper.load_visible_images();
        Ok(swiper)
    }

    /// Invoke `callback` at every release, whether or not the page changes.
    #[must_use]
    pub fn on_release<F>(mut self, callback: F) -> Self
    where
        F: FnMut(ReleaseDecision) + 'static,
    {
        self.release_callback = Some(Box::new(callback));
        self
    }

    /// Register the single handler for `event`.
    ///
    /// The `settled` event receives `(previous, current)` once per finished
    /// page transition.
    pub fn on<F>(&mut self, event: impl Into<String>, handler: F) -> Result<&mut Self, SwiperError>
    where
        F: FnMut(PageChange) + 'static,
    {
        self.events.on(event, handler)?;
        Ok(self)
    }

    // -----------------------------------------------------------------------
    // Programmatic navigation
    // -----------------------------------------------------------------------

    /// Animate to page `index`.
    ///
    /// Requesting the current page or a page outside the sequence does
    /// nothing and reports why.
    pub fn jump_to(&mut self, index: usize) -> Result<&mut Self, NavigationRejected> {
        match self.pager.jump_to(index) {
            Ok(change) => {
                tracing::info!(
                    target: TARGET,
                    previous = change.previous,
                    current = change.current,
                    "jump requested"
                );
                self.request_settle();
                self.settle_if_instant();
                Ok(self)
            }
            Err(rejected) => {
                tracing::debug!(target: TARGET, index, %rejected, "jump rejected");
                Err(rejected)
            }
        }
    }

    /// Animate to the next page. Rejected at the last page.
    pub fn advance(&mut self) -> Result<&mut Self, NavigationRejected> {
        match self.pager.advance() {
            Ok(change) => {
                tracing::info!(
                    target: TARGET,
                    previous = change.previous,
                    current = change.current,
                    "advance requested"
                );
                self.request_settle();
                self.settle_if_instant();
                Ok(self)
            }
            Err(rejected) => {
                tracing::debug!(target: TARGET, %rejected, "advance rejected");
                Err(rejected)
            }
        }
    }

    // -----------------------------------------------------------------------
    // Signal dispatch
    // -----------------------------------------------------------------------

    /// Drain every pending signal from `source`, in order.
    pub fn pump<S: GestureSource>(&mut self, source: &mut S) -> Vec<SignalOutcome> {
        let mut outcomes = Vec::new();
        while let Some(signal) = source.poll_signal() {
            outcomes.push(self.handle(signal));
        }
        outcomes
    }

    /// Dispatch one host signal.
    pub fn handle(&mut self, signal: SwipeSignal) -> SignalOutcome {
        let outcome = match signal {
            SwipeSignal::PointerDown(point) => {
                let interrupted_settle = self.finish_outstanding_settle();
                self.gesture.start(point);
                self.backend.style().set_transition(Transition::None);
                tracing::debug!(target: TARGET, x = point.x, y = point.y, interrupted_settle, "drag started");
                SignalOutcome::DragStarted { interrupted_settle }
            }
            SwipeSignal::PointerMove(point) => match self.gesture.sample(point) {
                Some(displacement) => self.preview(displacement),
                None => SignalOutcome::Ignored(IgnoredReason::NotDragging),
            },
            SwipeSignal::PointerUp(point) => {
                if self.gesture.is_dragging() {
                    // A jump or advance issued mid-drag is superseded by this release.
                    self.finish_outstanding_settle();
                }
                match self.gesture.release(point) {
                    Some(displacement) => self.release(displacement),
                    None => SignalOutcome::Ignored(IgnoredReason::NotDragging),
                }
            }
            SwipeSignal::SettleFinished { target } => self.finish_settle(target),
            SwipeSignal::ImageLoaded { page } => self.image_loaded(page),
            SwipeSignal::ImageFailed { page } => self.image_failed(page),
        };

        if let SignalOutcome::Ignored(reason) = outcome {
            tracing::debug!(target: TARGET, ?signal, ?reason, "signal ignored");
        }
        outcome
    }

    fn preview(&mut self, displacement: f64) -> SignalOutcome {
        match self.transform.preview(
            displacement,
            self.pager.committed_offset(),
            self.pager.boundary(),
        ) {
            Some(translation) => {
                self.backend.style().set_transform(translation);
                SignalOutcome::Previewed(translation)
            }
            None => {
                tracing::debug!(target: TARGET, displacement, "preview frozen at boundary");
                SignalOutcome::PreviewFrozen
            }
        }
    }

    fn release(&mut self, displacement: f64) -> SignalOutcome {
        let decision = self.pager.on_release(displacement);
        tracing::debug!(
            target: TARGET,
            displacement,
            previous = decision.previous,
            committed = decision.committed,
            outcome = ?decision.outcome,
            "drag released"
        );

        self.request_settle();
        if let Some(callback) = self.release_callback.as_mut() {
            callback(decision);
        }
        self.settle_if_instant();
        SignalOutcome::Released(decision)
    }

    /// Animate the track to the committed page.
    fn request_settle(&mut self) {
        let request = self
            .transform
            .settle(self.pager.committed(), self.pager.page_extent());
        let style = self.backend.style();
        style.set_transition(request.transition);
        style.set_transform(request.translation);
        self.completion.settle_requested();
    }

    /// Finalize a settle whose completion signal will never arrive because
    /// the host cancelled or replaced its animation. Returns whether one was
    /// outstanding.
    fn finish_outstanding_settle(&mut self) -> bool {
        if !self.completion.awaiting_settle() {
            return false;
        }
        self.finish_settle(SignalTarget::Container);
        true
    }

    fn settle_if_instant(&mut self) {
        if !self.config.settle_transition().animates() && self.completion.awaiting_settle() {
            self.finish_settle(SignalTarget::Container);
        }
    }

    fn finish_settle(&mut self, target: SignalTarget) -> SignalOutcome {
        match self.completion.on_settle_finished(target, &mut self.pager) {
            Completion::Ignored(CompletionIgnored::ForeignTarget) => {
                SignalOutcome::Ignored(IgnoredReason::ForeignTarget)
            }
            Completion::Ignored(CompletionIgnored::NoSettleInFlight) => {
                SignalOutcome::Ignored(IgnoredReason::NoSettleInFlight)
            }
            Completion::SnappedBack => {
                self.gesture.settled();
                SignalOutcome::SnappedBack
            }
            Completion::Finalized { change, marker } => {
                self.gesture.settled();
                let style = self.backend.style();
                if let Some(page) = marker.unmark {
                    style.set_marker(page, &self.config.active_marker, false);
                }
                style.set_marker(marker.mark, &self.config.active_marker, true);

                tracing::info!(
                    target: TARGET,
                    previous = change.previous,
                    current = change.current,
                    "page settled"
                );
                self.events.notify(SETTLED, change);
                self.load_visible_images();
                SignalOutcome::Settled(change)
            }
        }
    }

    // -----------------------------------------------------------------------
    // Lazy images
    // -----------------------------------------------------------------------

    /// Dispatch the forward window for the committed page and resolve its own
    /// image behind a placeholder.
    fn load_visible_images(&mut self) {
        let Some(lazy) = self.lazy.as_mut() else {
            return;
        };
        let current = self.pager.committed();
        let page_count = self.pager.page_count();
        let plan = lazy.plan(current, page_count);
        let images = self.backend.images();

        for &page in &plan.dispatch {
            match images.lazy_source(page) {
                Some(source) => images.preload(page, &source),
                None => tracing::warn!(target: TARGET, page, "page has no lazy image element"),
            }
        }

        if page_count == 0
            || lazy.is_awaiting(current)
            || images.resolved_source(current).is_some()
        {
            return;
        }
        let Some(source) = images.lazy_source(current) else {
            return;
        };

        images.show_placeholder(current, &self.config.placeholder_source);
        match images.load(current, &source) {
            LoadStatus::Complete => {
                images.remove_placeholder(current);
                images.set_resolved_source(current, &source);
            }
            LoadStatus::Pending => lazy.await_load(current, source),
        }
    }

    fn image_loaded(&mut self, page: usize) -> SignalOutcome {
        let Some(source) = self.lazy.as_mut().and_then(|lazy| lazy.on_loaded(page)) else {
            return SignalOutcome::Ignored(IgnoredReason::UnexpectedImage);
        };
        let images = self.backend.images();
        images.remove_placeholder(page);
        images.set_resolved_source(page, &source);
        SignalOutcome::ImageResolved { page }
    }

    fn image_failed(&mut self, page: usize) -> SignalOutcome {
        if !self.lazy.as_mut().is_some_and(|lazy| lazy.on_failed(page)) {
            return SignalOutcome::Ignored(IgnoredReason::UnexpectedImage);
        }
        tracing::warn!(target: TARGET, page, "image load failed; placeholder kept");
        SignalOutcome::ImageFailed { page }
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    /// Committed page index.
    #[inline]
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.pager.committed()
    }

    /// Page the marker sat on before the current or most recent transition.
    #[inline]
    #[must_use]
    pub fn previous_index(&self) -> usize {
        self.pager.previous()
    }

    #[inline]
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.pager.page_count()
    }

    /// Target of a jump that has not finished settling.
    #[inline]
    #[must_use]
    pub fn pending_target(&self) -> Option<usize> {
        self.pager.pending_target()
    }

    #[inline]
    #[must_use]
    pub fn committed_offset(&self) -> f64 {
        self.pager.committed_offset()
    }

    /// Page currently carrying the active marker.
    #[inline]
    #[must_use]
    pub fn marked_page(&self) -> Option<usize> {
        self.completion.marked()
    }

    #[inline]
    #[must_use]
    pub fn phase(&self) -> GesturePhase {
        self.gesture.phase()
    }

    /// Lazy image bookkeeping, if lazy loading is on.
    #[inline]
    #[must_use]
    pub fn lazy_images(&self) -> Option<&LazyImageLoader> {
        self.lazy.as_ref()
    }

    #[inline]
    #[must_use]
    pub fn config(&self) -> &SwiperConfig {
        &self.config
    }

    #[inline]
    #[must_use]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    #[inline]
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    #[must_use]
    pub fn into_backend(self) -> B {
        self.backend
    }
}
