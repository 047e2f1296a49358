#![forbid(unsafe_code)]

//! Lazy image bookkeeping.
//!
//! On each page change the loader plans a forward window of pages whose
//! images should be fetched, skipping any already dispatched. The current
//! page additionally gets a placeholder until its real image resolves.
//!
//! # Invariants
//!
//! 1. `loaded` only grows; a page is dispatched at most once.
//! 2. A page awaits at most one real image at a time.
//! 3. A failed load keeps its placeholder; a late success may still resolve it.

use std::collections::{BTreeMap, BTreeSet};

/// Pages preloaded starting at the current page, inclusive.
pub const PRELOAD_WINDOW: usize = 3;

/// Pages whose images should be dispatched for one page change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LazyPlan {
    /// The page now in view.
    pub current: usize,
    /// Newly dispatched pages, ascending.
    pub dispatch: Vec<usize>,
}

/// Tracks dispatched, awaiting, and failed page images.
#[derive(Debug, Clone)]
pub struct LazyImageLoader {
    window: usize,
    loaded: BTreeSet<usize>,
    awaiting: BTreeMap<usize, String>,
    failed: BTreeSet<usize>,
}

impl Default for LazyImageLoader {
    fn default() -> Self {
        Self::new(PRELOAD_WINDOW)
    }
}

impl LazyImageLoader {
    #[must_use]
    pub fn new(window: usize) -> Self {
        Self {
            window: window.max(1),
            loaded: BTreeSet::new(),
            awaiting: BTreeMap::new(),
            failed: BTreeSet::new(),
        }
    }

    /// Plan dispatches for `[current, min(current + window, page_count))`
    /// and record them as loaded.
    pub fn plan(&mut self, current: usize, page_count: usize) -> LazyPlan {
        let end = current.saturating_add(self.window).min(page_count);
        let dispatch = (current..end)
            .filter(|&page| self.loaded.insert(page))
            .collect();
        LazyPlan { current, dispatch }
    }

    /// The placeholder for `page` is showing while `source` loads.
    pub fn await_load(&mut self, page: usize, source: String) {
        self.awaiting.insert(page, source);
    }

    /// The real image for `page` arrived. Returns its source if the page was
    /// waiting on it.
    pub fn on_loaded(&mut self, page: usize) -> Option<String> {
        let source = self.awaiting.remove(&page)?;
        self.failed.remove(&page);
        Some(source)
    }

    /// The real image for `page` failed. Returns `true` if the page was
    /// waiting on it.
    pub fn on_failed(&mut self, page: usize) -> bool {
        if self.awaiting.contains_key(&page) {
            self.failed.insert(page);
            true
        } else {
            false
        }
    }

    #[inline]
    #[must_use]
    pub fn is_loaded(&self, page: usize) -> bool {
        self.loaded.contains(&page)
    }

    #[inline]
    #[must_use]
    pub fn is_awaiting(&self, page: usize) -> bool {
        self.awaiting.contains_key(&page)
    }

    #[inline]
    #[must_use]
    pub fn has_failed(&self, page: usize) -> bool {
        self.failed.contains(&page)
    }

    /// Every page dispatched so far, ascending.
    pub fn loaded(&self) -> impl Iterator<Item = usize> + '_ {
        self.loaded.iter().copied()
    }

    #[inline]
    #[must_use]
    pub const fn window(&self) -> usize {
        self.window
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_is_capped_at_page_count() {
        let mut lazy = LazyImageLoader::default();
        let plan = lazy.plan(0, 3);
        assert_eq!(plan.dispatch, vec![0, 1, 2]);
        let plan = lazy.plan(1, 2);
        assert!(plan.dispatch.is_empty());
    }

    #[test]
    fn revisits_dispatch_nothing_new() {
        let mut lazy = LazyImageLoader::default();
        lazy.plan(0, 10);
        let plan = lazy.plan(2, 10);
        assert_eq!(plan.dispatch, vec![3, 4]);
        assert!(lazy.plan(0, 10).dispatch.is_empty());
        assert_eq!(lazy.loaded().collect::<Vec<_>>(), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn empty_sequence_plans_nothing() {
        let mut lazy = LazyImageLoader::default();
        assert!(lazy.plan(0, 0).dispatch.is_empty());
        assert_eq!(lazy.loaded().count(), 0);
    }

    #[test]
    fn awaiting_resolves_once() {
        let mut lazy = LazyImageLoader::default();
        lazy.await_load(1, "b.png".into());
        assert!(lazy.is_awaiting(1));
        assert_eq!(lazy.on_loaded(1).as_deref(), Some("b.png"));
        assert_eq!(lazy.on_loaded(1), None);
    }

    #[test]
    fn failure_keeps_page_awaiting() {
        let mut lazy = LazyImageLoader::default();
        assert!(!lazy.on_failed(0));
        lazy.await_load(0, "a.png".into());
        assert!(lazy.on_failed(0));
        assert!(lazy.has_failed(0));
        assert!(lazy.is_awaiting(0));
        assert_eq!(lazy.on_loaded(0).as_deref(), Some("a.png"));
        assert!(!lazy.has_failed(0));
    }
}
