#![forbid(unsafe_code)]

//! Single-subscriber event notification.

use core::fmt;

use ahash::AHashMap;

use crate::error::{Result, SwiperError};
use crate::signal::PageChange;

/// Fired once per finalized page transition with `(previous, current)`.
pub const SETTLED: &str = "settled";

type Handler = Box<dyn FnMut(PageChange)>;

/// Maps event names to at most one handler each, for the registry's lifetime.
#[derive(Default)]
pub struct EventRegistry {
    handlers: AHashMap<String, Handler>,
}

impl fmt::Debug for EventRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.handlers.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("EventRegistry")
            .field("events", &names)
            .finish()
    }
}

impl EventRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` for `event`.
    ///
    /// Fails if `event` already has a handler; there is no unregister.
    pub fn on<F>(&mut self, event: impl Into<String>, handler: F) -> Result<()>
    where
        F: FnMut(PageChange) + 'static,
    {
        let event = event.into();
        if self.handlers.contains_key(&event) {
            return Err(SwiperError::DuplicateHandler { event });
        }
        self.handlers.insert(event, Box::new(handler));
        Ok(())
    }

    /// Invoke the handler for `event`, if any. Returns whether one ran.
    pub fn notify(&mut self, event: &str, change: PageChange) -> bool {
        match self.handlers.get_mut(event) {
            Some(handler) => {
                handler(change);
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn is_registered(&self, event: &str) -> bool {
        self.handlers.contains_key(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn notify_reaches_handler() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let mut reg = EventRegistry::new();
        reg.on(SETTLED, move |change| sink.borrow_mut().push(change))
            .unwrap();
        assert!(reg.notify(SETTLED, PageChange::new(0, 1)));
        assert_eq!(*seen.borrow(), vec![PageChange::new(0, 1)]);
    }

    #[test]
    fn duplicate_registration_fails() {
        let mut reg = EventRegistry::new();
        reg.on(SETTLED, |_| {}).unwrap();
        let err = reg.on(SETTLED, |_| {}).unwrap_err();
        assert_eq!(
            err,
            SwiperError::DuplicateHandler {
                event: "settled".into()
            }
        );
    }

    #[test]
    fn unregistered_event_is_silent() {
        let mut reg = EventRegistry::new();
        assert!(!reg.notify(SETTLED, PageChange::new(1, 2)));
        assert!(!reg.is_registered(SETTLED));
    }

    #[test]
    fn distinct_names_coexist() {
        let mut reg = EventRegistry::new();
        reg.on(SETTLED, |_| {}).unwrap();
        reg.on("custom", |_| {}).unwrap();
        assert_eq!(format!("{reg:?}"), r#"EventRegistry { events: ["custom", "settled"] }"#);
    }
}
