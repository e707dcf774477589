//! Chrome event dispatch
//!
//! The controller never performs the platform-level minimize/maximize/close
//! itself; it emits a [`ChromeEvent`] once per user gesture and the owning
//! window reacts. Handlers are registered per event kind.

use rustc_hash::FxHashMap;

/// A chrome gesture the owning window should act on
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChromeEvent {
    MinimizeRequested,
    MaximizeRequested,
    RestoreRequested,
    FullScreenRequested,
    CloseRequested,
}

/// Event handler function type
pub type ChromeHandler = Box<dyn Fn(ChromeEvent) + Send + Sync>;

/// Dispatches chrome events to registered handlers
#[derive(Default)]
pub struct ChromeEvents {
    handlers: FxHashMap<ChromeEvent, Vec<ChromeHandler>>,
}

impl ChromeEvents {
    pub fn new() -> Self {
        Self {
            handlers: FxHashMap::default(),
        }
    }

    /// Register a handler for one event kind
    pub fn on<F>(&mut self, event: ChromeEvent, handler: F)
    where
        F: Fn(ChromeEvent) + Send + Sync + 'static,
    {
        self.handlers.entry(event).or_default().push(Box::new(handler));
    }

    /// Fire an event to all handlers registered for it
    pub fn emit(&self, event: ChromeEvent) {
        if let Some(handlers) = self.handlers.get(&event) {
            for handler in handlers {
                handler(event);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_emit_reaches_registered_handlers() {
        let count = Arc::new(AtomicUsize::new(0));
        let count_clone = count.clone();

        let mut events = ChromeEvents::new();
        events.on(ChromeEvent::CloseRequested, move |_| {
            count_clone.fetch_add(1, Ordering::SeqCst);
        });

        events.emit(ChromeEvent::CloseRequested);
        events.emit(ChromeEvent::CloseRequested);
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_emit_ignores_unregistered_kinds() {
        let count = Arc::new(AtomicUsize::new(0));
        let count_clone = count.clone();

        let mut events = ChromeEvents::new();
        events.on(ChromeEvent::MaximizeRequested, move |_| {
            count_clone.fetch_add(1, Ordering::SeqCst);
        });

        events.emit(ChromeEvent::MinimizeRequested);
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_multiple_handlers_same_kind() {
        let count = Arc::new(AtomicUsize::new(0));
        let a = count.clone();
        let b = count.clone();

        let mut events = ChromeEvents::new();
        events.on(ChromeEvent::RestoreRequested, move |_| {
            a.fetch_add(1, Ordering::SeqCst);
        });
        events.on(ChromeEvent::RestoreRequested, move |_| {
            b.fetch_add(10, Ordering::SeqCst);
        });

        events.emit(ChromeEvent::RestoreRequested);
        assert_eq!(count.load(Ordering::SeqCst), 11);
    }
}
