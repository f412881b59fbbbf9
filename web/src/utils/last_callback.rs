use std::sync::Arc;

use leptos::prelude::*;

type Handler<In> = Arc<dyn Fn(In) + Send + Sync>;

/// A referentially stable callback that always forwards to the most recently
/// installed handler.
///
/// The handle is `Copy`, so it can be moved into any number of event
/// listeners once while [`LastCallback::set`] keeps swapping what they call.
pub struct LastCallback<In: 'static = ()> {
    current: StoredValue<Handler<In>>,
}

impl<In: 'static> Clone for LastCallback<In> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<In: 'static> Copy for LastCallback<In> {}

impl<In: 'static> LastCallback<In> {
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn(In) + Send + Sync + 'static,
    {
        let handler: Handler<In> = Arc::new(handler);
        Self {
            current: StoredValue::new(handler),
        }
    }

    /// Replaces the handler future calls forward to.
    pub fn set<F>(&self, handler: F)
    where
        F: Fn(In) + Send + Sync + 'static,
    {
        let handler: Handler<In> = Arc::new(handler);
        self.current.set_value(handler);
    }

    /// Invokes the current handler. Does nothing once the owner is disposed.
    pub fn run(&self, input: In) {
        // Clone out first so the handler may call `set` on this same callback.
        if let Some(handler) = self.current.try_with_value(Arc::clone) {
            handler(input);
        }
    }
}
