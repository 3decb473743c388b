//! Event emitter for embedding callbacks in rendered elements.

use flume::Sender;

use crate::Callback;

/// Handle onto a mounted component's event queue.
///
/// Clone this to build callbacks that enqueue events when invoked (e.g. by a
/// click). Events are processed later, in order, by the owning
/// [`Host`](crate::Host).
///
/// `Emitter` wraps a channel sender, so it is cheap to clone and can be
/// stored in `Send + Sync` callbacks.
///
/// # Example
///
/// ```rust
/// use color_lift::{Callback, Emitter};
///
/// enum Event { Picked(String) }
///
/// fn on_pick(emitter: &Emitter<Event>) -> Callback<String> {
///     emitter.callback(Event::Picked)
/// }
/// ```
pub struct Emitter<Event: Send>(pub(crate) Sender<Event>);

impl<Event: Send> Clone for Emitter<Event> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<Event: Send + 'static> Emitter<Event> {
    pub(crate) fn new(sender: Sender<Event>) -> Self {
        Self(sender)
    }

    /// Queue an event for the host.
    ///
    /// Events emitted after the host was unmounted are dropped.
    pub fn emit(&self, event: Event) {
        if self.0.send(event).is_err() {
            tracing::warn!("event emitted after unmount was dropped");
        }
    }

    /// Build a callback that emits `to_event(value)` each time it is called.
    pub fn callback<T, F>(&self, to_event: F) -> Callback<T>
    where
        F: Fn(T) -> Event + Send + Sync + 'static,
    {
        let emitter = self.clone();
        Callback::new(move |value| {
            tracing::trace!("callback emitted event");
            emitter.emit(to_event(value));
        })
    }
}
