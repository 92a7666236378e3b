//! Fire-and-forget event publication.

use crate::domain::Event;

/// Receives events after the operation that produced them committed.
///
/// Publication cannot fail from the engine's point of view; a sink that
/// forwards to an unreliable transport must buffer or drop on its own.
pub trait EventSink {
    /// Publishes one event.
    fn emit(&mut self, event: Event);
}

impl EventSink for Vec<Event> {
    fn emit(&mut self, event: Event) {
        self.push(event);
    }
}

impl<S: EventSink + ?Sized> EventSink for &mut S {
    fn emit(&mut self, event: Event) {
        (**self).emit(event);
    }
}
