use core::any::Any;

use chrono::{DateTime, Utc};

/// A domain occurrence (something that happened to an entity).
///
/// Events are:
/// - **immutable** (treat them as facts)
/// - **named explicitly**: `event_type` is a stable identifier chosen by the
///   event type itself, never derived from runtime type information
/// - **timestamped** with the business time they occurred
pub trait DomainEvent: Any + core::fmt::Debug + Send + Sync + 'static {
    /// Stable event name/type identifier (e.g. "ProductCreatedEvent").
    ///
    /// The dispatcher selects handlers by this value only.
    fn event_type(&self) -> &'static str;

    /// When the event occurred (business time).
    fn occurred_at(&self) -> DateTime<Utc>;

    /// Access to the concrete event, so handlers can read its payload.
    fn as_any(&self) -> &dyn Any;
}

impl dyn DomainEvent {
    /// Borrow the concrete event if it is of type `E`.
    pub fn downcast_ref<E: DomainEvent>(&self) -> Option<&E> {
        self.as_any().downcast_ref::<E>()
    }

    /// Whether the concrete event is of type `E`.
    pub fn is<E: DomainEvent>(&self) -> bool {
        self.as_any().is::<E>()
    }
}
