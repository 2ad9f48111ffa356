use crate::DomainEvent;

/// Reacts to a domain event with a side effect (send an email, log, ...).
///
/// Handlers are registered on an [`EventDispatcher`](crate::EventDispatcher)
/// under an event type name and receive every event of that type, unchanged.
/// A handler registered for several types is free to inspect
/// [`DomainEvent::event_type`] or downcast with [`downcast_event`].
///
/// ## Errors
///
/// Returning `Err` does not stop the dispatch: the dispatcher still invokes
/// the remaining handlers and reports all failures together once they ran.
/// Panics are not caught.
pub trait EventHandler: Send + Sync {
    fn handle(&self, event: &dyn DomainEvent) -> anyhow::Result<()>;

    /// Name used in diagnostics and failure reports.
    fn name(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Borrow `event` as `E`, failing with a descriptive error otherwise.
///
/// Convenience for handlers that only make sense for a single event type.
pub fn downcast_event<E: DomainEvent>(event: &dyn DomainEvent) -> anyhow::Result<&E> {
    event.downcast_ref::<E>().ok_or_else(|| {
        anyhow::anyhow!(
            "unexpected event `{}` (expected {})",
            event.event_type(),
            core::any::type_name::<E>()
        )
    })
}

/// Handler backed by a closure.
pub struct FnHandler<F> {
    name: &'static str,
    f: F,
}

impl<F> core::fmt::Debug for FnHandler<F> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FnHandler").field("name", &self.name).finish()
    }
}

/// Build a named handler from a closure.
pub fn handler_fn<F>(name: &'static str, f: F) -> FnHandler<F>
where
    F: Fn(&dyn DomainEvent) -> anyhow::Result<()> + Send + Sync,
{
    FnHandler { name, f }
}

impl<F> EventHandler for FnHandler<F>
where
    F: Fn(&dyn DomainEvent) -> anyhow::Result<()> + Send + Sync,
{
    fn handle(&self, event: &dyn DomainEvent) -> anyhow::Result<()> {
        (self.f)(event)
    }

    fn name(&self) -> &'static str {
        self.name
    }
}
