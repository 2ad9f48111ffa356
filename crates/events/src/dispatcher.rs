//! Synchronous, in-process event dispatcher (observer pattern).
//!
//! The dispatcher is a registry from event type name to an ordered list of
//! handlers:
//!
//! ```text
//! "ProductCreatedEvent"  → [SendEmailWhenProductIsCreatedHandler]
//! "CustomerCreatedEvent" → [FirstNotify..., SecondNotify...]
//! ```
//!
//! - **Registration order** is notification order.
//! - **No deduplication**: registering the same handler twice invokes it twice.
//! - **Identity removal**: `unregister` compares `Arc` allocations, never values.
//! - **Misses are no-ops**: notifying or unregistering an unknown type does nothing.
//!
//! `notify` runs every handler on the caller's thread before returning. A
//! failing handler does not prevent the following ones from running; all
//! failures are returned together as [`DispatchError::HandlersFailed`].

use std::collections::HashMap;
use std::sync::Arc;

use crate::{DispatchError, DomainEvent, EventHandler, HandlerFailure};

#[derive(Default)]
pub struct EventDispatcher {
    handlers: HashMap<String, Vec<Arc<dyn EventHandler>>>,
}

impl core::fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut map = f.debug_map();
        for (event_type, handlers) in &self.handlers {
            let names: Vec<&str> = handlers.iter().map(|h| h.name()).collect();
            map.entry(event_type, &names);
        }
        map.finish()
    }
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `handler` to the list for `event_type`, creating the list if needed.
    pub fn register(&mut self, event_type: impl Into<String>, handler: Arc<dyn EventHandler>) {
        let event_type = event_type.into();
        tracing::debug!(event_type = %event_type, handler = handler.name(), "registering event handler");
        self.insert(event_type, handler);
    }

    pub(crate) fn insert(&mut self, event_type: String, handler: Arc<dyn EventHandler>) {
        self.handlers.entry(event_type).or_default().push(handler);
    }

    /// Remove the first registration of this exact handler instance.
    ///
    /// The list for `event_type` is kept even when it becomes empty.
    pub fn unregister<H>(&mut self, event_type: &str, handler: &Arc<H>)
    where
        H: EventHandler + ?Sized,
    {
        if let Some((position, removed)) = self.remove(event_type, handler) {
            tracing::debug!(event_type, handler = removed.name(), position, "unregistered event handler");
        }
    }

    /// Detach the first registration of `handler`, returning it with its position.
    pub(crate) fn remove<H>(
        &mut self,
        event_type: &str,
        handler: &Arc<H>,
    ) -> Option<(usize, Arc<dyn EventHandler>)>
    where
        H: EventHandler + ?Sized,
    {
        let handlers = self.handlers.get_mut(event_type)?;
        let position = handlers.iter().position(|h| same_handler(h, handler))?;
        Some((position, handlers.remove(position)))
    }

    /// Drop every event type and all of its handlers.
    pub fn unregister_all(&mut self) {
        tracing::debug!(event_types = self.handlers.len(), "unregistering all event handlers");
        self.handlers.clear();
    }

    /// Handlers registered for `event_type`, in notification order.
    ///
    /// `None` means the type was never registered (or `unregister_all` ran);
    /// `Some(&[])` means every handler was unregistered.
    pub fn handlers(&self, event_type: &str) -> Option<&[Arc<dyn EventHandler>]> {
        self.handlers.get(event_type).map(Vec::as_slice)
    }

    /// Event type names that currently have an entry.
    pub fn event_types(&self) -> impl Iterator<Item = &str> {
        self.handlers.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Deliver `event` to every handler registered for its type, in order.
    pub fn notify(&self, event: &dyn DomainEvent) -> Result<(), DispatchError> {
        match self.handlers.get(event.event_type()) {
            Some(handlers) => dispatch(event, handlers),
            None => {
                tracing::debug!(event_type = event.event_type(), "no handlers registered");
                Ok(())
            }
        }
    }
}

/// Invoke `handlers` in order, collecting failures instead of stopping at the first.
pub(crate) fn dispatch(
    event: &dyn DomainEvent,
    handlers: &[Arc<dyn EventHandler>],
) -> Result<(), DispatchError> {
    let event_type = event.event_type();
    tracing::debug!(event_type, handlers = handlers.len(), "notifying event handlers");

    let mut failures = Vec::new();
    for (position, handler) in handlers.iter().enumerate() {
        if let Err(error) = handler.handle(event) {
            tracing::warn!(
                event_type,
                handler = handler.name(),
                position,
                error = %format!("{error:#}"),
                "event handler failed"
            );
            failures.push(HandlerFailure {
                position,
                handler: handler.name(),
                error,
            });
        }
    }

    if failures.is_empty() {
        Ok(())
    } else {
        Err(DispatchError::HandlersFailed {
            event_type,
            attempted: handlers.len(),
            failures,
        })
    }
}

/// Identity of the allocation behind each `Arc`, ignoring trait-object metadata.
pub(crate) fn same_handler<H>(registered: &Arc<dyn EventHandler>, handler: &Arc<H>) -> bool
where
    H: EventHandler + ?Sized,
{
    core::ptr::eq(
        Arc::as_ptr(registered).cast::<()>(),
        Arc::as_ptr(handler).cast::<()>(),
    )
}
