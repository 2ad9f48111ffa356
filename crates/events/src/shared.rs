//! Thread-safe dispatcher handle for multi-threaded hosts.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::dispatcher::dispatch;
use crate::{DispatchError, DomainEvent, EventDispatcher, EventHandler};

/// Cloneable, `Send + Sync` handle to one shared [`EventDispatcher`].
///
/// - `notify` copies the handler list under a read lock and releases it before
///   invoking anything, so a dispatch always sees a frozen snapshot.
/// - Handlers may therefore register/unregister on the same dispatcher while
///   being notified; the change applies to the next `notify`.
/// - Caller code (`Into<String>`, `EventHandler::name`, handler `Drop`) never
///   runs while the lock is held.
/// - A poisoned lock is recovered on every access. Each mutation is a single
///   map operation, so a panic elsewhere cannot leave the registry half-updated.
#[derive(Debug, Clone, Default)]
pub struct SharedEventDispatcher {
    inner: Arc<RwLock<EventDispatcher>>,
}

impl SharedEventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&self, event_type: impl Into<String>, handler: Arc<dyn EventHandler>) {
        let event_type = event_type.into();
        tracing::debug!(event_type = %event_type, handler = handler.name(), "registering event handler");
        self.write().insert(event_type, handler);
    }

    pub fn unregister<H>(&self, event_type: &str, handler: &Arc<H>)
    where
        H: EventHandler + ?Sized,
    {
        let removed = self.write().remove(event_type, handler);
        if let Some((position, removed)) = removed {
            tracing::debug!(event_type, handler = removed.name(), position, "unregistered event handler");
        }
    }

    pub fn unregister_all(&self) {
        let previous = std::mem::take(&mut *self.write());
        let event_types = previous.event_types().count();
        tracing::debug!(event_types, "unregistering all event handlers");
        // Handlers are dropped here, after the lock is released.
        drop(previous);
    }

    /// Snapshot of the handlers registered for `event_type`.
    pub fn handlers(&self, event_type: &str) -> Option<Vec<Arc<dyn EventHandler>>> {
        self.read().handlers(event_type).map(<[_]>::to_vec)
    }

    pub fn notify(&self, event: &dyn DomainEvent) -> Result<(), DispatchError> {
        let snapshot = self.handlers(event.event_type());
        match snapshot {
            Some(handlers) => dispatch(event, &handlers),
            None => {
                tracing::debug!(event_type = event.event_type(), "no handlers registered");
                Ok(())
            }
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, EventDispatcher> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, EventDispatcher> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl From<EventDispatcher> for SharedEventDispatcher {
    fn from(dispatcher: EventDispatcher) -> Self {
        Self {
            inner: Arc::new(RwLock::new(dispatcher)),
        }
    }
}
