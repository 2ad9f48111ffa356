//! Domain events and the in-process event dispatcher.
//!
//! Entities build a [`DomainEvent`] after changing their own state and hand it
//! to an [`EventDispatcher`], which fans it out synchronously to every
//! [`EventHandler`] registered under the event's type name.

#[macro_use]
mod macros;

pub mod dispatcher;
pub mod error;
pub mod event;
pub mod handler;
pub mod shared;

pub use dispatcher::EventDispatcher;
pub use error::{DispatchError, HandlerFailure};
pub use event::DomainEvent;
pub use handler::{EventHandler, FnHandler, downcast_event, handler_fn};
pub use shared::SharedEventDispatcher;

#[doc(hidden)]
pub mod __private {
    pub use chrono::{DateTime, Utc};
}
